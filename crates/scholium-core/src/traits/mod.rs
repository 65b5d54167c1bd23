pub mod collaborators;
pub mod library;
pub mod store;

pub use collaborators::{EvidenceCollaborator, LanguageValidator, SynthesisCollaborator};
pub use library::PaperLibrary;
pub use store::AnswerStore;
