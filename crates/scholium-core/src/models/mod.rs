pub mod claim;
pub mod confidence;
pub mod contradiction;
pub mod evidence;
pub mod finding;
pub mod paper;
pub mod question;
pub mod version;

pub use claim::{ExtractedClaim, Synthesis};
pub use confidence::Confidence;
pub use contradiction::{Contradiction, ContradictionStatus, ContradictionView, Severity};
pub use evidence::EvidenceSource;
pub use finding::{ConsistencyLevel, Finding};
pub use paper::{Paper, StudyType};
pub use question::{AnswerView, OrphanedNote, QuestionStatus, ResearchQuestion};
pub use version::QuestionVersion;
