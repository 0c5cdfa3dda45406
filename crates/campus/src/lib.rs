//! Campus - Question-Answering Assistant for Student and Professor Records
//!
//! Routes natural-language questions through rule-based intent detection and
//! fuzzy student-name resolution, answering simple factual queries directly
//! and grounding everything else in a constrained prompt for a local
//! language-model oracle. Exposes the whole thing over a small REST API.

pub mod assistant;
pub mod audio;
pub mod intent;
pub mod oracle;
pub mod prompt;
pub mod resolver;
pub mod server;
pub mod session;
pub mod similarity;
pub mod text;

pub use assistant::Assistant;
pub use intent::{classify, subject_fact, ResolvedIntent};
pub use resolver::resolve_student;
pub use similarity::similarity;
pub use text::clean_response;
