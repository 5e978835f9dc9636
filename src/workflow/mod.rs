pub mod quiz_flow;
pub mod quiz_session;
pub mod snapshot;

pub use quiz_flow::{Quiz, QuizAction, QuizState};
pub use quiz_session::{AdvanceOutcome, AnswerRecord, QuizSession, QuizSummary, ResultBand, Step};
pub use snapshot::{QuestionView, QuizSnapshot};
