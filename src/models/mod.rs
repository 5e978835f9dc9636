pub mod de;
pub mod difficulty;
pub mod loaders;
pub mod mcq;
pub mod paper;
pub mod store;
pub mod subjective;

pub use difficulty::Difficulty;
pub use loaders::load_content_dir;
pub use mcq::{option_label, Mcq};
pub use paper::{Paper, PaperYear};
pub use store::{ContentStore, Dataset, DatasetView};
pub use subjective::{QuestionPart, SolvedBody, SolvedQuestion, SolvedQuestionRecord};
