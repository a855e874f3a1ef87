pub mod completion;
pub mod quiz_question;
pub use completion::{CompletionRequest, CompletionResult};
pub use quiz_question::{OptionLabel, QuizOption, QuizQuestion};
