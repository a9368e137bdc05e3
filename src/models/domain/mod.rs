pub mod chapter;
pub mod question;
pub mod quiz_mode;
pub mod session_question;
pub use chapter::{ChapterInfo, QuizData};
pub use question::{Choice, RawQuestion};
pub use quiz_mode::QuizMode;
pub use session_question::SessionQuestion;
