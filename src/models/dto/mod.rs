pub mod question_record;
pub mod response;

pub use question_record::{decode_chapter, QuestionRecord};
pub use response::{ChoiceStatus, ChoiceView, ExplanationView, QuestionView, ReviewItem};
