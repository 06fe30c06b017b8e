pub mod explain;
pub mod lesson;
pub mod quiz;

pub use explain::{ExplainRequest, ExplainResponse};
pub use lesson::{Lesson, LessonLookup, LessonResponse};
pub use quiz::{QuizQuestion, QuizResponse};
