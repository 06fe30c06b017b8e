use serde::Serialize;

/// Instructional content for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub language: String,
    pub title: String,
    pub content: String,
    pub quiz_id: String,
}

impl Lesson {
    pub fn new(language: &str, title: &str, content: &str, quiz_id: &str) -> Self {
        Self {
            language: language.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            quiz_id: quiz_id.to_string(),
        }
    }
}

/// Result of a lesson lookup.
///
/// A miss is reported in the payload, never through the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LessonLookup<'a> {
    Found(&'a Lesson),
    Missing { error: String },
}

impl LessonLookup<'_> {
    pub fn missing(requested: &str) -> Self {
        LessonLookup::Missing {
            error: format!("No lesson found for {}", requested),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, LessonLookup::Found(_))
    }
}

#[derive(Debug, Serialize)]
pub struct LessonResponse<'a> {
    pub lesson: LessonLookup<'a>,
}
