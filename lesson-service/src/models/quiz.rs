use serde::Serialize;

/// A multiple-choice question with exactly four options.
///
/// `answer` is expected to be one of `options`; nothing enforces it at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; 4],
    pub answer: String,
}

impl QuizQuestion {
    pub fn new(question: &str, options: [&str; 4], answer: &str) -> Self {
        Self {
            question: question.to_string(),
            options: options.map(str::to_string),
            answer: answer.to_string(),
        }
    }

    /// Whether `answer` matches one of the options exactly.
    pub fn answer_is_an_option(&self) -> bool {
        self.options.iter().any(|o| o == &self.answer)
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse<'a> {
    pub quiz: &'a [QuizQuestion],
}
