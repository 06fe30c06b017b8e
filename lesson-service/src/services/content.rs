//! In-memory lesson and quiz tables.
//!
//! Both tables are keyed by lowercase language code and never change after
//! construction, so the store is shared across requests without locking.

use crate::models::{Lesson, LessonLookup, QuizQuestion};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    lessons: HashMap<String, Lesson>,
    quizzes: HashMap<String, Vec<QuizQuestion>>,
}

impl ContentStore {
    /// Build a store from explicit tables. Keys are normalised to lowercase.
    pub fn new(
        lessons: impl IntoIterator<Item = (String, Lesson)>,
        quizzes: impl IntoIterator<Item = (String, Vec<QuizQuestion>)>,
    ) -> Self {
        Self {
            lessons: lessons
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
            quizzes: quizzes
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect(),
        }
    }

    /// The content shipped with the service.
    pub fn builtin() -> Self {
        let lessons = [
            (
                "english".to_string(),
                Lesson::new(
                    "English",
                    "Welcome to the Platform",
                    "Hello! This is your first lesson on simple English grammar. We will learn about verbs and nouns today.",
                    "quiz-eng-101",
                ),
            ),
            (
                "tamil".to_string(),
                Lesson::new(
                    "Tamil",
                    "அறிமுகம் (Introduction)",
                    "வணக்கம்! இன்று நாம் தமிழ் எழுத்துக்களைப் பற்றி கற்போம். இது உங்கள் முதல் பாடம்.",
                    "quiz-tamil-101",
                ),
            ),
        ];

        let quizzes = [
            (
                "english".to_string(),
                vec![
                    QuizQuestion::new(
                        "What is a noun?",
                        [
                            "An action word",
                            "A naming word",
                            "A describing word",
                            "None of the above",
                        ],
                        "A naming word",
                    ),
                    QuizQuestion::new(
                        "Which of these is a verb?",
                        ["Run", "Table", "Happy", "Blue"],
                        "Run",
                    ),
                ],
            ),
            (
                "tamil".to_string(),
                vec![
                    QuizQuestion::new(
                        "தமிழ் எழுத்துக்களின் எண்ணிக்கை எவ்வளவு?",
                        ["247", "200", "180", "300"],
                        "247",
                    ),
                    QuizQuestion::new(
                        "தமிழ் எது?",
                        ["Language", "Fruit", "Animal", "Place"],
                        "Language",
                    ),
                ],
            ),
        ];

        Self::new(lessons, quizzes)
    }

    /// Look up a lesson; the error message quotes `lang` as requested.
    pub fn lesson(&self, lang: &str) -> LessonLookup<'_> {
        match self.lessons.get(&lang.to_lowercase()) {
            Some(lesson) => LessonLookup::Found(lesson),
            None => LessonLookup::missing(lang),
        }
    }

    /// Quiz questions for `lang`, or an empty slice for unknown languages.
    pub fn quiz(&self, lang: &str) -> &[QuizQuestion] {
        self.quizzes
            .get(&lang.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Sorted language keys that have a lesson or a quiz.
    pub fn languages(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .lessons
            .keys()
            .chain(self.quizzes.keys())
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    #[cfg(test)]
    fn questions(&self) -> impl Iterator<Item = &QuizQuestion> {
        self.quizzes.values().flatten()
    }
}
