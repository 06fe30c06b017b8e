//! HTTP handlers for the lesson service.
//!
//! Content and explain handlers always answer 200; logical failures are
//! carried in the JSON body.

pub mod content;
pub mod explain;
pub mod health;
pub mod home;

pub use content::{get_lesson, get_quiz, list_languages};
pub use explain::explain_ai;
pub use health::{health_check, metrics_endpoint, not_found, readiness_check};
pub use home::home;
