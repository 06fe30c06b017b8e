pub mod content;
pub mod inference;
pub mod metrics;
pub mod summarizer;

pub use content::ContentStore;
pub use inference::{InferenceAdapter, MODEL_NOT_READY_MESSAGE};
pub use self::metrics::{get_metrics, init_metrics};
