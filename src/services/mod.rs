pub mod inference;
pub mod prompt;

pub use inference::{InferenceClient, TextGenerator};
pub use prompt::create_prompt;
