mod error;
pub use crate::error::SentenceError;

pub mod sentence;
pub use crate::sentence::{Sentence, TaggedToken};
