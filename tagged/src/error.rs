use thiserror::Error;

/// Sentence construction error.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum SentenceError {
    #[error("columns differ in length: {tokens:?} tokens, {ud_tags:?} universal tags, {ptb_tags:?} PTB tags")]
    LengthMismatch {
        tokens: usize,
        ud_tags: usize,
        ptb_tags: usize,
    },
}
