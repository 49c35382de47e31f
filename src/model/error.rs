use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("invalid category: unrecognized income level {0:?} (use Low|Medium|High)")]
    InvalidCategory(String),
    #[error("score {0} is out of range (expected 0..=8)")]
    OutOfRange(u8),
}
