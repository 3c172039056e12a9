use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WheelError {
    #[error("fill origin code {0} is out of range (expected 0..=3)")]
    FillOriginOutOfRange(u8),
    #[error("slot {index} does not exist (wheel has {count} items)")]
    SlotOutOfRange { index: usize, count: usize },
}
