pub mod district;
pub mod error;
pub mod thresholds;
pub mod tier;
