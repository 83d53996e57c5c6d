//! Risk management module
//!
//! Lot sizing from a risk budget and stop distance

mod sizing;
mod types;

pub use sizing::SizingEngine;
pub use types::{ClampBound, LotSizing, SizingError};
