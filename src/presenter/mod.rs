//! View-state derivation from fetched collections

pub mod summary;
pub mod window;

pub use summary::{ConditionBreakdown, ConditionShare, LocationSplit, RankedShare};
pub use window::WindowedList;
