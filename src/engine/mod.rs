//! Pure resolution of grouped Caaj records into Cryptact records.

pub mod classify;
pub mod resolver;

pub use classify::{action_for_type, detect_action};
pub use resolver::{FormatResolver, LegBuckets, ResolveError, ResolveSummary, PRICE_PRECISION};
