//! Domain types for Caaj ledger entries and Cryptact custom-file records.
//!
//! This module provides:
//! - Lossless numeric handling via Decimal wrapper
//! - Domain primitives: ExecutedAt, Asset
//! - The Caaj source record and the Cryptact target record

pub mod caaj;
pub mod cryptact;
pub mod decimal;
pub mod primitives;

pub use caaj::{Caaj, CaajType, FEE_MARKER};
pub use cryptact::{Action, CryptactRecord};
pub use decimal::Decimal;
pub use primitives::{Asset, ExecutedAt, TimestampParseError};
