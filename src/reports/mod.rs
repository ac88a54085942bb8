//! Reports over the current ledger

pub mod spending;

pub use spending::{SpendingByCategory, SpendingReport};
