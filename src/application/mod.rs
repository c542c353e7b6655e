//! Application layer: the calculator session that turns user events into new
//! results, and the formatting helpers used to present them.

pub mod format;
pub mod session;
