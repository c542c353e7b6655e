//! Adapters between the calculator and the outside world: the results grid as
//! text, CSV and JSON, and the interactive session.

pub mod csv;
pub mod json;
pub mod repl;
pub mod report;
pub mod table;
