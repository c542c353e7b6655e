//! Domain layer: the pay-period model, the conversion engine and the rules on
//! user input. Nothing here performs I/O.

pub mod frequency;
pub mod income;
pub mod ports;
pub mod validation;
