//! Site port definitions.

pub mod outbound;
