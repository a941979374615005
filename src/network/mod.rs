//! Network helpers
//!
//! Tests that start servers need a port nobody else is listening on.

pub mod ports;

pub use ports::{free_port, free_port_number};
