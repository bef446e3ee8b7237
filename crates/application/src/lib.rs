//! ADDV Application Layer — use cases orchestrating the domain model
//! against the ports implemented by the infrastructure crate.
pub mod ports;
pub mod services;
pub mod use_cases;
