//! Domain layer for calculator module
//!
//! Contains the arithmetic core and the service that dispatches to it.

pub mod arithmetic;
pub mod local_client;
pub mod service;

pub use local_client::CalculatorLocalClient;
pub use service::Service;
