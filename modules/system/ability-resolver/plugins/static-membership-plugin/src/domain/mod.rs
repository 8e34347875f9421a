//! Domain layer for the static membership plugin.

mod client;
pub mod service;

pub use service::Service;
