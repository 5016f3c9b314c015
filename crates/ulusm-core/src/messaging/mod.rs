//! Messaging abstractions: inbound events the dispatcher understands and the
//! outbound port the platform adapter implements.

pub mod port;
pub mod types;
