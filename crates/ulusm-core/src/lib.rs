//! Core domain + application logic for the Ulusm group-gate bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! `MessagingPort` trait, implemented in the adapter crate.

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod domain;
pub mod eligibility;
pub mod errors;
pub mod invites;
pub mod locks;
pub mod logging;
pub mod messaging;
pub mod replies;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use errors::{Error, Result};
