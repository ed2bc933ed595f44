//! Quote CLI - command line access to the quote engine.
//!
//! Quotes and rankings are evaluated locally unless a server URL is given,
//! in which case the request goes to a running quote server.

pub mod remote;
pub mod render;

pub use remote::QuoteClient;
