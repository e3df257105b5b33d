//! Npay core library.
//!
//! This library provides the wire types, request payloads and transaction reference
//! generation shared by Npay gateway clients. It performs no network I/O.

pub mod errors;
pub mod payloads;
pub mod reference;
pub mod types;
pub mod verification;

pub use errors::{Error, Result};
