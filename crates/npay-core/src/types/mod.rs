//! Core types used across the Npay Kit.

mod common;
mod request;
mod response;

pub use common::*;
pub use request::*;
pub use response::*;
