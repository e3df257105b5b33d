//! Gateway operations, grouped by resource.
//!
//! Each operation is a thin pass-through to [`NpayClient::send`](crate::NpayClient::send)
//! with a fixed path and method.

mod customers;
mod pages;
mod payments;
mod plans;
mod subscriptions;
mod transactions;
