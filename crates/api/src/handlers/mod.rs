//! HTTP request handlers.

pub mod schools;
