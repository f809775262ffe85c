//! Flutter-facing bridge crate for Afternote core.

pub mod api;
