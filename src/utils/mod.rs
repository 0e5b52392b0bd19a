//! Shared helpers.

pub mod xml;
