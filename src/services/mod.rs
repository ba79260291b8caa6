//! Core snapshot services: key derivation, stores, and comparison

pub mod compare;
pub mod key;
pub mod store;
