//! Functional core for the itens service.
//!
//! Domain types, the repository contract, and pure mappings from repository
//! outcomes to HTTP status codes. Nothing in this crate performs I/O.

pub mod item;
pub mod serde;
pub mod storage;
