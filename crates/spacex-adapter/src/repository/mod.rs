//! Repository implementations.

pub mod in_memory;
