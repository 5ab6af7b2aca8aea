//! Cross-cutting configuration shared by adapters and the binary.

pub mod config;
