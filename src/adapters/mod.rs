//! Infrastructure adapters. Implement outbound ports.
//!
//! Text generation, workbook sheets, document rendering, filesystem, terminal UI.
//! Map errors to DomainError.

pub mod ai;
pub mod persistence;
pub mod render;
pub mod ui;
pub mod workbook;
