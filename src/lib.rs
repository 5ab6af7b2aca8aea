//! course-forge: course-proposal generator with Hexagonal Architecture.
//!
//! Lesson-plan timetables, drafted proposal sections, workbook extraction and
//! quality audits behind a terminal menu.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
