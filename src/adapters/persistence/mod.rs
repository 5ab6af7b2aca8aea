//! Filesystem persistence. Implements RecordStore.

pub mod record_json;

pub use record_json::RecordJson;
