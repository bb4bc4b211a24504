//! Student records and the raw form input they are built from.

pub mod candidate;
pub mod record;

pub use candidate::{Candidate, Field};
pub use record::{seed_records, Record, RecordCollection};
