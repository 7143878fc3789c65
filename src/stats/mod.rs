//! Pure snapshot-to-display helpers.
//!
//! The only stateless, directly testable logic in the fetch flow lives
//! here: the relative-time "last updated" label and the fixed-order
//! projection of a snapshot into display records.

mod format;
mod project;

pub use format::{format_count, format_updated_message, updated_message_at};
pub use project::project_snapshot_to_records;
