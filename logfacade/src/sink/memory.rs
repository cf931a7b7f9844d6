//! In-memory record capture.

use std::sync::Arc;

use parking_lot::Mutex;

use super::Sink;
use crate::error::Result;
use crate::log::{Fields, LogRecord};

/// Appends every record to a shared, ordered list.
///
/// Cloning the sink shares the same list, so records written through any
/// clone are visible through all of them.
#[derive(Debug, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
    message_key: String,
}

impl MemorySink {
    /// Create an empty sink. `message_key` names the message field.
    pub fn new(message_key: impl Into<String>) -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            message_key: message_key.into(),
        }
    }

    /// Snapshot of the captured records, in write order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Whether no records have been captured.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Truncate the shared list in place.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Whether two sinks share the same list.
    pub fn shares_records_with(&self, other: &MemorySink) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &Fields) -> Result<()> {
        let record = LogRecord::from_fields(record.clone(), &self.message_key);
        self.records.lock().push(record);
        Ok(())
    }
}
