//! Record destinations.
//!
//! The engine hands every record that passes level filtering to a [`Sink`].
//!
//! - [`StreamSink`]: newline-delimited JSON to any `Write` (stdout by default)
//! - [`MemorySink`]: keeps records in memory, backs [`crate::log::FakeLogger`]
//! - [`TracingSink`]: re-emits records as `tracing` events

mod memory;
mod stream;
mod tracing_adapter;

pub use memory::MemorySink;
pub use stream::StreamSink;
pub use tracing_adapter::TracingSink;

use crate::error::Result;
use crate::log::Fields;

/// Destination for emitted records.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a sink is shared by a logger and
/// all of its children.
pub trait Sink: Send + Sync {
    /// Write one record. Errors propagate to the leveled-log call.
    fn write(&self, record: &Fields) -> Result<()>;
}
