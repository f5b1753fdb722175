//! # noderenderlib
//!
//! Renders cluster node state as JSON, YAML, or a bordered text table.
//!
//! ## Overview
//!
//! This library is a presentation layer. It never talks to the cluster: node
//! records, resource summaries, and status events are fetched or streamed by
//! someone else and handed over as an iterator. The library only formats them.
//!
//! - **Nodes**: name, endpoint, UP/DOWN status with raw flags, and a resource
//!   block (CPU, memory, volume, storage as `used/total`)
//! - **Resource summaries**: utilization percentages per node plus diff notes
//! - **Status events**: one log line per liveness notification
//!
//! ## Output modes
//!
//! The caller resolves an [`OutputMode`] once per invocation:
//!
//! - `Table` derives display text and renders one grid (or log lines for events)
//! - `Json` / `Yaml` serialize the raw records; NaN percentages are kept as-is,
//!   while the table view shows them as `0.00%`
//!
//! ## Streaming
//!
//! Inputs are consumed incrementally and always drained completely. A table
//! is built row by row as records arrive and written once at the end;
//! structured modes collect the whole input first.
//!
//! ## Example
//!
//! ```rust
//! use noderenderlib::{describe_nodes, NodeRecord, NodeViewOptions, OutputMode};
//!
//! let mut node = NodeRecord::new("n1");
//! node.endpoint = "10.0.0.1:2379".to_string();
//! node.available = true;
//! node.init_cpu = vec![0, 1, 2, 3];
//! node.cpu_used = 1.5;
//!
//! let mut out = Vec::new();
//! describe_nodes(vec![node], NodeViewOptions::new(), OutputMode::Table, &mut out).unwrap();
//! let table = String::from_utf8(out).unwrap();
//! assert!(table.contains("CPU: 1.50/4"));
//! ```

pub mod data;
pub mod describe;
pub mod error;
pub mod options;
pub mod output;
pub mod stream;

pub use data::{sanitize_percent, NodeRecord, ResourceSummary, StatusEvent};
pub use describe::{describe_node_resources, describe_nodes, describe_status_events};
pub use error::RenderError;
pub use options::{NodeViewOptions, OutputMode};
pub use output::{Grid, NodeTable, RenderRow, ResourceTable, StatusLine};
pub use stream::{spawn_reader, JsonLines, DEFAULT_CHANNEL_CAPACITY};

/// Result type for noderenderlib operations
pub type Result<T> = std::result::Result<T, RenderError>;
