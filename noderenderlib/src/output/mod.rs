//! Output formatting: turn records into text.
//!
//! This module holds everything between a record and the bytes written to
//! the sink:
//!
//! - **row**: display fields derived from a node (status, resources, percentages)
//! - **grid**: the bordered comfy-table grid
//! - **table**: node and resource-summary table views
//! - **structured**: raw JSON/YAML encoding
//! - **status**: per-event status lines
//!
//! ## Example
//!
//! ```rust
//! use noderenderlib::output::NodeTable;
//! use noderenderlib::{NodeRecord, NodeViewOptions};
//!
//! let mut table = NodeTable::new(NodeViewOptions::new());
//! table.push(&NodeRecord::new("n1"));
//! assert!(table.render().contains("DOWN"));
//! ```

pub mod grid;
pub mod row;
pub mod status;
pub mod structured;
pub mod table;

pub use grid::Grid;
pub use row::{format_percent, resources_text, status_text, RenderRow};
pub use status::{report_status_events, StatusLine};
pub use structured::{write_json, write_structured, write_yaml};
pub use table::{NodeTable, ResourceTable, INFO_HEADER, NODE_HEADERS, RESOURCE_HEADERS};
