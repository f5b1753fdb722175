//! Table views for nodes and resource summaries.
//!
//! Both views accept records one at a time so a caller draining a stream can
//! push each record as it arrives. Nothing is written until `render`.

use crate::data::{NodeRecord, ResourceSummary};
use crate::options::NodeViewOptions;

use super::grid::Grid;
use super::row::{format_percent, RenderRow};

/// Column headers of the node view
pub const NODE_HEADERS: [&str; 4] = ["Name", "Endpoint", "Status", "Resources"];

/// Extra column of the verbose node view
pub const INFO_HEADER: &str = "Info";

/// Column headers of the resource summary view
pub const RESOURCE_HEADERS: [&str; 6] = ["Name", "Cpu", "Memory", "Storage", "Volume", "Diffs"];

/// One row per node, in arrival order.
#[derive(Debug, Clone)]
pub struct NodeTable {
    options: NodeViewOptions,
    grid: Grid,
}

impl NodeTable {
    pub fn new(options: NodeViewOptions) -> Self {
        let mut headers: Vec<&str> = NODE_HEADERS.to_vec();
        if options.show_info {
            headers.push(INFO_HEADER);
        }
        NodeTable {
            options,
            grid: Grid::new(headers),
        }
    }

    /// Derive the display row for a node and append it.
    pub fn push(&mut self, node: &NodeRecord) {
        let row = RenderRow::from_node(node, self.options.show_info);
        self.grid.push_row(row.cells());
    }

    pub fn len(&self) -> usize {
        self.grid.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn render(&self) -> String {
        self.grid.render()
    }
}

/// Resource summaries, gathered field by field.
///
/// Each metric is kept as its own sequence across nodes. At render time the
/// sequences become rows under `RESOURCE_HEADERS`, names first, then cpu,
/// memory, storage, volume and diffs, with one cell per node. The six rows
/// form a single block with no rules between them.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    names: Vec<String>,
    cpu: Vec<String>,
    memory: Vec<String>,
    storage: Vec<String>,
    volume: Vec<String>,
    diffs: Vec<String>,
}

impl ResourceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitize a summary and append its display values.
    pub fn push(&mut self, summary: ResourceSummary) {
        let summary = summary.sanitize();
        self.cpu.push(format_percent(summary.cpu_percent));
        self.memory.push(format_percent(summary.memory_percent));
        self.storage.push(format_percent(summary.storage_percent));
        self.volume.push(format_percent(summary.volume_percent));
        self.diffs.push(summary.diffs.join("\n"));
        self.names.push(summary.name);
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn render(&self) -> String {
        let mut grid = Grid::new(RESOURCE_HEADERS).with_row_rules(false);
        if !self.is_empty() {
            for row in [
                &self.names,
                &self.cpu,
                &self.memory,
                &self.storage,
                &self.volume,
                &self.diffs,
            ] {
                grid.push_row(row.clone());
            }
        }
        grid.render()
    }
}
