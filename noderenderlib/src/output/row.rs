//! Display fields derived from node records.
//!
//! This is pure string formatting: one `NodeRecord` in, one `RenderRow` out.
//! Multi-fact cells are joined with newlines; the grid keeps them aligned.

use crate::data::NodeRecord;

/// Display-ready text for one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub name: String,
    pub endpoint: String,
    /// "UP"/"DOWN" followed by the raw flags
    pub status: String,
    /// One line per resource class
    pub resources: String,
    /// Only present in the verbose view
    pub info: Option<String>,
}

impl RenderRow {
    /// Derive the display row for a node. `show_info` adds the info cell.
    pub fn from_node(node: &NodeRecord, show_info: bool) -> Self {
        RenderRow {
            name: node.name.clone(),
            endpoint: node.endpoint.clone(),
            status: status_text(node),
            resources: resources_text(node),
            info: show_info.then(|| node.info.clone()),
        }
    }

    /// Cells in column order: Name, Endpoint, Status, Resources[, Info]
    pub fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.name.clone(),
            self.endpoint.clone(),
            self.status.clone(),
            self.resources.clone(),
        ];
        if let Some(info) = &self.info {
            cells.push(info.clone());
        }
        cells
    }
}

/// Status cell: the verdict on the first line, raw flags below it so scripts
/// scraping the table can still recover them.
pub fn status_text(node: &NodeRecord) -> String {
    let verdict = if node.is_up() { "UP" } else { "DOWN" };
    format!(
        "{}\nbypass {}\navailable {}",
        verdict, node.bypass, node.available
    )
}

/// Resources cell: CPU, memory, volume and storage as `used/total`.
pub fn resources_text(node: &NodeRecord) -> String {
    [
        format!("CPU: {:.2}/{}", node.cpu_used, node.cpu_count()),
        format!("Mem: {}/{} bytes", node.memory_used, node.init_memory),
        format!(
            "Vol: {} / {} bytes",
            node.volume_used,
            node.total_volume_capacity()
        ),
        format!(
            "Storage: {} / {} bytes",
            node.storage_used, node.init_storage
        ),
    ]
    .join("\n")
}

/// Format a utilization fraction as a percentage with two decimals.
///
/// Callers pass sanitized values; NaN is not special-cased here.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}
