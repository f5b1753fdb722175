//! Mode dispatch: route a record sequence to exactly one renderer.
//!
//! Every function here fully drains its input before returning. An input
//! that never ends (a channel whose sender is never dropped) blocks forever;
//! closing the producer side is how a caller stops a render early.
//!
//! - **Table**: each record is derived and appended as it arrives, then the
//!   grid is written with a single `write_all`.
//! - **Json / Yaml**: the input is collected first and the raw records are
//!   encoded untouched, NaN percentages included.

use std::io::Write;

use serde::Serialize;

use crate::data::{NodeRecord, ResourceSummary, StatusEvent};
use crate::options::{NodeViewOptions, OutputMode};
use crate::output::{report_status_events, write_structured, NodeTable, ResourceTable};
use crate::Result;

/// Describe nodes in the given mode.
pub fn describe_nodes<I, W>(
    nodes: I,
    options: NodeViewOptions,
    mode: OutputMode,
    out: &mut W,
) -> Result<()>
where
    I: IntoIterator<Item = NodeRecord>,
    W: Write,
{
    if mode.is_structured() {
        return drain_structured(nodes, mode, out);
    }

    let mut table = NodeTable::new(options);
    for node in nodes {
        table.push(&node);
    }
    tracing::debug!(nodes = table.len(), "rendering node table");
    out.write_all(table.render().as_bytes())?;
    Ok(())
}

/// Describe resource summaries in the given mode.
///
/// Only the table view sanitizes NaN percentages.
pub fn describe_node_resources<I, W>(resources: I, mode: OutputMode, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = ResourceSummary>,
    W: Write,
{
    if mode.is_structured() {
        return drain_structured(resources, mode, out);
    }

    let mut table = ResourceTable::new();
    for summary in resources {
        table.push(summary);
    }
    tracing::debug!(nodes = table.len(), "rendering resource table");
    out.write_all(table.render().as_bytes())?;
    Ok(())
}

/// Describe status events in the given mode.
///
/// In table mode nothing is written to `out`: every event becomes one log
/// line, emitted as soon as it is pulled.
pub fn describe_status_events<I, W>(events: I, mode: OutputMode, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = StatusEvent>,
    W: Write,
{
    if mode.is_structured() {
        return drain_structured(events, mode, out);
    }

    let reported = report_status_events(events);
    tracing::debug!(reported, "status events reported");
    Ok(())
}

/// Structured encoders need the whole collection, so drain first.
fn drain_structured<T, I, W>(records: I, mode: OutputMode, out: &mut W) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
    W: Write,
{
    let records: Vec<T> = records.into_iter().collect();
    tracing::debug!(records = records.len(), %mode, "encoding raw records");
    write_structured(mode, &records, out)
}
