//! Input records: what the cluster hands to the renderer.
//!
//! - **NodeRecord**: identity, health flags, capacity and usage of one node
//! - **ResourceSummary**: utilization fractions plus diff notes, with NaN sanitizing
//! - **StatusEvent**: a liveness notification, possibly carrying a failure
//!
//! All records are plain serde types. Field names are serialized exactly as
//! declared, so structured output mirrors the input schema.

pub mod node;
pub mod resource;
pub mod status;

pub use node::NodeRecord;
pub use resource::{sanitize_percent, ResourceSummary};
pub use status::StatusEvent;
