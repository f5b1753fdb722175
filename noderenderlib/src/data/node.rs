//! Node records as delivered by the cluster.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One managed node: identity, health flags, capacity and usage.
///
/// Records are produced elsewhere and only read here. Every field except
/// `name` falls back to its default when missing from the input, so partial
/// records from older producers still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node name
    pub name: String,
    /// Network endpoint (e.g. "10.0.0.1:2379")
    #[serde(default)]
    pub endpoint: String,
    /// Pod (node group) the node belongs to; carried through to structured
    /// output only
    #[serde(default)]
    pub podname: String,
    /// Administratively excluded from scheduling
    #[serde(default)]
    pub bypass: bool,
    /// Last known health signal
    #[serde(default)]
    pub available: bool,
    /// CPU in use, as a fraction of whole CPUs
    #[serde(default)]
    pub cpu_used: f64,
    /// Declared CPUs, one entry per CPU
    #[serde(default)]
    pub init_cpu: Vec<i64>,
    /// Memory in use, in bytes
    #[serde(default)]
    pub memory_used: i64,
    /// Declared memory, in bytes
    #[serde(default)]
    pub init_memory: i64,
    /// Storage in use, in bytes
    #[serde(default)]
    pub storage_used: i64,
    /// Declared storage, in bytes
    #[serde(default)]
    pub init_storage: i64,
    /// Volume in use across all pools, in bytes
    #[serde(default)]
    pub volume_used: i64,
    /// Declared capacity per volume pool, in bytes
    #[serde(default)]
    pub init_volume: BTreeMap<String, i64>,
    /// Free-form info blob
    #[serde(default)]
    pub info: String,
    /// Node labels; carried through to structured output only
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl NodeRecord {
    /// Create a record with only a name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Schedulable and healthy.
    pub fn is_up(&self) -> bool {
        !self.bypass && self.available
    }

    /// Number of declared CPUs
    pub fn cpu_count(&self) -> usize {
        self.init_cpu.len()
    }

    /// Total declared volume capacity.
    ///
    /// Always summed from the per-pool capacities; records carry no total.
    pub fn total_volume_capacity(&self) -> i64 {
        self.init_volume.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_up_only_when_available_and_not_bypassed() {
        let mut node = NodeRecord::new("n1");
        for (bypass, available, expected) in [
            (false, true, true),
            (false, false, false),
            (true, true, false),
            (true, false, false),
        ] {
            node.bypass = bypass;
            node.available = available;
            assert_eq!(node.is_up(), expected, "bypass={bypass} available={available}");
        }
    }

    #[test]
    fn test_total_volume_capacity_sums_pools() {
        let mut node = NodeRecord::new("n1");
        node.init_volume.insert("/data".to_string(), 1000);
        node.init_volume.insert("/data2".to_string(), 2500);
        assert_eq!(node.total_volume_capacity(), 3500);
    }

    #[test]
    fn test_total_volume_capacity_without_pools() {
        let node = NodeRecord::new("n1");
        assert_eq!(node.total_volume_capacity(), 0);
    }

    #[test]
    fn test_deserialize_partial_record() {
        let node: NodeRecord =
            serde_json::from_str(r#"{"name":"n1","available":true,"init_cpu":[0,1]}"#).unwrap();
        assert_eq!(node.name, "n1");
        assert!(node.available);
        assert!(!node.bypass);
        assert_eq!(node.cpu_count(), 2);
        assert!(node.init_volume.is_empty());
        assert_eq!(node.info, "");
    }

    #[test]
    fn test_serialize_uses_declared_field_names() {
        let value = serde_json::to_value(NodeRecord::new("n1")).unwrap();
        for field in [
            "name",
            "endpoint",
            "podname",
            "bypass",
            "available",
            "cpu_used",
            "init_cpu",
            "memory_used",
            "init_memory",
            "storage_used",
            "init_storage",
            "volume_used",
            "init_volume",
            "info",
            "labels",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
    }
}
