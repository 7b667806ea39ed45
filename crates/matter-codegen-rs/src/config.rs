// crates/matter-codegen-rs/src/config.rs

//! Generator configuration: deliberate scope limitations and cross-cluster
//! overrides, kept as named data instead of literals inside the pipeline.

use serde::Deserialize;
use std::collections::BTreeSet;

/// One forced cross-cluster copy: `type_name` is taken from `source` and
/// installed into `destination` after the generic borrowing pass. Used where
/// the specification relies on a relationship it never declares
/// structurally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManualBorrow {
    pub source: String,
    pub destination: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ManualBorrow {
    pub fn new(source: &str, destination: &str, type_name: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            type_name: type_name.to_string(),
        }
    }
}

/// Tunables for one generation run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Clusters with inheritance shapes the resolver cannot model yet.
    /// Excluded outright rather than generated wrong; revisit as new
    /// specification editions land.
    #[serde(rename = "skipClusters")]
    pub skip_clusters: BTreeSet<String>,

    /// Cross-cluster copies the specification needs but never declares.
    #[serde(rename = "manualBorrows")]
    pub manual_borrows: Vec<ManualBorrow>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            skip_clusters: ["Messages", "Channel", "ContentLauncher"]
                .into_iter()
                .map(String::from)
                .collect(),
            manual_borrows: vec![ManualBorrow::new("LevelControl", "ColorControl", "Options")],
        }
    }
}

impl GeneratorConfig {
    /// Field-wise merge with a partial override set: replacement fields swap
    /// the defaults out, `extra_*` fields extend them.
    pub fn merged(mut self, overrides: GeneratorConfigOverrides) -> Self {
        if let Some(skip) = overrides.skip_clusters {
            self.skip_clusters = skip;
        }
        if let Some(extra) = overrides.extra_skip_clusters {
            self.skip_clusters.extend(extra);
        }
        if let Some(manual) = overrides.manual_borrows {
            self.manual_borrows = manual;
        }
        if let Some(extra) = overrides.extra_manual_borrows {
            self.manual_borrows.extend(extra);
        }
        self
    }
}

/// Partial configuration, typically read from a build's config file; unset
/// fields keep the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GeneratorConfigOverrides {
    #[serde(rename = "skipClusters")]
    pub skip_clusters: Option<BTreeSet<String>>,
    #[serde(rename = "extraSkipClusters")]
    pub extra_skip_clusters: Option<BTreeSet<String>>,
    #[serde(rename = "manualBorrows")]
    pub manual_borrows: Option<Vec<ManualBorrow>>,
    #[serde(rename = "extraManualBorrows")]
    pub extra_manual_borrows: Option<Vec<ManualBorrow>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_limitations() {
        let config = GeneratorConfig::default();
        assert!(config.skip_clusters.contains("Messages"));
        assert!(config.skip_clusters.contains("Channel"));
        assert!(config.skip_clusters.contains("ContentLauncher"));
        assert_eq!(
            config.manual_borrows,
            vec![ManualBorrow::new("LevelControl", "ColorControl", "Options")]
        );
    }

    #[test]
    fn test_merge_replaces_and_extends() {
        let overrides = GeneratorConfigOverrides {
            skip_clusters: Some(["Messages"].into_iter().map(String::from).collect()),
            extra_skip_clusters: Some(["Scenes"].into_iter().map(String::from).collect()),
            extra_manual_borrows: Some(vec![ManualBorrow::new("OnOff", "LevelControl", "Timer")]),
            ..GeneratorConfigOverrides::default()
        };

        let merged = GeneratorConfig::default().merged(overrides);
        assert_eq!(merged.skip_clusters.len(), 2);
        assert!(merged.skip_clusters.contains("Scenes"));
        assert!(!merged.skip_clusters.contains("Channel"));
        assert_eq!(merged.manual_borrows.len(), 2);
    }

    #[test]
    fn test_overrides_deserialize_from_json() {
        let overrides: GeneratorConfigOverrides = serde_json::from_str(
            r#"{
                "extraSkipClusters": ["ScenesManagement"],
                "manualBorrows": [
                    {"source": "LevelControl", "destination": "ColorControl", "type": "Options"}
                ]
            }"#,
        )
        .unwrap();

        let merged = GeneratorConfig::default().merged(overrides);
        assert!(merged.skip_clusters.contains("ScenesManagement"));
        assert_eq!(merged.manual_borrows.len(), 1);
    }

    #[test]
    fn test_empty_overrides_keep_defaults() {
        let merged = GeneratorConfig::default().merged(GeneratorConfigOverrides::default());
        assert_eq!(merged, GeneratorConfig::default());
    }
}
