//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Enable request tracing
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_tracing: default_enable_tracing(),
            json_logs: false,
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_flags_defaults() {
        let flags = FeatureFlags::default();
        assert!(flags.enable_tracing);
        assert!(!flags.json_logs);
    }

    #[test]
    fn test_feature_flags_deserialization() {
        let json = r#"{
            "enable_tracing": false,
            "json_logs": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.enable_tracing);
        assert!(flags.json_logs);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert!(flags.enable_tracing);
        assert!(!flags.json_logs);
    }
}
