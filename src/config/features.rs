//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FeatureFlags {
    /// Store the full analysis JSON alongside each score
    #[serde(default = "default_persist_analysis")]
    pub persist_analysis: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Enable request tracing
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

fn default_persist_analysis() -> bool {
    true
}

fn default_enable_tracing() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_deserialize_from_json() {
        let json = r#"{
            "persist_analysis": false,
            "verbose_errors": true,
            "enable_tracing": true
        }"#;

        let flags: FeatureFlags = serde_json::from_str(json).unwrap();
        assert!(!flags.persist_analysis);
        assert!(flags.verbose_errors);
        assert!(flags.enable_tracing);
    }
}
