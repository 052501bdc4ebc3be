use serde::{Deserialize, Serialize};

/// Configuration for the reminders module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RemindersConfig {
    /// Reject due dates that cannot be read as an ISO-8601 date or date-time.
    /// Off by default: any non-empty string is stored.
    pub strict_due_date: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = RemindersConfig::default();
        assert!(!cfg.strict_due_date);
    }

    #[test]
    fn test_config_deserialization() {
        let cfg: RemindersConfig = serde_json::from_str(r#"{"strict_due_date":true}"#).unwrap();
        assert!(cfg.strict_due_date);

        let cfg: RemindersConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, RemindersConfig::default());
    }

    #[test]
    fn test_config_rejects_unknown_fields() {
        let result: Result<RemindersConfig, _> = serde_json::from_str(r#"{"strict":true}"#);
        assert!(result.is_err());
    }
}
