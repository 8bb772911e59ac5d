//! Email relay settings. Each value can be overridden from the environment;
//! the defaults are the public keys the site ships with.

use crate::content::OWNER_EMAIL;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    /// Only needed when the provider account enforces private-key auth.
    pub private_key: Option<String>,
    /// Mailbox the relayed message is delivered to.
    pub recipient: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            public_key: "25quhtfJxkNjs01Dq".to_string(),
            service_id: "service_q2qabta".to_string(),
            template_id: "template_lmi5r9b".to_string(),
            private_key: None,
            recipient: OWNER_EMAIL.to_string(),
        }
    }
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            endpoint: get("EMAILJS_ENDPOINT").unwrap_or(defaults.endpoint),
            public_key: get("EMAILJS_PUBLIC_KEY").unwrap_or(defaults.public_key),
            service_id: get("EMAILJS_SERVICE_ID").unwrap_or(defaults.service_id),
            template_id: get("EMAILJS_TEMPLATE_ID").unwrap_or(defaults.template_id),
            private_key: get("EMAILJS_PRIVATE_KEY"),
            recipient: get("CONTACT_RECIPIENT").unwrap_or(defaults.recipient),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = RelayConfig::from_lookup(|_| None);
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.private_key.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let vars = HashMap::from([
            ("EMAILJS_SERVICE_ID", "service_x"),
            ("EMAILJS_PRIVATE_KEY", "secret"),
            ("CONTACT_RECIPIENT", "inbox@example.com"),
            ("EMAILJS_TEMPLATE_ID", "   "),
        ]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.private_key.as_deref(), Some("secret"));
        assert_eq!(config.recipient, "inbox@example.com");
        assert_eq!(config.template_id, RelayConfig::default().template_id);
    }
}
