//! Application Configuration
//!
//! Fixed settings for the task list. Provided via Leptos context.

use std::time::Duration;

/// Storage key holding the serialized task collection
pub const TASKS_KEY: &str = "tasks";

/// How long the due-today banner stays up before hiding itself
pub const NOTIFICATION_LIFETIME: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub notification_lifetime: Duration,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: TASKS_KEY.to_string(),
            notification_lifetime: NOTIFICATION_LIFETIME,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Notification lifetime in whole milliseconds, as timers want it
    pub fn notification_millis(&self) -> u32 {
        u32::try_from(self.notification_lifetime.as_millis()).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.notification_millis(), 15_000);
    }
}
