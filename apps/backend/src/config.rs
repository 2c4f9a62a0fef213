//! Runtime configuration from environment variables.

use std::path::PathBuf;

use crate::error::{ApiError, Result};

const DEFAULT_FCM_ENDPOINT: &str = "https://fcm.googleapis.com";
const DEFAULT_REMINDER_TITLE: &str = "Good morning Princess! 💕";
const DEFAULT_REMINDER_BODY: &str = "Your daily message from me is ready! Open the app to see it. ❤️";

/// Push provider credentials.
#[derive(Debug, Clone)]
pub struct FcmConfig {
    pub endpoint: String,
    pub project_id: String,
    pub access_token: String,
}

/// Backend configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    /// Bearer secret for the cron trigger. Unset rejects every cron call.
    pub cron_secret: Option<String>,
    /// Fallback device token when none has been registered.
    pub fcm_token: Option<String>,
    pub fcm: Option<FcmConfig>,
    pub daily_reset_hour: u32,
    pub reminder_title: String,
    pub reminder_body: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_path: PathBuf::from("daily-note.db"),
            cron_secret: None,
            fcm_token: None,
            fcm: None,
            daily_reset_hour: 0,
            reminder_title: DEFAULT_REMINDER_TITLE.to_string(),
            reminder_body: DEFAULT_REMINDER_BODY.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST, PORT: listen address (0.0.0.0:3000)
    /// - DATABASE_PATH: SQLite file (daily-note.db)
    /// - CRON_SECRET: bearer secret for /api/cron
    /// - FCM_TOKEN: fallback device registration token
    /// - FCM_PROJECT_ID, FCM_ACCESS_TOKEN, FCM_ENDPOINT: push provider
    /// - DAILY_RESET_HOUR: hour (0-23) a new day starts (0)
    /// - REMINDER_TITLE, REMINDER_BODY: cron notification text
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid PORT: {}", v)))?,
            None => defaults.port,
        };

        let daily_reset_hour = match get("DAILY_RESET_HOUR") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|h| *h < 24)
                .ok_or_else(|| ApiError::Config(format!("invalid DAILY_RESET_HOUR: {}", v)))?,
            None => defaults.daily_reset_hour,
        };

        let fcm = match (get("FCM_PROJECT_ID"), get("FCM_ACCESS_TOKEN")) {
            (Some(project_id), Some(access_token)) => Some(FcmConfig {
                endpoint: get("FCM_ENDPOINT").unwrap_or_else(|| DEFAULT_FCM_ENDPOINT.to_string()),
                project_id,
                access_token,
            }),
            _ => None,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            database_path: get("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            cron_secret: get("CRON_SECRET"),
            fcm_token: get("FCM_TOKEN"),
            fcm,
            daily_reset_hour,
            reminder_title: get("REMINDER_TITLE").unwrap_or(defaults.reminder_title),
            reminder_body: get("REMINDER_BODY").unwrap_or(defaults.reminder_body),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3000");
        assert_eq!(config.database_path, PathBuf::from("daily-note.db"));
        assert!(config.cron_secret.is_none());
        assert!(config.fcm.is_none());
        assert_eq!(config.daily_reset_hour, 0);
    }

    #[test]
    fn test_fcm_requires_project_and_token() {
        let config = load(&[("FCM_PROJECT_ID", "demo")]).unwrap();
        assert!(config.fcm.is_none());

        let config = load(&[("FCM_PROJECT_ID", "demo"), ("FCM_ACCESS_TOKEN", "ya29")]).unwrap();
        let fcm = config.fcm.unwrap();
        assert_eq!(fcm.endpoint, DEFAULT_FCM_ENDPOINT);
        assert_eq!(fcm.project_id, "demo");
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(load(&[("PORT", "eighty")]), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_invalid_reset_hour() {
        assert!(load(&[("DAILY_RESET_HOUR", "24")]).is_err());
        assert_eq!(load(&[("DAILY_RESET_HOUR", "4")]).unwrap().daily_reset_hour, 4);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = load(&[("CRON_SECRET", "  ")]).unwrap();
        assert!(config.cron_secret.is_none());
    }
}
