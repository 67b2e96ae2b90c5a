//! Session configuration.

use tracing::Level;

/// Session configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Skip the name prompt and play as this player.
    pub player_name: Option<String>,
    /// Log level for diagnostics on stderr; `None` disables logging.
    pub log_level: Option<Level>,
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `TENPIN_PLAYER`: preset player name (ignored when blank)
    /// - `TENPIN_LOG`: `error`, `warn`, `info`, `debug` or `trace`
    pub fn from_env() -> Self {
        use std::env;

        Self::from_vars(
            env::var("TENPIN_PLAYER").ok().as_deref(),
            env::var("TENPIN_LOG").ok().as_deref(),
        )
    }

    fn from_vars(player: Option<&str>, log: Option<&str>) -> Self {
        let player_name = player
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = log.and_then(|s| s.trim().parse().ok());

        Self {
            player_name,
            log_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SessionConfig::from_vars(None, None), SessionConfig::default());
    }

    #[test]
    fn test_player_name_is_trimmed() {
        let config = SessionConfig::from_vars(Some("  Ada "), None);
        assert_eq!(config.player_name.as_deref(), Some("Ada"));

        let config = SessionConfig::from_vars(Some("   "), None);
        assert_eq!(config.player_name, None);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(
            SessionConfig::from_vars(None, Some("debug")).log_level,
            Some(Level::DEBUG)
        );
        assert_eq!(
            SessionConfig::from_vars(None, Some("WARN")).log_level,
            Some(Level::WARN)
        );
        assert_eq!(SessionConfig::from_vars(None, Some("loud")).log_level, None);
    }
}
