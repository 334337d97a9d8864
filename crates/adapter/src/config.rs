//! Session configuration from environment variables

use crate::engine::ControllerConfig;
use crate::types::GameKind;

/// Session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub game: GameKind,
    /// Capacity of the inbound frame channel
    pub max_pending_frames: usize,
    /// Append observations, decisions and errors as JSON lines
    pub log_path: Option<String>,
    pub controller: ControllerConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game: GameKind::Tetro,
            max_pending_frames: 16,
            log_path: None,
            controller: ControllerConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let game = lookup("NEWYEAR_BOT_GAME")
            .and_then(|s| GameKind::from_str(s.trim()))
            .unwrap_or(defaults.game);

        let max_pending_frames = lookup("NEWYEAR_BOT_MAX_PENDING")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.max_pending_frames);

        let log_path = lookup("NEWYEAR_BOT_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            game,
            max_pending_frames,
            log_path,
            controller: defaults.controller,
        }
    }

    /// Check if the bot is disabled via environment
    pub fn is_disabled() -> bool {
        std::env::var("NEWYEAR_BOT_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false)
    }
}
