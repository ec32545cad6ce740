//! Consolidated constants for the APM message SDK

// =============================================================================
// Hashing
// =============================================================================

/// Separator placed between every field of the string to hash, and between the
/// first-stage digest and the shared secret.
pub const HASH_FIELD_SEPARATOR: &str = ".";

// =============================================================================
// Generated Defaults
// =============================================================================

/// `chrono` pattern producing `yyyyMMddHHmmss`
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
/// Length of a wire timestamp. The processor rejects timestamps more than 24 hours
/// away from its own clock; that check is not repeated here.
pub const TIMESTAMP_LENGTH: usize = 14;

// =============================================================================
// Log Field Names
// =============================================================================

/// Constant variable for name
pub const NAME: &str = "APM";

// =============================================================================
// Environment and Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Development,
    Release,
}

impl Env {
    pub const fn current_env() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Release
        }
    }

    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Release => "production.toml",
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Release => write!(f, "release"),
        }
    }
}
