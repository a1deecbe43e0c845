use thiserror::Error;

/// Errors raised while resolving, creating or calling into a profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not registered: {0}")]
    NotRegistered(String),

    #[error("No profiles registered")]
    NoProfilesRegistered,

    #[error("Profile selection is ambiguous, candidates: {}", .0.join(", "))]
    AmbiguousProfile(Vec<&'static str>),

    #[error("Profile already registered: {0}")]
    AlreadyRegistered(&'static str),

    #[error("Failed to construct profile {profile}: {reason}")]
    Construction {
        profile: &'static str,
        reason: String,
    },

    #[error("No active profile instance")]
    NoActiveProfile,

    #[error("Profile instance is borrowed by an in-flight call")]
    InstanceBusy,

    #[error("Profile {profile} does not implement {capability}")]
    CapabilityMismatch {
        capability: &'static str,
        profile: &'static str,
    },
}

/// Errors raised while loading the host configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
