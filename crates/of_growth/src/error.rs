use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("Roster is required for stat extraction")]
    MissingRoster,

    #[error("Invalid roster: {reason}")]
    InvalidRoster { reason: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GrowthError {
    /// Whether the pipeline can drop hero growth and still return the match stats.
    pub fn is_recoverable(&self) -> bool {
        match self {
            GrowthError::MissingRoster => false,
            GrowthError::InvalidRoster { .. } => false,
            GrowthError::PlayerNotFound { .. } => true,
            GrowthError::InvalidConfig(_) => true,
            GrowthError::Serialization(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, GrowthError>;
