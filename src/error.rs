use thiserror::Error;

/// Failures surfaced by registry operations. The transport layer on top is
/// responsible for translating these into user-visible responses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("room not found: {0}")]
    RoomNotFound(String),
    #[error("team '{team}' not found in room {room}")]
    TeamNotFound { room: String, team: String },
    #[error("team '{team}' already exists in room {room}")]
    DuplicateTeam { room: String, team: String },
    #[error("could not allocate an unused room code")]
    CapacityExhausted,
}

pub type Result<T> = std::result::Result<T, RegistryError>;
