use serde::{Deserialize, Serialize};

/// Request to create a new room.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub host_nickname: String, // Display name of the room's creator
}

/// Request to join an existing room.
#[derive(Debug, Serialize, Deserialize)]
pub struct Participant {
    pub team_name: String, // Team the joining participant belongs to
}
