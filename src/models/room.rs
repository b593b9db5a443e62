use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type RoomCode = String;

/// A named team inside a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub selected_bag: Option<u32>, // None until the team picks a bag
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            selected_bag: None,
        }
    }
}

/// A live game room, addressed by its code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub code: RoomCode,
    pub host_nickname: String,
    /// Keyed by team name; each entry's `name` matches its key.
    pub teams: HashMap<String, Team>,
    /// Opaque game state, set once a game starts. Contents are not validated.
    pub game_info: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Room {
    pub fn new(code: RoomCode, host_nickname: String) -> Self {
        Self {
            code,
            host_nickname,
            teams: HashMap::new(),
            game_info: None,
        }
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}
