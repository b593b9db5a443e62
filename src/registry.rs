use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::RwLock;

use crate::codegen::generate_room_code;
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::models::{Room, RoomCode, Team};

/// Shared handle for concurrent request handlers. One coarse lock guards the
/// whole registry; every operation runs as a critical section under it.
pub type SharedRegistry = Arc<RwLock<RoomRegistry>>;

/// The authoritative set of live rooms, keyed by room code.
///
/// The registry exclusively owns its rooms. Rooms live until explicitly
/// deleted; there is no expiry.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomCode, Room>,
    config: RegistryConfig,
}

impl RoomRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            rooms: HashMap::new(),
            config,
        }
    }

    /// Create a room under a freshly allocated code and return it.
    pub fn create_room(&mut self, host_nickname: impl Into<String>) -> Result<&Room> {
        self.create_room_with(host_nickname, generate_room_code)
    }

    /// Create a room using a caller-supplied code generator. Lets tests force
    /// collisions deterministically; `create_room` is this with the default
    /// generator.
    pub fn create_room_with<G>(
        &mut self,
        host_nickname: impl Into<String>,
        mut generate: G,
    ) -> Result<&Room>
    where
        G: FnMut() -> String,
    {
        let host_nickname = host_nickname.into();
        let code = self.allocate_code(&mut generate)?;
        info!("Created room {} hosted by '{}'", code, host_nickname);

        let room = Room::new(code.clone(), host_nickname);
        Ok(self.rooms.entry(code).or_insert(room))
    }

    /// Retry the generator until it yields a code not held by a live room.
    fn allocate_code<G>(&self, generate: &mut G) -> Result<RoomCode>
    where
        G: FnMut() -> String,
    {
        for _ in 0..self.config.max_code_attempts {
            let candidate = generate();
            if !self.rooms.contains_key(&candidate) {
                return Ok(candidate);
            }
        }

        warn!(
            "No unused code after {} attempts ({} rooms live)",
            self.config.max_code_attempts,
            self.rooms.len()
        );
        Err(RegistryError::CapacityExhausted)
    }

    pub fn get_room(&self, code: &str) -> Result<&Room> {
        self.rooms
            .get(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.to_string()))
    }

    /// Add a team to a room. The new team starts with no selected bag.
    pub fn join_room(&mut self, code: &str, team_name: &str) -> Result<&Room> {
        let room = self
            .rooms
            .get_mut(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.to_string()))?;

        if room.teams.contains_key(team_name) {
            return Err(RegistryError::DuplicateTeam {
                room: code.to_string(),
                team: team_name.to_string(),
            });
        }

        room.teams
            .insert(team_name.to_string(), Team::new(team_name));
        info!("Room {}: team '{}' joined", code, team_name);
        Ok(room)
    }

    /// Record a team's bag selection.
    pub fn select_bag(&mut self, code: &str, team_name: &str, bag_id: u32) -> Result<()> {
        let room = self
            .rooms
            .get_mut(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.to_string()))?;
        let team = room
            .teams
            .get_mut(team_name)
            .ok_or_else(|| RegistryError::TeamNotFound {
                room: code.to_string(),
                team: team_name.to_string(),
            })?;

        team.selected_bag = Some(bag_id);
        info!("Room {}: team '{}' selected bag {}", code, team_name, bag_id);
        Ok(())
    }

    /// Replace a room's game state wholesale. Contents are opaque to the
    /// registry.
    pub fn set_game_info(
        &mut self,
        code: &str,
        info: serde_json::Map<String, serde_json::Value>,
    ) -> Result<&Room> {
        let room = self
            .rooms
            .get_mut(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.to_string()))?;

        room.game_info = Some(info);
        info!("Room {}: game info updated", code);
        Ok(room)
    }

    /// Names of the teams currently in a room, in no particular order.
    pub fn team_names(&self, code: &str) -> Result<Vec<String>> {
        let room = self.get_room(code)?;
        Ok(room.teams.keys().cloned().collect())
    }

    /// Remove a room and return it.
    pub fn delete_room(&mut self, code: &str) -> Result<Room> {
        let room = self
            .rooms
            .remove(code)
            .ok_or_else(|| RegistryError::RoomNotFound(code.to_string()))?;
        info!("Deleted room {}", code);
        Ok(room)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rooms.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
