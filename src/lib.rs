//! GameRooms - In-memory room registry for code-addressed multiplayer games
//!
//! Holds the authoritative set of live game rooms. A host creates a room and
//! receives a six-character code; teams join by code and pick a resource bag
//! before the game starts. An external transport layer (HTTP/RPC) sits on top
//! of this crate and translates registry errors into user-facing responses.
//!
//! Key features:
//! - Room codes: random six-character codes, collision-checked on creation
//! - Teams: named teams per room, each with an optional selected bag
//! - Thread-safe: share the registry as `SharedRegistry` for concurrent handlers

pub mod codegen;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use models::{CreateRoomRequest, Participant, Room, RoomCode, Team};
pub use registry::{RoomRegistry, SharedRegistry};
