pub mod request;
pub mod room;

pub use request::{CreateRoomRequest, Participant};
pub use room::{Room, RoomCode, Team};
