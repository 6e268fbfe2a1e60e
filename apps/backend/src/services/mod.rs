//! Room orchestration bridging the domain core to connected clients.

pub mod room;
pub mod rooms;

pub use room::GameRoom;
pub use rooms::RoomRegistry;
