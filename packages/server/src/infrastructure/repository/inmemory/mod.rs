//! In-memory repositories. State is lost on restart.

mod room;

pub use room::InMemoryRoomRepository;
