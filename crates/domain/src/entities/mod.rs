//! Entities of the explored map

mod exit;
mod room;

pub use exit::Exit;
pub use room::Room;
