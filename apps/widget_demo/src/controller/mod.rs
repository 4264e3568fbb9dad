//! Controller layer: layout events and the state transitions they drive.

pub mod events;
pub mod reducer;
