//! Data models for the ShoreSquad application.
//!
//! These models match the frontend interfaces exactly for seamless interoperability.

mod beach;
mod crew;
mod event;
mod notification;
mod snapshot;
mod user;
mod weather;

pub use beach::*;
pub use crew::*;
pub use event::*;
pub use notification::*;
pub use snapshot::*;
pub use user::*;
pub use weather::*;
