//! Background rendering for interactive exploration.
//!
//! Render requests are snapshots taken from a session. The controller keeps
//! only the newest one, renders it on a worker thread and hands finished
//! frames to a presenter port. A render overtaken by a newer request is
//! cancelled and never presented.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
