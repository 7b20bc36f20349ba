//! Interfaces between the interactive controller and whatever displays its
//! frames.

pub mod presenter;
