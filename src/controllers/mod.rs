pub mod errors;
pub mod interactive;
pub mod session;
