pub mod blue_green_bands;
pub mod factory;
pub mod kinds;
pub mod linear_ramp;
pub mod yellow_red_bands;
