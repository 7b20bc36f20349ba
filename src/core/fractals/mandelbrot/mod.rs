pub mod algorithm;
pub mod colour_map;
pub mod colour_maps;
pub mod errors;
pub mod iteration_result;
pub mod palette;
pub mod params;
pub mod viewport;
