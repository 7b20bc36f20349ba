use crate::core::data::colour::Colour;

/// Turns one per-pixel value into the colour written to the raster.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Colour;

    fn display_name(&self) -> &str;
}
