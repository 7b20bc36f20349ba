/// A location in raster space. `y` grows downwards, row 0 is the top row.
///
/// Coordinates are signed because gesture geometry (the zoom rectangle) can
/// reach past the canvas edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
