pub mod color;
pub mod recording;
pub mod surface;
