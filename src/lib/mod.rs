pub mod clock;
pub mod palettes;
