//! Text previews of rasterized output.

mod ascii;

pub use ascii::AsciiPreview;
