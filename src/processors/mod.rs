// imgconvert/src/processors/mod.rs
mod batch;
mod encoder;
mod loader;
mod resizer;
mod walker;

pub use batch::BatchProcessor;
pub use encoder::Encoder;
pub use loader::Loader;
pub use resizer::{fit_dimensions, Resizer};
pub use walker::enumerate_images;
