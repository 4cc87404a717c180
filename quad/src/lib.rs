//! Host side of the screen-quad shader: the embedded SPIR-V module, the draw
//! it expects, a CPU reference draw that runs the same entry points, and
//! per-frame timing records.

mod error;

pub mod raster;
pub mod settings;
pub mod shader;
pub mod timing;

pub use error::{Error, Result};
