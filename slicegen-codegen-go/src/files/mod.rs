//! Go file generators.

mod slice_go;

pub use slice_go::SliceGo;
