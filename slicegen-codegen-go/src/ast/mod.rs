//! Go AST builders.
//!
//! Each node implements [`Renderable`](slicegen_codegen::Renderable) and is
//! placed into a [`GoFile`](crate::GoFile).

mod func;
mod imports;
mod structs;

pub use func::{Func, Param};
pub use imports::Import;
pub use structs::{Field, Struct};
