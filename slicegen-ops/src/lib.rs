//! The slicegen sequence algebra.
//!
//! Ten pure operations over slices (concat, drop, drop_right, filter,
//! first, last, map, reduce, reverse, uniq), written once as generic
//! functions in [`seq`] and as methods on the chainable [`Chain`]
//! wrapper. Nothing here mutates its input; every operation returns a
//! fresh `Vec` (or a fresh `Chain`).
//!
//! [`Operation`] is the catalog of the same ten operations, which the Go
//! generator walks to emit its monomorphized copies.
//!
//! ```
//! use slicegen_ops::Chain;
//!
//! let words = Chain::new(vec!["first", "second", "third", "second"]);
//! let out = words.uniq().map(|w, _| if w.ends_with('d') { "D" } else { *w });
//! assert_eq!(out.value(), &["first", "D", "D"]);
//! ```

mod catalog;
mod chain;
pub mod seq;

pub use catalog::Operation;
pub use chain::Chain;
