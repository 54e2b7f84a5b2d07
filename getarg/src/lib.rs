//! Flat `-name[=value]` argument resolution.
//!
//! An argument vector is mapped once into an [`ArgMap`] and then queried
//! through typed accessors with default-value fallback:
//! - `-X` / `--X` sets `X` (bare flags carry the empty string)
//! - `-X=v` / `--X=v` sets `X` to `v`
//! - `-noX[=v]` / `--noX[=v]` negates `X` for boolean lookups
//!
//! Lookups never fail. An absent option yields the caller's default, while
//! an option that is present but not a valid integer reads as `0`.
//!
//! Any option whose name starts with `no` is read as a negation, so an option
//! literally called `-nostalgia` negates `stalgia`. Choose option names
//! accordingly.

mod args;
mod error;
mod shared;
mod split;
mod tokenize;

pub use args::ArgMap;
pub use error::{Error, Result};
pub use shared::{global, SharedArgs};
pub use split::split_args;
