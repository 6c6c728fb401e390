//! Statement builder: identifiers come from the entity definitions, values are always bound.

mod builder;
pub use builder::*;
