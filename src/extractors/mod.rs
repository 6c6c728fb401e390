//! Request extractors.

mod body;
mod path;
pub use body::{parse_body, JsonBody};
pub use path::EntityId;
