pub mod seed;
pub mod settings;

pub use seed::*;
pub use settings::*;
