//! market-api: CRUD REST backend for users, orders and offers over a seeded SQLite store.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod telemetry;

pub use config::{SeedData, Settings, DEFAULT_BODY_LIMIT};
pub use error::{AppError, ConfigError};
pub use model::{Entity, Offer, OfferChanges, Order, OrderChanges, User, UserChanges};
pub use routes::{app, entity_routes, status_routes, RowCounts};
pub use service::CrudService;
pub use state::AppState;
pub use telemetry::init_tracing;
