pub mod auth_service;
pub mod helpers;
pub mod tracing;

pub use auth_service::AuthService;
pub use helpers::{configure_postgresql, configure_redis, get_postgres_pool, get_redis_client};
pub use crate::tracing::init_tracing;
