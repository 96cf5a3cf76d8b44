//! Adapters for the portcullis ports: password hashing, user and session
//! stores, configuration and the framework-agnostic page handlers.

pub mod config;
pub mod handlers;
pub mod password;
pub mod persistence;

pub use password::Argon2PasswordHasher;
pub use persistence::{
    HashMapSessionStore, HashMapUserStore, PostgresUserStore, RedisSessionStore,
};
