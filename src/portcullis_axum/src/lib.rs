//! Axum integration for the portcullis authentication pages.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  portcullis_core: HTTP trait definitions │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  portcullis_axum: Axum implementations   │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponseBuilder                   │
//! │  - Axum route functions                  │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use portcullis_axum::{AuthState, routes};
//!
//! let state = AuthState::new(user_store, hasher, session_store, "portcullis.sid");
//! let app = routes::router(state);
//! ```

pub mod adapters;
pub mod routes;
pub mod state;

pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use state::AuthState;
