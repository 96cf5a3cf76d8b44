//! # Portcullis - session-based authentication pages
//!
//! Facade crate that re-exports the public APIs of the portcullis
//! components, so an application needs a single dependency.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! portcullis = { path = "../portcullis" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Session`, `FlashPayload`, etc.
//! - **Ports**: `UserStore`, `SessionStore`, `PasswordHasher`
//! - **Use cases**: `SignupUseCase`, `LoginUseCase`, `LogoutUseCase`, `AuthorizationGate`
//! - **Adapters**: `Argon2PasswordHasher`, `PostgresUserStore`, `RedisSessionStore`, etc.
//! - **Service**: `AuthService`, the router with every page mounted

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use portcullis_core::*;
}

pub use portcullis_core::{
    Access, Denial, Email, FlashPayload, FlowOutcome, NewUser, Password, PasswordDigest,
    RedirectTarget, RejectionReason, Session, SessionId, SessionRecord, SessionUser, User,
    UserError, UserId, ViewerContext,
};

// ============================================================================
// Ports
// ============================================================================

pub use portcullis_core::{
    PasswordHasher, PasswordHasherError, SessionStore, SessionStoreError, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases and session lifecycle
pub mod use_cases {
    pub use portcullis_application::*;
}

pub use portcullis_application::{
    AuthorizationGate, LoginUseCase, LogoutUseCase, SessionManager, SignupUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic page handlers
    pub mod handlers {
        pub use portcullis_adapters::handlers::*;
    }

    /// Store implementations
    pub mod persistence {
        pub use portcullis_adapters::persistence::*;
    }

    /// Password hashing
    pub mod password {
        pub use portcullis_adapters::password::*;
    }

    /// Configuration
    pub mod config {
        pub use portcullis_adapters::config::*;
    }

    /// Axum integration
    pub mod axum {
        pub use portcullis_axum::*;
    }
}

pub use portcullis_adapters::{
    Argon2PasswordHasher, HashMapSessionStore, HashMapUserStore, PostgresUserStore,
    RedisSessionStore,
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use portcullis_auth_service::{
    AuthService, configure_postgresql, configure_redis, get_redis_client, init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the store traits
pub use async_trait::async_trait;

pub use secrecy::{ExposeSecret, Secret};

pub use http;
