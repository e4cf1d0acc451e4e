//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Each entity has its own factory module
//! with a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let user = factory::user::create_user(&db).await?;
//!
//! // Using builder pattern for customization
//! let user = factory::user::UserFactory::new(&db)
//!     .auth0_id("auth0|custom")
//!     .facilities(vec!["f1".to_string(), "f2".to_string()])
//!     .default_facility("f1")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use user::create_user;
