//! Factory methods for creating test data.
//!
//! Each entity has a `*Factory` builder for customization and a `create_*` shortcut that
//! inserts a row with sensible defaults. Factories for rows that reference a container take
//! the container id explicitly so tests control the relationship.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let manager = factory::user::UserFactory::new(&db)
//!     .role("gerente")
//!     .build()
//!     .await?;
//!
//! let container = factory::create_container(&db).await?;
//! let response = factory::create_form_response(&db, Some(container.id)).await?;
//! ```

pub mod container;
pub mod form_response;
pub mod helpers;
pub mod inspection;
pub mod user;

pub use container::create_container;
pub use form_response::create_form_response;
pub use inspection::create_inspection;
pub use user::create_user;
