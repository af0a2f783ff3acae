//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories handle foreign key relationships through the
//! helpers module, keeping tests concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let customer = factory::customer::create_customer(&db).await?;
//!     let reservation = factory::reservation::create_reservation(&db, customer.id).await?;
//!
//!     // Create a customer with a number of reservations
//!     let (customer, reservations) =
//!         factory::helpers::create_customer_with_reservations(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let customer = factory::customer::CustomerFactory::new(&db)
//!     .first_name("Ada")
//!     .last_name("Lovelace")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `customer` - Create customer entities
//! - `reservation` - Create reservation entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod customer;
pub mod helpers;
pub mod reservation;

pub use customer::create_customer;
pub use helpers::create_customer_with_reservations;
pub use reservation::create_reservation;
