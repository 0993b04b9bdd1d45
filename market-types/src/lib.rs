//! # Market Types
//!
//! Domain types and port traits shared by the market services.
//! This crate has ZERO external IO dependencies - only data structures,
//! the domain error model, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain` - Resource records and their create/update payloads
//! - `ports` - Repository traits that storage adapters must implement
//! - `error` - The normalized domain error model

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{NewProduct, NewUser, Product, User};
pub use error::{DomainError, ErrorKind};
pub use ports::{ProductRepository, UserRepository};
