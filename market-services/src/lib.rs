//! # Market Services
//!
//! Application service layer and gRPC adapter for the backend services.
//!
//! ## Architecture
//!
//! - `users` / `products` - CRUD orchestrators (existence-check-before-mutate,
//!   per-call storage deadline)
//! - `status` - translation of domain errors into gRPC statuses
//! - `grpc` - tonic server adapters around the orchestrators
//!
//! Each orchestrator is generic over its repository port, allowing
//! different storage implementations to be injected.

pub mod grpc;
pub mod products;
pub mod status;
pub mod users;


pub use products::ProductService;
pub use users::UserService;
