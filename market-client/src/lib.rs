//! Typed gRPC clients for the user and product services.
//!
//! Channels are created lazily via [`tonic::transport::Endpoint::connect_lazy`]
//! and reconnect internally, so the gateway can start before its backends.
//! Every call carries a per-request deadline.

mod ports;
mod products;
mod users;

pub use ports::{ProductApi, UserApi};
pub use products::ProductClient;
pub use users::UserClient;
