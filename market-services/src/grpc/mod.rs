//! tonic server adapters around the CRUD orchestrators.

mod products;
mod users;

pub use products::ProductGrpc;
pub use users::UserGrpc;
