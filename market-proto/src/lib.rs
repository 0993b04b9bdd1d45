//! gRPC stubs for the market backend services, generated from the protocol
//! buffer definitions under `proto/`.
//!
//! | Module | Service | Description |
//! |--------|---------|-------------|
//! | [`user`] | `UserService` | User CRUD |
//! | [`product`] | `ProductService` | Product CRUD |

pub mod user {
    pub mod v1 {
        tonic::include_proto!("user.v1");
    }
}

pub mod product {
    pub mod v1 {
        tonic::include_proto!("product.v1");
    }
}
