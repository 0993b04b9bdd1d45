//! gRPC client for the product service.

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

use market_proto::product::v1 as pb;
use market_proto::product::v1::product_service_client::ProductServiceClient;
use market_types::{NewProduct, Product};

use crate::ports::ProductApi;
use crate::users::decode_timestamp;

/// Lazily connected client; one HTTP/2 channel, cloned per call.
pub struct ProductClient {
    channel: Channel,
    timeout: Duration,
}

impl ProductClient {
    pub fn connect_lazy(url: &str, timeout: Duration) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(url.to_owned())?
            .connect_timeout(timeout)
            .connect_lazy();
        Ok(Self { channel, timeout })
    }

    fn request<T>(&self, msg: T) -> Request<T> {
        let mut request = Request::new(msg);
        request.set_timeout(self.timeout);
        request
    }
}

fn decode_product(product: pb::Product) -> Result<Product, Status> {
    let created_at = decode_timestamp(&product.created_at)?;
    Ok(Product {
        id: product.id,
        store_id: product.store_id,
        category_id: product.category_id,
        name: product.name,
        description: product.description,
        price: product.price,
        image_url: product.image_url,
        stock: product.stock,
        created_at,
    })
}

#[async_trait]
impl ProductApi for ProductClient {
    async fn create(&self, product: NewProduct) -> Result<Product, Status> {
        let response = ProductServiceClient::new(self.channel.clone())
            .create_product(self.request(pb::CreateProductRequest {
                store_id: product.store_id,
                category_id: product.category_id,
                name: product.name,
                description: product.description,
                price: product.price,
                image_url: product.image_url,
                stock: product.stock,
            }))
            .await?;
        decode_product(response.into_inner())
    }

    async fn get(&self, id: i64) -> Result<Product, Status> {
        let response = ProductServiceClient::new(self.channel.clone())
            .get_product(self.request(pb::GetProductRequest { id }))
            .await?;
        decode_product(response.into_inner())
    }

    async fn list(&self) -> Result<Vec<Product>, Status> {
        let response = ProductServiceClient::new(self.channel.clone())
            .list_products(self.request(pb::ListProductsRequest {}))
            .await?;
        response
            .into_inner()
            .products
            .into_iter()
            .map(decode_product)
            .collect()
    }

    async fn update(&self, id: i64, changes: NewProduct) -> Result<(), Status> {
        ProductServiceClient::new(self.channel.clone())
            .update_product(self.request(pb::UpdateProductRequest {
                id,
                store_id: changes.store_id,
                category_id: changes.category_id,
                name: changes.name,
                description: changes.description,
                price: changes.price,
                image_url: changes.image_url,
                stock: changes.stock,
            }))
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), Status> {
        ProductServiceClient::new(self.channel.clone())
            .delete_product(self.request(pb::DeleteProductRequest { id }))
            .await?;
        Ok(())
    }
}
