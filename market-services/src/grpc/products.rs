//! gRPC server adapter for the product service.

use tonic::{Request, Response, Status};

use market_proto::product::v1 as pb;
use market_types::{NewProduct, Product, ProductRepository};

use crate::products::ProductService;
use crate::status::into_status;

/// Implements the generated `ProductService` server trait on top of the
/// orchestrator.
pub struct ProductGrpc<R: ProductRepository> {
    service: ProductService<R>,
}

impl<R: ProductRepository> ProductGrpc<R> {
    pub fn new(service: ProductService<R>) -> Self {
        Self { service }
    }
}

fn encode_product(product: Product) -> pb::Product {
    pb::Product {
        id: product.id,
        store_id: product.store_id,
        category_id: product.category_id,
        name: product.name,
        description: product.description,
        price: product.price,
        image_url: product.image_url,
        stock: product.stock,
        created_at: product.created_at.to_rfc3339(),
    }
}

#[tonic::async_trait]
impl<R: ProductRepository> pb::product_service_server::ProductService for ProductGrpc<R> {
    async fn create_product(
        &self,
        request: Request<pb::CreateProductRequest>,
    ) -> Result<Response<pb::Product>, Status> {
        let msg = request.into_inner();
        let product = self
            .service
            .create(NewProduct {
                store_id: msg.store_id,
                category_id: msg.category_id,
                name: msg.name,
                description: msg.description,
                price: msg.price,
                image_url: msg.image_url,
                stock: msg.stock,
            })
            .await
            .map_err(into_status)?;

        Ok(Response::new(encode_product(product)))
    }

    async fn get_product(
        &self,
        request: Request<pb::GetProductRequest>,
    ) -> Result<Response<pb::Product>, Status> {
        let product = self
            .service
            .get(request.into_inner().id)
            .await
            .map_err(into_status)?;

        Ok(Response::new(encode_product(product)))
    }

    async fn list_products(
        &self,
        _request: Request<pb::ListProductsRequest>,
    ) -> Result<Response<pb::ListProductsResponse>, Status> {
        let products = self.service.list().await.map_err(into_status)?;

        Ok(Response::new(pb::ListProductsResponse {
            products: products.into_iter().map(encode_product).collect(),
        }))
    }

    async fn update_product(
        &self,
        request: Request<pb::UpdateProductRequest>,
    ) -> Result<Response<pb::UpdateProductResponse>, Status> {
        let msg = request.into_inner();
        self.service
            .update(
                msg.id,
                NewProduct {
                    store_id: msg.store_id,
                    category_id: msg.category_id,
                    name: msg.name,
                    description: msg.description,
                    price: msg.price,
                    image_url: msg.image_url,
                    stock: msg.stock,
                },
            )
            .await
            .map_err(into_status)?;

        Ok(Response::new(pb::UpdateProductResponse {}))
    }

    async fn delete_product(
        &self,
        request: Request<pb::DeleteProductRequest>,
    ) -> Result<Response<pb::DeleteProductResponse>, Status> {
        self.service
            .delete(request.into_inner().id)
            .await
            .map_err(into_status)?;

        Ok(Response::new(pb::DeleteProductResponse {}))
    }
}
