use tracing::{debug, info, instrument};

use crate::actor_framework::{EntityId, ResourceClient};
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    /// All products in insertion order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self, payload), fields(code = %payload.code))]
    pub async fn create_product(&self, payload: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        let product = self.inner.create(payload).await?;
        info!(product_id = product.id, "Product created");
        Ok(product)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_product(
        &self,
        id: EntityId,
        patch: ProductPatch,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: EntityId) -> Result<(), ProductError> {
        debug!("Sending request");
        self.inner.delete(id).await?;
        info!(product_id = id, "Product deleted");
        Ok(())
    }
}
