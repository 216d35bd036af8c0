use tracing::{debug, info, instrument};

use crate::actor_framework::{EntityId, ResourceClient};
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::domain::{Cart, CartCreate};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl_basic_client!(CartClient, Cart, CartError, cart);

impl CartClient {
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<Cart, CartError> {
        debug!("Sending request");
        let cart = self.inner.create(CartCreate).await?;
        info!(cart_id = cart.id, "Cart created");
        Ok(cart)
    }

    /// Adds `quantity` units of `product` to the cart and returns the updated cart.
    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        cart_id: EntityId,
        product: String,
        quantity: u32,
    ) -> Result<Cart, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(cart_id, CartAction::AddItem { product, quantity })
            .await?
        {
            CartActionResult::AddItem(cart) => Ok(cart),
        }
    }
}
