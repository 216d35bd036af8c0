use super::actions::{CartAction, CartActionResult};
use crate::actor_framework::{Entity, EntityId};
use crate::domain::{Cart, CartCreate};

impl Entity for Cart {
    type CreatePayload = CartCreate;
    type Patch = (); // Carts are only changed through actions
    type Action = CartAction;
    type ActionResult = CartActionResult;

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_create(id: EntityId, _payload: CartCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            products: Vec::new(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    /// Handles cart-specific actions.
    ///
    /// # Actions
    /// - `AddItem { product, quantity }`: merges into an existing line item or appends one
    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        match action {
            CartAction::AddItem { product, quantity } => {
                self.add_item(&product, quantity)?;
                Ok(CartActionResult::AddItem(self.clone()))
            }
        }
    }
}
