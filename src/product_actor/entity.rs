use crate::actor_framework::{Entity, EntityId};
use crate::domain::{Product, ProductCreate, ProductPatch};

impl Entity for Product {
    type CreatePayload = ProductCreate;
    type Patch = ProductPatch;
    type Action = (); // No custom actions for products
    type ActionResult = ();

    fn id(&self) -> EntityId {
        self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the actor
    /// * `payload` - Product fields with `status` and `thumbnails` already defaulted
    fn from_create(id: EntityId, payload: ProductCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            title: payload.title,
            description: payload.description,
            code: payload.code,
            price: payload.price,
            status: payload.status,
            stock: payload.stock,
            category: payload.category,
            thumbnails: payload.thumbnails,
        })
    }

    /// Rejects a product whose `code` is already taken.
    ///
    /// The message is the conflicting code itself so clients can rebuild a
    /// typed error from it.
    fn validate_create(existing: &[Self], payload: &ProductCreate) -> Result<(), String> {
        if existing.iter().any(|p| p.code == payload.code) {
            return Err(payload.code.clone());
        }
        Ok(())
    }

    /// Merges every field present in the patch. The id is never touched.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), String> {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(thumbnails) = patch.thumbnails {
            self.thumbnails = thumbnails;
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
