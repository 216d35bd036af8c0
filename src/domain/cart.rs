use serde::{Deserialize, Deserializer, Serialize};

use crate::actor_framework::EntityId;

/// A shopping cart. At most one line item per product reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: EntityId,
    #[serde(default)]
    pub products: Vec<LineItem>,
}

/// A product reference and how many units of it the cart holds.
///
/// The reference is not checked against the product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(deserialize_with = "product_ref")]
    pub product: String,
    pub quantity: u32,
}

/// Payload for creating a new cart. Carts always start empty.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

impl Cart {
    /// Adds `quantity` units of `product`, merging with an existing line item.
    ///
    /// Leaves the cart untouched if the merged quantity would not fit.
    pub fn add_item(&mut self, product: &str, quantity: u32) -> Result<(), String> {
        match self.products.iter_mut().find(|item| item.product == product) {
            Some(item) => {
                item.quantity = item.quantity.checked_add(quantity).ok_or_else(|| {
                    format!(
                        "quantity of product {} would exceed {}",
                        product,
                        u32::MAX
                    )
                })?;
            }
            None => self.products.push(LineItem {
                product: product.to_string(),
                quantity,
            }),
        }
        Ok(())
    }
}

/// Older data files store the reference as a number; keep it as text either way.
fn product_ref<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Ref {
        Text(String),
        Number(u64),
    }

    Ok(match Ref::deserialize(deserializer)? {
        Ref::Text(text) => text,
        Ref::Number(number) => number.to_string(),
    })
}
