/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds units of a product to the cart.
    ///
    /// An existing line item for the same product has its quantity
    /// increased instead of a second line item being appended.
    AddItem { product: String, quantity: u32 },
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    /// The cart as it stands after the item was added
    AddItem(crate::domain::Cart),
}
