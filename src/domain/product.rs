use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use crate::actor_framework::EntityId;

/// A catalog entry. Field order here is the field order on disk and on the wire.
///
/// Stored records are read leniently: older files may lack fields or carry
/// `price`/`stock` as numeric strings. Missing fields take their zero value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code: String,
    #[serde(default = "zero", deserialize_with = "number_or_text")]
    pub price: Number,
    #[serde(default = "default_status")]
    pub status: bool,
    #[serde(default, deserialize_with = "count_or_text")]
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

/// Payload for creating a new product.
///
/// `price` is kept as the number the client sent, so `10` stays `10`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub code: String,
    pub price: Number,
    #[serde(default = "default_status")]
    pub status: bool,
    pub stock: u32,
    pub category: String,
    #[serde(default)]
    pub thumbnails: Vec<String>,
}

/// Partial update for a product.
///
/// There is deliberately no `id` field: an `id` in the request body is
/// dropped during deserialization and can never reach the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub price: Option<Number>,
    pub status: Option<bool>,
    pub stock: Option<u32>,
    pub category: Option<String>,
    pub thumbnails: Option<Vec<String>>,
}

fn default_status() -> bool {
    true
}

fn zero() -> Number {
    Number::from(0u8)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText<N> {
    Number(N),
    Text(String),
}

fn number_or_text<'de, D>(deserializer: D) -> Result<Number, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::<Number>::deserialize(deserializer)? {
        NumberOrText::Number(number) => Ok(number),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("price {text:?} is not a number"))),
    }
}

fn count_or_text<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::<u32>::deserialize(deserializer)? {
        NumberOrText::Number(count) => Ok(count),
        NumberOrText::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("stock {text:?} is not a count"))),
    }
}

#[cfg(test)]
impl ProductCreate {
    pub fn new(
        title: impl Into<String>,
        code: impl Into<String>,
        price: u64,
        stock: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            code: code.into(),
            price: Number::from(price),
            status: true,
            stock,
            category: category.into(),
            thumbnails: Vec::new(),
        }
    }
}
