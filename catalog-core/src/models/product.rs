use crate::ports::Entity;

/// A product offered by the catalog.
///
/// The identifier is assigned by the store when the product is first
/// inserted. Request bodies may omit it; any value supplied there is ignored
/// on creation and replaced by the path identifier on update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Product {
    /// Store-assigned primary key
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: i64,
    /// Display name of the product
    pub name: String,
    /// Unit price of the product
    pub price: f64,
}

impl Product {
    /// Create a product that has not been stored yet.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            price,
        }
    }

    /// The same product values placed under a different identifier.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

impl Entity for Product {
    type Id = i64;

    const NAME: &'static str = "product";

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_defaults_to_zero() {
        let product: Product =
            serde_json::from_str(r#"{ "name": "Apple", "price": 1.25 }"#).unwrap();
        assert_eq!(product, Product::new("Apple", 1.25));
    }

    #[test]
    fn with_id_keeps_values() {
        let product = Product::new("Pear", 2.0).with_id(7);
        assert_eq!(product.id(), 7);
        assert_eq!(product.name, "Pear");
        assert_eq!(product.price, 2.0);
    }

    #[test]
    fn serializes_flat() {
        let value = serde_json::to_value(Product::new("Plum", 0.5).with_id(3)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 3, "name": "Plum", "price": 0.5 })
        );
    }
}
