use serde_json::{Map, Value};

/// Field-level validation failures, reported one at a time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid product name")]
    InvalidName,
    #[error("Invalid price")]
    InvalidPrice,
    #[error("Invalid category")]
    InvalidCategory,
    #[error("Invalid stock status")]
    InvalidStockStatus,
}

/// Product fields that passed every validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Untyped request payload as received over the wire.
///
/// A missing key and an explicit `null` are both kept as `None`; everything
/// else is preserved as-is so the rules can tell "absent" from "wrong type".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPayload {
    pub name: Option<Value>,
    pub price: Option<Value>,
    pub category: Option<Value>,
    pub in_stock: Option<Value>,
}

impl From<Value> for ProductPayload {
    fn from(value: Value) -> Self {
        let mut object = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let mut take = |key: &str| object.remove(key).filter(|v| !v.is_null());

        Self {
            name: take("name"),
            price: take("price"),
            category: take("category"),
            in_stock: take("inStock"),
        }
    }
}

impl ProductPayload {
    /// Runs the rules in order: name, price, category, stock status.
    /// The first failing rule short-circuits.
    pub fn validate(&self) -> Result<ProductFields, ValidationError> {
        let name = validate_name(self.name.as_ref())?;
        let price = validate_price(self.price.as_ref())?;
        let category = validate_category(self.category.as_ref())?;
        let in_stock = validate_stock_status(self.in_stock.as_ref())?;

        Ok(ProductFields {
            name,
            price,
            category,
            in_stock,
        })
    }
}

pub fn validate_name(value: Option<&Value>) -> Result<String, ValidationError> {
    non_empty_text(value).ok_or(ValidationError::InvalidName)
}

pub fn validate_price(value: Option<&Value>) -> Result<f64, ValidationError> {
    value
        .and_then(Value::as_f64)
        .filter(|price| *price > 0.0)
        .ok_or(ValidationError::InvalidPrice)
}

pub fn validate_category(value: Option<&Value>) -> Result<String, ValidationError> {
    non_empty_text(value).ok_or(ValidationError::InvalidCategory)
}

pub fn validate_stock_status(value: Option<&Value>) -> Result<bool, ValidationError> {
    value
        .and_then(Value::as_bool)
        .ok_or(ValidationError::InvalidStockStatus)
}

fn non_empty_text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}
