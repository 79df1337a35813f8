use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ModelError;
use super::repr::{id_repr, quote};

/// A single book title with its stock count and exact price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Book {
    /// Unset until a storage layer assigns one.
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub num: u64,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

impl Book {
    pub fn new(name: impl Into<String>, num: u64, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            num,
            price,
        }
    }

    pub fn with_id(name: impl Into<String>, num: u64, price: Decimal, id: Option<i64>) -> Self {
        Self {
            id,
            ..Self::new(name, num, price)
        }
    }

    /// Rebuilds a book from a mapping shaped like [`Book::to_mapping`]'s output.
    /// `id` may be missing or null; `price` must be a decimal string.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self, ModelError> {
        Ok(serde_json::from_value(Value::Object(mapping.clone()))?)
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn num(&self) -> u64 {
        self.num
    }

    pub fn set_num(&mut self, num: u64) {
        self.num = num;
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
    }

    /// Ordered `id, name, num, price` mapping. The price keeps its scale
    /// (`39.90` stays `"39.90"`).
    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), self.id.into());
        map.insert("name".to_string(), self.name.clone().into());
        map.insert("num".to_string(), self.num.into());
        map.insert("price".to_string(), self.price.to_string().into());
        map
    }

    pub fn debug_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Book(id={}, name={}, num={}, price=Decimal('{}'))",
            id_repr(self.id),
            quote(&self.name),
            self.num,
            self.price
        )
    }
}
