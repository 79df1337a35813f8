use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ModelError;
use super::repr::{id_repr, quote};

/// A category grouping books, tracked by name and count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookDirectory {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub num: u64,
}

impl BookDirectory {
    pub fn new(name: impl Into<String>, num: u64) -> Self {
        Self {
            id: None,
            name: name.into(),
            num,
        }
    }

    pub fn with_id(name: impl Into<String>, num: u64, id: Option<i64>) -> Self {
        Self {
            id,
            ..Self::new(name, num)
        }
    }

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

    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("id".to_string(), self.id.into());
        map.insert("name".to_string(), self.name.clone().into());
        map.insert("num".to_string(), self.num.into());
        map
    }

    pub fn debug_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BookDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BookDirectory(id={}, name={}, num={})",
            id_repr(self.id),
            quote(&self.name),
            self.num
        )
    }
}
