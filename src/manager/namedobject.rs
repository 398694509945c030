use serde::{
    Serialize,
    Deserialize
};

/// The `name` key every registered JSON object carries.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
