use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u32,
    pub name: String,
    /// True once the movie is shown in at least one theater.
    pub allocated: bool,
}

impl Movie {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            allocated: false,
        }
    }
}
