use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub id: u32,
    pub label: String,
    pub booked: bool,
}
