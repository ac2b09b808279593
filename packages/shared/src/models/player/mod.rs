pub mod requests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Player {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            created_at: Utc::now(),
        }
    }
}
