use serde::{Deserialize, Serialize};

// Reference data served by the financial companies service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}
