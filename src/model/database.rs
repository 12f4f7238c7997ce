use serde::{Deserialize, Serialize};

/// Top-level namespace grouping collections. `create_time` is a unix
/// timestamp in seconds, or -1 when the server did not report one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    pub create_time: i64,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            create_time: -1,
        }
    }
}
