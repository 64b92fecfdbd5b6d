use serde::{Deserialize, Serialize};

/// One normalized life-expectancy observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub unit: String,
    pub sex: String,
    pub age: String,
    pub region: String,
    pub year: i64,
    pub value: f64,
}
