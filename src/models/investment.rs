use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// One user's portfolio snapshot, kept as the JSON object the investments store holds.
// Lookups serialize it back untouched; the report reads it through the lenient accessors below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Investment {
    fields: Map<String, Value>,
}

/// Report view of one entry of an investment's `holdings` array.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    /// Referenced company id; `None` when the entry has no string `id`.
    pub company_id: Option<String>,
    pub investment_percentage: f64,
}

impl Investment {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Record id, only when stored as a string. Ids are never coerced.
    pub fn id(&self) -> Option<&str> {
        self.fields.get("id").and_then(Value::as_str)
    }

    pub fn user_id(&self) -> String {
        self.text("userId")
    }

    pub fn first_name(&self) -> String {
        self.text("firstName")
    }

    pub fn last_name(&self) -> String {
        self.text("lastName")
    }

    pub fn date(&self) -> String {
        self.text("date")
    }

    /// `investmentTotal` as a number; absent or non-numeric values count as `0`.
    pub fn investment_total(&self) -> f64 {
        self.fields.get("investmentTotal").map(number_or_zero).unwrap_or(0.0)
    }

    /// Holdings in stored order. A missing or non-array `holdings` is empty.
    pub fn holdings(&self) -> Vec<Holding> {
        let Some(entries) = self.fields.get("holdings").and_then(Value::as_array) else {
            return Vec::new();
        };
        entries
            .iter()
            .map(|entry| Holding {
                company_id: entry.get("id").and_then(Value::as_str).map(str::to_string),
                investment_percentage: entry
                    .get("investmentPercentage")
                    .map(number_or_zero)
                    .unwrap_or(0.0),
            })
            .collect()
    }

    /// Monetary value of one holding: `investmentTotal * investmentPercentage`, unrounded.
    pub fn holding_value(&self, holding: &Holding) -> f64 {
        self.investment_total() * holding.investment_percentage
    }

    // Display text for a cell: strings as-is, numbers and booleans printed, null/absent empty.
    fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

impl From<Value> for Investment {
    /// Non-object entries become empty records: they match no id and render as empty cells.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}

fn number_or_zero(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
