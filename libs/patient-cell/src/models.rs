use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    #[serde(default)]
    pub id: String,
    pub patient_name: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub last_visit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    #[serde(default)]
    pub id: String,
    pub patient_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "amount_from_number_or_string")]
    pub amount: f64,
    #[serde(default)]
    pub status: String,
}

impl BillingRecord {
    pub fn is_paid(&self) -> bool {
        self.status == "Paid"
    }
}

/// Mock API rows carry amounts either as numbers or as numeric strings.
fn amount_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("amount out of range")),
        Value::String(s) => s
            .trim()
            .trim_start_matches('$')
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {}", s))),
        Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!("invalid amount: {}", other))),
    }
}
