use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::calculations::common::parse_amount;

/// The accumulating application record.
///
/// Keyed by field name, covering every field any step family can produce.
/// Values are stored exactly as entered; the record only ever grows (a key
/// is added or overwritten, never removed). This is the payload that gets
/// drafted to the store after every mutation and handed to the submission
/// sink at the end of the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    values: BTreeMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// A field is blank when absent or whitespace-only. Required-field
    /// validation treats blank as missing.
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).is_none_or(|v| v.trim().is_empty())
    }

    /// Reads a field as a dollar/numeric amount, coercing anything that is
    /// not a finite number to `0.0`.
    pub fn amount(&self, name: &str) -> f64 {
        parse_amount(self.get(name).unwrap_or_default())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_overwrites_existing_value() {
        let mut data = FormData::new();
        data.set("purchasePrice", "600000");
        data.set("purchasePrice", "750000");

        assert_eq!(data.get("purchasePrice"), Some("750000"));
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn is_blank_for_missing_and_whitespace() {
        let mut data = FormData::new();
        data.set("firstName", "   ");

        assert!(data.is_blank("firstName"));
        assert!(data.is_blank("lastName"));

        data.set("firstName", "John");
        assert!(!data.is_blank("firstName"));
    }

    #[test]
    fn amount_coerces_garbage_to_zero() {
        let mut data = FormData::new();
        data.set("downPayment", "abc");

        assert_eq!(data.amount("downPayment"), 0.0);
        assert_eq!(data.amount("income"), 0.0);
    }

    #[test]
    fn amount_parses_currency_formatting() {
        let mut data = FormData::new();
        data.set("purchasePrice", "$750,000");

        assert_eq!(data.amount("purchasePrice"), 750_000.0);
    }

    #[test]
    fn serializes_as_a_flat_map() {
        let mut data = FormData::new();
        data.set("loanType", "va-loans");
        data.set("firstName", "John");

        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"firstName":"John","loanType":"va-loans"}"#);
    }
}
