// Shared wire-format helpers
//
// The vendor is inconsistent about scalar types: ids, ports and balances
// arrive as decimal strings in some responses and as JSON numbers in others,
// and booleans arrive as "1"/"0" flags.

use serde::{Deserialize, Deserializer, Serializer, de};

pub(crate) fn u64_from_number_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        String(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::String(value) => value.parse().map_err(de::Error::custom),
    }
}

pub(crate) fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        String(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::String(value) => value.parse().map_err(de::Error::custom),
    }
}

pub(crate) fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bool(bool),
        Number(u64),
        String(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Bool(value) => Ok(value),
        Raw::Number(value) => Ok(value != 0),
        Raw::String(value) => match value.as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" => Ok(false),
            other => Err(de::Error::custom(format!("invalid flag value {other:?}"))),
        },
    }
}

pub(crate) fn flag_to_wire<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "1" } else { "0" })
}

/// Timestamps in the vendor's `2016-06-19 16:32:39` form
pub(crate) mod wire_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Scalars {
        #[serde(deserialize_with = "u64_from_number_or_string")]
        id: u64,
        #[serde(deserialize_with = "f64_from_number_or_string")]
        balance: f64,
        #[serde(deserialize_with = "bool_from_flag")]
        active: bool,
    }

    #[test]
    fn test_scalars_from_strings() {
        let parsed: Scalars =
            serde_json::from_str(r#"{"id":"11","balance":"48.80","active":"1"}"#).unwrap();
        assert_eq!(parsed.id, 11);
        assert_eq!(parsed.balance, 48.80);
        assert!(parsed.active);
    }

    #[test]
    fn test_scalars_from_numbers() {
        let parsed: Scalars =
            serde_json::from_str(r#"{"id":11,"balance":29,"active":0}"#).unwrap();
        assert_eq!(parsed.id, 11);
        assert_eq!(parsed.balance, 29.0);
        assert!(!parsed.active);
    }

    #[test]
    fn test_invalid_flag_rejected() {
        let result: Result<Scalars, _> =
            serde_json::from_str(r#"{"id":1,"balance":0,"active":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_wire_datetime_round_trip() {
        #[derive(serde::Serialize, Deserialize)]
        struct Stamp {
            #[serde(with = "wire_datetime")]
            at: chrono::NaiveDateTime,
        }

        let parsed: Stamp = serde_json::from_str(r#"{"at":"2016-06-19 16:32:39"}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"at":"2016-06-19 16:32:39"}"#
        );
    }
}
