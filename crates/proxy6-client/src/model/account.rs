// Account information carried on every successful response

use serde::{Deserialize, Serialize};

use super::common::{f64_from_number_or_string, u64_from_number_or_string};

/// Billing account summary reported alongside every successful call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(deserialize_with = "u64_from_number_or_string")]
    pub user_id: u64,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub balance: f64,
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_from_envelope() {
        let payload = json!({
            "user_id": "1",
            "balance": "48.80",
            "currency": "RUB",
            "list": ["ru", "ua", "us"]
        });

        let account: Account = serde_json::from_value(payload).unwrap();
        assert_eq!(
            account,
            Account {
                user_id: 1,
                balance: 48.80,
                currency: "RUB".to_string(),
            }
        );
    }

    #[test]
    fn test_account_with_numeric_balance() {
        let payload = json!({"user_id": 1, "balance": 29, "currency": "RUB"});
        let account: Account = serde_json::from_value(payload).unwrap();
        assert_eq!(account.balance, 29.0);
    }
}
