// Proxy6Client - typed facade for all vendor API operations

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    config::Proxy6ClientConfig,
    constants::api_method,
    error::Result,
    http::Proxy6HttpClient,
    model::{
        Account, PriceInformation, Prolongation, Proxy, ProxyState, ProxyType, ProxyVersion,
        Purchase,
    },
};

/// Typed HTTP client for the Proxy6 proxy-seller API
pub struct Proxy6Client {
    http: Proxy6HttpClient,
}

impl Proxy6Client {
    /// Create a new client with the given configuration
    pub fn new(config: Proxy6ClientConfig) -> Result<Self> {
        let http = Proxy6HttpClient::new(config)?;
        Ok(Self { http })
    }

    /// Create a new client from an API key, with default settings
    pub fn from_api_key(api_key: &str) -> Result<Self> {
        Self::new(Proxy6ClientConfig::new(api_key))
    }

    // ============================================================================
    // Account / Catalog APIs
    // ============================================================================

    /// Fetch the billing account summary.
    ///
    /// The vendor has no dedicated account call; every successful response
    /// carries the account fields, so this issues the cheapest catalog call
    /// and reads them from its envelope.
    pub async fn get_account(&self) -> Result<Account> {
        self.http.get(api_method::GET_COUNTRY).await
    }

    /// Quote the price for buying `count` proxies for `period` days
    pub async fn get_price(
        &self,
        count: u32,
        period: u32,
        version: Option<ProxyVersion>,
    ) -> Result<PriceInformation> {
        #[derive(Serialize)]
        struct Query {
            count: u32,
            period: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            version: Option<ProxyVersion>,
        }

        self.http
            .get_with_query(
                api_method::GET_PRICE,
                &Query {
                    count,
                    period,
                    version,
                },
            )
            .await
    }

    /// Number of proxies available for purchase in a country
    pub async fn get_count(&self, country: &str, version: Option<ProxyVersion>) -> Result<u64> {
        #[derive(Serialize)]
        struct Query<'a> {
            country: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            version: Option<ProxyVersion>,
        }

        let response: CountResponse = self
            .http
            .get_with_query(api_method::GET_COUNT, &Query { country, version })
            .await?;
        Ok(response.count)
    }

    /// Countries with proxies available for purchase
    pub async fn get_countries(&self, version: Option<ProxyVersion>) -> Result<Vec<String>> {
        #[derive(Serialize)]
        struct Query {
            #[serde(skip_serializing_if = "Option::is_none")]
            version: Option<ProxyVersion>,
        }

        #[derive(Deserialize)]
        struct CountryListResponse {
            list: Vec<String>,
        }

        let response: CountryListResponse = self
            .http
            .get_with_query(api_method::GET_COUNTRY, &Query { version })
            .await?;
        Ok(response.list)
    }

    // ============================================================================
    // Proxy management APIs
    // ============================================================================

    /// List owned proxies, optionally filtered by state and description
    pub async fn get_proxies(
        &self,
        state: Option<ProxyState>,
        description: Option<&str>,
    ) -> Result<Vec<Proxy>> {
        #[derive(Serialize)]
        struct Query<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            state: Option<ProxyState>,
            #[serde(rename = "descr", skip_serializing_if = "Option::is_none")]
            descr: Option<&'a str>,
            nokey: bool,
        }

        #[derive(Deserialize)]
        struct ProxyListResponse {
            list: Vec<Proxy>,
        }

        let response: ProxyListResponse = self
            .http
            .get_with_query(
                api_method::GET_PROXY,
                &Query {
                    state,
                    descr: description,
                    nokey: true,
                },
            )
            .await?;
        Ok(response.list)
    }

    /// Switch the protocol of the given proxies
    pub async fn set_type(&self, proxies: &[Proxy], kind: ProxyType) -> Result<()> {
        #[derive(Serialize)]
        struct Query {
            ids: String,
            #[serde(rename = "type")]
            kind: ProxyType,
        }

        let _response: serde_json::Value = self
            .http
            .get_with_query(
                api_method::SET_TYPE,
                &Query {
                    ids: join_ids(proxies),
                    kind,
                },
            )
            .await?;
        Ok(())
    }

    /// Replace the description `old` with `new` on the given proxies,
    /// returning how many were updated
    pub async fn set_description(&self, proxies: &[Proxy], old: &str, new: &str) -> Result<u64> {
        #[derive(Serialize)]
        struct Query<'a> {
            ids: String,
            old: &'a str,
            new: &'a str,
        }

        let response: CountResponse = self
            .http
            .get_with_query(
                api_method::SET_DESCR,
                &Query {
                    ids: join_ids(proxies),
                    old,
                    new,
                },
            )
            .await?;
        Ok(response.count)
    }

    /// Delete the given proxies, returning how many were removed
    pub async fn delete(&self, proxies: &[Proxy]) -> Result<u64> {
        #[derive(Serialize)]
        struct Query {
            ids: String,
        }

        let response: CountResponse = self
            .http
            .get_with_query(
                api_method::DELETE,
                &Query {
                    ids: join_ids(proxies),
                },
            )
            .await?;
        Ok(response.count)
    }

    /// Delete all proxies carrying the given description
    pub async fn delete_by_description(&self, description: &str) -> Result<u64> {
        #[derive(Serialize)]
        struct Query<'a> {
            descr: &'a str,
        }

        let response: CountResponse = self
            .http
            .get_with_query(
                api_method::DELETE,
                &Query {
                    descr: description,
                },
            )
            .await?;
        Ok(response.count)
    }

    /// Check whether a proxy is still working on the vendor side
    pub async fn is_proxy_valid(&self, proxy_id: u64) -> Result<bool> {
        #[derive(Serialize)]
        struct Query {
            ids: u64,
        }

        #[derive(Deserialize)]
        struct CheckResponse {
            proxy_status: bool,
        }

        let response: CheckResponse = self
            .http
            .get_with_query(api_method::CHECK, &Query { ids: proxy_id })
            .await?;
        Ok(response.proxy_status)
    }

    // ============================================================================
    // Purchase APIs
    // ============================================================================

    /// Buy `count` proxies in `country` for `period` days
    #[allow(clippy::too_many_arguments)]
    pub async fn buy(
        &self,
        count: u32,
        period: u32,
        country: &str,
        version: Option<ProxyVersion>,
        kind: Option<ProxyType>,
        description: Option<&str>,
        auto_renew: bool,
    ) -> Result<Purchase> {
        #[derive(Serialize)]
        struct Query<'a> {
            count: u32,
            period: u32,
            country: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            version: Option<ProxyVersion>,
            #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
            kind: Option<ProxyType>,
            #[serde(rename = "descr", skip_serializing_if = "Option::is_none")]
            descr: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            auto_prolong: Option<bool>,
            nokey: bool,
        }

        #[derive(Deserialize)]
        struct BuyResponse {
            #[serde(flatten)]
            pricing: PriceInformation,
            #[serde(default)]
            country: String,
            list: Vec<Proxy>,
        }

        let response: BuyResponse = self
            .http
            .get_with_query(
                api_method::BUY,
                &Query {
                    count,
                    period,
                    country,
                    version,
                    kind,
                    descr: description,
                    auto_prolong: auto_renew.then_some(true),
                    nokey: true,
                },
            )
            .await?;

        // Purchased items carry no country of their own.
        let mut proxies = response.list;
        for proxy in &mut proxies {
            if proxy.country.is_empty() {
                proxy.country.clone_from(&response.country);
            }
        }

        Ok(Purchase {
            pricing: response.pricing,
            proxies,
        })
    }

    /// Extend the given proxies by `period` days, returning them with
    /// refreshed expiry dates
    pub async fn prolong(&self, proxies: &[Proxy], period: u32) -> Result<Prolongation> {
        #[derive(Serialize)]
        struct Query {
            period: u32,
            ids: String,
        }

        #[derive(Deserialize)]
        struct ProlongResponse {
            #[serde(flatten)]
            pricing: PriceInformation,
            list: HashMap<String, ProlongedProxy>,
        }

        #[derive(Deserialize)]
        struct ProlongedProxy {
            #[serde(rename = "date_end", with = "crate::model::common::wire_datetime")]
            expires_at: NaiveDateTime,
        }

        let response: ProlongResponse = self
            .http
            .get_with_query(
                api_method::PROLONG,
                &Query {
                    period,
                    ids: join_ids(proxies),
                },
            )
            .await?;

        let mut proxies = proxies.to_vec();
        for proxy in &mut proxies {
            match response.list.get(&proxy.id.to_string()) {
                Some(entry) => proxy.expires_at = entry.expires_at,
                None => warn!("proxy {} missing from prolong response", proxy.id),
            }
        }

        Ok(Prolongation {
            pricing: response.pricing,
            proxies,
        })
    }
}

/// Comma-joined proxy ids in input order, as the vendor expects them
fn join_ids(proxies: &[Proxy]) -> String {
    proxies
        .iter()
        .map(|p| p.id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Shape of the responses that only report an affected count
#[derive(Deserialize)]
struct CountResponse {
    #[serde(deserialize_with = "crate::model::common::u64_from_number_or_string")]
    count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_proxy(id: u64) -> Proxy {
        Proxy {
            id,
            ip: "185.22.134.250".parse().unwrap(),
            host: "185.22.134.250".to_string(),
            port: 7330,
            user: "5svBNZ".to_string(),
            password: "iagn2d".to_string(),
            version: ProxyVersion::Ipv4,
            kind: ProxyType::Http,
            country: "ru".to_string(),
            purchased_at: NaiveDate::from_ymd_opt(2016, 6, 19)
                .unwrap()
                .and_hms_opt(16, 32, 39)
                .unwrap(),
            expires_at: NaiveDate::from_ymd_opt(2016, 7, 12)
                .unwrap()
                .and_hms_opt(11, 50, 41)
                .unwrap(),
            active: true,
            description: String::new(),
        }
    }

    #[test]
    fn test_join_ids() {
        let proxies: Vec<Proxy> = [10, 11, 12, 15].into_iter().map(sample_proxy).collect();
        assert_eq!(join_ids(&proxies), "10,11,12,15");
        assert_eq!(join_ids(&[]), "");
    }

    #[test]
    fn test_count_response_accepts_both_forms() {
        let response: CountResponse = serde_json::from_str(r#"{"count":"4"}"#).unwrap();
        assert_eq!(response.count, 4);

        let response: CountResponse = serde_json::from_str(r#"{"count":971}"#).unwrap();
        assert_eq!(response.count, 971);
    }
}
