// Price quotes and purchase results

use serde::{Deserialize, Serialize};

use super::proxy::Proxy;

/// Price quote for a count/period combination
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceInformation {
    pub price: f64,
    pub price_single: f64,
    pub period: u32,
    pub count: u32,
    pub currency: String,
}

/// Outcome of a purchase
#[derive(Clone, Debug, PartialEq)]
pub struct Purchase {
    pub pricing: PriceInformation,
    pub proxies: Vec<Proxy>,
}

/// Outcome of an extension; same shape as a purchase
pub type Prolongation = Purchase;
