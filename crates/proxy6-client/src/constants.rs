// Proxy6 API method names and vendor error codes

/// Production endpoint prefix; the API key and method name are appended.
pub const DEFAULT_BASE_URL: &str = "https://proxy6.net/api";

pub mod api_method {
    pub const GET_PRICE: &str = "getprice";
    pub const GET_COUNT: &str = "getcount";
    pub const GET_COUNTRY: &str = "getcountry";
    pub const GET_PROXY: &str = "getproxy";
    pub const SET_TYPE: &str = "settype";
    pub const SET_DESCR: &str = "setdescr";
    pub const BUY: &str = "buy";
    pub const PROLONG: &str = "prolong";
    pub const DELETE: &str = "delete";
    pub const CHECK: &str = "check";
}

pub mod error_code {
    /// Wrong proxies quantity, wrong amount or no quantity input
    pub const COUNT: i64 = 200;
    /// Zero or low balance on the account
    pub const NO_MONEY: i64 = 400;
}
