// Model types for Proxy6 API responses

pub mod account;
pub(crate) mod common;
pub mod pricing;
pub mod proxy;

pub use account::Account;
pub use pricing::{PriceInformation, Prolongation, Purchase};
pub use proxy::{Proxy, ProxyState, ProxyType, ProxyVersion};
