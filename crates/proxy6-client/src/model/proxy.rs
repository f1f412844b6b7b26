// Proxy records and their wire enums

use std::net::IpAddr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_with::{DisplayFromStr, serde_as};

use super::common::{bool_from_flag, flag_to_wire, wire_datetime};

/// Lifecycle filter accepted by the proxy listing call
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyState {
    All,
    Active,
    Expiring,
    Expired,
}

/// Protocol spoken by a proxy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyType {
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "socks")]
    Socks5,
}

/// IP family of a proxy; the vendor encodes shared IPv4 as version 3
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProxyVersion {
    Ipv4Shared,
    Ipv4,
    Ipv6,
}

impl ProxyVersion {
    /// Numeric form used on the wire
    pub fn as_number(self) -> u8 {
        match self {
            Self::Ipv4 => 4,
            Self::Ipv4Shared => 3,
            Self::Ipv6 => 6,
        }
    }

    fn from_number(value: u64) -> Option<Self> {
        match value {
            4 => Some(Self::Ipv4),
            3 => Some(Self::Ipv4Shared),
            6 => Some(Self::Ipv6),
            _ => None,
        }
    }
}

impl Serialize for ProxyVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_number())
    }
}

impl<'de> Deserialize<'de> for ProxyVersion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            String(String),
        }

        let value = match Raw::deserialize(deserializer)? {
            Raw::Number(value) => value,
            Raw::String(value) => value.parse().map_err(de::Error::custom)?,
        };
        Self::from_number(value)
            .ok_or_else(|| de::Error::custom(format!("unknown proxy version {value}")))
    }
}

/// A proxy as returned by the listing and purchase calls
#[serde_as]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proxy {
    #[serde_as(as = "DisplayFromStr")]
    pub id: u64,

    pub ip: IpAddr,

    pub host: String,
    #[serde_as(as = "DisplayFromStr")]
    pub port: u16,

    pub user: String,
    #[serde(rename = "pass")]
    pub password: String,

    pub version: ProxyVersion,
    #[serde(rename = "type")]
    pub kind: ProxyType,
    /// Absent in purchase responses; filled in from the purchase itself
    #[serde(default)]
    pub country: String,

    #[serde(rename = "date", with = "wire_datetime")]
    pub purchased_at: NaiveDateTime,
    #[serde(rename = "date_end", with = "wire_datetime")]
    pub expires_at: NaiveDateTime,

    #[serde(
        deserialize_with = "bool_from_flag",
        serialize_with = "flag_to_wire"
    )]
    pub active: bool,
    #[serde(rename = "descr", default)]
    pub description: String,
}
