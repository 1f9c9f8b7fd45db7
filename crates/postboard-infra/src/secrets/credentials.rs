use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Deserializer};

use postboard_core::error::SecretError;

// RFC 3986 unreserved characters pass through, everything else is %XX.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Credential bundle as stored in the secret store.
///
/// Accepts the RDS-style keys (`dbname`, `username`) as well as the short
/// forms (`database`, `user`). `port` may be a number or a numeric string.
#[derive(Clone, Deserialize)]
pub struct DatabaseCredentials {
    #[serde(alias = "database")]
    pub dbname: String,
    #[serde(alias = "user")]
    pub username: String,
    pub password: String,
    pub host: String,
    #[serde(deserialize_with = "port_number_or_string")]
    pub port: u16,
}

impl std::fmt::Debug for DatabaseCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseCredentials")
            .field("dbname", &self.dbname)
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl DatabaseCredentials {
    /// Parse the JSON secret string.
    pub fn parse(raw: &str) -> Result<Self, SecretError> {
        serde_json::from_str(raw).map_err(|e| SecretError::Malformed(e.to_string()))
    }

    /// Postgres URL with user, password and database percent-encoded.
    /// IPv6 hosts are bracketed.
    pub fn connection_url(&self) -> String {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        format!(
            "postgres://{}:{}@{}:{}/{}",
            utf8_percent_encode(&self.username, URL_COMPONENT),
            utf8_percent_encode(&self.password, URL_COMPONENT),
            host,
            self.port,
            utf8_percent_encode(&self.dbname, URL_COMPONENT),
        )
    }
}

fn port_number_or_string<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(n) => Ok(n),
        Port::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
