use anyhow::{Context, Result, anyhow};
use std::env;
use url::Url;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB_HOST: &str = "cluster0.j7l4khx.mongodb.net";
const DEFAULT_DB_NAME: &str = "doctorsPortal";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub access_token: String,
    pub db_name: String,
    db_host: String,
    db_user: Option<String>,
    db_password: Option<String>,
    mongodb_uri: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };
        let access_token = lookup("ACCESS_TOKEN").context("Missing ACCESS_TOKEN")?;

        let config = AppConfig {
            port,
            access_token,
            db_name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            db_host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            db_user: lookup("DB_USER"),
            db_password: lookup("DB_PASSWORD"),
            mongodb_uri: lookup("MONGODB_URI"),
        };

        if config.mongodb_uri.is_none() && (config.db_user.is_none() || config.db_password.is_none()) {
            return Err(anyhow!("Missing DB_USER/DB_PASSWORD (or MONGODB_URI)"));
        }

        Ok(config)
    }

    /// Connection string for the cluster. Credentials are percent-encoded.
    pub fn database_uri(&self) -> Result<String> {
        if let Some(uri) = &self.mongodb_uri {
            return Ok(uri.clone());
        }

        let mut url = Url::parse(&format!("mongodb+srv://{}/", self.db_host))
            .with_context(|| format!("DB_HOST is not a valid host: {:?}", self.db_host))?;
        url.set_username(self.db_user.as_deref().unwrap_or_default())
            .map_err(|_| anyhow!("DB_USER cannot be used in a connection string"))?;
        url.set_password(self.db_password.as_deref())
            .map_err(|_| anyhow!("DB_PASSWORD cannot be used in a connection string"))?;
        url.query_pairs_mut()
            .append_pair("retryWrites", "true")
            .append_pair("w", "majority");

        Ok(url.to_string())
    }
}
