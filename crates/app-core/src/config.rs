use crate::{ConfigError, Result};
use std::{env, str::FromStr, time::Duration};
use strum_macros::{Display, EnumString};

#[derive(Clone, Copy, Debug, Default, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Network::Mainnet => "https://rpc.mainnet.near.org",
            Network::Testnet => "https://rpc.testnet.near.org",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub network: Network,
    pub start_block_height: u64,
    /// Only receipts sent to this account are dispatched when set.
    pub contract_id: Option<String>,
    pub database_url: String,
    pub rpc_url: String,
    pub progress_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let network = match lookup("NETWORK") {
            Some(value) => parse("NETWORK", value)?,
            None => Network::default(),
        };
        let start_block_height = parse(
            "START_BLOCK_HEIGHT",
            lookup("START_BLOCK_HEIGHT").ok_or(ConfigError::Missing("START_BLOCK_HEIGHT"))?,
        )?;
        let contract_id = lookup("CONTRACT_ID").filter(|id| !id.is_empty());
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let rpc_url = lookup("NEAR_RPC_URL")
            .unwrap_or_else(|| network.default_rpc_url().to_string());
        let progress_interval = match lookup("PROGRESS_INTERVAL_SECS") {
            Some(value) => Duration::from_secs(parse("PROGRESS_INTERVAL_SECS", value)?),
            None => Duration::from_secs(10),
        };

        let config = Self {
            network,
            start_block_height,
            contract_id,
            database_url,
            rpc_url,
            progress_interval,
        };
        log::debug!("Loaded config: {:?}", config.redacted());
        Ok(config)
    }

    fn redacted(&self) -> Self {
        Self {
            database_url: "<redacted>".to_string(),
            ..self.clone()
        }
    }
}

fn parse<T: FromStr>(name: &'static str, value: String) -> Result<T> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value })
}
