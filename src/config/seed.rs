//! Seed fixtures: the three ordered row lists inserted at startup.

use crate::config::Settings;
use crate::error::ConfigError;
use crate::model::{Offer, Order, User};
use serde::de::DeserializeOwned;
use std::path::Path;

pub const USERS_FILE: &str = "users.json";
pub const ORDERS_FILE: &str = "orders.json";
pub const OFFERS_FILE: &str = "offers.json";

const BUNDLED_USERS: &str = include_str!("../../data/users.json");
const BUNDLED_ORDERS: &str = include_str!("../../data/orders.json");
const BUNDLED_OFFERS: &str = include_str!("../../data/offers.json");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedData {
    pub users: Vec<User>,
    pub orders: Vec<Order>,
    pub offers: Vec<Offer>,
}

impl SeedData {
    /// Fixtures compiled into the crate from `data/`.
    pub fn bundled() -> Result<Self, ConfigError> {
        Ok(SeedData {
            users: parse_fixture(USERS_FILE, BUNDLED_USERS)?,
            orders: parse_fixture(ORDERS_FILE, BUNDLED_ORDERS)?,
            offers: parse_fixture(OFFERS_FILE, BUNDLED_OFFERS)?,
        })
    }

    /// Read `users.json`, `orders.json` and `offers.json` from `dir`.
    pub async fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        Ok(SeedData {
            users: read_fixture(dir, USERS_FILE).await?,
            orders: read_fixture(dir, ORDERS_FILE).await?,
            offers: read_fixture(dir, OFFERS_FILE).await?,
        })
    }

    /// `SEED_PATH` when set, otherwise the bundled fixtures.
    pub async fn load(settings: &Settings) -> Result<Self, ConfigError> {
        match &settings.seed_path {
            Some(dir) => Self::load_from_dir(dir).await,
            None => Self::bundled(),
        }
    }
}

async fn read_fixture<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<Vec<T>, ConfigError> {
    let path = dir.join(file);
    let text = tokio::fs::read_to_string(&path).await.map_err(|e| ConfigError::Seed {
        file: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_fixture(&path.display().to_string(), &text)
}

fn parse_fixture<T: DeserializeOwned>(file: &str, text: &str) -> Result<Vec<T>, ConfigError> {
    serde_json::from_str(text).map_err(|e| ConfigError::Seed {
        file: file.to_string(),
        message: e.to_string(),
    })
}
