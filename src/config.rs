use anyhow::{anyhow, Result};
use std::env;

use crate::poll::Voter;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/polls.db";
const DEFAULT_ADMIN_UID: i64 = 160453507;
const DEFAULT_ADMIN_NAME: &str = "Admin";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    pub admin_uid: i64,
    pub admin_name: String,
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = non_empty_var("TELEGRAM_BOT_TOKEN")
            .ok_or_else(|| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        let database_url = Self::database_url_from_env();

        let port_str = env::var("HTTP_PORT").unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let admin_uid = match non_empty_var("ADMIN_UID") {
            Some(uid) => uid.trim().parse().map_err(|_| anyhow!("Invalid ADMIN_UID"))?,
            None => DEFAULT_ADMIN_UID,
        };
        let admin_name =
            non_empty_var("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string());

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            admin_uid,
            admin_name,
        })
    }

    /// `DATABASE_URL`, or the default location. Needs no bot token, so the
    /// migration tool can use it on its own.
    pub fn database_url_from_env() -> String {
        non_empty_var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }

    /// The user seeded as admin on startup.
    pub fn admin(&self) -> Voter {
        Voter::new(self.admin_uid, self.admin_name.clone())
    }
}
