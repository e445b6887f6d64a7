use std::env;

use reqwest::header::HeaderValue;

use crate::errors::DigestError;

pub const BASE_ID_VAR: &str = "BASE_ID";
pub const TABLE_ID_VAR: &str = "TABLE_ID";
pub const TOKEN_VAR: &str = "TOKEN";
pub const WEBHOOK_URL_VAR: &str = "WEBHOOK_URL";

/// Credentials and endpoints for one run, read once at startup and passed
/// explicitly into each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_id: String,
    pub table_id: String,
    pub token: String,
    pub webhook_url: String,
}

impl Config {
    /// Reads the four required variables from the process environment.
    /// `dotenv` has already merged any `.env` file into the environment by
    /// the time this runs. All missing keys are reported together.
    pub fn from_env() -> Result<Self, DigestError> {
        let mut missing = Vec::new();

        let base_id = required(BASE_ID_VAR, &mut missing);
        let table_id = required(TABLE_ID_VAR, &mut missing);
        let token = required(TOKEN_VAR, &mut missing);
        let webhook_url = required(WEBHOOK_URL_VAR, &mut missing);

        match (base_id, table_id, token, webhook_url) {
            (Some(base_id), Some(table_id), Some(token), Some(webhook_url)) => {
                // The token goes straight into a default header; reject one
                // that cannot be a header value instead of panicking later.
                if HeaderValue::from_str(&format!("Bearer {token}")).is_err() {
                    return Err(DigestError::InvalidToken);
                }

                Ok(Self {
                    base_id,
                    table_id,
                    token,
                    webhook_url,
                })
            }
            _ => Err(DigestError::MissingConfig(missing)),
        }
    }
}

fn required(name: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(name);
            None
        }
    }
}
