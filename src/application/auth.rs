/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Access token loading.
//!
//! The API authenticates with a bearer token kept in a plain text file, one
//! file per environment. A missing or empty file is a configuration error
//! and must stop the client before any request is made.

use crate::application::config::Config;
use crate::error::AppError;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Bearer token for the T-Invest API
///
/// `Debug` and `Display` only ever show a masked form.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token, rejecting blank values
    pub fn new(value: impl Into<String>) -> Result<Self, AppError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(AppError::Config("empty access token".to_string()));
        }
        Ok(Self(value))
    }

    /// Loads the token file selected by the configured mode
    pub fn load(config: &Config) -> Result<Self, AppError> {
        info!("Loading {} token", config.mode_name());
        Self::from_file(&config.token_path())
    }

    /// Reads a token from `path`
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        if !path.is_file() {
            return Err(AppError::Config(format!(
                "token file not found: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path)?;
        let token = raw.trim();
        if token.is_empty() {
            return Err(AppError::Config(format!(
                "empty token in file: {}",
                path.display()
            )));
        }

        let token = Self(token.to_string());
        debug!("Token loaded from {}: {}", path.display(), token);
        Ok(token)
    }

    /// The raw secret, for building the `Authorization` header
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First 10 and last 5 characters, or `***` for short tokens
    #[must_use]
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 15 {
            return "***".to_string();
        }
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&self.masked()).finish()
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
