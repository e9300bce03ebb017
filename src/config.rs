//! Process configuration, read once at startup and passed into the
//! pipeline as an explicit struct.

use std::{fmt::Display, path::PathBuf, str::FromStr};

use crate::error::Error;

/// Target platform of one export run. Selects the output format, the
/// artifact file names, and the logical database to read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Android,
    Ios,
}

impl Platform {
    /// Logical database holding this platform's collections.
    pub fn database(self) -> &'static str {
        match self {
            Platform::Web => "web",
            Platform::Android | Platform::Ios => "app",
        }
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "web" => Ok(Platform::Web),
            "android" => Ok(Platform::Android),
            "ios" => Ok(Platform::Ios),
            other => Err(Error::Config(format!(
                "unknown platform `{}`, expected web|android|ios",
                other
            ))),
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Web => "web",
            Platform::Android => "android",
            Platform::Ios => "ios",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub platform: Platform,
    pub db_password: String,
    pub out_dir: PathBuf,
}

impl Config {
    /// Reads the required environment variables. Must run before any
    /// store connection is attempted so that a misconfigured process
    /// fails without touching the network.
    pub fn from_env(out_dir: PathBuf) -> Result<Self, Error> {
        let db_password = std::env::var("DB_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Config("please provide a DB_PASSWORD env variable".to_string()))?;

        let platform = std::env::var("PLATFORM")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "please specify a target platform (PLATFORM=web|android|ios)".to_string(),
                )
            })?
            .parse()?;

        Ok(Config {
            platform,
            db_password,
            out_dir,
        })
    }
}
