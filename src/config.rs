use serde::Deserialize;
use std::io::Read;
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use thiserror::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error {0} when reading config")]
    IoError(#[from] std::io::Error),
    #[error("cannot open config file '{0}' : {1}")]
    OpeningError(PathBuf, std::io::Error),
    #[error("UTF8 format error when reading config")]
    Utf8Error,
    #[error("format error {0} when reading config")]
    FormatError(#[from] serde_yaml::Error),
}

#[derive(Clone, Deserialize)]
pub struct Listen {
    pub host: Option<String>,
    pub port: u16,
}

impl Default for Listen {
    fn default() -> Self {
        Self {
            host: None,
            port: 8080,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub listen: Listen,
    pub log: Option<crate::log::Log>,
}

impl Config {
    pub fn from_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(&s)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let mut file = File::open(p).map_err(|e| ConfigError::OpeningError(p.to_owned(), e))?;
        let mut contents = vec![];
        file.read_to_end(&mut contents)?;
        let contents = String::from_utf8(contents).map_err(|_| ConfigError::Utf8Error)?;
        let config = Config::from_str(&contents)?;
        Ok(config)
    }
}

pub mod testdata {
    use super::Config;

    #[allow(dead_code)]
    pub fn test_config() -> Config {
        Config::from_str(
            r#"
        log:
            level: trace
        listen:
            host: 127.0.0.1
            port: 8081
        "#,
        )
        .unwrap()
    }
}
