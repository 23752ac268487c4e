//! Environment Value Object
//!
//! The name of the network a deployment targets. It doubles as the key
//! under which the deployment record is stored, so it is validated to be
//! safe as a file name component.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Maximum accepted length of a network name
pub const MAX_ENVIRONMENT_LEN: usize = 64;

/// Suffix appended to the network name to form the record file name
pub const RECORD_FILE_SUFFIX: &str = "_deployment.json";

/// Validated network name (e.g. `localhost`, `sepolia`, `base-mainnet`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Environment(String);

/// Why a network name was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidEnvironment {
    #[error("name is empty")]
    Empty,

    #[error("name is {0} characters long (max {max})", max = MAX_ENVIRONMENT_LEN)]
    TooLong(usize),

    #[error("character {0:?} is not allowed (use letters, digits, '-' or '_')")]
    InvalidChar(char),
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidEnvironment> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidEnvironment::Empty);
        }
        if name.len() > MAX_ENVIRONMENT_LEN {
            return Err(InvalidEnvironment::TooLong(name.len()));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(InvalidEnvironment::InvalidChar(c));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the record for this environment: `<name>_deployment.json`
    pub fn record_file_name(&self) -> String {
        format!("{}{}", self.0, RECORD_FILE_SUFFIX)
    }
}

impl FromStr for Environment {
    type Err = InvalidEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Environment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
