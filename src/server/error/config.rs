use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `BIND_ADDRESS` is set but is not a valid socket address.
    #[error("Invalid bind address '{value}': {source}")]
    InvalidBindAddress {
        /// The value read from the environment
        value: String,
        /// The underlying parse error
        #[source]
        source: AddrParseError,
    },
}
