use std::env;

use crate::error::{Error, Result};

const ENV_ACCESS_KEY_ID: &str = "CUMULUS_ACCESS_KEY_ID";
const ENV_SECRET_ACCESS_KEY: &str = "CUMULUS_SECRET_ACCESS_KEY";
const ENV_SESSION_TOKEN: &str = "CUMULUS_SESSION_TOKEN";

/// A resolved set of API credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

/// Source of credentials for a synchronous-client factory.
pub trait ProvideCredentials: Send + Sync {
    /// Resolve credentials, or fail with `Error::Transport` when this source
    /// cannot supply any.
    fn provide(&self) -> Result<Credentials>;
}

/// Always yields the same fixed credentials.
pub struct StaticProvider {
    credentials: Credentials,
}

impl StaticProvider {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl ProvideCredentials for StaticProvider {
    fn provide(&self) -> Result<Credentials> {
        Ok(self.credentials.clone())
    }
}

/// Reads `CUMULUS_ACCESS_KEY_ID` / `CUMULUS_SECRET_ACCESS_KEY` (and the
/// optional `CUMULUS_SESSION_TOKEN`) from the process environment.
#[derive(Default)]
pub struct EnvProvider;

impl ProvideCredentials for EnvProvider {
    fn provide(&self) -> Result<Credentials> {
        let access_key_id = env::var(ENV_ACCESS_KEY_ID).map_err(|_| missing(ENV_ACCESS_KEY_ID))?;
        let secret_access_key =
            env::var(ENV_SECRET_ACCESS_KEY).map_err(|_| missing(ENV_SECRET_ACCESS_KEY))?;

        let mut credentials = Credentials::new(access_key_id, secret_access_key);
        if let Ok(token) = env::var(ENV_SESSION_TOKEN) {
            credentials = credentials.with_session_token(token);
        }
        Ok(credentials)
    }
}

fn missing(var: &str) -> Error {
    Error::Transport(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        format!("credential environment variable {var} is not set"),
    ))
}

/// The default discovery chain: tries each provider in order and resolves with
/// the first that succeeds.
pub struct ChainProvider {
    providers: Vec<Box<dyn ProvideCredentials>>,
}

impl ChainProvider {
    pub fn new(providers: Vec<Box<dyn ProvideCredentials>>) -> Self {
        Self { providers }
    }

    /// Environment variables only. Extend with `push` for further sources.
    pub fn default_chain() -> Self {
        Self::new(vec![Box::new(EnvProvider)])
    }

    pub fn push(&mut self, provider: Box<dyn ProvideCredentials>) {
        self.providers.push(provider);
    }
}

impl ProvideCredentials for ChainProvider {
    fn provide(&self) -> Result<Credentials> {
        for provider in &self.providers {
            match provider.provide() {
                Ok(credentials) => return Ok(credentials),
                Err(err) => tracing::debug!("credential provider skipped: {err}"),
            }
        }
        Err(Error::Transport(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no provider in the chain yielded credentials",
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct FailingProvider;

    impl ProvideCredentials for FailingProvider {
        fn provide(&self) -> Result<Credentials> {
            Err(missing("NOTHING"))
        }
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticProvider::new(Credentials::new("AKID", "secret"));
        let credentials = provider.provide().unwrap();
        assert_eq!(credentials.access_key_id, "AKID");
        assert!(credentials.session_token.is_none());
    }

    #[test]
    fn test_chain_falls_through_to_first_success() {
        let chain = ChainProvider::new(vec![
            Box::new(FailingProvider),
            Box::new(StaticProvider::new(
                Credentials::new("AKID", "secret").with_session_token("tok"),
            )),
        ]);
        let credentials = chain.provide().unwrap();
        assert_eq!(credentials.session_token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_empty_chain_fails() {
        let chain = ChainProvider::new(Vec::new());
        assert!(matches!(chain.provide(), Err(Error::Transport(_))));
    }
}
