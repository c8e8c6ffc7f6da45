use serde::{Deserialize, Serialize};

/// Default service endpoint template; `{region}` is substituted at resolve time.
const DEFAULT_ENDPOINT: &str = "https://compute.{region}.cumulus-cloud.com";

/// Static configuration handed to a synchronous-client factory.
///
/// Pure data: nothing here is interpreted by the async wrapper itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Region the client addresses, e.g. `eu-central-1`.
    pub region: String,

    /// Explicit endpoint override. When unset, the regional default applies.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// User agent reported to the service.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("cumulus-compute/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            endpoint: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// The endpoint a sync client should address: the override if one was set,
    /// otherwise the regional default.
    pub fn resolved_endpoint(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => DEFAULT_ENDPOINT.replace("{region}", &self.region),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let config = r#"
        {
            "region": "eu-central-1",
            "endpoint": "http://localhost:4566"
        }
        "#;

        let config: ClientConfig = serde_json::from_str(config).unwrap();
        assert_eq!(config.region, "eu-central-1");
        assert_eq!(config.resolved_endpoint(), "http://localhost:4566");
        assert!(config.user_agent.starts_with("cumulus-compute/"));
    }

    #[test]
    fn test_regional_default_endpoint() {
        let config = ClientConfig::new("us-west-2");
        assert_eq!(
            config.resolved_endpoint(),
            "https://compute.us-west-2.cumulus-cloud.com"
        );
    }
}
