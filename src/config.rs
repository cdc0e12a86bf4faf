use std::env;

/// Environment variable holding the default stream region, as set by the
/// serverless deployment (`provider.environment.region`).
pub const REGION_ENV: &str = "region";

/// Environment variable holding the owning-service user tag.
pub const SERVICE_USER_ENV: &str = "SERVICE_USER";

/// Stream settings shared by the [`Publisher`](crate::Publisher) and the
/// inbound decoder.
///
/// This is an explicit value handed in at construction time, so concurrent
/// invocations with different settings stay isolated. `service_user` tags
/// outgoing payloads and filters inbound ones; an empty string disables the
/// user filter.
///
/// # Example
///
/// ```rust
/// use kinevent::EventConfig;
///
/// let config = EventConfig::new("eu-west-1").service_user("orders-service");
/// assert_eq!(config.region, "eu-west-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConfig {
    /// Default region for the stream client. Overridable per publish call.
    pub region: String,
    /// Default user identity stamped on outgoing payloads and matched
    /// against inbound ones. Empty means no user filtering.
    pub service_user: String,
}

impl EventConfig {
    /// Create a config with the given default region and no service user.
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            service_user: String::new(),
        }
    }

    /// Set the service user tag.
    pub fn service_user(mut self, user: impl Into<String>) -> Self {
        self.service_user = user.into();
        self
    }

    /// Read the config from the process environment ([`REGION_ENV`] and
    /// [`SERVICE_USER_ENV`]). Unset variables read as empty strings.
    ///
    /// The read happens once, here; the returned value never looks at the
    /// environment again.
    pub fn from_env() -> Self {
        Self {
            region: env::var(REGION_ENV).unwrap_or_default(),
            service_user: env::var(SERVICE_USER_ENV).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chaining() {
        let config = EventConfig::new("eu-west-1").service_user("orders-service");
        assert_eq!(config.region, "eu-west-1");
        assert_eq!(config.service_user, "orders-service");

        let bare = EventConfig::new("eu-west-1");
        assert!(bare.service_user.is_empty());
    }

    // Single test covering both env states; no other test touches these vars.
    #[test]
    fn test_from_env_reads_both_vars() {
        env::remove_var(REGION_ENV);
        env::remove_var(SERVICE_USER_ENV);
        let config = EventConfig::from_env();
        assert!(config.region.is_empty());
        assert!(config.service_user.is_empty());

        env::set_var(REGION_ENV, "us-east-1");
        env::set_var(SERVICE_USER_ENV, "orders-service");
        let config = EventConfig::from_env();
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.service_user, "orders-service");

        env::remove_var(REGION_ENV);
        env::remove_var(SERVICE_USER_ENV);
    }
}
