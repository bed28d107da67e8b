//! Builder configuration
//!
//! Defines all configurable parameters for a build run including the
//! instance identity, network placement, and the deadline applied to each
//! remote operation wait.

use std::time::Duration;

/// Builder configuration
///
/// The state timeout bounds every wait on a remote operation. It is an
/// observation deadline only: a wait that times out does not cancel the
/// remote operation (see `driver::WaitOutcome`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the instance being built; the temporary firewall rule name
    /// is derived from it
    pub instance_name: String,

    /// Network the temporary firewall rule is attached to
    pub network: String,

    /// Tags applied to the build instance; the rule targets these
    pub tags: Vec<String>,

    /// Maximum time to wait for a remote create/delete to be confirmed
    pub state_timeout: Duration,

    /// Emit extra confirmation messages naming created resources
    pub debug: bool,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(instance_name: String, network: String) -> Self {
        Self {
            instance_name,
            network,
            tags: Vec::new(),
            state_timeout: Duration::from_secs(300), // 5 minutes
            debug: false,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - KILN_INSTANCE_NAME (required)
    /// - KILN_NETWORK (optional, default: "default")
    /// - KILN_TAGS (optional, comma-separated)
    /// - KILN_STATE_TIMEOUT (optional, seconds, default: 300)
    /// - KILN_DEBUG (optional, "1" or "true")
    pub fn from_env() -> anyhow::Result<Self> {
        let instance_name = std::env::var("KILN_INSTANCE_NAME")
            .map_err(|_| anyhow::anyhow!("KILN_INSTANCE_NAME environment variable not set"))?;

        let network =
            std::env::var("KILN_NETWORK").unwrap_or_else(|_| "default".to_string());

        let tags = std::env::var("KILN_TAGS")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let state_timeout = std::env::var("KILN_STATE_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(300));

        let debug = std::env::var("KILN_DEBUG")
            .map(|s| s == "1" || s.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            instance_name,
            network,
            tags,
            state_timeout,
            debug,
        })
    }

    /// Adds a target tag
    pub fn with_tag(mut self, tag: String) -> Self {
        self.tags.push(tag);
        self
    }

    /// Overrides the state timeout
    pub fn with_state_timeout(mut self, timeout: Duration) -> Self {
        self.state_timeout = timeout;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.instance_name.is_empty() {
            anyhow::bail!("instance_name cannot be empty");
        }

        if self.network.is_empty() {
            anyhow::bail!("network cannot be empty");
        }

        if self.state_timeout.is_zero() {
            anyhow::bail!("state_timeout must be greater than 0");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new("kiln-build".to_string(), "default".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.state_timeout, Duration::from_secs(300));
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        // Valid config should pass
        assert!(config.validate().is_ok());

        // Empty instance name should fail
        config.instance_name = String::new();
        assert!(config.validate().is_err());

        config.instance_name = "builder-1".to_string();

        // Zero timeout should fail
        config.state_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config.state_timeout = Duration::from_secs(60);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_tag() {
        let config = Config::default()
            .with_tag("kiln".to_string())
            .with_tag("ssh".to_string());

        assert_eq!(config.tags, vec!["kiln".to_string(), "ssh".to_string()]);
    }

    #[test]
    fn test_with_state_timeout() {
        let config = Config::default().with_state_timeout(Duration::from_secs(30));
        assert_eq!(config.state_timeout, Duration::from_secs(30));
    }
}
