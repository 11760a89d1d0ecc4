//! Runtime configuration

/// Tunables for the in-process store and the views built on it.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Request channel capacity of every table actor (env: DISHPATCH_CHANNEL_BUFFER)
    pub channel_buffer: usize,
    /// Events a subscriber may lag behind before it must resync (env: DISHPATCH_FEED_CAPACITY)
    pub feed_capacity: usize,
    /// Rows shown in the admin "recent orders" list (env: DISHPATCH_RECENT_ORDERS)
    pub recent_orders_limit: usize,
    /// Shortest accepted password at sign-up (env: DISHPATCH_MIN_PASSWORD_LEN)
    pub min_password_len: usize,
    /// Environment: development | staging | production (env: ENVIRONMENT)
    pub environment: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            feed_capacity: 256,
            recent_orders_limit: 10,
            min_password_len: 6,
            environment: "development".into(),
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl SystemConfig {
    /// Load configuration from environment variables, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            channel_buffer: env_or("DISHPATCH_CHANNEL_BUFFER", defaults.channel_buffer).max(1),
            feed_capacity: env_or("DISHPATCH_FEED_CAPACITY", defaults.feed_capacity).max(1),
            recent_orders_limit: env_or("DISHPATCH_RECENT_ORDERS", defaults.recent_orders_limit),
            min_password_len: env_or("DISHPATCH_MIN_PASSWORD_LEN", defaults.min_password_len),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SystemConfig::default();
        assert_eq!(config.channel_buffer, 32);
        assert_eq!(config.recent_orders_limit, 10);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        assert_eq!(env_or("DISHPATCH_TEST_UNSET_VARIABLE", 7usize), 7);
    }
}
