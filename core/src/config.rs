//! Service configuration.

/// Collection URL used when nothing else is configured.
pub const DEFAULT_HEROES_URL: &str = "http://localhost:3333/heroes";

/// Configuration for `HeroService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroServiceConfig {
    /// Collection URL of the heroes resource (e.g., "http://localhost:3333/heroes")
    pub heroes_url: String,
}

impl HeroServiceConfig {
    pub fn new(heroes_url: impl Into<String>) -> Self {
        Self {
            heroes_url: heroes_url.into(),
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - HEROES_URL (optional, default: `DEFAULT_HEROES_URL`)
    pub fn from_env() -> Self {
        std::env::var("HEROES_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(Self::new)
            .unwrap_or_default()
    }
}

impl Default for HeroServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HEROES_URL)
    }
}
