use std::path::Path;

use crate::Config;

/// Path the TTS route is mounted on; other routes must not shadow it
const TTS_ROUTE: &str = "/tts";

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the provider settings or the health route are unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_tts_config()?;
        self.validate_health_config()?;
        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        let tts = &self.tts;

        if !matches!(tts.base_url.scheme(), "http" | "https") {
            anyhow::bail!("tts.base_url must use http or https, got '{}'", tts.base_url.scheme());
        }

        if tts.base_url.query().is_some() {
            anyhow::bail!("tts.base_url must not carry a query string");
        }

        if tts.base_url.fragment().is_some() {
            anyhow::bail!("tts.base_url must not carry a fragment");
        }

        for (field, value) in [
            ("language", &tts.language),
            ("client", &tts.client),
            ("input_encoding", &tts.input_encoding),
        ] {
            if value.trim().is_empty() {
                anyhow::bail!("tts.{field} must not be empty");
            }
        }

        Ok(())
    }

    fn validate_health_config(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if !health.enabled {
            return Ok(());
        }

        if !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        if health.path == TTS_ROUTE {
            anyhow::bail!("server.health.path must not be {TTS_ROUTE}");
        }

        Ok(())
    }
}
