use crate::{
    error::TtsError,
    http_client::http_client,
    provider::{TtsProvider, google_translate::GoogleTranslateProvider},
    types::{SpeechRequest, SpeechResponse},
};

/// TTS server that forwards requests to the configured provider
pub struct Server {
    provider: Box<dyn TtsProvider>,
}

impl Server {
    /// Create a server around an already constructed provider
    pub fn with_provider(provider: Box<dyn TtsProvider>) -> Self {
        Self { provider }
    }

    /// Synthesize text to speech using the configured provider
    pub async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        self.provider.synthesize(request).await
    }

    /// Name of the provider requests are forwarded to
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a relay_config::Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a relay_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let client =
            http_client().map_err(|e| TtsError::Config(format!("failed to build provider HTTP client: {e}")))?;

        let settings = self.config.tts.clone();

        tracing::debug!(
            base_url = %settings.base_url,
            language = %settings.language,
            "initializing TTS provider"
        );

        let provider = GoogleTranslateProvider::new("google_translate".to_owned(), client, settings);

        Ok(Server::with_provider(Box::new(provider)))
    }
}
