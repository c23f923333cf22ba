use async_trait::async_trait;
use futures_util::StreamExt;
use http::StatusCode;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use relay_config::TtsConfig;
use reqwest::Client;
use url::Url;

use crate::{
    error::TtsError,
    types::{SpeechRequest, SpeechResponse},
};

use super::TtsProvider;

/// Characters left untouched by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Google Translate speech provider
///
/// Language, client and input encoding come from configuration and never
/// vary per request.
pub(crate) struct GoogleTranslateProvider {
    client: Client,
    settings: TtsConfig,
    name: String,
}

impl GoogleTranslateProvider {
    pub fn new(name: String, client: Client, settings: TtsConfig) -> Self {
        Self { client, settings, name }
    }
}

/// Build the provider URL for `text`
///
/// Any query or fragment already on the base URL is replaced.
///
/// # Errors
///
/// Fails only if the configured base URL cannot take a query string
pub(crate) fn speech_url(settings: &TtsConfig, text: &str) -> crate::error::Result<Url> {
    let mut url = settings.base_url.clone();

    if url.cannot_be_a_base() {
        return Err(TtsError::Config(format!("invalid provider URL: {url}")));
    }

    let query = format!(
        "ie={ie}&tl={tl}&client={client}&q={q}",
        ie = utf8_percent_encode(&settings.input_encoding, URI_COMPONENT),
        tl = utf8_percent_encode(&settings.language, URI_COMPONENT),
        client = utf8_percent_encode(&settings.client, URI_COMPONENT),
        q = utf8_percent_encode(text, URI_COMPONENT),
    );

    url.set_query(Some(&query));
    url.set_fragment(None);

    Ok(url)
}

#[async_trait]
impl TtsProvider for GoogleTranslateProvider {
    async fn synthesize(&self, request: SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let url = speech_url(&self.settings, &request.text)?;

        tracing::debug!(provider = %self.name, text_len = request.text.len(), "requesting speech");

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::error!(provider = %self.name, error = %e, "error proxying TTS request");
            TtsError::Transport(e.to_string())
        })?;

        let status = response.status();

        if status != StatusCode::OK {
            tracing::error!(provider = %self.name, %status, "TTS provider request failed");
            return Err(TtsError::ProviderStatus(status));
        }

        let provider = self.name.clone();
        let audio = response
            .bytes_stream()
            .map(move |chunk| {
                chunk.map_err(|e| {
                    tracing::error!(provider = %provider, error = %e, "audio stream from provider broke off");
                    TtsError::Stream(e.to_string())
                })
            })
            .boxed();

        Ok(SpeechResponse { audio })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
