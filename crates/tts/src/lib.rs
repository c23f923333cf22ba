#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Router, extract::State, response::Response, routing::get};

pub use error::{MISSING_TEXT_MESSAGE, PROVIDER_FAILURE_MESSAGE, Result, TRANSPORT_FAILURE_MESSAGE, TtsError};
pub use provider::TtsProvider;
pub use request::ExtractText;
pub use server::{Server, TtsServerBuilder};
pub use types::{AUDIO_CONTENT_TYPE, AudioStream, SpeechRequest, SpeechResponse};

/// Route the proxy is mounted on
pub const TTS_PATH: &str = "/tts";

/// Build the TTS server from configuration
pub fn build_server(config: &relay_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for TTS
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route(TTS_PATH, get(speak))
}

/// Proxy one speech request and stream the audio back
async fn speak(State(server): State<Arc<Server>>, ExtractText(request): ExtractText) -> Result<Response> {
    tracing::debug!(
        provider = server.provider_name(),
        text_len = request.text.len(),
        "TTS handler called"
    );

    let response = server.synthesize(request).await?;

    Ok(response.into_response())
}
