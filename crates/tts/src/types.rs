use axum::body::Body;
use axum::response::Response;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use http::{HeaderValue, header};

use crate::error::TtsError;

/// Content type announced for every successful response
pub const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

/// Audio body as it arrives from the provider
pub type AudioStream = BoxStream<'static, Result<Bytes, TtsError>>;

/// Speech request extracted from the `text` query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechRequest {
    /// Text to synthesize, already URL-decoded
    pub text: String,
}

/// Audio response streamed back from a TTS provider
pub struct SpeechResponse {
    pub audio: AudioStream,
}

impl SpeechResponse {
    /// Convert into a streaming HTTP response with fixed audio headers
    pub fn into_response(self) -> Response {
        let mut response = Response::new(Body::from_stream(self.audio));

        let headers = response.headers_mut();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(AUDIO_CONTENT_TYPE));
        headers.insert(header::CONTENT_DISPOSITION, HeaderValue::from_static("inline"));

        response
    }
}

impl std::fmt::Debug for SpeechResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechResponse").finish_non_exhaustive()
    }
}
