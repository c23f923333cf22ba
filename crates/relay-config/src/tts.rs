use serde::Deserialize;
use url::Url;

/// Google Translate's public speech endpoint
pub const DEFAULT_PROVIDER_URL: &str = "https://translate.google.com/translate_tts";

/// Upstream TTS provider settings
///
/// Every field is fixed for the lifetime of the process; callers only ever
/// supply the text.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Provider endpoint, without a query string
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Target language sent as `tl`
    #[serde(default = "default_language")]
    pub language: String,
    /// Client identifier sent as `client`
    #[serde(default = "default_client")]
    pub client: String,
    /// Input encoding sent as `ie`
    #[serde(default = "default_input_encoding")]
    pub input_encoding: String,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            client: default_client(),
            input_encoding: default_input_encoding(),
        }
    }
}

#[allow(clippy::expect_used)]
fn default_base_url() -> Url {
    Url::parse(DEFAULT_PROVIDER_URL).expect("default provider URL must parse")
}

fn default_language() -> String {
    "hi".to_owned()
}

fn default_client() -> String {
    "tw-ob".to_owned()
}

fn default_input_encoding() -> String {
    "UTF-8".to_owned()
}
