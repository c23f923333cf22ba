use axum::extract::FromRequestParts;
use http::request::Parts;
use percent_encoding::percent_decode_str;

use crate::{error::TtsError, types::SpeechRequest};

/// Query parameter carrying the text to speak
const TEXT_PARAM: &str = "text";

/// Extractor for the `text` query parameter
///
/// Rejects with [`TtsError::MissingText`] when the parameter is absent or empty.
pub struct ExtractText(pub SpeechRequest);

impl<S> FromRequestParts<S> for ExtractText
where
    S: Send + Sync,
{
    type Rejection = TtsError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let text = text_param(parts.uri.query()).ok_or(TtsError::MissingText)?;
        Ok(Self(SpeechRequest { text }))
    }
}

/// Decoded `text` value from a raw query string; `None` when missing or empty
///
/// A repeated parameter yields every value joined with `,`.
fn text_param(query: Option<&str>) -> Option<String> {
    let values: Vec<String> = query?
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == TEXT_PARAM).then(|| decode_component(value))
        })
        .collect();

    Some(values.join(",")).filter(|text| !text.is_empty())
}

/// Percent-decode one query component with `+` read as a space
///
/// Malformed escapes and invalid UTF-8 leave the component undecoded, so the
/// raw text is what gets forwarded.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");

    if has_malformed_escape(&spaced) {
        return spaced;
    }

    match percent_decode_str(&spaced).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();

    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'%'
            && !bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}
