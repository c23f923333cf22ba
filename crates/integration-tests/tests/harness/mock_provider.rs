//! Mock speech provider for integration tests
//!
//! Serves `/translate_tts` like Google Translate would, recording every query
//! string it receives.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use bytes::Bytes;
use futures_util::StreamExt;
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

/// Path the mock answers on
pub const SPEECH_PATH: &str = "/translate_tts";

/// What the mock sends back
#[derive(Clone)]
enum Reply {
    /// 200 with the given audio in one body
    Audio(Bytes),
    /// Arbitrary status with a provider-specific body
    Status(StatusCode, &'static str),
    /// 200 with `first`, then `rest` only once [`MockProvider::release`] is called
    Gated { first: Bytes, rest: Bytes },
    /// 200 with `first`, then the body errors out once released
    Broken { first: Bytes },
}

/// Mock provider that returns predictable responses
pub struct MockProvider {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    reply: Reply,
    request_count: AtomicU32,
    queries: Mutex<Vec<String>>,
    gate: Notify,
}

impl MockProvider {
    /// Answer every request with 200 and `audio`
    pub async fn start_with_audio(audio: impl Into<Bytes>) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Audio(audio.into())).await
    }

    /// Answer every request with `status` and a provider-specific body
    pub async fn start_with_status(status: StatusCode) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Status(status, "upstream said no")).await
    }

    /// Send `first` immediately and hold `rest` back until released
    pub async fn start_gated(first: &'static [u8], rest: &'static [u8]) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Gated {
            first: Bytes::from_static(first),
            rest: Bytes::from_static(rest),
        })
        .await
    }

    /// Send `first` immediately and break the connection once released
    pub async fn start_broken(first: &'static [u8]) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Broken {
            first: Bytes::from_static(first),
        })
        .await
    }

    async fn start_inner(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            reply,
            request_count: AtomicU32::new(0),
            queries: Mutex::new(Vec::new()),
            gate: Notify::new(),
        });

        let app = Router::new()
            .route(SPEECH_PATH, routing::get(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Provider URL to put in `tts.base_url`
    pub fn speech_url(&self) -> String {
        format!("http://{}{SPEECH_PATH}", self.addr)
    }

    /// Number of speech requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::SeqCst)
    }

    /// Raw query strings in arrival order
    pub fn queries(&self) -> Vec<String> {
        self.state.queries.lock().unwrap().clone()
    }

    /// Let a gated reply send the rest of its body
    pub fn release(&self) {
        self.state.gate.notify_one();
    }
}

impl Drop for MockProvider {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech(State(state): State<Arc<MockState>>, RawQuery(query): RawQuery) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);
    state.queries.lock().unwrap().push(query.unwrap_or_default());

    match &state.reply {
        Reply::Audio(audio) => ([(header::CONTENT_TYPE, "audio/mpeg")], audio.clone()).into_response(),
        Reply::Status(status, body) => (*status, *body).into_response(),
        Reply::Gated { first, rest } => {
            let first = first.clone();
            let rest = rest.clone();
            let gated = Arc::clone(&state);

            let body = futures_util::stream::once(async move { Ok::<_, std::io::Error>(first) }).chain(
                futures_util::stream::once(async move {
                    gated.gate.notified().await;
                    Ok(rest)
                }),
            );

            ([(header::CONTENT_TYPE, "audio/mpeg")], Body::from_stream(body)).into_response()
        }
        Reply::Broken { first } => {
            let first = first.clone();
            let gated = Arc::clone(&state);

            let body = futures_util::stream::once(async move { Ok::<_, std::io::Error>(first) }).chain(
                futures_util::stream::once(async move {
                    gated.gate.notified().await;
                    Err(std::io::Error::new(std::io::ErrorKind::ConnectionReset, "speaker unplugged"))
                }),
            );

            ([(header::CONTENT_TYPE, "audio/mpeg")], Body::from_stream(body)).into_response()
        }
    }
}
