//! Runs the relay router on an ephemeral port

use std::net::SocketAddr;

use relay_config::Config;
use relay_server::Server;
use tokio_util::sync::CancellationToken;
use url::Url;

/// A relay instance serving on `127.0.0.1`
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Build the router from `config` and serve it until dropped
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let router = Server::new(&config)?.into_router();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let shutdown = CancellationToken::new();
        let stop = shutdown.clone();

        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move { stop.cancelled().await })
                .await;
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
        })
    }

    /// Absolute URL for `path` (which may include a query string)
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// `/tts` URL carrying `text`, encoded the way a browser form would
    pub fn tts_url(&self, text: &str) -> Url {
        let mut url = Url::parse(&self.url("/tts")).expect("valid URL");
        url.query_pairs_mut().append_pair("text", text);
        url
    }

    /// GET `path` on the relay
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.expect("relay reachable")
    }

    /// GET `/tts` for `text`
    pub async fn tts(&self, text: &str) -> reqwest::Response {
        self.client.get(self.tts_url(text)).send().await.expect("relay reachable")
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
