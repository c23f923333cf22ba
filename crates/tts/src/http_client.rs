use std::time::Duration;

use reqwest::Client;

/// Build the outbound client used for provider calls
///
/// Only connection-level knobs are set. No total request timeout applies, so an
/// audio body streams for as long as the provider keeps sending.
pub fn http_client() -> reqwest::Result<Client> {
    Client::builder()
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .build()
}
