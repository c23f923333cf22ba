use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use relay_config::Config;

/// TTS relay
#[derive(Debug, Parser)]
#[command(name = "tts-relay", about = "Streaming proxy for text-to-speech audio")]
pub struct Args {
    /// Path to configuration file; built-in defaults apply when omitted
    #[arg(short, long, env = "TTS_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the full listen address
    #[arg(long, env = "TTS_RELAY_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Port to listen on (all interfaces); 3010 unless the config file says otherwise
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log filter directives, overriding the configured filter
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,
}

impl Args {
    /// Load the configuration file, or fall back to defaults
    pub fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }

    /// Pick the listen address: `--listen`, then `--port`/`PORT`, then the file, then port 3010
    pub fn listen_address(&self, config: &Config) -> SocketAddr {
        if let Some(listen) = self.listen {
            return listen;
        }

        if let Some(port) = self.port {
            return SocketAddr::from(([0, 0, 0, 0], port));
        }

        config.server.effective_listen_address()
    }
}
