use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

const PRODUCTS_FILE: &str = "products.json";
const CARTS_FILE: &str = "carts.json";

/// Runtime settings, read from the command line with environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog_cart", about = "Product catalog and shopping cart HTTP API")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory holding products.json and carts.json
    #[arg(long, env = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Requests each collection actor may queue before senders wait
    #[arg(long, default_value_t = 32)]
    pub channel_capacity: usize,
}

impl Config {
    /// Loopback on an ephemeral port over the given data directory.
    #[cfg(test)]
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            data_dir: data_dir.into(),
            channel_capacity: 32,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    pub fn carts_path(&self) -> PathBuf {
        self.data_dir.join(CARTS_FILE)
    }
}
