use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Mergington High School extracurricular activity sign-up service
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "MERGINGTON_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "MERGINGTON_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "MERGINGTON_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// JSON file of activities to start with instead of the built-in set
    #[arg(long, env = "MERGINGTON_SEED_FILE")]
    pub seed_file: Option<PathBuf>,
}

impl Args {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
