use crate::runtime;
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "likes_client",
    about = "Demonstration client for the BeerLikes gRPC service",
    version,
    after_help = "\
    EXAMPLES:
        likes_client
        likes_client --host 127.0.0.1 --port 10000"
)]
struct Cli {
    /// Hostname or IP address of the BeerLikes server
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port number of the BeerLikes server
    #[arg(long, default_value_t = 10000)]
    port: u16,
}

/// Entry function for CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    runtime::runtime::run_likes_client(&cli.host, cli.port).await
}
