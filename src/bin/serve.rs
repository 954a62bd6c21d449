//! Equity Server Binary
//!
//! Serves `POST /equity` over HTTP.

use clap::Parser;
use holdem_equity::*;

#[derive(Parser)]
#[command(about = "Serve equity queries over HTTP")]
struct Args {
    #[arg(long, default_value = SERVER_BIND)]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    log();
    server::Server::run(&Args::parse().bind).await
}
