//! Tracemon server binary
//!
//! ```bash
//! tracemon                                  # serve with ./tracemon.json
//! tracemon serve --port 8080 --trace-dir /var/lib/traces
//! tracemon check ./trace-files/3.txt        # one verdict as JSON
//! tracemon config show                      # effective configuration
//! ```

use clap::Parser;
use tracemon_server::{Cli, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    router::route(cli).await
}
