// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! The Time Space www API
//!

use clap::Parser;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::path::PathBuf;
use time_space_www_api::{Catalogue, prepare_api_router};

#[macro_use]
extern crate log;

/// Time Space www API entry point (serve the www JSON API)
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("time_space")
        .build();
    CombinedLogger::init(vec![TermLogger::new(
        if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    // Load the events to serve
    let catalogue = match &args.catalogue {
        Some(path) => {
            info!("Loading the catalogue at {path:?}");
            Catalogue::from_path(path)?
        }
        None => Catalogue::bundled()?,
    };
    info!("Serving events for {} locations", catalogue.len());

    // Get the router
    let api_router = prepare_api_router(catalogue);

    // Bind the listener for new connections
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    // Print the address
    println!("http://{addr}");

    // Serve the server
    axum::serve(listener, api_router).await?;
    Ok(())
}

/// Time Space CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Time Space www API server",
    after_help = "Without --catalogue the events bundled into the binary are served"
)]
pub struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// Path to a JSON catalogue of locations & events to serve instead
    #[arg(long)]
    pub catalogue: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    pub verbose: bool,
}
