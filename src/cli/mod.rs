//! CLI module for the QR Code Gateway
//!
//! Provides subcommands:
//! - `serve`: run the HTTP API
//! - `render`: generate a single QR code image to a file

pub mod render;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// QR Code Gateway - API key verification and QR code generation
#[derive(Parser)]
#[command(name = "qr-code-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Render one QR code image and write it to a file
    Render(render::RenderArgs),
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}
