//! Atelier CLI binary.
//!
//! This binary exposes the headless parts of Atelier:
//! - Evaluate the access gate for a post and a viewer
//! - Resolve a submitted media order the way the backend applies it

use atelier::{AtelierConfig, init_tracing};
use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, handle_access, handle_apply_order};

    // Parse command-line arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;

    let config = AtelierConfig::load_with(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Access {
            post,
            roles,
            viewer,
            author,
            surface,
        } => {
            handle_access(&config, &post, &roles, viewer, author, surface.into())?;
        }

        Commands::ApplyOrder {
            existing,
            removed,
            new_count,
            order,
            json,
        } => {
            handle_apply_order(&existing, &removed, new_count, &order, json)?;
        }
    }

    Ok(())
}
