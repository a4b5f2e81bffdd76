// SPDX-FileCopyrightText: 2026 Posy Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Posy - a Telegram storefront assistant for a Shopify flower shop.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod check;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use posy_config::PosyConfig;

/// Posy - a Telegram storefront assistant for a Shopify flower shop.
#[derive(Parser, Debug)]
#[command(name = "posy", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the Telegram bot (default).
    Serve,
    /// Validate configuration and print a summary.
    CheckConfig,
    /// Fetch one product from the catalog source and print it.
    Probe {
        /// Product handle.
        handle: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => posy_config::load_and_validate_path(path),
        None => posy_config::load_and_validate(),
    };
    let config: PosyConfig = match loaded {
        Ok(config) => config,
        Err(errors) => {
            posy_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_serve(config).await,
        Commands::CheckConfig => {
            check::run_check_config(&config);
            Ok(())
        }
        Commands::Probe { handle } => check::run_probe(&config, &handle).await,
    };

    if let Err(e) = result {
        eprintln!("posy: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::parse_from(["posy"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn probe_takes_a_handle_and_global_config() {
        let cli = Cli::parse_from(["posy", "probe", "red-roses", "--config", "shop.toml"]);
        match cli.command {
            Some(Commands::Probe { handle }) => assert_eq!(handle, "red-roses"),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, Some(PathBuf::from("shop.toml")));
    }

    #[test]
    fn check_config_uses_kebab_case() {
        let cli = Cli::parse_from(["posy", "check-config"]);
        assert!(matches!(cli.command, Some(Commands::CheckConfig)));
    }
}
