use std::net::TcpListener as StdTcpListener;
use std::path::PathBuf;

use anyhow::Context;
use portfolio_host::api::{self, AppState};
use portfolio_host::config::Config;
use tokio::net::TcpListener;
use tokio::signal;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_usage() {
    println!("portfolio-host - serve the portfolio page");
    println!();
    println!("USAGE:");
    println!("    portfolio-host [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config PATH    Config file (default: ~/.config/portfolio/config.toml)");
    println!("    -p, --port PORT      Override the listening port");
    println!("    -h, --help           Print help information");
    println!("    -v, --version        Print version");
}

fn print_connection_info(bind: &str, port: u16) {
    eprintln!();
    eprintln!("  \x1b[1;32m[http]\x1b[0m   Serving portfolio on port \x1b[1;96m{port}\x1b[0m");
    eprintln!("  \x1b[1;37m>\x1b[0m Open: \x1b[4;96mhttp://{bind}:{port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mPress Ctrl+C to stop\x1b[0m");
    eprintln!();
}

/// Graceful start: Check if port is available
fn check_port_available(bind: &str, port: u16) -> bool {
    StdTcpListener::bind(format!("{bind}:{port}")).is_ok()
}

/// Graceful start: Find available port starting from default
fn find_available_port(bind: &str, start: u16) -> Option<u16> {
    (start..start.saturating_add(10)).find(|&port| check_port_available(bind, port))
}

struct Args {
    config_path: Option<PathBuf>,
    port: Option<u16>,
}

enum Command {
    Serve(Args),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut parsed = Args {
        config_path: None,
        port: None,
    };

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--config" | "-c" => {
                let path = iter.next().context("--config needs a path")?;
                parsed.config_path = Some(PathBuf::from(path));
            }
            "--port" | "-p" => {
                let port = iter.next().context("--port needs a value")?;
                parsed.port = Some(port.parse().with_context(|| format!("Invalid port: {port}"))?);
            }
            other => anyhow::bail!("Unknown argument: {other}"),
        }
    }
    Ok(Command::Serve(parsed))
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let raw_args: Vec<String> = std::env::args().collect();
    let args = match parse_args(&raw_args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("portfolio-host {VERSION}");
            return Ok(());
        }
        Command::Serve(args) => args,
    };

    // === LOAD CONFIGURATION ===
    let config_path = match args.config_path {
        Some(path) => path,
        None => {
            let path = Config::default_config_path();
            if let Err(e) = Config::create_default_if_missing(&path) {
                tracing::warn!(error = %e, "Could not write default config");
            }
            path
        }
    };
    let mut config = Config::load_or_default(&config_path);
    if let Some(port) = args.port {
        config.server.port = port;
    }
    tracing::info!(path = %config_path.display(), "Configuration loaded");

    // === GRACEFUL START ===
    let bind = config.server.bind.clone();
    let port = if check_port_available(&bind, config.server.port) {
        config.server.port
    } else {
        tracing::warn!(port = config.server.port, "Port in use, finding alternative");
        find_available_port(&bind, config.server.port.saturating_add(1)).with_context(|| {
            format!("No available ports near {}", config.server.port)
        })?
    };
    config.server.port = port;

    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.addr()))?;

    print_connection_info(&bind, port);

    let app = api::router(AppState::new(config.page));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}
