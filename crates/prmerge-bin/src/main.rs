use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use prmerge_platform::{is_windows, HostProbe, HostReport};

#[derive(Parser, Debug)]
#[command(name = "prmerge")]
#[command(about = "Host platform probe for the pull-request merge tooling")]
#[command(version)]
struct Cli {
    /// Emit the host report as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "PRMERGE_LOG_LEVEL", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print whether this host is Windows; exit 0 when it is, 1 otherwise
    IsWindows,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    info!(
        "prmerge v{} (os={}, arch={})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH,
    );

    match cli.command {
        Some(Commands::IsWindows) => {
            let windows = is_windows();
            println!("{}", windows);
            if !windows {
                std::process::exit(1);
            }
        }
        None => {
            let report = HostReport::collect(&HostProbe);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("os:       {}", report.os_name);
                println!("arch:     {}", report.arch);
                println!("hostname: {}", report.hostname);
                println!("windows:  {}", report.windows);
            }
        }
    }

    Ok(())
}
