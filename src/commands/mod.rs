pub mod evaluate;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    evaluate: evaluate::EvaluateArgs,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        init_tracing();
        evaluate::cmd(cli.evaluate).await
    }
}

/// Installs a `tracing` subscriber when debug output is requested.
/// `RUST_LOG` takes precedence; otherwise this crate logs at debug level.
fn init_tracing() {
    if !is_debug_mode() {
        return;
    }
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("response_times=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
