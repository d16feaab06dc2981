use std::io::Read;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use circuitlink::config::EditorConfig;
use circuitlink::editor::EditorSession;
use circuitlink::scene::demo_circuit;
use circuitlink::script::{load_script, parse_script, replay};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Replay wire-editing events on the demo circuit and print the resulting frame as JSON",
    long_about = None
)]
struct Cli {
    /// Event script, one JSON step per line (reads stdin when omitted)
    #[arg(short = 's', long = "script", value_name = "SCRIPT_FILE")]
    script: Option<Utf8PathBuf>,

    /// Editor configuration (JSON)
    #[arg(short = 'c', long = "config", value_name = "CONFIG_FILE")]
    config: Option<Utf8PathBuf>,

    /// Print the frame on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EditorConfig::load(path)?,
        None => EditorConfig::default(),
    };
    let steps = match &cli.script {
        Some(path) => load_script(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Read script from stdin")?;
            parse_script(&text)?
        }
    };

    let mut session = EditorSession::new(demo_circuit()?, config);
    let rejected = replay(&mut session, steps);
    if rejected > 0 {
        tracing::warn!(rejected, "some script steps were ignored");
    }

    let frame = session.frame();
    let json = if cli.compact {
        serde_json::to_string(&frame)?
    } else {
        serde_json::to_string_pretty(&frame)?
    };
    println!("{}", json);
    Ok(())
}
