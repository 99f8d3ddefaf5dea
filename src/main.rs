use clap::Parser;
use std::path::PathBuf;
use toggletip::{config::TipOptions, dump, markup, script, TipController};
use tracing_subscriber::EnvFilter;

/// Enhance a markup fragment with accessible tooltip widgets and dump the
/// resulting tree.
#[derive(Parser)]
#[command(name = "toggletip", version, about)]
struct Args {
    /// Markup fragment to enhance.
    markup: PathBuf,

    /// JSON options file overriding attribute and class defaults.
    #[arg(long)]
    options: Option<PathBuf>,

    /// Event script replayed after enhancement, one event per line.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn main() -> toggletip::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let options = match &args.options {
        Some(path) => TipOptions::load(path)?,
        None => TipOptions::default(),
    };

    let doc = markup::parse_fragment_file(&args.markup)?;
    let mut controller = TipController::new(doc, options);
    let enhanced = controller.enhance_all()?;
    tracing::info!("Enhanced {} tooltip host(s)", enhanced);

    if let Some(path) = &args.script {
        let contents = std::fs::read_to_string(path)?;
        let steps = script::run_script(&mut controller, &contents)?;
        tracing::info!("Replayed {} event(s)", steps);
    }

    print!("{}", dump::dump_tree(&controller));
    Ok(())
}
