//! Replays recorded face-landmark streams and prints the detected head gestures.

use anyhow::{Context, Result};
use clap::Parser;
use head_gesture::{
    config::Config,
    gesture_window::ClassificationTiming,
    overlay::OverlaySession,
    replay::{replay, Recording},
};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded landmark stream (YAML)
    recording: String,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<String>,

    /// Commit gestures at window close instead of at the next baseline
    #[arg(long)]
    immediate: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path);
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };
    if args.immediate {
        config.gesture.timing = ClassificationTiming::Immediate;
    }
    config.validate()?;

    let recording = Recording::from_file(&args.recording)
        .with_context(|| format!("Failed to load recording {}", args.recording))?;

    let mut session = OverlaySession::new(&config.gesture);
    for transition in replay(&mut session, &recording)? {
        println!("{} {}", transition.timestamp_ms, transition.state);
    }
    println!("final {}", session.label());

    Ok(())
}
