//! SHOWCASE - Action Button Timeline
//!
//! Plays one click of the action button and prints what happens when.
//!
//! Usage:
//!   showcase                          # default preset, medium, virtual clock
//!   showcase --size large --no-icon
//!   showcase --presets-file presets.toml --preset slow --frame-ms 16
//!   showcase --realtime               # wait out the run on the wall clock

use clap::Parser;
use showcase::timeline::{record_timeline, sample_widths};
use showcase_shared::SystemClock;
use showcase_ui::{
    ButtonConfig, PresetBook, SequenceDriver, Sequencer, SequencerEvent, SizeKind,
    SHOWCASE_PRESET,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Action button timeline printer
#[derive(Parser)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Timing preset name
    #[arg(long, default_value = SHOWCASE_PRESET)]
    preset: String,

    /// TOML file with extra presets and size overrides
    #[arg(long)]
    presets_file: Option<PathBuf>,

    /// Button size: small, medium or large
    #[arg(long, default_value = "medium")]
    size: SizeKind,

    /// Render without the status icon
    #[arg(long)]
    no_icon: bool,

    /// Honour a reduced-motion preference
    #[arg(long)]
    reduced_motion: bool,

    /// Render the success state regardless of the run
    #[arg(long)]
    forced_success: bool,

    /// Also sample the shell width every N ms
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    frame_ms: Option<u32>,

    /// Run against the wall clock instead of a virtual one
    #[arg(long)]
    realtime: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let book = match &cli.presets_file {
        Some(path) => match PresetBook::from_toml_path(path) {
            Ok(book) => book,
            Err(e) => {
                tracing::error!("Failed to load presets: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => PresetBook::builtin(),
    };

    let config = match book.button(&cli.preset, cli.size) {
        Ok(config) => config
            .with_icon(!cli.no_icon)
            .with_reduced_motion(cli.reduced_motion)
            .with_forced_success(cli.forced_success),
        Err(e) => {
            let known: Vec<&str> = book.preset_names().collect();
            tracing::error!("{e} (known presets: {})", known.join(", "));
            return ExitCode::FAILURE;
        }
    };

    println!(
        "{} [{} / {}]{}{}",
        config.label,
        cli.preset,
        config.size.name(),
        if config.show_icon { "" } else { " no-icon" },
        if config.reduced_motion { " reduced-motion" } else { "" },
    );

    if cli.realtime {
        run_realtime(config.clone());
    } else {
        for event in record_timeline(config.clone()) {
            print_event(&event, &config);
        }
    }

    if let Some(frame_ms) = cli.frame_ms {
        println!();
        println!("{:>7}  {:<18} {:>8}", "t (ms)", "phase", "width");
        for sample in sample_widths(config.clone(), frame_ms) {
            println!(
                "{:>7}  {:<18} {:>8.1}",
                sample.at_ms, sample.phase, sample.width
            );
        }
    }

    if config.forced_success {
        let view = Sequencer::new(config).view();
        println!(
            "forced success: {} shown, tick={}, fill {} on {}",
            view.state.phase,
            view.show_tick_glyph,
            view.shell.foreground.to_css_hex(),
            view.shell.fill.to_css_hex()
        );
        if let Some(icon) = view.icon {
            let layer = if icon.done.active { icon.done } else { icon.pending };
            let (w, h) = layer.view_box;
            println!("glyph {:?} viewBox 0 0 {w} {h}", layer.glyph);
        }
    }

    ExitCode::SUCCESS
}

fn run_realtime(config: ButtonConfig) {
    let mut driver = SequenceDriver::new(Sequencer::new(config.clone()), SystemClock::new());
    driver.trigger();
    driver.run_to_completion(|event| print_event(event, &config));
}

fn print_event(event: &SequencerEvent, config: &ButtonConfig) {
    match *event {
        SequencerEvent::PhaseEntered { phase, at_ms } => {
            println!("{at_ms:>7}  {phase}");
        }
        SequencerEvent::SuccessTextShown { at_ms } => {
            println!("{at_ms:>7}  \"{}\" visible", config.success_label);
        }
    }
}
