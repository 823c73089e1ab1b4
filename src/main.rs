use std::path::PathBuf;

use clap::{Parser, Subcommand};
use egui::Vec2;

use slipstream::errors::ReplayError;
use slipstream::render::{export_svg, render_frame_svg};
use slipstream::session::{FileRaceSource, RaceDataSource, Selection};
use slipstream::ui::replay::{ReplayApp, config::AppConfig};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a recorded session in a window
    Replay {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long)]
        event: String,

        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// Export one frame of a session as an SVG document
    Export {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long)]
        event: String,

        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long, default_value_t = 0)]
        frame: usize,

        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
    /// List the events with recorded sessions for a year
    Events {
        #[arg(short, long)]
        year: u16,

        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },
}

fn source_for(data_dir: Option<PathBuf>) -> Result<FileRaceSource, ReplayError> {
    match data_dir {
        Some(dir) => Ok(FileRaceSource::new(dir)),
        None => FileRaceSource::new_default(),
    }
}

fn replay(year: u16, event: &str, data_dir: Option<PathBuf>) -> Result<(), ReplayError> {
    let selection = Selection::new(year, event);
    let session = source_for(data_dir)?.load(&selection)?;

    let app_config = AppConfig::from_local_file().unwrap_or_default();
    let surface = app_config.surface.clone();
    let window_position = app_config.replay_window_position.clone();

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options
        .viewport
        .with_inner_size(Vec2::new(
            surface.surface_size.0 as f32,
            surface.surface_size.1 as f32 + 40.,
        ))
        .with_position(window_position);

    eframe::run_native(
        "Slipstream",
        native_options,
        Box::new(move |cc| Ok(Box::new(ReplayApp::new(session, selection, app_config, cc)))),
    )
    .expect("could not start app");
    Ok(())
}

fn export(
    year: u16,
    event: &str,
    output: &PathBuf,
    frame: usize,
    data_dir: Option<PathBuf>,
) -> Result<(), ReplayError> {
    let selection = Selection::new(year, event);
    let session = source_for(data_dir)?.load(&selection)?;

    let surface = AppConfig::from_local_file().unwrap_or_default().surface;
    let document = render_frame_svg(&session, frame, &surface)?;
    export_svg(output, &document)
}

fn events(year: u16, data_dir: Option<PathBuf>) -> Result<(), ReplayError> {
    for event in source_for(data_dir)?.available_events(year)? {
        println!("{event}");
    }
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");
    match &cli.command {
        Commands::Replay {
            year,
            event,
            data_dir,
        } => replay(*year, event, data_dir.clone()).expect("Error while replaying session"),
        Commands::Export {
            year,
            event,
            output,
            frame,
            data_dir,
        } => export(*year, event, output, *frame, data_dir.clone())
            .expect("Error while exporting frame"),
        Commands::Events { year, data_dir } => {
            events(*year, data_dir.clone()).expect("Error while listing events")
        }
    };
}
