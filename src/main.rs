mod game;

#[cfg(feature = "ui")]
mod ui;

use anyhow::Result;
use clap::Parser;

use game::{parse_moves, parse_placement, Command, GameEvent, Park};

#[derive(Parser)]
#[command(name = "theme_park")]
#[command(about = "Grid theme park game with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Move script to apply in headless mode (characters U/D/L/R)
    #[arg(long, default_value = "")]
    moves: String,

    /// Ride placement to apply before the moves, as kind:x,y
    /// (e.g. carousel:3,3); may be repeated
    #[arg(long = "place")]
    place: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui();
            return Ok(());
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    }

    run_headless(&cli.moves, &cli.place)
}

/// Run the game in headless mode (no graphics)
fn run_headless(moves: &str, placements: &[String]) -> Result<()> {
    env_logger::init();

    println!("Running theme park in headless mode...");
    println!();

    let mut park = Park::create_default_park();

    println!("Initial state:");
    park.print_summary();
    park.draw_map();
    println!();

    for spec in placements {
        let (kind, cell) = parse_placement(spec)?;
        narrate(park.apply(Command::SelectRide(kind)));
        narrate(park.apply(Command::PlaceRide { kind, cell }));
    }

    for command in parse_moves(moves)? {
        narrate(park.apply(command));
    }

    println!();
    println!("=== Final State ===");
    park.print_summary();
    park.draw_map();

    Ok(())
}

/// Print each game event the way the UI would surface it
fn narrate(events: Vec<GameEvent>) {
    for event in events {
        match event {
            GameEvent::RideVisited { name } => {
                println!("You have reached the {}!", name);
            }
            GameEvent::ItemCollected { reward, score } => {
                println!("Collected an item (+{}). Score: {}", reward, score);
            }
            GameEvent::RidePlaced { kind, cell, .. } => {
                println!(
                    "Placed a {} at ({}, {})",
                    kind.display_name(),
                    cell.x,
                    cell.y
                );
            }
        }
    }
}

#[cfg(feature = "ui")]
fn run_with_ui() {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    use game::{CANVAS_HEIGHT, CANVAS_WIDTH};

    println!("Starting Theme Park UI...");
    println!();
    println!("Controls:");
    println!("  Arrow keys  - Move the player");
    println!("  1/2/3       - Select a ride (or use the toolbar buttons)");
    println!("  Click       - Place the selected ride");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,theme_park=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Theme Park".into(),
                        resolution: (CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(ui::ThemeParkUiPlugin)
        .run();
}
