//! Brain Freeze entry point
//!
//! Runs a headless session: steps the model at a simulated frame rate and logs
//! drips until the time cap or game over.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use brain_freeze::{Autoplay, FrameDriver, GameEvent, GameModel, GameSettings};

/// Headless Brain Freeze session
#[derive(Debug, Parser)]
#[command(name = "brain-freeze", version, about)]
struct Args {
    /// Seed for zone selection (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of drip zones on the ice cream
    #[arg(long, default_value_t = 8)]
    zones: usize,
    /// Stop after this many simulated seconds
    #[arg(long, default_value_t = 120.0)]
    seconds: f32,
    /// JSON settings file (missing fields keep their defaults)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Let the demo player lick urgent zones
    #[arg(long)]
    autoplay: bool,
    /// Simulated frame rate (1-1000)
    #[arg(long, default_value_t = 60.0, value_parser = parse_fps)]
    fps: f32,
    /// Print the effective settings as JSON and exit
    #[arg(long)]
    dump_settings: bool,
}

/// Above 1000 fps a frame is shorter than the driver's minimum frame
const FPS_RANGE: std::ops::RangeInclusive<f32> = 1.0..=1000.0;

fn parse_fps(value: &str) -> Result<f32, String> {
    let fps: f32 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if !FPS_RANGE.contains(&fps) {
        return Err(format!(
            "frame rate must be between {} and {}",
            FPS_RANGE.start(),
            FPS_RANGE.end()
        ));
    }
    Ok(fps)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => match GameSettings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{}", err);
                return ExitCode::FAILURE;
            }
        },
        None => GameSettings::default(),
    };

    if args.dump_settings {
        return match settings.to_json() {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{}", err);
                ExitCode::FAILURE
            }
        };
    }

    let seed = args.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Brain Freeze (headless) starting with seed {}", seed);

    let model = GameModel::new(settings, args.zones, seed);
    let mut driver = FrameDriver::new(model);
    if args.autoplay {
        driver = driver.with_autoplay(Autoplay::default());
    }

    let frame_dt = 1.0 / args.fps;
    let mut drips = 0usize;
    while driver.is_running() && driver.elapsed() < args.seconds {
        for event in driver.update(frame_dt) {
            match event {
                GameEvent::Drip { zone } => {
                    drips += 1;
                    log::info!("[{:7.2}s] drip at zone {}", driver.elapsed(), zone);
                }
                GameEvent::GameOver => {
                    log::info!("[{:7.2}s] game over", driver.elapsed());
                }
            }
        }
    }

    let model = driver.model();
    println!(
        "{:.2}s simulated, {} drips, ice cream {}/{}, brain freeze {:.1}/{:.1}{}",
        driver.elapsed(),
        drips,
        model.icecream_integrity(),
        model.icecream_capacity(),
        model.brain_freeze(),
        model.brain_freeze_capacity(),
        if model.is_game_over() { ", game over" } else { "" }
    );
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_in_range() {
        assert_eq!(parse_fps("60"), Ok(60.0));
        assert_eq!(parse_fps("1000"), Ok(1000.0));
    }

    #[test]
    fn test_fps_out_of_range_rejected() {
        assert!(parse_fps("1e10").is_err());
        assert!(parse_fps("0").is_err());
        assert!(parse_fps("-30").is_err());
        assert!(parse_fps("NaN").is_err());
        assert!(parse_fps("fast").is_err());
    }

    #[test]
    fn test_cli_rejects_huge_fps() {
        assert!(Args::try_parse_from(["brain-freeze", "--fps", "1e10"]).is_err());
        let args = Args::try_parse_from(["brain-freeze", "--fps", "120"]).unwrap();
        assert_eq!(args.fps, 120.0);
    }
}
