use std::path::PathBuf;

use eyre::{Context, Result, ensure};
use itertools::Itertools;
use serde::Serialize;
use tumblecube_core::{CubeState, CubieId, MoveSequence, PerFace, Position, Rgb};
use tumblecube_view::{ManualHost, MountedCube, RenderData};
use tumbleprefs::Preferences;
use web_time::Duration;

/// Tumbling cube command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Run the animation and print render data as JSON lines.
    Run {
        /// Simulated time to run for, in seconds.
        #[arg(short, long, default_value_t = 10.0)]
        seconds: f64,
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,
        /// Print render data every N frames.
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        every: u32,
        /// Simulate the pointer hovering over the cube.
        #[arg(long)]
        hover: bool,
        /// YAML preferences file layered over the defaults.
        #[arg(short, long)]
        prefs: Option<PathBuf>,
    },
    /// Apply a sequence of moves to a solved cube and print the result as
    /// JSON.
    Apply {
        /// Moves in standard notation, such as `R U R' U'`.
        notation: Vec<String>,
        /// YAML preferences file layered over the defaults.
        #[arg(short, long)]
        prefs: Option<PathBuf>,
    },
    /// Print the effective preferences as YAML.
    Prefs {
        /// YAML preferences file layered over the defaults.
        #[arg(short, long)]
        prefs: Option<PathBuf>,
    },
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Run {
            seconds,
            fps,
            every,
            hover,
            prefs,
        } => {
            ensure!(
                seconds.is_finite() && seconds >= 0.0,
                "seconds must be nonnegative",
            );
            let prefs = load_prefs(prefs)?;
            let host = ManualHost::new();
            let cube = MountedCube::mount(&host, prefs);
            cube.set_hovered(hover);

            let delta = Duration::from_secs_f64(1.0 / f64::from(fps));
            let frame_count = (seconds * f64::from(fps)).round() as u64;
            log::info!("running {frame_count} frames at {fps} fps");
            for frame in 1..=frame_count {
                host.advance(delta);
                if frame % u64::from(every) == 0 {
                    let sim = cube.simulation();
                    write_json_line(&FrameReport {
                        frame,
                        time: host.now().as_secs_f64(),
                        commits: sim.commit_count(),
                        render: sim.render_data(),
                    })?;
                }
            }
            cube.unmount();
            Ok(())
        }

        Subcommand::Apply { notation, prefs } => {
            let prefs = load_prefs(prefs)?;
            let moves: MoveSequence = notation
                .join(" ")
                .parse()
                .wrap_err("error parsing moves")?;
            let state = CubeState::new().apply_moves(moves.moves().iter().copied());

            let cubies = state
                .cubies()
                .iter()
                .map(|cubie| CubieReport {
                    id: cubie.id,
                    position: cubie.position,
                    stickers: tumblecube_core::resolve_sticker_colors(
                        cubie.id,
                        cubie.orientation,
                        &prefs.colors,
                    ),
                })
                .collect_vec();
            write_json_output(&ApplyReport {
                moves: moves.to_string(),
                solved: state.is_solved(),
                cubies,
            })
        }

        Subcommand::Prefs { prefs } => {
            let prefs = load_prefs(prefs)?;
            print!("{}", prefs.to_yaml()?);
            Ok(())
        }
    }
}

fn load_prefs(path: Option<PathBuf>) -> Result<Preferences> {
    match path {
        Some(path) => Preferences::try_load(Some(&path))
            .wrap_err_with(|| format!("error loading preferences from {}", path.display())),
        None => Ok(Preferences::default()),
    }
}

#[derive(Serialize)]
struct FrameReport<'a> {
    frame: u64,
    time: f64,
    commits: usize,
    render: &'a RenderData,
}

#[derive(Serialize)]
struct ApplyReport {
    moves: String,
    solved: bool,
    cubies: Vec<CubieReport>,
}

#[derive(Serialize)]
struct CubieReport {
    id: CubieId,
    position: Position,
    stickers: PerFace<Option<Rgb>>,
}

fn write_json_line<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }
}
