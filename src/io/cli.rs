//! Command-line interface for building margins and enumerating solvability

use crate::algorithm::executor::CanvasLoop;
use crate::algorithm::margin::build_margin_with_log;
use crate::algorithm::solvability::compute_solvability_matrix_with_progress;
use crate::finishing::{finish, solvability_animation};
use crate::io::configuration::{DEFAULT_CELL_SIZE, GIF_FRAME_DELAY_MS, SIDE_COUNT};
use crate::io::diagnostics::Transcript;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_canvas_png, export_matrix_png};
use crate::io::progress::{ConsoleLogger, ProgressManager, level_for};
use crate::io::visualization::LoopCapture;
use crate::spatial::Seed;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "marginweave")]
#[command(
    author,
    version,
    about = "Build transmission margins between symmetric corner patterns"
)]
/// Command-line arguments for the margin tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and all logs below error
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Run the four-sided canvas loop for a seed pair
    Build(BuildArgs),
    /// Build a single margin between two seeds' corner patterns
    Margin(MarginArgs),
    /// Enumerate which of the 256 seed pairs are solvable
    Solvability(SolvabilityArgs),
}

/// Arguments of `build`
#[derive(Args)]
pub struct BuildArgs {
    /// Start seed: four binary digits (e.g. 1001) or an integer 0-15
    #[arg(value_name = "START")]
    pub start: Seed,

    /// End seed: four binary digits or an integer 0-15
    #[arg(value_name = "END")]
    pub end: Seed,

    /// Leave the canvas in its final loop orientation
    #[arg(long = "no-upright", action = ArgAction::SetFalse)]
    pub upright: bool,

    /// Disable the directionality swap
    #[arg(long)]
    pub no_directionality: bool,

    /// Apply compression, inner corners, centre pull and gridlines afterwards
    #[arg(short, long)]
    pub finish: bool,

    /// Write the final canvas as PNG
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write an animated GIF of every embedding and rotation
    #[arg(short, long)]
    pub animate: Option<PathBuf>,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub delay: u32,
}

/// Arguments of `margin`
#[derive(Args)]
pub struct MarginArgs {
    /// Start seed: four binary digits or an integer 0-15
    #[arg(value_name = "START")]
    pub start: Seed,

    /// End seed: four binary digits or an integer 0-15
    #[arg(value_name = "END")]
    pub end: Seed,

    /// Disable the directionality swap
    #[arg(long)]
    pub no_directionality: bool,
}

/// Arguments of `solvability`
#[derive(Args)]
pub struct SolvabilityArgs {
    /// Write the matrix as a PNG bitmap
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write an animation of the matrix emerging, being framed and dissolving
    #[arg(short, long)]
    pub animate: Option<PathBuf>,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub delay: u32,
}

/// Runs one parsed command with logging and progress set up
pub struct CommandRunner {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl CommandRunner {
    /// Create a runner and install the console logger
    pub fn new(cli: Cli) -> Self {
        let progress_manager = ProgressManager::new();
        let logger = ConsoleLogger::new(
            level_for(cli.verbose, cli.quiet),
            progress_manager.multi_progress().clone(),
        );
        if !logger.install() {
            log::debug!("Logger already installed; keeping existing one");
        }
        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if an output path is invalid or an export fails
    pub fn run(&mut self) -> Result<()> {
        let show_progress = self.cli.should_show_progress();
        match &self.cli.command {
            Command::Build(args) => Self::run_build(args),
            Command::Margin(args) => {
                Self::run_margin(args);
                Ok(())
            }
            Command::Solvability(args) => {
                Self::run_solvability(args, show_progress, &mut self.progress_manager)
            }
        }
    }

    // Allow print for command output
    #[allow(clippy::print_stdout)]
    fn run_build(args: &BuildArgs) -> Result<()> {
        let mut canvas_loop = CanvasLoop::from_seed_pair(&args.start, &args.end)
            .with_directionality(!args.no_directionality);
        if args.animate.is_some() {
            canvas_loop.enable_capture(args.cell_size);
        }

        let outcome = canvas_loop.run();
        for record in canvas_loop.records() {
            let margin = &record.margin;
            println!(
                "== {} side ({}, {}) ==",
                record.side,
                margin.report().scheme(),
                if margin.swapped() { "swapped" } else { "forward" }
            );
            println!("{margin}");
            for issue in margin.issues() {
                println!("! {issue}");
            }
            println!();
        }

        if args.upright {
            canvas_loop.restore_orientation();
        }

        let mut canvas = canvas_loop.canvas().clone();
        if args.finish {
            if outcome.sides_built == SIDE_COUNT {
                finish(&mut canvas);
            } else {
                log::warn!(
                    "Skipping finishing: only {} margins were built",
                    outcome.sides_built
                );
            }
        }

        println!("{canvas}");
        if outcome.solved {
            println!("All {SIDE_COUNT} margins solved.");
        } else {
            println!("This pattern could not be solved.");
        }

        if let Some(path) = &args.output {
            export_canvas_png(&canvas, args.cell_size, path_str(path)?)?;
            log::info!("Canvas written to {}", path.display());
        }
        if let Some(path) = &args.animate {
            canvas_loop.export_animation(path_str(path)?, args.delay)?;
            log::info!("Animation written to {}", path.display());
        }
        Ok(())
    }

    // Allow print for command output
    #[allow(clippy::print_stdout)]
    fn run_margin(args: &MarginArgs) {
        let start = args.start.expand();
        let end = args.end.expand();
        let mut transcript = Transcript::new();
        let margin = build_margin_with_log(&start, &end, !args.no_directionality, &mut transcript);

        for line in transcript.lines() {
            println!("{line}");
        }
        println!();
        println!("{margin}");
        println!();
        println!("Solved: {}", margin.is_solved());
    }

    // Allow print for command output
    #[allow(clippy::print_stdout)]
    fn run_solvability(
        args: &SolvabilityArgs,
        show_progress: bool,
        progress_manager: &mut ProgressManager,
    ) -> Result<()> {
        if show_progress {
            progress_manager.start_pairs();
        }
        let progress = &*progress_manager;
        let matrix = compute_solvability_matrix_with_progress(|| progress.complete_pair());
        progress_manager.finish();

        println!("{matrix}");
        println!("{} of 256 pairs solvable", matrix.count_solvable());

        if let Some(path) = &args.output {
            export_matrix_png(&matrix, args.cell_size, path_str(path)?)?;
            log::info!("Matrix written to {}", path.display());
        }
        if let Some(path) = &args.animate {
            let capture = LoopCapture::from_frames(solvability_animation(&matrix), args.cell_size);
            capture.export_gif(path_str(path)?, args.delay)?;
            log::info!("Emergence animation written to {}", path.display());
        }
        Ok(())
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| invalid_parameter("path", &path.display(), &"path is not valid UTF-8"))
}
