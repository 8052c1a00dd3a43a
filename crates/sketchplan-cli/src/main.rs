use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use sketchplan::{emit, sketch, ExtractParams, PlannerParams};
use sketchplan_core::init_with_level;

/// Turn a hand-drawn panel sketch into a grid layout description.
#[derive(Parser, Debug)]
#[command(name = "sketchplan", version, about)]
struct Cli {
    /// Path to the sketch raster (any format the `image` crate decodes).
    image: PathBuf,

    /// What to print.
    #[arg(long, value_enum, default_value_t = Output::Grid)]
    output: Output,

    /// Grid height resolution when the adaptive search is disabled.
    #[arg(long, default_value_t = 10)]
    ngrid_h: u32,

    /// Disable the adaptive resolution search and use --ngrid-h directly.
    #[arg(long)]
    fixed_grid: bool,

    /// Adaptive search bounds (candidate heights in nh_min..nh_max).
    #[arg(long, default_value_t = 10)]
    nh_min: u32,
    #[arg(long, default_value_t = 50)]
    nh_max: u32,

    /// Target figure height in inches.
    #[arg(long, default_value_t = 10.0)]
    h_in: f64,

    /// Override the detected height/width aspect ratio.
    #[arg(long)]
    wh_ratio: Option<f64>,

    /// Minimum fraction of pixels a color must occupy to count as a panel.
    #[arg(long, default_value_t = 0.01)]
    occupancy_frac: f64,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    /// GridSpec script snapped to the chosen resolution.
    Grid,
    /// Free-axes script in fractional coordinates.
    Axes,
    /// The fractional plan and grid layout as JSON.
    Json,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    init_with_level(level)?;

    let params = PlannerParams {
        extract: ExtractParams {
            occupancy_frac: cli.occupancy_frac,
            ..ExtractParams::default()
        },
        ngrid_h: cli.ngrid_h,
        adaptive: !cli.fixed_grid,
        nh_min: cli.nh_min,
        nh_max: cli.nh_max,
        wh_ratio: cli.wh_ratio,
        h_in: cli.h_in,
    };

    match cli.output {
        Output::Axes => {
            let plan = sketch::plan_sketch_path(&cli.image, &params)?;
            println!("{}", emit::axes_script(&plan, params.h_in));
        }
        Output::Grid => {
            let (plan, grid) = sketch::grid_sketch_path(&cli.image, &params)?;
            println!("{}", emit::grid_script(&plan, &grid, params.h_in));
        }
        Output::Json => {
            let (plan, grid) = sketch::grid_sketch_path(&cli.image, &params)?;
            let report = serde_json::json!({
                "plan": plan,
                "grid": grid,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
