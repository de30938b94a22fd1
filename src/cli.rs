use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::units::UnitFamily;
use crate::view::EmitMode;

#[derive(Parser, Debug)]
#[command(
    name = "netgauge",
    version,
    about = "Render traffic statistics snapshots into human-scaled stat lines"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Emit the full five-line block per direction for every tick (default
    /// when no subcommand is given)
    Render(RenderArgs),
    /// Emit one combined summary line per tick
    Summary(RenderArgs),
}

/// Arguments shared by both output modes.
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Snapshot records to replay, one JSON object per line [default: stdin]
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Append output lines to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Display configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Unit family for rate values (overrides the config file)
    #[arg(long, value_enum)]
    pub rate_units: Option<UnitFamily>,

    /// Unit family for cumulative totals (overrides the config file)
    #[arg(long, value_enum)]
    pub total_units: Option<UnitFamily>,

    /// Fractional digits for formatted values [default: 2]
    #[arg(long, default_value_t = 2, value_parser = validate_precision)]
    pub precision: usize,

    /// Append a strip chart of recent rates below each direction block
    #[arg(long)]
    pub chart: bool,

    /// Strip chart width in columns [default: 60]
    #[arg(long, default_value_t = 60, value_parser = validate_chart_dim)]
    pub chart_width: usize,

    /// Strip chart height in rows [default: 3]
    #[arg(long, default_value_t = 3, value_parser = validate_chart_dim)]
    pub chart_height: usize,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            config: None,
            rate_units: None,
            total_units: None,
            precision: 2,
            chart: false,
            chart_width: 60,
            chart_height: 3,
        }
    }
}

impl Cli {
    /// The effective mode and arguments after defaulting to `render`.
    pub fn resolve(self) -> (EmitMode, RenderArgs) {
        match self.command {
            Some(Command::Render(args)) => (EmitMode::FullBlocks, args),
            Some(Command::Summary(args)) => (EmitMode::Summary, args),
            None => (EmitMode::FullBlocks, RenderArgs::default()),
        }
    }
}

fn validate_precision(s: &str) -> Result<usize, String> {
    let val: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid integer"))?;
    if val > 9 {
        Err("precision must be at most 9 digits".to_string())
    } else {
        Ok(val)
    }
}

fn validate_chart_dim(s: &str) -> Result<usize, String> {
    let val: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid integer"))?;
    if val == 0 {
        Err("chart dimensions must be at least 1".to_string())
    } else if val > 512 {
        Err("chart dimensions must be at most 512".to_string())
    } else {
        Ok(val)
    }
}
