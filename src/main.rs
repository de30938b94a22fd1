use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::Parser;
use rustc_hash::FxHashMap;

use netgauge::cli::{Cli, RenderArgs};
use netgauge::config::{self, DisplayConfig, SharedDisplayConfig};
use netgauge::error::GaugeError;
use netgauge::model::DeviceSnapshot;
use netgauge::sink::{FileSink, LineSink, WriterSink};
use netgauge::view::{ChartLayout, DeviceView, ViewOptions};

/// Map an error to the process exit code.
fn exit_code(err: &GaugeError) -> i32 {
    match err {
        GaugeError::Config(_) => 1,
        GaugeError::Input(_) => 2,
        _ => 4,
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: Cli) -> Result<(), GaugeError> {
    let (mode, args) = cli.resolve();

    // 1. Resolve display configuration: file first, then flag overrides.
    let shared = resolve_config(&args)?;
    log::info!(
        "display config: rate={}, total={}",
        shared.load().rate_units,
        shared.load().total_units
    );

    // 2. Open the snapshot stream.
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path).map_err(GaugeError::Input)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // 3. Replay records through one view per device.
    let opts = ViewOptions {
        mode,
        precision: args.precision,
        chart: args.chart.then_some(ChartLayout {
            width: args.chart_width,
            height: args.chart_height,
        }),
    };

    let mut views: FxHashMap<String, DeviceView> = FxHashMap::default();
    let mut skipped = 0usize;

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.map_err(GaugeError::Input)?;
        if line.trim().is_empty() {
            continue;
        }

        let snap: DeviceSnapshot = match serde_json::from_str(&line) {
            Ok(snap) => snap,
            Err(e) => {
                log::warn!("line {}: malformed snapshot record: {e}", lineno + 1);
                skipped += 1;
                continue;
            }
        };
        if let Err(e) = snap.validate() {
            log::warn!("line {}: {e}", lineno + 1);
            skipped += 1;
            continue;
        }

        let view = match views.entry(snap.device.clone()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                log::debug!("new device: {}", snap.device);
                let sink = open_sink(&args)?;
                entry.insert(DeviceView::new(snap.device.clone(), sink, opts))
            }
        };

        // Unit families are re-read every tick so external config changes
        // take effect mid-stream.
        let cfg: DisplayConfig = **shared.load();
        view.update(Some(&snap));
        if snap.present {
            view.render(&snap, &cfg)?;
        }
    }

    if skipped > 0 {
        log::info!("skipped {skipped} malformed record(s)");
    }
    Ok(())
}

fn resolve_config(args: &RenderArgs) -> Result<SharedDisplayConfig, GaugeError> {
    let mut cfg = match &args.config {
        Some(path) => config::load_config(path)?,
        None => DisplayConfig::default(),
    };
    if let Some(family) = args.rate_units {
        cfg.rate_units = family;
    }
    if let Some(family) = args.total_units {
        cfg.total_units = family;
    }
    Ok(config::new_shared_config(cfg))
}

fn open_sink(args: &RenderArgs) -> Result<Box<dyn LineSink>, GaugeError> {
    match &args.output {
        Some(path) => Ok(Box::new(FileSink::append(path)?)),
        None => Ok(Box::new(WriterSink::new(io::stdout()))),
    }
}
