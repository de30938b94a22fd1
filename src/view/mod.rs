use crate::chart::TrafficChart;
use crate::config::DisplayConfig;
use crate::error::GaugeError;
use crate::model::{DeviceSnapshot, Direction, DirectionStats};
use crate::sink::LineSink;
use crate::units::{format_rate, format_total};

/// One labeled statistics line: fixed label prefix plus formatted value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub text: String,
}

impl StatLine {
    fn new(label: &'static str, text: String) -> Self {
        Self { label, text }
    }

    /// Label and value joined the way they are displayed.
    pub fn render(&self) -> String {
        format!("{} {}", self.label, self.text)
    }
}

/// The five statistics lines for one direction, in fixed display order:
/// current, average, minimum, maximum, cumulative total. The first four
/// are rates, the last a cumulative byte count.
pub fn direction_lines(
    stats: &DirectionStats,
    direction: Direction,
    cfg: &DisplayConfig,
    precision: usize,
) -> Vec<StatLine> {
    vec![
        StatLine::new(
            direction.current_label(),
            format_rate(stats.rate, cfg.rate_units, precision),
        ),
        StatLine::new("Avg:", format_rate(stats.avg, cfg.rate_units, precision)),
        StatLine::new("Min:", format_rate(stats.min, cfg.rate_units, precision)),
        StatLine::new("Max:", format_rate(stats.max, cfg.rate_units, precision)),
        StatLine::new("Ttl:", format_total(stats.total, cfg.total_units, precision)),
    ]
}

/// Inbound and outbound stat-line blocks for one snapshot.
pub fn build_stat_lines(
    snapshot: &DeviceSnapshot,
    cfg: &DisplayConfig,
    precision: usize,
) -> (Vec<StatLine>, Vec<StatLine>) {
    (
        direction_lines(&snapshot.rx, Direction::Inbound, cfg, precision),
        direction_lines(&snapshot.tx, Direction::Outbound, cfg, precision),
    )
}

/// One combined line per tick: the outbound block's first line followed by
/// the inbound block's first line, space-joined.
pub fn summary_line(snapshot: &DeviceSnapshot, cfg: &DisplayConfig, precision: usize) -> String {
    let (rx_lines, tx_lines) = build_stat_lines(snapshot, cfg, precision);
    format!("{} {}", tx_lines[0].render(), rx_lines[0].render())
}

/// Which lines a view emits to its sink on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitMode {
    /// Full five-line block per direction.
    FullBlocks,
    /// One combined summary line per tick.
    Summary,
}

/// Strip-chart dimensions for views that append chart rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct ViewOptions {
    pub mode: EmitMode,
    pub precision: usize,
    /// Chart rows are appended below each direction block when set.
    /// Ignored in summary mode.
    pub chart: Option<ChartLayout>,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            mode: EmitMode::FullBlocks,
            precision: 2,
            chart: None,
        }
    }
}

/// Per-device rendering orchestrator.
///
/// Owns one chart per direction and the line sink. The sink handle is held
/// for the view's lifetime and closed when the view is dropped, on every
/// exit path.
pub struct DeviceView {
    name: String,
    chart_rx: TrafficChart,
    chart_tx: TrafficChart,
    sink: Box<dyn LineSink>,
    opts: ViewOptions,
}

impl DeviceView {
    pub fn new(name: String, sink: Box<dyn LineSink>, opts: ViewOptions) -> Self {
        Self {
            name,
            chart_rx: TrafficChart::new(),
            chart_tx: TrafficChart::new(),
            sink,
            opts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chart(&self, direction: Direction) -> &TrafficChart {
        match direction {
            Direction::Inbound => &self.chart_rx,
            Direction::Outbound => &self.chart_tx,
        }
    }

    /// Apply the device-presence gate and record the tick's rates.
    ///
    /// `None` (or a snapshot marked absent) clears chart history; nothing
    /// is formatted until the device comes back.
    pub fn update(&mut self, snapshot: Option<&DeviceSnapshot>) {
        match snapshot {
            Some(snap) if snap.present => {
                self.chart_rx.update(snap.rx.rate);
                self.chart_tx.update(snap.tx.rate);
            }
            _ => {
                if !self.chart_rx.is_empty() || !self.chart_tx.is_empty() {
                    log::debug!("{}: device absent, chart history cleared", self.name);
                }
                self.chart_rx.reset();
                self.chart_tx.reset();
            }
        }
    }

    /// Format this tick's lines and emit them to the sink. Callers gate on
    /// device presence; `render` assumes the snapshot is live.
    pub fn render(
        &mut self,
        snapshot: &DeviceSnapshot,
        cfg: &DisplayConfig,
    ) -> Result<(), GaugeError> {
        let lines = match self.opts.mode {
            EmitMode::Summary => vec![summary_line(snapshot, cfg, self.opts.precision)],
            EmitMode::FullBlocks => self.full_block_lines(snapshot, cfg),
        };
        self.sink.write_lines(&lines)
    }

    fn full_block_lines(&self, snapshot: &DeviceSnapshot, cfg: &DisplayConfig) -> Vec<String> {
        let (rx_lines, tx_lines) = build_stat_lines(snapshot, cfg, self.opts.precision);

        let mut out = Vec::with_capacity(13);
        out.push(format!("Device {}:", self.name));
        for line in &rx_lines {
            out.push(line.render());
        }
        if let Some(layout) = self.opts.chart {
            out.extend(self.chart_rx.rows(layout.width, layout.height));
        }
        for line in &tx_lines {
            out.push(line.render());
        }
        if let Some(layout) = self.opts.chart {
            out.extend(self.chart_tx.rows(layout.width, layout.height));
        }
        out.push(String::new());
        out
    }
}
