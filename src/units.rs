use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display convention for scaled traffic values.
///
/// Bit families multiply the byte magnitude by 8 before unit selection;
/// binary families step by 1024, SI families by 1000.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum UnitFamily {
    /// Human-readable default (binary byte ladder).
    #[default]
    Auto,
    BitsSi,
    BitsBinary,
    BytesSi,
    BytesBinary,
}

impl std::fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::BitsSi => write!(f, "bits-si"),
            Self::BitsBinary => write!(f, "bits-binary"),
            Self::BytesSi => write!(f, "bytes-si"),
            Self::BytesBinary => write!(f, "bytes-binary"),
        }
    }
}

/// A magnitude scaled into a family's unit ladder: the divided value plus
/// the unit label it was divided into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaledValue {
    pub value: f64,
    pub label: &'static str,
}

struct Ladder {
    base: f64,
    bits: bool,
    labels: [&'static str; 7],
}

const BYTES_BINARY: Ladder = Ladder {
    base: 1024.0,
    bits: false,
    labels: ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"],
};

const BYTES_SI: Ladder = Ladder {
    base: 1000.0,
    bits: false,
    labels: ["B", "kB", "MB", "GB", "TB", "PB", "EB"],
};

const BITS_BINARY: Ladder = Ladder {
    base: 1024.0,
    bits: true,
    labels: ["bit", "Kibit", "Mibit", "Gibit", "Tibit", "Pibit", "Eibit"],
};

const BITS_SI: Ladder = Ladder {
    base: 1000.0,
    bits: true,
    labels: ["bit", "kbit", "Mbit", "Gbit", "Tbit", "Pbit", "Ebit"],
};

impl UnitFamily {
    fn ladder(self) -> &'static Ladder {
        match self {
            Self::Auto | Self::BytesBinary => &BYTES_BINARY,
            Self::BytesSi => &BYTES_SI,
            Self::BitsBinary => &BITS_BINARY,
            Self::BitsSi => &BITS_SI,
        }
    }
}

/// Scale a byte magnitude into the family's unit ladder.
///
/// Walks the ladder and picks the largest unit whose divisor keeps the
/// scaled value at or above 1; a magnitude of 0 gets the smallest unit, so
/// no division by zero is possible. The caller must pass a finite,
/// non-negative magnitude.
pub fn scale_value(magnitude: f64, family: UnitFamily) -> ScaledValue {
    debug_assert!(
        magnitude.is_finite() && magnitude >= 0.0,
        "magnitude must be finite and non-negative"
    );

    let ladder = family.ladder();
    let m = if ladder.bits { magnitude * 8.0 } else { magnitude };

    let mut idx = 0;
    let mut divisor = 1.0;
    while idx + 1 < ladder.labels.len() && m >= divisor * ladder.base {
        divisor *= ladder.base;
        idx += 1;
    }

    ScaledValue {
        value: m / divisor,
        label: ladder.labels[idx],
    }
}

/// Round to `precision` fractional digits, ties away from zero.
fn round_half_away(value: f64, precision: usize) -> f64 {
    let shift = 10f64.powi(precision as i32);
    (value * shift).round() / shift
}

/// Format a rate (bytes per second) as fixed-precision text with a `/s`
/// suffix, e.g. `"1.50 KiB/s"`, `"12.00 Kibit/s"`, `"0.00 B/s"`.
pub fn format_rate(bytes_per_sec: f64, family: UnitFamily, precision: usize) -> String {
    let scaled = scale_value(bytes_per_sec, family);
    format!(
        "{:.*} {}/s",
        precision,
        round_half_away(scaled.value, precision),
        scaled.label
    )
}

/// Format a cumulative byte total as fixed-precision text, no suffix,
/// e.g. `"1.00 MiB"`, `"2.35 GB"`.
pub fn format_total(bytes: u64, family: UnitFamily, precision: usize) -> String {
    let scaled = scale_value(bytes as f64, family);
    format!(
        "{:.*} {}",
        precision,
        round_half_away(scaled.value, precision),
        scaled.label
    )
}
