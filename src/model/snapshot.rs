use serde::{Deserialize, Serialize};

use crate::error::GaugeError;
use crate::model::Direction;

/// Per-direction statistics captured atomically by the snapshot source.
///
/// All rates are bytes per second; `total` is cumulative bytes. The source
/// guarantees non-negative, finite values — `validate` enforces that at
/// the wire boundary.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct DirectionStats {
    /// Current rate over the last tick.
    pub rate: f64,
    /// Average rate since tracking began.
    pub avg: f64,
    /// Minimum observed rate.
    pub min: f64,
    /// Maximum observed rate.
    pub max: f64,
    /// Cumulative bytes transferred. May reset to zero if the underlying
    /// device is recreated.
    pub total: u64,
}

impl DirectionStats {
    fn validate(&self, direction: Direction) -> Result<(), GaugeError> {
        let fields = [
            ("rate", self.rate),
            ("avg", self.avg),
            ("min", self.min),
            ("max", self.max),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(GaugeError::Snapshot(format!(
                    "{direction} {name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// One tick's worth of statistics for a single device.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeviceSnapshot {
    pub device: String,
    /// False when the device has vanished; consumers reset chart history
    /// and skip formatting until it comes back.
    #[serde(default = "default_present")]
    pub present: bool,
    /// Inbound statistics.
    #[serde(default)]
    pub rx: DirectionStats,
    /// Outbound statistics.
    #[serde(default)]
    pub tx: DirectionStats,
}

fn default_present() -> bool {
    true
}

impl DeviceSnapshot {
    /// Check the snapshot-source contract on a freshly decoded record.
    pub fn validate(&self) -> Result<(), GaugeError> {
        if self.device.is_empty() {
            return Err(GaugeError::Snapshot("empty device name".to_string()));
        }
        self.rx.validate(Direction::Inbound)?;
        self.tx.validate(Direction::Outbound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(rate: f64) -> DeviceSnapshot {
        DeviceSnapshot {
            device: "eth0".to_string(),
            present: true,
            rx: DirectionStats {
                rate,
                ..DirectionStats::default()
            },
            tx: DirectionStats::default(),
        }
    }

    #[test]
    fn decode_minimal_record() {
        let snap: DeviceSnapshot = serde_json::from_str(r#"{"device": "eth0"}"#).unwrap();
        assert_eq!(snap.device, "eth0");
        assert!(snap.present);
        assert_eq!(snap.rx.rate, 0.0);
        assert_eq!(snap.tx.total, 0);
        assert!(snap.validate().is_ok());
    }

    #[test]
    fn decode_full_record() {
        let text = r#"{
            "device": "en1",
            "present": true,
            "rx": {"rate": 1536.0, "avg": 1024.0, "min": 0.0, "max": 2048.0, "total": 987654},
            "tx": {"rate": 512.0, "avg": 256.0, "min": 0.0, "max": 700.0, "total": 12345}
        }"#;
        let snap: DeviceSnapshot = serde_json::from_str(text).unwrap();
        assert_eq!(snap.rx.rate, 1536.0);
        assert_eq!(snap.tx.total, 12345);
        assert!(snap.validate().is_ok());
    }

    #[test]
    fn absent_device_record() {
        let snap: DeviceSnapshot =
            serde_json::from_str(r#"{"device": "ppp0", "present": false}"#).unwrap();
        assert!(!snap.present);
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let err = snapshot(-1.0).validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("inbound rate"), "unexpected message: {msg}");
    }

    #[test]
    fn validate_rejects_non_finite() {
        let mut snap = snapshot(0.0);
        snap.tx.max = f64::INFINITY;
        let msg = snap.validate().unwrap_err().to_string();
        assert!(msg.contains("outbound max"), "unexpected message: {msg}");
    }

    #[test]
    fn validate_rejects_empty_device() {
        let mut snap = snapshot(0.0);
        snap.device.clear();
        assert!(snap.validate().is_err());
    }
}
