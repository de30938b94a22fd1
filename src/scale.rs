/// Minimum full-scale value for the strip chart, 2 KiB/s.
const DEFLECTION_FLOOR: u64 = 2 * 1024;

/// Round a requested rate up to the chart's next full-scale value.
///
/// Starts at the 2 KiB/s floor and doubles until the candidate reaches
/// `requested`, so the scale only changes when traffic crosses a power of
/// two. If doubling would overflow, the raw `requested` value is returned
/// unchanged — saturating fallback, not an error.
pub fn round_up_deflection(requested: u64) -> u64 {
    let mut rounded = DEFLECTION_FLOOR;
    while rounded < requested {
        match rounded.checked_mul(2) {
            Some(next) => rounded = next,
            None => return requested,
        }
    }
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hits_floor() {
        assert_eq!(round_up_deflection(0), 2048);
    }

    #[test]
    fn at_floor() {
        assert_eq!(round_up_deflection(2048), 2048);
    }

    #[test]
    fn just_above_floor() {
        assert_eq!(round_up_deflection(2049), 4096);
    }

    #[test]
    fn typical_rate() {
        assert_eq!(round_up_deflection(5_000_000), 1 << 23);
    }

    #[test]
    fn exact_power_of_two() {
        assert_eq!(round_up_deflection(1 << 20), 1 << 20);
        assert_eq!(round_up_deflection(1 << 62), 1 << 62);
    }

    #[test]
    fn overflow_returns_input_unchanged() {
        assert_eq!(round_up_deflection(u64::MAX), u64::MAX);
        assert_eq!(round_up_deflection((1 << 63) + 1), (1 << 63) + 1);
    }

    #[test]
    fn largest_reachable_power() {
        // 2^63 is reachable by doubling from the floor without overflow.
        assert_eq!(round_up_deflection(1 << 63), 1 << 63);
    }

    #[test]
    fn monotonic_below_overflow() {
        let inputs = [0u64, 1, 2047, 2048, 2049, 4096, 5_000_000, 1 << 40];
        let mut prev = 0;
        for &input in &inputs {
            let bound = round_up_deflection(input);
            assert!(bound >= prev, "bound decreased at input {input}");
            assert!(bound >= input);
            prev = bound;
        }
    }
}
