use serde::{Deserialize, Serialize};

use super::error::DenominationParseError;

const CURRENCY_SYMBOL: &str = "₹";

/// Per-session counters.
///
/// 会话计数器：扫描次数、验证通过次数、累计面额。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub scan_count: u64,
    pub verified_count: u64,
    pub cumulative_value: u64,
}

impl SessionStats {
    /// Fold one completed scan into the counters.
    ///
    /// `scan_count` always moves. A verified real note moves `verified_count`
    /// and, if its denomination reduces to a number, `cumulative_value`.
    pub fn record(&mut self, is_verified_real: bool, denomination: Option<&str>) {
        self.scan_count += 1;
        if !is_verified_real {
            return;
        }

        self.verified_count += 1;
        if let Some(raw) = denomination {
            match parse_denomination(raw) {
                Ok(value) => self.cumulative_value = self.cumulative_value.saturating_add(value),
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(error = %_err, "skipping unparsable denomination");
                }
            }
        }
    }

    /// `round(verified / scans * 100)`, 0 for an empty session.
    pub fn verified_rate(&self) -> u32 {
        if self.scan_count == 0 {
            return 0;
        }
        ((self.verified_count as f64 / self.scan_count as f64) * 100.0).round() as u32
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from(self)
    }
}

/// Strip every non-digit and parse what is left.
///
/// `"₹500"` → 500, `"2,000"` → 2000, `"Rs."` → error.
pub fn parse_denomination(raw: &str) -> Result<u64, DenominationParseError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(DenominationParseError::NoDigits(raw.to_string()));
    }
    digits
        .parse::<u64>()
        .map_err(|_| DenominationParseError::OutOfRange(raw.to_string()))
}

/// Display strings for the session strip. A pure function of [`SessionStats`],
/// so rendering it twice yields the same output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub scan_count: u64,
    pub verified_count: u64,
    pub verified_rate: u32,
    pub cumulative_value: u64,
    pub count_text: String,
    pub rate_text: String,
    pub total_text: String,
}

impl From<&SessionStats> for SessionSnapshot {
    fn from(stats: &SessionStats) -> Self {
        let rate = stats.verified_rate();
        Self {
            scan_count: stats.scan_count,
            verified_count: stats.verified_count,
            verified_rate: rate,
            cumulative_value: stats.cumulative_value,
            count_text: stats.scan_count.to_string(),
            rate_text: format!("{rate}%"),
            total_text: format!("{CURRENCY_SYMBOL}{}", stats.cumulative_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_every_scan() {
        let mut stats = SessionStats::default();
        stats.record(false, Some("500"));
        stats.record(true, None);
        assert_eq!(stats.scan_count, 2);
        assert_eq!(stats.verified_count, 1);
        assert_eq!(stats.cumulative_value, 0);
    }

    #[test]
    fn verified_scans_add_their_denomination() {
        let mut stats = SessionStats::default();
        stats.record(true, Some("₹500"));
        stats.record(true, Some("2,000"));
        stats.record(false, Some("100"));
        assert_eq!(stats.cumulative_value, 2500);
        assert_eq!(stats.verified_count, 2);
    }

    #[test]
    fn unparsable_denomination_is_skipped_silently() {
        let mut stats = SessionStats::default();
        stats.record(true, Some("unknown"));
        stats.record(true, Some("99999999999999999999999"));
        assert_eq!(stats.scan_count, 2);
        assert_eq!(stats.verified_count, 2);
        assert_eq!(stats.cumulative_value, 0);
    }

    #[test]
    fn parse_denomination_strips_non_digits() {
        assert_eq!(parse_denomination("500"), Ok(500));
        assert_eq!(parse_denomination("Rs. 2000/-"), Ok(2000));
        assert_eq!(
            parse_denomination("n/a"),
            Err(DenominationParseError::NoDigits("n/a".to_string()))
        );
    }

    #[test]
    fn verified_rate_rounds_and_handles_empty_session() {
        let empty = SessionStats::default();
        assert_eq!(empty.verified_rate(), 0);

        let stats = SessionStats {
            scan_count: 3,
            verified_count: 2,
            cumulative_value: 0,
        };
        assert_eq!(stats.verified_rate(), 67);
    }

    #[test]
    fn snapshot_is_idempotent() {
        let stats = SessionStats {
            scan_count: 4,
            verified_count: 3,
            cumulative_value: 1200,
        };
        let first = stats.snapshot();
        let second = stats.snapshot();
        assert_eq!(first, second);
        assert_eq!(first.rate_text, "75%");
        assert_eq!(first.total_text, "₹1200");
        assert_eq!(first.count_text, "4");
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut stats = SessionStats {
            scan_count: 10,
            verified_count: 7,
            cumulative_value: 3500,
        };
        stats.reset();
        assert_eq!(stats, SessionStats::default());
    }
}
