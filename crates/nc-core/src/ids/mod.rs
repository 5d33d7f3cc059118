//! Identifier newtypes.

mod id_macro;

use rand::Rng;
use serde::{Deserialize, Serialize};

use id_macro::impl_id;

/// Identifier of one end-to-end scan.
///
/// 单次扫描的标识符。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScanId(String);

impl_id!(ScanId);

/// Alphabet for certificate identifiers. Ambiguous glyphs (0/O, 1/I) are left out
/// so the id can be read back from a printout.
const REPORT_ID_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const REPORT_ID_LEN: usize = 8;
const REPORT_ID_PREFIX: &str = "NC-";

/// Pseudo-random identifier printed on reports and certificates.
///
/// 报告与证书上打印的伪随机编号。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(String);

impl ReportId {
    /// Generate a fresh id from the thread-local RNG.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generate an id from the given RNG (seed it in tests).
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..REPORT_ID_LEN)
            .map(|_| {
                let idx = rng.random_range(0..REPORT_ID_ALPHABET.len());
                REPORT_ID_ALPHABET[idx] as char
            })
            .collect();
        Self(format!("{REPORT_ID_PREFIX}{suffix}"))
    }

    /// Wrap an existing id, e.g. one read back from a saved report.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
