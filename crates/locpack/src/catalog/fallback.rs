use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Stage of the fallback chain that supplied a message.
///
/// Resolution starts at [`FallbackStage::ExactLocale`] and moves forward
/// until a stage yields a template. [`FallbackStage::RawKey`] always yields,
/// so the chain never fails and never loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackStage {
    /// The requested locale has the key.
    ExactLocale,
    /// The default locale supplied the key.
    DefaultLocale,
    /// No pack has the key; the key itself is displayed.
    RawKey,
}

impl FallbackStage {
    /// The stage tried first.
    pub const FIRST: FallbackStage = FallbackStage::ExactLocale;

    /// The stage tried after this one, or `None` at the end of the chain.
    pub fn next(self) -> Option<FallbackStage> {
        match self {
            FallbackStage::ExactLocale => Some(FallbackStage::DefaultLocale),
            FallbackStage::DefaultLocale => Some(FallbackStage::RawKey),
            FallbackStage::RawKey => None,
        }
    }

    /// Whether reaching this stage means something was missing.
    pub fn is_fallback(self) -> bool {
        self != FallbackStage::ExactLocale
    }
}

impl Display for FallbackStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            FallbackStage::ExactLocale => "exact locale",
            FallbackStage::DefaultLocale => "default locale",
            FallbackStage::RawKey => "raw key",
        })
    }
}
