use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

/// Stable identifier of a locale pack, e.g. `en` or `zh-Hans`.
///
/// Codes are compared exactly; `zh-hans` and `zh-Hans` are different packs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LocaleCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<&LocaleCode> for LocaleCode {
    fn from(code: &LocaleCode) -> Self {
        code.clone()
    }
}

impl PartialEq<str> for LocaleCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LocaleCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
