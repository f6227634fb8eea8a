/*!
 * Inline String
 * Small-string storage for process ids, names and error details
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Inline-optimized string that stores short strings (≤23 bytes) without heap allocation
///
/// Process ids (`"P1"`) and default names (`"Process 12"`) always fit inline,
/// which keeps the per-event queue snapshots cheap to clone.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct InlineString {
    inner: SmartString,
}

impl InlineString {
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: SmartString::new(),
        }
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    /// Check if string is stored inline (no heap allocation)
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.inner.is_inline()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Convert to String (may allocate if inline)
    #[inline]
    pub fn into_string(self) -> String {
        self.inner.into()
    }
}

impl From<&str> for InlineString {
    #[inline]
    fn from(s: &str) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<String> for InlineString {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl From<InlineString> for String {
    #[inline]
    fn from(s: InlineString) -> Self {
        s.inner.into()
    }
}

impl AsRef<str> for InlineString {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::ops::Deref for InlineString {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Display for InlineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::borrow::Borrow<str> for InlineString {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for InlineString {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for InlineString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
