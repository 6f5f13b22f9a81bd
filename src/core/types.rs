/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};
use smartstring::alias::String as SmartString;
use std::fmt;

/// Simulated time, in ticks
pub type Ticks = u64;

/// Priority level (lower value is more important)
pub type Priority = u32;

/// Label used for ticks where no process is eligible
pub const IDLE_LABEL: &str = "IDLE";

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimulationError>;

/// Caller-assigned process label
///
/// Labels are short ("P1", "P2", ...) so they are stored inline without
/// heap allocation in the common case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ProcessId {
    inner: SmartString,
}

impl ProcessId {
    /// Create a process id from any string-like value
    #[inline]
    pub fn new(id: impl AsRef<str>) -> Self {
        Self {
            inner: SmartString::from(id.as_ref()),
        }
    }

    /// Default label for the process at `index` in input order (`P1`, `P2`, ...)
    #[inline]
    pub fn numbered(index: usize) -> Self {
        Self::new(format!("P{}", index + 1))
    }

    /// The IDLE sentinel label
    #[inline]
    pub fn idle() -> Self {
        Self::new(IDLE_LABEL)
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        self.inner.as_str()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.inner.trim().is_empty()
    }

    /// Check whether the label collides with the IDLE sentinel
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.inner.eq_ignore_ascii_case(IDLE_LABEL)
    }
}

impl From<&str> for ProcessId {
    #[inline]
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ProcessId {
    #[inline]
    fn from(s: String) -> Self {
        Self {
            inner: SmartString::from(s),
        }
    }
}

impl AsRef<str> for ProcessId {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::borrow::Borrow<str> for ProcessId {
    #[inline(always)]
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
