//! Rests: intervals of silence.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::note::{validate_duration, DEFAULT_DURATION};

/// An interval of silence with a relative duration (1 = whole rest).
///
/// Rests compare and order by duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RestRepr", into = "RestRepr")]
pub struct Rest {
    duration: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RestRepr {
    duration: f64,
}

impl TryFrom<RestRepr> for Rest {
    type Error = TheoryError;

    fn try_from(repr: RestRepr) -> Result<Self> {
        Rest::new(repr.duration)
    }
}

impl From<Rest> for RestRepr {
    fn from(rest: Rest) -> Self {
        RestRepr {
            duration: rest.duration,
        }
    }
}

impl Rest {
    /// Creates a rest of the given duration.
    pub fn new(duration: f64) -> Result<Self> {
        Ok(Rest {
            duration: validate_duration(duration)?,
        })
    }

    /// Relative duration.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sets the duration.
    pub fn set_duration(&mut self, duration: f64) -> Result<()> {
        self.duration = validate_duration(duration)?;
        Ok(())
    }
}

impl Default for Rest {
    fn default() -> Self {
        Rest {
            duration: DEFAULT_DURATION,
        }
    }
}

impl PartialEq for Rest {
    fn eq(&self, other: &Self) -> bool {
        self.duration == other.duration
    }
}

impl PartialOrd for Rest {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.duration.partial_cmp(&other.duration)
    }
}
