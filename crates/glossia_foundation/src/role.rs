//! Semantic roles.
//!
//! A role names a functional argument slot of a command (destination,
//! patient, event, ...) independently of the source language. Patterns bind
//! surface tokens to roles; the execution engine consumes role maps.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// A named functional argument of a command, independent of source language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum SemanticRole {
    /// Where a value is stored or placed (`set x to 5` → `x`).
    Destination,
    /// The entity acted upon (`toggle .active` → `.active`).
    Patient,
    /// The end state or target of a transfer.
    Goal,
    /// Where something originates (`on click from #btn` → `#btn`).
    Source,
    /// The triggering event name (`on click` → `click`).
    Event,
    /// The command body: everything the handler should run.
    Body,
    /// The tool or means used to perform the action.
    Instrument,
    /// What the command is about.
    Topic,
}

impl SemanticRole {
    /// All roles, in canonical order.
    pub const ALL: [Self; 8] = [
        Self::Destination,
        Self::Patient,
        Self::Goal,
        Self::Source,
        Self::Event,
        Self::Body,
        Self::Instrument,
        Self::Topic,
    ];

    /// Returns the canonical lowercase name of this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::Patient => "patient",
            Self::Goal => "goal",
            Self::Source => "source",
            Self::Event => "event",
            Self::Body => "body",
            Self::Instrument => "instrument",
            Self::Topic => "topic",
        }
    }
}

impl fmt::Display for SemanticRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "destination" => Ok(Self::Destination),
            "patient" => Ok(Self::Patient),
            "goal" => Ok(Self::Goal),
            "source" => Ok(Self::Source),
            "event" => Ok(Self::Event),
            "body" => Ok(Self::Body),
            "instrument" => Ok(Self::Instrument),
            "topic" => Ok(Self::Topic),
            other => Err(Error::new(ErrorKind::Internal(format!(
                "unknown semantic role: {other}"
            )))),
        }
    }
}
