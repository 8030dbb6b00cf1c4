//! Thickness Value Object
//!
//! A book is `thick` from 100 pages up, `thin` below. It is stored for
//! querying but never accepted from clients.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Page count from which a book counts as thick
pub const THICK_FROM_PAGES: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Thickness {
    Thick,
    Thin,
}

impl Thickness {
    pub const fn from_total_page(total_page: i32) -> Self {
        if total_page >= THICK_FROM_PAGES {
            Thickness::Thick
        } else {
            Thickness::Thin
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Thickness::Thick => "thick",
            Thickness::Thin => "thin",
        }
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a stored value that is neither `thick` nor `thin`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown thickness: {0}")]
pub struct UnknownThickness(pub String);

impl FromStr for Thickness {
    type Err = UnknownThickness;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "thick" => Ok(Thickness::Thick),
            "thin" => Ok(Thickness::Thin),
            other => Err(UnknownThickness(other.to_string())),
        }
    }
}
