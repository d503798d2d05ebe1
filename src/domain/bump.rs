use crate::error::{DrafterError, Result};
use std::fmt;
use std::str::FromStr;

/// Which component of a version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpCategory {
    Major,
    Minor,
    Patch,
    Post,
}

impl BumpCategory {
    /// Categories in decreasing precedence. Classification walks this list and
    /// stops at the first category with a matching label.
    pub const PRECEDENCE: [BumpCategory; 4] = [
        BumpCategory::Major,
        BumpCategory::Minor,
        BumpCategory::Patch,
        BumpCategory::Post,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpCategory::Major => "major",
            BumpCategory::Minor => "minor",
            BumpCategory::Patch => "patch",
            BumpCategory::Post => "post",
        }
    }
}

impl FromStr for BumpCategory {
    type Err = DrafterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "major" => Ok(BumpCategory::Major),
            "minor" => Ok(BumpCategory::Minor),
            "patch" => Ok(BumpCategory::Patch),
            "post" => Ok(BumpCategory::Post),
            other => Err(DrafterError::unknown_bump(other)),
        }
    }
}

impl fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
