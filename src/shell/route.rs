use std::{fmt, str::FromStr};

use crate::foundation::error::{DiaryError, DiaryResult};

/// Client-side routes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// `/`
    Index,
    /// `/diary/{id}`
    Diary(String),
    /// `/statement`
    Statement,
}

impl Route {
    pub fn diary(id: impl Into<String>) -> Self {
        Self::Diary(id.into())
    }

    /// Parse a path, ignoring any query, fragment or trailing slash.
    pub fn parse(path: &str) -> DiaryResult<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => return Ok(Self::Index),
            "/statement" => return Ok(Self::Statement),
            _ => {}
        }
        match trimmed.strip_prefix("/diary/") {
            Some(id) if !id.is_empty() && !id.contains('/') => Ok(Self::Diary(id.to_string())),
            _ => Err(DiaryError::validation(format!("unknown route '{path}'"))),
        }
    }

    /// Return `true` on the index page.
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index)
    }
}

impl FromStr for Route {
    type Err = DiaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index => f.write_str("/"),
            Self::Diary(id) => write!(f, "/diary/{id}"),
            Self::Statement => f.write_str("/statement"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shell/route.rs"]
mod tests;
