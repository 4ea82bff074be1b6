//! Resource names: the closed set served from the document, and open table names for the remote backend.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// One of the collections held in the site document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    MusicReleases,
    ActingProjects,
    GalleryItems,
    TeamMembers,
    ContactMessages,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::MusicReleases,
        Resource::ActingProjects,
        Resource::GalleryItems,
        Resource::TeamMembers,
        Resource::ContactMessages,
    ];

    /// Path segment and document key, e.g. `musicReleases`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::MusicReleases => "musicReleases",
            Resource::ActingProjects => "actingProjects",
            Resource::GalleryItems => "galleryItems",
            Resource::TeamMembers => "teamMembers",
            Resource::ContactMessages => "contactMessages",
        }
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| AppError::ResourceNotFound(s.to_string()))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const MAX_TABLE_NAME_LEN: usize = 63;

/// Table name on the remote backend. Any name is accepted as long as it is a plain
/// identifier (ASCII letters, digits, `_`), so it can be placed in a URL path unescaped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        let valid = !s.is_empty()
            && s.len() <= MAX_TABLE_NAME_LEN
            && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(TableName(s.to_string()))
        } else {
            Err(AppError::ResourceNotFound(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
