//! Portfolio content model.
//!
//! Everything the screens display lives here as data: profile, projects,
//! experience, skills. A default content file is compiled in; a JSON file
//! on disk (config `content_path` / `FOLIO_CONTENT`) replaces it wholesale.
//! The carousel ring is sized from `projects.len()`, so content with zero
//! projects is rejected at startup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Compiled-in default content.
const DEFAULT_CONTENT: &str = include_str!("default_content.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("content has no projects; the carousel needs at least one")]
    NoProjects,

    #[error("profile name is empty")]
    MissingName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Hero headline, one typewriter per line.
    #[serde(default)]
    pub hero_lines: Vec<String>,
    pub role: String,
    /// The `whoami` answer.
    pub tagline: String,
    #[serde(default)]
    pub bio: Vec<String>,
    /// Short hero paragraph under the role line.
    #[serde(default)]
    pub intro: Vec<String>,
    #[serde(default)]
    pub location: String,
    pub email: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    /// Left tag of the boot screen header.
    #[serde(default)]
    pub boot_header: String,
    /// First scrollback line of the embedded prompt.
    #[serde(default)]
    pub terminal_banner: String,
    /// Label shown before the prompt input.
    #[serde(default)]
    pub prompt_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub repo: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Paragraphs for the detail overlay.
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub period: String,
    pub role: String,
    pub org: String,
    /// Badge text, e.g. `INTERNSHIP` or `LEADERSHIP`.
    #[serde(default)]
    pub kind: String,
    pub summary: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Content {
    /// Parse and validate the compiled-in content.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::parse(DEFAULT_CONTENT)
    }

    /// Load content from `path` when given, otherwise the embedded
    /// default.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                let content = Self::parse(&raw)?;
                info!(path = %path.display(), projects = content.projects.len(), "loaded content override");
                Ok(content)
            }
            None => Self::embedded(),
        }
    }

    fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.projects.is_empty() {
            return Err(ContentError::NoProjects);
        }
        if self.profile.name.trim().is_empty() {
            return Err(ContentError::MissingName);
        }
        Ok(())
    }

    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_content_parses_and_validates() {
        let content = Content::embedded().unwrap();
        assert_eq!(content.profile.name, "Mayank Rathore");
        assert_eq!(content.projects.len(), 5);
        assert!(!content.skills.is_empty());
        assert!(!content.experience.is_empty());
    }

    #[test]
    fn test_embedded_projects_have_overlay_details() {
        let content = Content::embedded().unwrap();
        for project in &content.projects {
            assert!(
                !project.details.is_empty(),
                "project {} has nothing to show in the overlay",
                project.title
            );
        }
    }

    #[test]
    fn test_load_without_path_uses_embedded() {
        let content = Content::load(None).unwrap();
        assert_eq!(content.profile.tagline, "Mayank | Java Developer");
    }

    #[test]
    fn test_load_reads_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let override_json = r#"{
            "profile": {
                "name": "Other Person",
                "role": "Developer",
                "tagline": "Other | Dev",
                "email": "other@example.com"
            },
            "projects": [
                { "title": "Only Project", "summary": "One." }
            ]
        }"#;
        file.write_all(override_json.as_bytes()).unwrap();
        let content = Content::load(Some(file.path())).unwrap();
        assert_eq!(content.profile.name, "Other Person");
        assert_eq!(content.projects.len(), 1);
        assert!(content.skills.is_empty(), "defaulted fields stay empty");
    }

    #[test]
    fn test_missing_file_is_a_read_error() {
        let err = Content::load(Some(Path::new("/nonexistent/content.json"))).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn test_zero_projects_rejected() {
        let raw = r#"{
            "profile": { "name": "X", "role": "r", "tagline": "t", "email": "e" },
            "projects": []
        }"#;
        let err = Content::parse(raw).unwrap_err();
        assert!(matches!(err, ContentError::NoProjects));
    }

    #[test]
    fn test_blank_name_rejected() {
        let raw = r#"{
            "profile": { "name": "  ", "role": "r", "tagline": "t", "email": "e" },
            "projects": [ { "title": "P", "summary": "s" } ]
        }"#;
        let err = Content::parse(raw).unwrap_err();
        assert!(matches!(err, ContentError::MissingName));
    }

    #[test]
    fn test_project_lookup_by_index() {
        let content = Content::embedded().unwrap();
        assert!(content.project(0).is_some());
        assert!(content.project(99).is_none());
    }
}
