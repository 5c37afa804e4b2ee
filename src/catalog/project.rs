use std::collections::HashSet;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(default, rename = "github")]
    pub source_url: Option<String>,
    #[serde(rename = "live")]
    pub live_url: String,
    #[serde(default, rename = "techStack")]
    pub tech_stack: Vec<String>,
    #[serde(default, rename = "isPrivate")]
    pub is_private: bool,
}

impl Project {
    pub fn source_link(&self) -> Option<&str> {
        if self.is_private {
            return None;
        }
        self.source_url.as_deref()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("project catalog is empty")]
    Empty,
    #[error("duplicate project id {0}")]
    DuplicateId(u32),
    #[error("public project `{0}` has no source URL")]
    MissingSource(String),
}

#[derive(Clone, Debug)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub const HOME_PREVIEW_LEN: usize = 3;

    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        if projects.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
            if !project.is_private && project.source_url.is_none() {
                return Err(CatalogError::MissingSource(project.name.clone()));
            }
        }

        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn home_preview(&self) -> &[Project] {
        let end = self.projects.len().min(Self::HOME_PREVIEW_LEN);
        &self.projects[..end]
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, private: bool, source: Option<&str>) -> Project {
        Project {
            id,
            name: format!("project-{id}"),
            description: String::new(),
            image: String::new(),
            source_url: source.map(str::to_owned),
            live_url: "https://example.invalid".to_owned(),
            tech_stack: Vec::new(),
            is_private: private,
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            project(1, false, Some("a")),
            project(1, false, Some("b")),
        ]);
        assert_eq!(result.err(), Some(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn rejects_public_project_without_source() {
        let result = Catalog::new(vec![project(7, false, None)]);
        assert!(matches!(result, Err(CatalogError::MissingSource(_))));
    }

    #[test]
    fn private_project_never_exposes_source() {
        let hidden = project(2, true, Some("https://example.invalid/src"));
        assert_eq!(hidden.source_link(), None);
        let open = project(3, false, Some("https://example.invalid/src"));
        assert_eq!(open.source_link(), Some("https://example.invalid/src"));
    }

    #[test]
    fn home_preview_is_capped() {
        let catalog = Catalog::new((1..=2).map(|id| project(id, true, None)).collect())
            .expect("valid catalog");
        assert_eq!(catalog.home_preview().len(), 2);

        let catalog = Catalog::new((1..=6).map(|id| project(id, true, None)).collect())
            .expect("valid catalog");
        assert_eq!(catalog.home_preview().len(), Catalog::HOME_PREVIEW_LEN);
    }
}
