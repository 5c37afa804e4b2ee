use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{Catalog, Project};

const EMBEDDED_CATALOG: &str = include_str!("projects.json");

pub(super) fn parse_catalog(raw: &str) -> Result<Catalog> {
    let projects: Vec<Project> =
        serde_json::from_str(raw).context("invalid project catalog JSON")?;
    Ok(Catalog::new(projects)?)
}

pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return parse_catalog(EMBEDDED_CATALOG).context("embedded project catalog is invalid");
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read project catalog {}", path.display()))?;
    let catalog = parse_catalog(&raw)
        .with_context(|| format!("failed to load project catalog {}", path.display()))?;
    tracing::info!(path = %path.display(), projects = catalog.len(), "loaded project catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = load_catalog(None).expect("embedded catalog parses");
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.projects()[0].name, "Clever Learn");
        assert!(catalog.projects()[2].is_private);
        assert_eq!(catalog.projects()[2].source_link(), None);
    }

    #[test]
    fn camel_case_keys_map_to_fields() {
        let raw = r#"[{
            "id": 9,
            "name": "Demo",
            "description": "d",
            "image": "i",
            "github": "https://example.invalid/demo",
            "live": "https://example.invalid",
            "techStack": ["Rust", "egui"],
            "isPrivate": false
        }]"#;
        let catalog = parse_catalog(raw).expect("valid");
        let project = &catalog.projects()[0];
        assert_eq!(project.tech_stack, vec!["Rust".to_owned(), "egui".to_owned()]);
        assert_eq!(project.source_link(), Some("https://example.invalid/demo"));
    }

    #[test]
    fn malformed_json_reports_context() {
        let error = parse_catalog("{ not json").expect_err("must fail");
        assert!(error.to_string().contains("invalid project catalog JSON"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = load_catalog(Some(Path::new("/definitely/not/here.json")))
            .expect_err("must fail");
        assert!(error.to_string().contains("/definitely/not/here.json"));
    }
}
