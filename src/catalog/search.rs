use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::Project;

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

fn project_score(matcher: &SkimMatcherV2, project: &Project, query: &str) -> Option<i64> {
    let name = fuzzy_match_score(matcher, &project.name, query).map(|score| score * 2);
    let tags = project
        .tech_stack
        .iter()
        .filter_map(|tag| fuzzy_match_score(matcher, tag, query))
        .max();
    let description = fuzzy_match_score(matcher, &project.description, query).map(|score| score / 2);

    [name, tags, description].into_iter().flatten().max()
}

/// Indices of matching projects, best match first. An empty query keeps catalog order.
pub fn filter_projects(projects: &[Project], query: &str) -> Vec<usize> {
    let query = query.trim();
    if query.is_empty() {
        return (0..projects.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored = projects
        .iter()
        .enumerate()
        .filter_map(|(index, project)| {
            project_score(&matcher, project, query).map(|score| (index, score))
        })
        .collect::<Vec<_>>();
    scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    scored.into_iter().map(|(index, _)| index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog;

    #[test]
    fn empty_query_keeps_catalog_order() {
        let catalog = load_catalog(None).expect("embedded");
        assert_eq!(
            filter_projects(catalog.projects(), "  "),
            (0..catalog.len()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn matches_by_tech_tag() {
        let catalog = load_catalog(None).expect("embedded");
        let hits = filter_projects(catalog.projects(), "supabase");
        let names: Vec<_> = hits
            .iter()
            .map(|&index| catalog.projects()[index].name.as_str())
            .collect();
        assert_eq!(names.first(), Some(&"Apnisec"));
    }

    #[test]
    fn name_match_ranks_first() {
        let catalog = load_catalog(None).expect("embedded");
        let hits = filter_projects(catalog.projects(), "imagino");
        assert_eq!(catalog.projects()[hits[0]].name, "Imagino");
    }

    #[test]
    fn nonsense_query_matches_nothing() {
        let catalog = load_catalog(None).expect("embedded");
        assert!(filter_projects(catalog.projects(), "zzqxj").is_empty());
    }
}
