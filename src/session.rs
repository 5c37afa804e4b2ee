use std::collections::HashMap;
use std::fmt;

use crate::app::Route;
use crate::content::SectionId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKey {
    ScrollToSection,
    ProjectsScrollPos,
    ScrollPosBeforeReload,
    ReloadPath,
}

impl SessionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::ScrollToSection => "scrollToSection",
            SessionKey::ProjectsScrollPos => "projectsScrollPos",
            SessionKey::ScrollPosBeforeReload => "scrollPosBeforeReload",
            SessionKey::ReloadPath => "reloadPath",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReloadPoint {
    pub offset: f32,
    pub path: String,
}

#[derive(Debug, Default)]
pub struct SessionStore {
    entries: HashMap<SessionKey, String>,
}

impl SessionStore {
    pub fn put(&mut self, key: SessionKey, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(key = %key, value = %value, "session write");
        self.entries.insert(key, value);
    }

    pub fn peek(&self, key: SessionKey) -> Option<&str> {
        self.entries.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: SessionKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn take(&mut self, key: SessionKey) -> Option<String> {
        let value = self.entries.remove(&key);
        if let Some(value) = &value {
            tracing::debug!(key = %key, value = %value, "session consume");
        }
        value
    }

    pub fn remove(&mut self, key: SessionKey) {
        self.entries.remove(&key);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn put_pending_section(&mut self, section: SectionId) {
        self.put(SessionKey::ScrollToSection, section.as_str());
    }

    /// Consumes the pending section. An unparseable value is still consumed.
    pub fn take_pending_section(&mut self) -> Option<SectionId> {
        let raw = self.take(SessionKey::ScrollToSection)?;
        match raw.parse() {
            Ok(section) => Some(section),
            Err(error) => {
                tracing::warn!(%error, "discarding pending section");
                None
            }
        }
    }

    pub fn put_catalog_return(&mut self, offset: f32) {
        self.put(SessionKey::ProjectsScrollPos, format_offset(offset));
    }

    pub fn peek_catalog_return(&self) -> Option<f32> {
        self.peek(SessionKey::ProjectsScrollPos).and_then(parse_offset)
    }

    pub fn save_reload_point(&mut self, offset: f32, route: Route) {
        self.put(SessionKey::ScrollPosBeforeReload, format_offset(offset));
        self.put(SessionKey::ReloadPath, route.path());
    }

    pub fn has_reload_point(&self) -> bool {
        self.contains(SessionKey::ScrollPosBeforeReload)
    }

    /// The reload point saved on `route`, if any. Consumption is left to the
    /// caller so the entries can be cleared once the restoring jump has run.
    pub fn reload_point_for(&self, route: Route) -> Option<ReloadPoint> {
        let offset = self.peek(SessionKey::ScrollPosBeforeReload)?;
        let path = self.peek(SessionKey::ReloadPath)?;
        if path != route.path() {
            return None;
        }

        parse_offset(offset).map(|offset| ReloadPoint {
            offset,
            path: path.to_owned(),
        })
    }
}

fn format_offset(offset: f32) -> String {
    format!("{}", offset.max(0.0).round() as i64)
}

fn parse_offset(raw: &str) -> Option<f32> {
    match raw.trim().parse::<f32>() {
        Ok(value) if value.is_finite() => Some(value.max(0.0)),
        _ => {
            tracing::warn!(raw, "ignoring malformed stored scroll offset");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_consumes_exactly_once() {
        let mut store = SessionStore::default();
        store.put_pending_section(SectionId::Skills);
        assert_eq!(store.take_pending_section(), Some(SectionId::Skills));
        assert_eq!(store.take_pending_section(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn peek_does_not_consume() {
        let mut store = SessionStore::default();
        store.put_catalog_return(812.4);
        assert_eq!(store.peek_catalog_return(), Some(812.0));
        assert_eq!(store.peek_catalog_return(), Some(812.0));
        assert!(store.contains(SessionKey::ProjectsScrollPos));
    }

    #[test]
    fn malformed_pending_section_is_still_consumed() {
        let mut store = SessionStore::default();
        store.put(SessionKey::ScrollToSection, "footer");
        assert_eq!(store.take_pending_section(), None);
        assert!(!store.contains(SessionKey::ScrollToSection));
    }

    #[test]
    fn reload_point_requires_matching_path() {
        let mut store = SessionStore::default();
        store.save_reload_point(420.0, Route::Projects);

        assert_eq!(store.reload_point_for(Route::Home), None);
        assert!(store.contains(SessionKey::ScrollPosBeforeReload));
        assert!(store.contains(SessionKey::ReloadPath));

        let point = store.reload_point_for(Route::Projects);
        assert_eq!(
            point,
            Some(ReloadPoint {
                offset: 420.0,
                path: "/projects".to_owned(),
            })
        );
        store.remove(SessionKey::ScrollPosBeforeReload);
        store.remove(SessionKey::ReloadPath);
        assert!(store.is_empty());
    }

    #[test]
    fn keys_use_browser_storage_names() {
        assert_eq!(SessionKey::ScrollToSection.as_str(), "scrollToSection");
        assert_eq!(SessionKey::ProjectsScrollPos.as_str(), "projectsScrollPos");
        assert_eq!(
            SessionKey::ScrollPosBeforeReload.as_str(),
            "scrollPosBeforeReload"
        );
        assert_eq!(SessionKey::ReloadPath.as_str(), "reloadPath");
    }
}
