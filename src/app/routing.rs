use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Projects,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Projects => "/projects",
        }
    }

    /// Client-side routing: any unknown path lands on the home page.
    pub fn from_path(path: &str) -> Self {
        match path.trim().trim_end_matches('/') {
            "/projects" | "projects" => Route::Projects,
            _ => Route::Home,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    pub fragment: Option<String>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            fragment: None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route.path())?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location must start with `/`, got `{0}`")]
    NotAbsolute(String),
}

impl FromStr for Location {
    type Err = LocationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if !raw.starts_with('/') {
            return Err(LocationError::NotAbsolute(raw.to_owned()));
        }

        let (path, fragment) = match raw.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (raw, None),
        };
        let fragment = fragment
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_owned);

        Ok(Self {
            route: Route::from_path(path),
            fragment,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    Back,
    Forward,
}

#[derive(Debug)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(start: Location) -> Self {
        Self {
            entries: vec![start],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn navigate(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    pub fn go(&mut self, direction: HistoryDirection) -> Option<&Location> {
        match direction {
            HistoryDirection::Back if self.index > 0 => self.index -= 1,
            HistoryDirection::Forward if self.index + 1 < self.entries.len() => self.index += 1,
            _ => return None,
        }
        Some(&self.entries[self.index])
    }
}
