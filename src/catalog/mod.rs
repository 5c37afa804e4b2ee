mod load;
mod project;
mod search;

pub use load::load_catalog;
pub use project::{Catalog, CatalogError, Project};
pub use search::filter_projects;
