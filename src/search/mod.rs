use crate::models::{cities, City};
use crate::tools;

mod sort;

pub use sort::{sort_labs, ParseSortOptionError, SortOption};

/// Cities whose name contains `query` (ignoring case) or whose postal code contains it.
/// An empty query matches the whole directory.
pub fn search_cities(query: &str) -> Vec<&'static City> {
    cities()
        .iter()
        .filter(|city| {
            tools::contains_ignore_case(city.name, query) || city.postal_code.contains(query)
        })
        .collect()
}

/// The city picker: the current query plus its matches.
#[derive(Debug, Clone, Default)]
pub struct CitySearch {
    query: String,
}

impl CitySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn matches(&self) -> Vec<&'static City> {
        search_cities(&self.query)
    }

    /// Explicit pick from the match list.
    pub fn select(&self, city: &'static City) -> &'static City {
        debug!("selected {} ({})", city.name, city.postal_code);
        city
    }

    /// Commit key: picks the first match, if any.
    pub fn commit(&self) -> Option<&'static City> {
        self.matches().into_iter().next().map(|city| self.select(city))
    }
}
