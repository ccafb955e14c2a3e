use crate::fetcher::LabFetcher;
use crate::models::{City, LabRecord};
use crate::result::Result;
use crate::search::{sort_labs, SortOption};
use std::mem;

/// What the browse page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    NoCitySelected,
    Loading {
        city: &'static City,
    },
    ResultsFound {
        city: &'static City,
        labs: Vec<LabRecord>,
        sort: SortOption,
    },
    NoResultsForCity {
        city: &'static City,
    },
    FetchFailed {
        city: &'static City,
        reason: String,
    },
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::NoCitySelected
    }
}

impl ViewState {
    pub fn select_city(self, city: &'static City) -> Self {
        match self {
            ViewState::NoCitySelected => ViewState::Loading { city },
            other => {
                debug!("city selection ignored while {:?}", other.name());
                other
            }
        }
    }

    pub fn fetch_completed(self, result: Result<Vec<LabRecord>>) -> Self {
        let city = match self {
            ViewState::Loading { city } => city,
            other => {
                debug!("fetch result ignored while {:?}", other.name());
                return other;
            }
        };
        match result {
            Ok(labs) if labs.is_empty() => ViewState::NoResultsForCity { city },
            Ok(labs) => ViewState::ResultsFound {
                city,
                labs,
                sort: SortOption::Default,
            },
            Err(err) => {
                warn!("can't load labs for {}: {}", city.name, err);
                ViewState::FetchFailed {
                    city,
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn set_sort(self, option: SortOption) -> Self {
        match self {
            ViewState::ResultsFound { city, labs, .. } => ViewState::ResultsFound {
                city,
                labs,
                sort: option,
            },
            other => other,
        }
    }

    /// Back to the city picker; drops results and the sort choice.
    pub fn back(self) -> Self {
        ViewState::NoCitySelected
    }

    pub fn name(&self) -> &'static str {
        match self {
            ViewState::NoCitySelected => "NoCitySelected",
            ViewState::Loading { .. } => "Loading",
            ViewState::ResultsFound { .. } => "ResultsFound",
            ViewState::NoResultsForCity { .. } => "NoResultsForCity",
            ViewState::FetchFailed { .. } => "FetchFailed",
        }
    }

    pub fn city(&self) -> Option<&'static City> {
        match self {
            ViewState::NoCitySelected => None,
            ViewState::Loading { city }
            | ViewState::ResultsFound { city, .. }
            | ViewState::NoResultsForCity { city }
            | ViewState::FetchFailed { city, .. } => Some(*city),
        }
    }

    pub fn sort(&self) -> SortOption {
        match self {
            ViewState::ResultsFound { sort, .. } => *sort,
            _ => SortOption::Default,
        }
    }

    pub fn sort_enabled(&self) -> bool {
        matches!(self, ViewState::ResultsFound { .. })
    }

    pub fn sorted_labs(&self) -> Vec<LabRecord> {
        match self {
            ViewState::ResultsFound { labs, sort, .. } => sort_labs(labs, *sort),
            _ => vec![],
        }
    }

    pub fn heading(&self) -> String {
        match self.city() {
            Some(city) => format!("Laboratories in {}", city.name),
            None => "Search Labs".to_string(),
        }
    }

    pub fn status_message(&self) -> Option<String> {
        match self {
            ViewState::Loading { .. } => Some("Loading data...".to_string()),
            ViewState::NoResultsForCity { .. } => {
                Some("Currently we are not available here.".to_string())
            }
            ViewState::FetchFailed { reason, .. } => {
                Some(format!("Couldn't load laboratories: {}", reason))
            }
            _ => None,
        }
    }
}

/// Browse page state: the view plus the optional locality hint.
pub struct BrowseSession {
    fetcher: LabFetcher,
    view: ViewState,
    locality_hint: Option<String>,
}

impl BrowseSession {
    pub fn new(fetcher: LabFetcher) -> Self {
        Self {
            fetcher,
            view: ViewState::NoCitySelected,
            locality_hint: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn locality_hint(&self) -> Option<&str> {
        self.locality_hint.as_deref()
    }

    pub fn set_locality_hint(&mut self, hint: Option<String>) {
        self.locality_hint = hint;
    }

    pub async fn select_city(&mut self, city: &'static City) -> &ViewState {
        self.transition(|view| view.select_city(city));
        if let ViewState::Loading { .. } = self.view {
            let result = self.fetcher.fetch(city).await;
            self.transition(|view| view.fetch_completed(result));
        }
        &self.view
    }

    pub fn set_sort(&mut self, option: SortOption) -> &ViewState {
        self.transition(|view| view.set_sort(option));
        &self.view
    }

    pub fn back(&mut self) -> &ViewState {
        self.transition(ViewState::back);
        &self.view
    }

    fn transition<F: FnOnce(ViewState) -> ViewState>(&mut self, f: F) {
        let current = mem::take(&mut self.view);
        self.view = f(current);
    }
}
