use crate::models::LabRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    Default,
    PriceLowToHigh,
    PriceHighToLow,
    RatingLowToHigh,
    RatingHighToLow,
}

impl Default for SortOption {
    fn default() -> Self {
        SortOption::Default
    }
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Default,
        SortOption::PriceLowToHigh,
        SortOption::PriceHighToLow,
        SortOption::RatingLowToHigh,
        SortOption::RatingHighToLow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceLowToHigh => "priceLowToHigh",
            SortOption::PriceHighToLow => "priceHighToLow",
            SortOption::RatingLowToHigh => "ratingLowToHigh",
            SortOption::RatingHighToLow => "ratingHighToLow",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Default => "Select",
            SortOption::PriceLowToHigh => "Price: Low to High",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::RatingLowToHigh => "Rating: Low to High",
            SortOption::RatingHighToLow => "Rating: High to Low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseSortOptionError(pub String);

impl fmt::Display for ParseSortOptionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown sort option {:?}", self.0)
    }
}

impl FromStr for SortOption {
    type Err = ParseSortOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .iter()
            .find(|option| option.as_str() == s)
            .copied()
            .ok_or_else(|| ParseSortOptionError(s.to_string()))
    }
}

fn compare(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Returns a reordered copy of `labs`. Ties keep their original relative order.
pub fn sort_labs(labs: &[LabRecord], option: SortOption) -> Vec<LabRecord> {
    let mut sorted = labs.to_vec();
    match option {
        SortOption::Default => {}
        SortOption::PriceLowToHigh => sorted.sort_by(|a, b| compare(a.pricing, b.pricing)),
        SortOption::PriceHighToLow => sorted.sort_by(|a, b| compare(b.pricing, a.pricing)),
        SortOption::RatingLowToHigh => sorted.sort_by(|a, b| compare(a.rating, b.rating)),
        SortOption::RatingHighToLow => sorted.sort_by(|a, b| compare(b.rating, a.rating)),
    }
    sorted
}
