use crate::catalog::title_case;

/// Countries whose residents may not join (South America).
pub const REGION_DENYLIST: [&str; 12] = [
    "Argentina",
    "Bolivia",
    "Brazil",
    "Chile",
    "Colombia",
    "Ecuador",
    "Guyana",
    "Paraguay",
    "Peru",
    "Suriname",
    "Uruguay",
    "Venezuela",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible,
}

/// Classify an already catalog-valid country. Exact title-case match only, no aliases.
pub fn classify(country: &str) -> Eligibility {
    let normalized = title_case(country);
    if REGION_DENYLIST.contains(&normalized.as_str()) {
        Eligibility::Ineligible
    } else {
        Eligibility::Eligible
    }
}
