#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Place,
    Geocode,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Place => "place",
            Category::Geocode => "geocode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Autocomplete,
    Details,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Search => "search",
            Action::Autocomplete => "autocomplete",
            Action::Details => "details",
        }
    }
}

const PLACE_SEARCH_DEFAULTS: &[(&str, &str)] = &[
    ("radius", "10"),
    ("rankby", "prominence"),
    ("language", "en"),
];

const LANGUAGE_DEFAULTS: &[(&str, &str)] = &[("language", "en")];

/// Query parameters applied under the caller's own for a given endpoint.
pub fn default_params(
    category: Category,
    action: Option<Action>,
) -> &'static [(&'static str, &'static str)] {
    match (category, action) {
        (Category::Place, Some(Action::Search)) => PLACE_SEARCH_DEFAULTS,
        (Category::Place, Some(Action::Autocomplete)) => LANGUAGE_DEFAULTS,
        (Category::Place, Some(Action::Details)) => LANGUAGE_DEFAULTS,
        (Category::Geocode, None) => LANGUAGE_DEFAULTS,
        _ => &[],
    }
}

/// Path below `/maps/api`, e.g. `place/search/json` or `geocode/json`.
pub fn endpoint_path(category: Category, action: Option<Action>) -> String {
    match action {
        Some(action) => format!("{}/{}/json", category.as_str(), action.as_str()),
        None => format!("{}/json", category.as_str()),
    }
}
