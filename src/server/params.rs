//! Query string handling for the lookup path

/// Name of the query parameter carrying requested icon values
pub const VALUES_PARAM: &str = "values";

/// Name of the query parameter carrying the picker search term
pub const SEARCH_PARAM: &str = "search";

/// Collect requested values from a raw query string.
///
/// Accepts `values=a`, `values=a,b` and repeated `values=a&values=b`, in any
/// mix. Every entry is trimmed and blanks are dropped. Returns `None` when no
/// usable value was supplied.
pub fn parse_values(raw_query: Option<&str>) -> Option<Vec<String>> {
    let raw_query = raw_query?;

    let values: Vec<String> = url::form_urlencoded::parse(raw_query.as_bytes())
        .filter(|(key, _)| key == VALUES_PARAM)
        .flat_map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect();

    (!values.is_empty()).then_some(values)
}

/// The first non-blank search term in a raw query string, trimmed.
///
/// Repeated `search` parameters are tolerated; later ones are ignored.
pub fn parse_search(raw_query: Option<&str>) -> Option<String> {
    url::form_urlencoded::parse(raw_query?.as_bytes())
        .filter(|(key, _)| key == SEARCH_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .find(|term| !term.is_empty())
}
