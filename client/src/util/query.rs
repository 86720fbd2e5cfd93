//! Links into the search page.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::state::search::SearchCriteria;

/// `/search?from=..&to=..&date=..[&passengers=..]`, form-urlencoded.
pub fn search_href(criteria: &SearchCriteria) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("from", &criteria.from);
    query.append_pair("to", &criteria.to);
    query.append_pair("date", &criteria.date);
    if let Some(passengers) = criteria.passengers {
        query.append_pair("passengers", &passengers.to_string());
    }
    format!("/search?{}", query.finish())
}
