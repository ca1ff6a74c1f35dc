//! Name search over a person list.
//!
//! A query matches a person when their given or family name contains it,
//! ignoring case. The query is literal text, not a pattern.

use regex::{Regex, RegexBuilder};

use crate::model::Person;

/// A compiled, case-insensitive name query.
#[derive(Debug, Clone)]
pub struct NameQuery {
    pattern: Option<Regex>,
}

impl NameQuery {
    /// Blank queries compile to a query that matches nobody. Surrounding
    /// whitespace in any other query is matched as written.
    pub fn new(query: &str) -> Result<Self, regex::Error> {
        if query.trim().is_empty() {
            return Ok(Self { pattern: None });
        }
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.pattern.as_ref().is_some_and(|re| {
            re.is_match(&person.first_name) || re.is_match(&person.last_name)
        })
    }
}

/// Persons matching `query`, in input order.
pub fn search_persons<'a>(persons: &'a [Person], query: &str) -> Result<Vec<&'a Person>, regex::Error> {
    let query = NameQuery::new(query)?;
    Ok(persons.iter().filter(|p| query.matches(p)).collect())
}
