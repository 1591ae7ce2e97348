//! # Search Query Model
//!
//! A serializable boolean query over student documents, plus the in-process
//! evaluation semantics the memory index runs. The shape mirrors what a
//! hosted search cluster would accept, so a remote [`crate::SearchIndex`]
//! implementation can serialize it straight onto the wire.

use serde::{Deserialize, Serialize};
use shared_types::SearchStudent;

/// A searchable field of a student document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    SchoolId,
}

impl Field {
    fn of<'a>(self, doc: &'a SearchStudent) -> &'a str {
        match self {
            Self::FirstName => &doc.first_name,
            Self::LastName => &doc.last_name,
            Self::SchoolId => &doc.school_id,
        }
    }
}

/// One leaf clause of a boolean query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    /// Case-insensitive phrase-prefix match: the field starts with the value.
    MatchPhrasePrefix { field: Field, value: String },
    /// Case-insensitive wildcard match, `*` matching any run of characters.
    Wildcard { field: Field, value: String },
    /// Exact term match.
    Term { field: Field, value: String },
}

impl Clause {
    fn matches(&self, doc: &SearchStudent) -> bool {
        match self {
            Self::MatchPhrasePrefix { field, value } => field
                .of(doc)
                .to_lowercase()
                .starts_with(&value.to_lowercase()),
            Self::Wildcard { field, value } => {
                wildcard_matches(&field.of(doc).to_lowercase(), &value.to_lowercase())
            }
            Self::Term { field, value } => field.of(doc) == value,
        }
    }
}

/// The boolean combinator: at least `minimum_should_match` of the `should`
/// clauses, and every `filter` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolQuery {
    pub should: Vec<Clause>,
    pub minimum_should_match: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(rename = "bool")]
    pub bool_query: BoolQuery,
}

impl SearchQuery {
    /// Evaluate this query against one document.
    #[must_use]
    pub fn matches(&self, doc: &SearchStudent) -> bool {
        let q = &self.bool_query;
        let should_hits = q
            .should
            .iter()
            .filter(|clause| clause.matches(doc))
            .count();
        should_hits >= q.minimum_should_match && q.filter.iter().all(|clause| clause.matches(doc))
    }
}

/// The hybrid student name query.
///
/// Phrase-prefix clauses catch "whole word typed so far" input; wildcard
/// clauses catch a fragment from the middle of a name. One hit on either
/// field is enough. A school filter, when present, is mandatory.
#[must_use]
pub fn student_search_query(query: &str, school_id: Option<&str>) -> SearchQuery {
    let wildcard = format!("*{}*", query.to_lowercase());
    let should = vec![
        Clause::MatchPhrasePrefix {
            field: Field::FirstName,
            value: query.to_owned(),
        },
        Clause::MatchPhrasePrefix {
            field: Field::LastName,
            value: query.to_owned(),
        },
        Clause::Wildcard {
            field: Field::FirstName,
            value: wildcard.clone(),
        },
        Clause::Wildcard {
            field: Field::LastName,
            value: wildcard,
        },
    ];
    let filter = school_id
        .map(|id| {
            vec![Clause::Term {
                field: Field::SchoolId,
                value: id.to_owned(),
            }]
        })
        .unwrap_or_default();

    SearchQuery {
        bool_query: BoolQuery {
            should,
            minimum_should_match: 1,
            filter,
        },
    }
}

/// Glob-style match where `*` spans any run of characters.
fn wildcard_matches(text: &str, pattern: &str) -> bool {
    if !pattern.contains('*') {
        return text == pattern;
    }
    let mut segments = pattern.split('*');
    let Some(first) = segments.next() else {
        return true;
    };
    if !text.starts_with(first) {
        return false;
    }
    let mut rest = &text[first.len()..];
    let mut middle: Vec<&str> = segments.collect();
    let tail = if pattern.ends_with('*') {
        None
    } else {
        middle.pop()
    };
    for segment in middle {
        match rest.find(segment) {
            Some(pos) => rest = &rest[pos + segment.len()..],
            None => return false,
        }
    }
    tail.map_or(true, |tail| rest.ends_with(tail))
}
