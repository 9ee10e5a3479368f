//! Bracket-indexed query parameters.
//!
//! # Responsibilities
//! - Hold parameters in insertion order, grouped by family name
//! - Render `name=value` and `name[i]=value` pairs as a query string
//! - Parse a return URL query string back into families
//!
//! # Design Decisions
//! - A family is created on first insert and never moves afterwards,
//!   so family blocks are never interleaved
//! - Only characters that would change the query structure are escaped;
//!   `:` `/` `[` `]` stay literal
//! - On parse, the first occurrence of a duplicated key wins

use std::collections::BTreeSet;
use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::form_urlencoded;

/// Characters escaped in query keys and values.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^');

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    index: Option<usize>,
    value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Family {
    name: String,
    entries: Vec<Entry>,
}

/// Ordered mapping from parameter name to its values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameterSet {
    families: Vec<Family>,
}

impl QueryParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (with or without the leading `?`).
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let (name, index) = split_indexed_key(&key);
            let family = params.family_mut(name);
            if family.entries.iter().any(|e| e.index == index) {
                continue;
            }
            family.entries.push(Entry {
                index,
                value: value.into_owned(),
            });
        }

        params
    }

    /// Append a plain `name=value` parameter.
    pub fn push_scalar(&mut self, name: &str, value: impl Into<String>) {
        self.family_mut(name).entries.push(Entry {
            index: None,
            value: value.into(),
        });
    }

    /// Append the next `name[i]=value` of a family; `i` counts up from 0.
    pub fn push_indexed(&mut self, name: &str, value: impl Into<String>) {
        let family = self.family_mut(name);
        let index = family.entries.iter().filter(|e| e.index.is_some()).count();
        family.entries.push(Entry {
            index: Some(index),
            value: value.into(),
        });
    }

    /// Value of a plain parameter.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.entry(name, None)
    }

    /// Value at index `i` of a family.
    pub fn indexed(&self, name: &str, index: usize) -> Option<&str> {
        self.entry(name, Some(index))
    }

    /// Distinct indices present for a family.
    pub fn indices(&self, name: &str) -> BTreeSet<usize> {
        self.family(name)
            .map(|f| f.entries.iter().filter_map(|e| e.index).collect())
            .unwrap_or_default()
    }

    /// Family names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(|f| f.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.to_string()
    }

    fn family(&self, name: &str) -> Option<&Family> {
        self.families.iter().find(|f| f.name == name)
    }

    fn family_mut(&mut self, name: &str) -> &mut Family {
        let pos = match self.families.iter().position(|f| f.name == name) {
            Some(pos) => pos,
            None => {
                self.families.push(Family {
                    name: name.to_string(),
                    entries: Vec::new(),
                });
                self.families.len() - 1
            }
        };
        &mut self.families[pos]
    }

    fn entry(&self, name: &str, index: Option<usize>) -> Option<&str> {
        self.family(name)?
            .entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.value.as_str())
    }
}

impl fmt::Display for QueryParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for family in &self.families {
            let name = utf8_percent_encode(&family.name, QUERY_COMPONENT);
            for entry in &family.entries {
                if !first {
                    f.write_str("&")?;
                }
                first = false;
                match entry.index {
                    Some(i) => write!(f, "{}[{}]", name, i)?,
                    None => write!(f, "{}", name)?,
                }
                write!(f, "={}", utf8_percent_encode(&entry.value, QUERY_COMPONENT))?;
            }
        }
        Ok(())
    }
}

/// Split `nonce[3]` into (`nonce`, Some(3)); anything else is a plain key.
fn split_indexed_key(key: &str) -> (&str, Option<usize>) {
    if let Some((name, rest)) = key.strip_suffix(']').and_then(|k| k.rsplit_once('[')) {
        if !name.is_empty() {
            if let Ok(index) = rest.parse::<usize>() {
                return (name, Some(index));
            }
        }
    }
    (key, None)
}
