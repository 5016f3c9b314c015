use std::{
    collections::HashSet,
    fs,
    path::PathBuf,
    sync::Arc,
};

use serde::Deserialize;

use crate::{errors::Error, Result};

/// Source of canonical country names.
///
/// Implementations may re-read their backing data on every call; the catalog
/// does not cache.
pub trait CountrySource: Send + Sync {
    fn load(&self) -> Result<HashSet<String>>;
}

#[derive(Deserialize)]
struct CountryRecord {
    name: String,
}

/// Reads a JSON array of `{ "name": "..." }` records from disk.
#[derive(Clone, Debug)]
pub struct JsonFileCountrySource {
    path: PathBuf,
}

impl JsonFileCountrySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CountrySource for JsonFileCountrySource {
    fn load(&self) -> Result<HashSet<String>> {
        let txt = fs::read_to_string(&self.path)
            .map_err(|e| Error::Catalog(format!("{}: {e}", self.path.display())))?;
        let records: Vec<CountryRecord> = serde_json::from_str(&txt)
            .map_err(|e| Error::Catalog(format!("{}: {e}", self.path.display())))?;
        Ok(records.into_iter().map(|r| r.name).collect())
    }
}

/// Fixed in-memory list. Handy for tests and for embedding a catalog.
#[derive(Clone, Debug, Default)]
pub struct StaticCountrySource {
    names: HashSet<String>,
}

impl StaticCountrySource {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl CountrySource for StaticCountrySource {
    fn load(&self) -> Result<HashSet<String>> {
        Ok(self.names.clone())
    }
}

#[derive(Clone)]
pub struct CountryCatalog {
    source: Arc<dyn CountrySource>,
}

impl CountryCatalog {
    pub fn new(source: Arc<dyn CountrySource>) -> Self {
        Self { source }
    }

    /// True iff the title-cased input is exactly a catalog entry.
    ///
    /// The source is loaded on every call so edits to the list apply without a restart.
    pub fn validate(&self, input: &str) -> Result<bool> {
        let names = self.source.load()?;
        Ok(names.contains(&title_case(input)))
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
///
/// `"united states"` -> `"United States"`, `"guinea-bissau"` -> `"Guinea-Bissau"`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
