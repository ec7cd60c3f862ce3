//! The [`Properties`] store.
//!
//! A string-keyed, string-valued map with an ordering flag fixed at
//! construction. When ordered, every enumeration (including serialization)
//! sorts keys ascending at the time it runs; the underlying map is never
//! kept sorted.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LoadError, LoadResult, StoreError, StoreResult};
use crate::reader::{Encoding, LineReader};
use crate::writer::{write_properties, StoreOptions};

/// An in-memory property list with `.properties` load/store.
///
/// Values are stored as strings; anything assigned through [`set`](Self::set)
/// is converted with `ToString`. Not internally synchronized.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    entries: HashMap<String, String>,
    ordered: bool,
}

impl Properties {
    /// Create an empty, unordered property list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty property list that enumerates keys alphabetically.
    pub fn ordered() -> Self {
        Self::with_order(true)
    }

    /// Create an empty property list with the given ordering.
    pub fn with_order(ordered: bool) -> Self {
        Self {
            entries: HashMap::new(),
            ordered,
        }
    }

    /// Whether keys are enumerated in ascending order.
    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Insert or replace `key`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
        self.entries.insert(key.into(), value.to_string())
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key`, or the string form of `default` when absent.
    pub fn get_or(&self, key: &str, default: impl ToString) -> String {
        match self.get(key) {
            Some(value) => value.to_string(),
            None => default.to_string(),
        }
    }

    /// Whether `key` has a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry. The ordering flag is unaffected.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The set of keys.
    pub fn keys(&self) -> HashSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Keys in enumeration order: ascending when ordered, unspecified otherwise.
    pub fn ordered_keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Sorted property names, regardless of the ordering flag.
    pub fn string_property_names(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }

    /// Entries in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        if self.ordered {
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        entries.into_iter()
    }

    /// Read a property list from a byte stream (ISO-8859-1).
    ///
    /// Entries are merged as they are parsed; later duplicates win. On error
    /// the entries parsed so far are kept.
    pub fn load<R: Read>(&mut self, source: R) -> LoadResult<()> {
        self.load_lines(LineReader::new(BufReader::new(source), Encoding::Latin1))
    }

    /// Read a property list from already-decoded text.
    pub fn load_str(&mut self, text: &str) -> LoadResult<()> {
        self.load_lines(LineReader::new(text.as_bytes(), Encoding::Utf8))
    }

    /// Read a property list from a file. The file is closed before returning.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> LoadResult<()> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading properties file");
        self.load(file)
    }

    fn load_lines<R: BufRead>(&mut self, mut reader: LineReader<R>) -> LoadResult<()> {
        let mut parsed = 0usize;
        while let Some(line) = reader.next_logical()? {
            let (key, value) = line.split()?;
            self.entries.insert(key, value);
            parsed += 1;
        }
        debug!(parsed, total = self.entries.len(), "properties loaded");
        Ok(())
    }

    /// Write the property list to `destination` with a timestamp line.
    pub fn store<W: Write>(&self, destination: W, comment: Option<&str>) -> StoreResult<()> {
        self.store_with(destination, comment, &StoreOptions::default())
    }

    /// Write the property list to `destination` using `options`.
    pub fn store_with<W: Write>(
        &self,
        destination: W,
        comment: Option<&str>,
        options: &StoreOptions,
    ) -> StoreResult<()> {
        let written = write_properties(destination, comment, self.iter(), options)?;
        debug!(written, ordered = self.ordered, "properties stored");
        Ok(())
    }

    /// Write the property list to a file, creating missing parent
    /// directories and replacing any existing file.
    pub fn store_file(&self, path: impl AsRef<Path>, comment: Option<&str>) -> StoreResult<()> {
        self.store_file_with(path, comment, &StoreOptions::default())
    }

    /// Write the property list to a file using `options`.
    pub fn store_file_with(
        &self,
        path: impl AsRef<Path>,
        comment: Option<&str>,
        options: &StoreOptions,
    ) -> StoreResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                debug!(dir = %parent.display(), "creating parent directories");
            }
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let file = File::create(path).map_err(|source| StoreError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "storing properties file");
        self.store_with(file, comment, options)
    }
}

impl<K, V> Extend<(K, V)> for Properties
where
    K: Into<String>,
    V: ToString,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
