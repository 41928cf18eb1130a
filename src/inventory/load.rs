//! Inventory loading
//!
//! A [`Loader`] reads its source exactly once, parses the body as JSON,
//! validates it with [`validate`](super::validate::validate) and deserializes
//! it. Any failure is reported once to an [`ErrorSink`] and replaced by the
//! empty inventory; a partially valid document is never returned.

use super::error::LoadError;
use super::types::Inventory;
use super::validate::validate;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Receiver for user-visible error messages (an error banner)
pub trait ErrorSink {
    /// Show an error message to the user
    fn show_error(&mut self, message: &str);
}

/// Something an inventory document can be read from
///
/// `fetch` consumes the source, so a source is read at most once.
pub trait InventorySource {
    /// Human-readable name used in error messages and logs
    fn name(&self) -> String;

    /// Read the raw document body
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Transport` or `LoadError::Status` when the body
    /// cannot be obtained.
    fn fetch(self) -> Result<String, LoadError>;
}

/// Inventory stored in a local file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl InventorySource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|e| LoadError::Transport {
            source_name: self.name(),
            reason: e.to_string(),
        })
    }
}

/// Inventory read from any reader (stdin, in-memory buffers)
pub struct ReaderSource<R> {
    name: String,
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    #[must_use]
    pub fn new(name: impl Into<String>, reader: R) -> Self {
        Self {
            name: name.into(),
            reader,
        }
    }
}

impl<R: Read> InventorySource for ReaderSource<R> {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fetch(mut self) -> Result<String, LoadError> {
        let mut body = String::new();
        self.reader
            .read_to_string(&mut body)
            .map_err(|e| LoadError::Transport {
                source_name: self.name.clone(),
                reason: e.to_string(),
            })?;
        Ok(body)
    }
}

/// Cache behaviour for remote sources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheMode {
    /// Let intermediaries serve a cached copy
    #[default]
    Default,
    /// Always revalidate; appends a cache-busting parameter
    NoStore,
}

/// Inventory served over HTTP(S)
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    cache: CacheMode,
}

#[cfg(feature = "http")]
impl HttpSource {
    #[must_use]
    pub fn new(url: impl Into<String>, cache: CacheMode) -> Self {
        Self {
            url: url.into(),
            cache,
        }
    }

    fn request_url(&self) -> String {
        match self.cache {
            CacheMode::Default => self.url.clone(),
            CacheMode::NoStore => {
                let millis = chrono::Utc::now().timestamp_millis();
                let sep = if self.url.contains('?') { '&' } else { '?' };
                format!("{}{sep}_={millis}", self.url)
            }
        }
    }
}

#[cfg(feature = "http")]
impl InventorySource for HttpSource {
    fn name(&self) -> String {
        self.url.clone()
    }

    fn fetch(self) -> Result<String, LoadError> {
        let transport = |e: reqwest::Error| LoadError::Transport {
            source_name: self.url.clone(),
            reason: e.to_string(),
        };

        let client = reqwest::blocking::Client::new();
        let mut request = client.get(self.request_url());
        if self.cache == CacheMode::NoStore {
            request = request.header("Cache-Control", "no-store");
        }

        let response = request.send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                source_name: self.url.clone(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }
}

/// Source selected from a command-line or config value
///
/// `-` reads stdin, `http://`/`https://` values are fetched remotely when the
/// `http` feature is enabled, anything else is a file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    Remote { url: String, cache: CacheMode },
}

impl Source {
    /// Interpret a location string
    #[must_use]
    pub fn parse(location: &str, cache: CacheMode) -> Self {
        let location = location.trim();
        if location == "-" {
            Self::Stdin
        } else if location.starts_with("http://") || location.starts_with("https://") {
            Self::Remote {
                url: location.to_string(),
                cache,
            }
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl InventorySource for Source {
    fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "<stdin>".to_string(),
            Self::Remote { url, .. } => url.clone(),
        }
    }

    fn fetch(self) -> Result<String, LoadError> {
        match self {
            Self::File(path) => FileSource::new(path).fetch(),
            Self::Stdin => ReaderSource::new("<stdin>", std::io::stdin().lock()).fetch(),
            #[cfg(feature = "http")]
            Self::Remote { url, cache } => HttpSource::new(url, cache).fetch(),
            #[cfg(not(feature = "http"))]
            Self::Remote { url, .. } => Err(LoadError::Transport {
                source_name: url,
                reason: "remote inventories require the `http` feature".to_string(),
            }),
        }
    }
}

/// Parse and validate a raw inventory document
///
/// # Errors
///
/// Returns `LoadError::Parse` for malformed JSON and `LoadError::Schema` for
/// documents that fail the shape check.
pub fn parse(body: &str) -> Result<Inventory, LoadError> {
    let doc: serde_json::Value = serde_json::from_str(body)?;
    validate(&doc)?;
    Ok(serde_json::from_value(doc)?)
}

/// Single-shot inventory loader
pub struct Loader<S> {
    source: S,
}

impl<S: InventorySource> Loader<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Load the inventory, propagating any failure
    ///
    /// # Errors
    ///
    /// Returns `LoadError` on transport, parse or schema failure.
    pub fn try_load(self) -> Result<Inventory, LoadError> {
        let name = self.source.name();
        let body = self.source.fetch()?;
        let inventory = parse(&body)?;
        tracing::info!(source = %name, items = inventory.len(), "inventory loaded");
        Ok(inventory)
    }

    /// Load the inventory, falling back to the empty inventory on failure
    ///
    /// The failure is reported to `sink` exactly once.
    pub fn load(self, sink: &mut dyn ErrorSink) -> Inventory {
        let name = self.source.name();
        match self.try_load() {
            Ok(inventory) => inventory,
            Err(e) => {
                tracing::warn!(source = %name, error = %e, "falling back to empty inventory");
                sink.show_error(&e.to_string());
                Inventory::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Default)]
    struct Banner(Vec<String>);

    impl ErrorSink for Banner {
        fn show_error(&mut self, message: &str) {
            self.0.push(message.to_string());
        }
    }

    const VALID: &str = r#"{
        "items": [{
            "id": "1", "name": "Lamp", "description": "Warm", "category": "Lighting",
            "price": 10, "currency": "USD", "inStock": true, "tags": ["desk"],
            "image": "", "createdAt": "2024-01-01"
        }],
        "meta": { "lastUpdated": "2024-02-01" }
    }"#;

    #[test]
    fn test_parse_valid_document() {
        let inventory = parse(VALID).unwrap();
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.items[0].price, 10.0);
        assert_eq!(inventory.meta.last_updated, "2024-02-01");
    }

    #[test]
    fn test_load_from_reader() {
        let mut banner = Banner::default();
        let inventory =
            Loader::new(ReaderSource::new("memory", Cursor::new(VALID))).load(&mut banner);
        assert_eq!(inventory.len(), 1);
        assert!(banner.0.is_empty());
    }

    #[test]
    fn test_parse_error_falls_back_to_empty() {
        let mut banner = Banner::default();
        let inventory =
            Loader::new(ReaderSource::new("memory", Cursor::new("{ nope"))).load(&mut banner);
        assert_eq!(inventory, Inventory::empty());
        assert_eq!(banner.0.len(), 1);
        assert!(banner.0[0].contains("not valid JSON"));
    }

    #[test]
    fn test_schema_error_falls_back_to_empty() {
        let body = VALID.replace("\"price\": 10", "\"price\": \"10\"");
        let mut banner = Banner::default();
        let inventory =
            Loader::new(ReaderSource::new("memory", Cursor::new(body))).load(&mut banner);
        assert!(inventory.is_empty());
        assert_eq!(banner.0, vec!["Inventory failed validation: items[0].price must be a number"]);
    }

    #[test]
    fn test_missing_file_is_transport_error() {
        let result = Loader::new(FileSource::new("/definitely/not/here.json")).try_load();
        assert!(matches!(result, Err(LoadError::Transport { .. })));
    }

    #[test]
    fn test_source_parse() {
        assert_eq!(Source::parse("-", CacheMode::Default), Source::Stdin);
        assert_eq!(
            Source::parse("data/inventory.json", CacheMode::Default),
            Source::File(PathBuf::from("data/inventory.json"))
        );
        assert!(matches!(
            Source::parse("https://shop.example/inventory.json", CacheMode::NoStore),
            Source::Remote { cache: CacheMode::NoStore, .. }
        ));
    }
}
