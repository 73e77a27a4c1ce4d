//! Shared editing session.
//!
//! A [`Session`] owns one [`Document`] and one [`Dictionary`] and makes them
//! safe to share between threads: document mutations are serialized behind a
//! mutex, and the dictionary sits behind a reader-writer lock so queries run
//! concurrently once it has been built.
//!
//! ```
//! use lineweave::session::Session;
//! use lineweave::dictionary::Dictionary;
//! use std::sync::Arc;
//!
//! let session = Arc::new(Session::new(Dictionary::from_terms(["hello"])));
//! session.with_document(|doc| doc.insert(0, "hello")).unwrap();
//! assert_eq!(session.snapshot(), "hello\n");
//! assert!(session.with_dictionary(|dict| dict.contains("hello")));
//! ```

use crate::dictionary::Dictionary;
use crate::document::Document;
use parking_lot::{Mutex, RwLock};

/// Query parameters applied by the console to suggestion requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestSettings {
    /// Maximum number of suggestions per query
    pub limit: usize,
    /// Maximum edit distance for corrections
    pub max_distance: usize,
    /// Shortest token that triggers autocomplete
    pub min_prefix_len: usize,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            limit: 5,
            max_distance: 2,
            min_prefix_len: 2,
        }
    }
}

/// A document and a dictionary shared by every participant of a session.
///
/// # Thread Safety
///
/// `Session` is `Send + Sync`; wrap it in an `Arc` to share it. All document
/// access goes through [`with_document`](Self::with_document) or
/// [`snapshot`](Self::snapshot), which hold the document lock for the
/// duration of the closure, so no participant ever observes a half-applied
/// edit.
#[derive(Debug, Default)]
pub struct Session {
    document: Mutex<Document>,
    dictionary: RwLock<Dictionary>,
    settings: SuggestSettings,
}

impl Session {
    /// Start a session with an empty document and default settings.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_settings(dictionary, SuggestSettings::default())
    }

    /// Start a session with an empty document and the given settings.
    pub fn with_settings(dictionary: Dictionary, settings: SuggestSettings) -> Self {
        log::debug!(
            "session started: {} words, limit {}, max distance {}",
            dictionary.len(),
            settings.limit,
            settings.max_distance
        );
        Self {
            document: Mutex::new(Document::new()),
            dictionary: RwLock::new(dictionary),
            settings,
        }
    }

    /// Suggestion settings for this session.
    pub fn settings(&self) -> SuggestSettings {
        self.settings
    }

    /// Run `f` with exclusive access to the document.
    pub fn with_document<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        let mut doc = self.document.lock();
        f(&mut doc)
    }

    /// Full document text, taken under the document lock.
    pub fn snapshot(&self) -> String {
        self.document.lock().to_string()
    }

    /// Run `f` with shared read access to the dictionary.
    pub fn with_dictionary<R>(&self, f: impl FnOnce(&Dictionary) -> R) -> R {
        let dict = self.dictionary.read();
        f(&dict)
    }

    /// Run `f` with exclusive write access to the dictionary.
    pub fn dictionary_mut<R>(&self, f: impl FnOnce(&mut Dictionary) -> R) -> R {
        let mut dict = self.dictionary.write();
        f(&mut dict)
    }
}
