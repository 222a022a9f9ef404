//! Song persistence.
//!
//! `Storage` is a flat string key-value view over one sled tree, used the way
//! a page would use local storage. `SongStore` keeps the whole collection in
//! memory and rewrites it under a single key after every mutation.

use chrono::Utc;
#[cfg(test)]
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tracing::{info, warn};

use crate::error::Result;
use crate::models::Song;

pub const STORAGE_TREE: &str = "songbook:local";
pub const SONGS_KEY: &str = "songs";
pub const THEME_KEY: &str = "theme";

// ============================================================================
// Key-Value Storage
// ============================================================================

#[derive(Clone)]
pub struct Storage {
    tree: sled::Tree,
    #[cfg(test)]
    fail_writes: Arc<AtomicBool>,
}

impl Storage {
    pub fn open(db: &sled::Db) -> Result<Self> {
        Ok(Self {
            tree: db.open_tree(STORAGE_TREE)?,
            #[cfg(test)]
            fail_writes: Arc::default(),
        })
    }

    /// Value stored under `key`. Non-UTF-8 values read as absent.
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .tree
            .get(key.as_bytes())?
            .and_then(|v| String::from_utf8(v.to_vec()).ok()))
    }

    /// Writes and flushes, so the value is on disk when this returns.
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.tree.insert(key.as_bytes(), value.as_bytes())?;
        self.tree.flush()?;
        Ok(())
    }

    #[cfg(not(test))]
    fn check_writable(&self) -> Result<()> {
        Ok(())
    }

    #[cfg(test)]
    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(std::io::Error::other("storage writes disabled").into());
        }
        Ok(())
    }

    /// Makes every later `set_item` on this storage and its clones fail.
    #[cfg(test)]
    pub(crate) fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

// ============================================================================
// Song Collection
// ============================================================================

/// A single field overwrite applied by [`SongStore::update`].
#[derive(Debug, Clone, Copy)]
pub enum SongField<'a> {
    Title(&'a str),
    Content(&'a str),
}

pub struct SongStore {
    storage: Storage,
    songs: Vec<Song>,
}

impl SongStore {
    /// Reads the collection. A missing, unreadable or malformed blob yields an
    /// empty collection.
    pub fn load(storage: Storage) -> Self {
        let songs = match storage.get_item(SONGS_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|e| {
                warn!(error = %e, "stored songs are malformed, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored songs, starting empty");
                Vec::new()
            }
        };
        info!(count = songs.len(), "loaded songs");
        Self { storage, songs }
    }

    pub fn save(&self) -> Result<()> {
        self.persist(&self.songs)
    }

    fn persist(&self, songs: &[Song]) -> Result<()> {
        let json = serde_json::to_string(songs)?;
        self.storage.set_item(SONGS_KEY, &json)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == id)
    }

    // Mutations build the next collection, write it, and only then replace
    // `self.songs`, so a failed write leaves memory matching storage.

    /// Appends a song under a fresh id and persists. Returns the id.
    pub fn create(&mut self, title: &str, content: &str) -> Result<String> {
        let id = self.next_id();
        let mut next = self.songs.clone();
        next.push(Song {
            id: id.clone(),
            title: title.to_string(),
            content: content.to_string(),
        });
        self.persist(&next)?;
        self.songs = next;
        info!(id = %id, "created song");
        Ok(id)
    }

    /// Overwrites one field in place and persists. `false` if `id` is unknown.
    pub fn update(&mut self, id: &str, field: SongField<'_>) -> Result<bool> {
        let Some(pos) = self.songs.iter().position(|s| s.id == id) else {
            return Ok(false);
        };
        let mut next = self.songs.clone();
        match field {
            SongField::Title(title) => next[pos].title = title.to_string(),
            SongField::Content(content) => next[pos].content = content.to_string(),
        }
        self.persist(&next)?;
        self.songs = next;
        Ok(true)
    }

    /// Removes the song and persists. `None` if `id` is unknown.
    pub fn delete(&mut self, id: &str) -> Result<Option<Song>> {
        let Some(pos) = self.songs.iter().position(|s| s.id == id) else {
            return Ok(None);
        };
        let mut next = self.songs.clone();
        let removed = next.remove(pos);
        self.persist(&next)?;
        self.songs = next;
        info!(id = %id, title = %removed.title, "deleted song");
        Ok(Some(removed))
    }

    /// Millisecond timestamp, bumped past any id already taken.
    fn next_id(&self) -> String {
        let mut stamp = Utc::now().timestamp_millis();
        while self.find_by_id(&stamp.to_string()).is_some() {
            stamp += 1;
        }
        stamp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_storage() -> Storage {
        let db = sled::Config::new().temporary(true).open().unwrap();
        Storage::open(&db).unwrap()
    }

    #[test]
    fn test_get_item_missing() {
        let storage = temp_storage();
        assert_eq!(storage.get_item("nope").unwrap(), None);
    }

    #[test]
    fn test_set_and_get_item() {
        let storage = temp_storage();
        storage.set_item(THEME_KEY, "light").unwrap();
        assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = SongStore::load(temp_storage());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let storage = temp_storage();
        storage.set_item(SONGS_KEY, "[{not json").unwrap();
        let store = SongStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_round_trip_exact() {
        let storage = temp_storage();
        let mut store = SongStore::load(storage.clone());
        let title = "Ballad \"of\" <the> sea";
        let content = "<div>Line one&nbsp;</div><div><b>two</b> ünïcödé</div>";
        let id = store.create(title, content).unwrap();
        store.create("Second", "").unwrap();

        let reloaded = SongStore::load(storage);
        assert_eq!(reloaded.songs(), store.songs());
        let song = reloaded.find_by_id(&id).unwrap();
        assert_eq!(song.title, title);
        assert_eq!(song.content, content);
    }

    #[test]
    fn test_stored_blob_is_json_array() {
        let storage = temp_storage();
        let mut store = SongStore::load(storage.clone());
        let id = store.create("T", "C").unwrap();
        let blob = storage.get_item(SONGS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(value, serde_json::json!([{"id": id, "title": "T", "content": "C"}]));
    }

    #[test]
    fn test_create_ids_unique_and_ordered() {
        let mut store = SongStore::load(temp_storage());
        let ids: Vec<String> = (0..20)
            .map(|i| store.create(&format!("song {}", i), "").unwrap())
            .collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
        let titles: Vec<&str> = store.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles.first(), Some(&"song 0"));
        assert_eq!(titles.last(), Some(&"song 19"));
    }

    #[test]
    fn test_update_fields() {
        let storage = temp_storage();
        let mut store = SongStore::load(storage.clone());
        let id = store.create("Old", "old").unwrap();
        assert!(store.update(&id, SongField::Title("New")).unwrap());
        assert!(store.update(&id, SongField::Content("<i>new</i>")).unwrap());

        let reloaded = SongStore::load(storage);
        let song = reloaded.find_by_id(&id).unwrap();
        assert_eq!(song.title, "New");
        assert_eq!(song.content, "<i>new</i>");
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = SongStore::load(temp_storage());
        assert!(!store.update("missing", SongField::Title("x")).unwrap());
    }

    #[test]
    fn test_delete() {
        let storage = temp_storage();
        let mut store = SongStore::load(storage.clone());
        let a = store.create("A", "").unwrap();
        let b = store.create("B", "").unwrap();

        let removed = store.delete(&a).unwrap().unwrap();
        assert_eq!(removed.title, "A");
        assert!(store.delete(&a).unwrap().is_none());

        let reloaded = SongStore::load(storage);
        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.find_by_id(&b).is_some());
    }

    #[test]
    fn test_failed_writes_leave_collection_untouched() {
        let storage = temp_storage();
        let mut store = SongStore::load(storage.clone());
        let id = store.create("Kept", "body").unwrap();
        let before = store.songs().to_vec();

        storage.set_fail_writes(true);
        assert!(store.create("Lost", "").is_err());
        assert!(store.update(&id, SongField::Title("Changed")).is_err());
        assert!(store.update(&id, SongField::Content("changed")).is_err());
        assert!(store.delete(&id).is_err());
        assert_eq!(store.songs(), &before[..]);

        storage.set_fail_writes(false);
        assert_eq!(SongStore::load(storage).songs(), &before[..]);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let db = sled::open(dir.path()).unwrap();
            let mut store = SongStore::load(Storage::open(&db).unwrap());
            store.create("Kept", "Hello").unwrap()
        };

        let db = sled::open(dir.path()).unwrap();
        let store = SongStore::load(Storage::open(&db).unwrap());
        assert_eq!(store.find_by_id(&id).unwrap().content, "Hello");
    }
}
