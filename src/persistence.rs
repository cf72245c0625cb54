// File: src/persistence.rs
use crate::config::HistoryConfig;
use crate::error::{MorseError, Result};
use crate::history::{HistoryRecord, HistoryStore};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const MAGIC: &[u8; 4] = b"DDHS";
const VERSION: u8 = 1;

/// The serializable state of the history store.
#[derive(serde::Serialize, serde::Deserialize)]
struct SerializableHistory {
    records: Vec<HistoryRecord>,
}

/// Writes `bytes` to a temp file next to `path`, then renames it into place.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(bytes)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| MorseError::Io(e.error))?;
    Ok(())
}

pub fn history_to_bytes(store: &HistoryStore) -> Result<Vec<u8>> {
    let state = SerializableHistory {
        records: store.records().cloned().collect(),
    };
    let body = bincode::serialize(&state)?;

    let mut buf = Vec::with_capacity(MAGIC.len() + 1 + body.len());
    buf.extend_from_slice(MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&body);
    Ok(buf)
}

pub fn history_from_bytes(bytes: &[u8], config: &HistoryConfig) -> Result<HistoryStore> {
    if bytes.len() < MAGIC.len() + 1 {
        return Err(MorseError::InvalidHistoryFile("too short"));
    }
    if &bytes[..MAGIC.len()] != MAGIC {
        return Err(MorseError::InvalidHistoryFile("bad magic"));
    }
    if bytes[MAGIC.len()] != VERSION {
        return Err(MorseError::InvalidHistoryFile("unsupported version"));
    }
    let state: SerializableHistory = bincode::deserialize(&bytes[MAGIC.len() + 1..])?;
    Ok(HistoryStore::from_records(state.records, config))
}

pub fn save_history(store: &HistoryStore, path: &Path) -> Result<()> {
    let bytes = history_to_bytes(store)?;
    write_atomically(path, &bytes)?;
    tracing::debug!(path = %path.display(), records = store.len(), "history saved");
    Ok(())
}

/// Loads history, returning an empty store if the file doesn't exist.
pub fn load_history(path: &Path, config: &HistoryConfig) -> Result<HistoryStore> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HistoryStore::new(config)),
        Err(e) => return Err(e.into()),
    };
    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes)?;
    history_from_bytes(&bytes, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history").join("history.bin");

        let mut store = HistoryStore::default();
        store.add("SOS", "... --- ...");
        store.add(".-.-.-", ".");
        save_history(&store, &path).unwrap();

        let loaded = load_history(&path, &HistoryConfig::default()).unwrap();
        let a: Vec<&HistoryRecord> = store.records().collect();
        let b: Vec<&HistoryRecord> = loaded.records().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = load_history(&dir.path().join("none.bin"), &HistoryConfig::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_foreign_files() {
        let config = HistoryConfig::default();
        assert!(matches!(
            history_from_bytes(b"DD", &config),
            Err(MorseError::InvalidHistoryFile("too short"))
        ));
        assert!(matches!(
            history_from_bytes(b"NOPE\x01", &config),
            Err(MorseError::InvalidHistoryFile("bad magic"))
        ));
        assert!(matches!(
            history_from_bytes(b"DDHS\x09", &config),
            Err(MorseError::InvalidHistoryFile("unsupported version"))
        ));
    }

    #[test]
    fn truncated_body_is_an_error() {
        let mut store = HistoryStore::default();
        store.add("E", ".");
        let bytes = history_to_bytes(&store).unwrap();
        let err = history_from_bytes(&bytes[..bytes.len() - 3], &HistoryConfig::default());
        assert!(matches!(err, Err(MorseError::Bincode(_))));
    }

    #[test]
    fn loading_trims_to_configured_capacity() {
        let mut store = HistoryStore::default();
        for i in 0..6 {
            store.add(&i.to_string(), "");
        }
        let bytes = history_to_bytes(&store).unwrap();
        let loaded = history_from_bytes(&bytes, &HistoryConfig { capacity: 2 }).unwrap();
        let inputs: Vec<&str> = loaded.records().map(|r| r.input.as_str()).collect();
        assert_eq!(inputs, vec!["4", "5"]);
    }

    #[test]
    fn atomic_write_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        write_atomically(&path, b"first").unwrap();
        write_atomically(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");
    }
}
