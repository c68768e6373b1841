// src/dataset/source.rs

use std::{
    collections::HashMap,
    fmt,
    fs::{self, File},
    io::{self, BufReader, Cursor, Read},
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicUsize, Ordering},
        PoisonError, RwLock,
    },
};

/// Stable name of a dataset; the index cache is keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DatasetId(String);

impl DatasetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id for a file on disk. The path is canonicalized when possible so that
    /// `./data/x.csv` and `data/x.csv` share one cache entry.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        Self(resolved.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where raw dataset bytes come from.
pub trait DatasetSource: Send + Sync {
    fn open(&self, id: &DatasetId) -> io::Result<Box<dyn Read + Send>>;
}

/// Treats the id as a filesystem path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DatasetSource for FsSource {
    fn open(&self, id: &DatasetId) -> io::Result<Box<dyn Read + Send>> {
        let file = File::open(PathBuf::from(id.as_str()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// In-memory datasets, with a count of how many times any of them was opened.
#[derive(Debug, Default)]
pub struct MemorySource {
    datasets: RwLock<HashMap<DatasetId, Vec<u8>>>,
    opens: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dataset(self, id: impl Into<String>, csv: impl Into<Vec<u8>>) -> Self {
        self.insert(DatasetId::new(id), csv);
        self
    }

    pub fn insert(&self, id: DatasetId, csv: impl Into<Vec<u8>>) {
        self.datasets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, csv.into());
    }

    /// Number of `open` calls so far, successful or not.
    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }
}

impl DatasetSource for MemorySource {
    fn open(&self, id: &DatasetId) -> io::Result<Box<dyn Read + Send>> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        let datasets = self.datasets.read().unwrap_or_else(PoisonError::into_inner);
        match datasets.get(id) {
            Some(bytes) => Ok(Box::new(Cursor::new(bytes.clone()))),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory dataset named `{}`", id),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fs_source_reads_file() -> anyhow::Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "title\nUp\n")?;

        let mut buf = String::new();
        FsSource
            .open(&DatasetId::from_path(tmp.path()))?
            .read_to_string(&mut buf)?;
        assert_eq!(buf, "title\nUp\n");
        Ok(())
    }

    #[test]
    fn test_from_path_canonicalizes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("titles.csv");
        fs::write(&file, "title\n")?;

        let dotted = dir.path().join(".").join("titles.csv");
        assert_eq!(DatasetId::from_path(&file), DatasetId::from_path(&dotted));
        Ok(())
    }

    #[test]
    fn test_memory_source_counts_opens() {
        let source = MemorySource::new().with_dataset("films", "title\nUp\n");
        assert!(source.open(&DatasetId::new("films")).is_ok());
        assert!(source.open(&DatasetId::new("missing")).is_err());
        assert_eq!(source.opens(), 2);
    }
}
