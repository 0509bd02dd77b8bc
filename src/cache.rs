//! Disk cache of derived corpus artifacts
//!
//! Every mapping derived from the raw exports is persisted here as a named
//! binary snapshot, so later runs reload it instead of re-parsing tens of
//! millions of lines. The store only distinguishes two lookup outcomes: a
//! clean hit, or a miss that the caller answers by rebuilding from raw input.
//! Writes go through a temporary file and an atomic rename, so a crashed run
//! can leave a missing artifact but never a truncated one.

use crate::{config::Config, Result};
use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// File extension shared by every persisted artifact
const ARTIFACT_EXT: &str = "bin";

/// Name of a persisted artifact, derived from what it stores
///
/// Naming is deterministic in (artifact kind, language code): two runs agree
/// on where each structure lives without any further coordination.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Artifact<'code> {
    /// Sentence id to origin mapping
    Origins,

    /// Sentence id to translated-sentence-ids mapping
    Links,

    /// Marker recording that sentence partitioning already ran
    ///
    /// Deliberately stored empty: real sentence data is always retrieved
    /// through the per-language [`Artifact::Partition`] names.
    Sentences,

    /// One language's sentence partition
    Partition(&'code str),

    /// One language's n-gram frequency table
    Frequencies(&'code str),
}
//
impl Artifact<'_> {
    /// File name of this artifact under the cache directory
    pub fn file_name(&self) -> String {
        match self {
            Self::Origins => format!("origins.{ARTIFACT_EXT}"),
            Self::Links => format!("links.{ARTIFACT_EXT}"),
            Self::Sentences => format!("sentences.{ARTIFACT_EXT}"),
            Self::Partition(code) => format!("{code}.{ARTIFACT_EXT}"),
            Self::Frequencies(code) => format!("{code}_freq.{ARTIFACT_EXT}"),
        }
    }
}

/// Outcome of a cache lookup
///
/// A miss is ordinary control flow, not an error: the caller rebuilds the
/// artifact from raw input and stores the result for the next run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lookup<T> {
    /// The artifact was persisted by an earlier run and decoded cleanly
    Hit(T),

    /// No usable artifact on disk
    Miss,
}

/// Store for persisted corpus artifacts
///
/// All filesystem effects are confined to the configured cache directory.
#[derive(Debug)]
pub struct Store {
    /// Directory holding the artifact files
    dir: Box<Path>,
}
//
impl Store {
    /// Open the store, creating its directory if needed
    pub fn open(config: &Config) -> Result<Self> {
        fs::create_dir_all(&config.cache_dir).context("setting up the cache directory")?;
        Ok(Self {
            dir: config.cache_dir.clone(),
        })
    }

    /// Try to load a previously persisted artifact
    ///
    /// Every failure mode (absent file, unreadable file, stale or corrupt
    /// encoding) is a miss. An artifact that was deliberately stored empty
    /// decodes to an empty value and still counts as a hit.
    pub fn load<T: DeserializeOwned>(&self, artifact: Artifact<'_>) -> Lookup<T> {
        let path = self.path_of(artifact);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                log::debug!("cache miss for {}: {e}", path.display());
                return Lookup::Miss;
            }
        };
        match bincode::deserialize_from(BufReader::new(file)) {
            Ok(value) => {
                log::debug!("cache hit for {}", path.display());
                Lookup::Hit(value)
            }
            Err(e) => {
                log::warn!(
                    "discarding unreadable cache artifact {}: {e}",
                    path.display()
                );
                Lookup::Miss
            }
        }
    }

    /// Persist an artifact, atomically replacing any previous version
    pub fn store<T: Serialize>(&self, artifact: Artifact<'_>, value: &T) -> Result<()> {
        let path = self.path_of(artifact);
        let temp = NamedTempFile::new_in(&self.dir).context("creating a cache temp file")?;
        let mut writer = BufWriter::new(&temp);
        bincode::serialize_into(&mut writer, value)
            .with_context(|| format!("encoding cache artifact {}", path.display()))?;
        writer
            .flush()
            .with_context(|| format!("writing cache artifact {}", path.display()))?;
        drop(writer);
        temp.persist(&path)
            .with_context(|| format!("replacing cache artifact {}", path.display()))?;
        Ok(())
    }

    /// Delete every persisted artifact, returning how many were removed
    ///
    /// Regenerating them means a full reparse of the raw exports, so deletion
    /// is gated behind an explicit opt-in: a `false` argument removes
    /// nothing. Only artifact files inside the cache directory are touched.
    pub fn clear(&self, really: bool) -> Result<usize> {
        if !really {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir).context("listing the cache directory")? {
            let path = entry.context("listing the cache directory")?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == ARTIFACT_EXT) {
                fs::remove_file(&path)
                    .with_context(|| format!("deleting cache artifact {}", path.display()))?;
                removed += 1;
            }
        }
        log::info!("cleared {removed} cached artifacts");
        Ok(removed)
    }

    /// Full path of an artifact
    fn path_of(&self, artifact: Artifact<'_>) -> PathBuf {
        self.dir.join(artifact.file_name())
    }
}
