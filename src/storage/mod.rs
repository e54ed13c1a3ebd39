//! The plugin data file on disk: existence check, backup, load, atomic write.

use crate::errors::{AppError, AppResult};
use crate::models::VersionedDocument;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub struct DataFile {
    path: PathBuf,
    backup_path: PathBuf,
}

impl DataFile {
    /// `backup_suffix` is appended to the full file name
    /// (`data.json` + `.backup` → `data.json.backup`).
    pub fn new(path: impl Into<PathBuf>, backup_suffix: &str) -> Self {
        let path = path.into();
        let mut name: OsString = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("data.json"));
        name.push(backup_suffix);
        let backup_path = path.with_file_name(name);

        Self { path, backup_path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Replace any previous backup with a byte-for-byte copy of the file.
    pub fn backup(&self) -> AppResult<PathBuf> {
        self.ensure_exists()?;

        if self.backup_path.exists() {
            fs::remove_file(&self.backup_path)?;
        }
        let bytes = fs::copy(&self.path, &self.backup_path)?;
        log::debug!(
            "backup written: {} ({} bytes)",
            self.backup_path.display(),
            bytes
        );

        Ok(self.backup_path.clone())
    }

    pub fn read(&self) -> AppResult<String> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(s),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AppError::DataFileNotFound(self.path.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn load(&self) -> AppResult<VersionedDocument> {
        let contents = self.read()?;
        VersionedDocument::parse(&contents)
    }

    /// Write the document through a temporary sibling file renamed over the
    /// live one, so readers only ever see the old or the new contents.
    pub fn persist(&self, doc: &VersionedDocument, pretty: bool) -> AppResult<()> {
        let json = doc.to_json(pretty)?;

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;

        // the temp file is created 0600; keep the live file's mode
        fs::set_permissions(tmp.path(), fs::metadata(&self.path)?.permissions())?;
        tmp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;

        log::debug!("data-file written: {}", self.path.display());
        Ok(())
    }

    fn ensure_exists(&self) -> AppResult<()> {
        if self.exists() {
            Ok(())
        } else {
            Err(AppError::DataFileNotFound(self.path.clone()))
        }
    }
}
