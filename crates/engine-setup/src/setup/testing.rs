//! Test doubles for the network, OS and console seams.

use crate::error::{Result, SetupError};
use crate::setup::{Fetcher, Launcher, Prompt};
use std::cell::RefCell;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Serves the same body for every URL and remembers what was requested.
pub struct RecordingFetcher {
    body: Vec<u8>,
    urls: RefCell<Vec<String>>,
}

impl RecordingFetcher {
    pub fn new(body: Vec<u8>) -> Self {
        Self {
            body,
            urls: RefCell::new(Vec::new()),
        }
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.borrow().clone()
    }
}

impl Fetcher for RecordingFetcher {
    fn fetch_to_file(&self, url: &str, dest: &Path) -> Result<u64> {
        self.urls.borrow_mut().push(url.to_string());
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SetupError::io(parent, e))?;
        }
        std::fs::write(dest, &self.body).map_err(|e| SetupError::io(dest, e))?;
        Ok(self.body.len() as u64)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.urls.borrow_mut().push(url.to_string());
        Ok(self.body.clone())
    }
}

/// Every request answers 404.
pub struct FailingFetcher;

impl Fetcher for FailingFetcher {
    fn fetch_to_file(&self, url: &str, _dest: &Path) -> Result<u64> {
        Err(SetupError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        Err(SetupError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}

#[derive(Default)]
pub struct RecordingLauncher {
    opened: RefCell<Vec<PathBuf>>,
}

impl RecordingLauncher {
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.borrow().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, path: &Path) -> Result<()> {
        self.opened.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

/// Fixed answer, counting how often it was asked.
pub struct ScriptedPrompt {
    pub answer: bool,
    pub asked: usize,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: 0 }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, _question: &str) -> Result<bool> {
        self.asked += 1;
        Ok(self.answer)
    }
}

/// Build an in-memory zip holding `entries` (name, contents).
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);
        writer.start_file(*name, options).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
