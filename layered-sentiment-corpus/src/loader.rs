//! Labeled document discovery.

use layered_sentiment::{clean, Label, SentimentError, SentimentResult};
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One training example read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub path: PathBuf,
    /// Normalized first line of the file.
    pub text: String,
    pub label: Label,
}

/// Load every document below `dir` (recursively) under `label`.
///
/// Files are visited in sorted path order and only their first line is
/// used; files whose first line is empty are skipped. Symlinked directories
/// are not followed. Fails with `CorpusNotFound` when nothing usable is
/// found, including when `dir` does not exist.
pub fn load_documents(dir: &Path, label: Label) -> SentimentResult<Vec<Document>> {
    let mut documents = Vec::new();
    if dir.is_dir() {
        load_documents_recursive(dir, label, &mut documents)?;
    }

    if documents.is_empty() {
        return Err(SentimentError::CorpusNotFound {
            path: dir.display().to_string(),
        });
    }

    info!(
        path = %dir.display(),
        ?label,
        documents = documents.len(),
        "loaded corpus"
    );
    Ok(documents)
}

fn load_documents_recursive(
    dir: &Path,
    label: Label,
    documents: &mut Vec<Document>,
) -> SentimentResult<()> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SentimentError::io(dir, e))? {
        let entry = entry.map_err(|e| SentimentError::io(dir, e))?;
        let file_type = entry.file_type().map_err(|e| SentimentError::io(entry.path(), e))?;
        entries.push((entry.path(), file_type));
    }
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, file_type) in entries {
        if file_type.is_dir() {
            load_documents_recursive(&path, label, documents)?;
        } else if file_type.is_symlink() && path.is_dir() {
            debug!(path = %path.display(), "skipping symlinked directory");
        } else if let Some(line) = read_first_line(&path)? {
            documents.push(Document {
                text: clean(&line),
                path,
                label,
            });
        } else {
            debug!(path = %path.display(), "skipping file with an empty first line");
        }
    }

    Ok(())
}

/// First line of a file, lossily decoded, without its line ending.
/// `None` when that line is empty.
fn read_first_line(path: &Path) -> SentimentResult<Option<String>> {
    let file = File::open(path).map_err(|e| SentimentError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader
        .read_until(b'\n', &mut buf)
        .map_err(|e| SentimentError::io(path, e))?;

    while matches!(buf.last(), Some(b'\n') | Some(b'\r')) {
        buf.pop();
    }
    if buf.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
