// Document input for the shell.
//
// Exactly one source must be given: direct text or a file. Files are decoded
// to plain text here; the summarization core only ever sees a string.

pub mod docx;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Extensions read as UTF-8 plain text. Files without an extension are too.
const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt", "text", "md"];

/// Extensions decoded as Word documents.
const WORD_EXTENSIONS: &[&str] = &["docx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    PlainText,
    Word,
}

/// Problems with what the user supplied, caught before the core runs.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input: pass either --text or --file")]
    Missing,

    #[error("both --text and --file were given; pass only one")]
    Ambiguous,

    #[error("unsupported file format '.{extension}': only plain text (.txt, .text, .md) and Word (.docx) files are supported")]
    UnsupportedFormat { extension: String },

    #[error("could not read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8 text", .path.display())]
    NotUtf8 { path: PathBuf },

    #[error("could not extract text from Word document {}", .path.display())]
    Word {
        path: PathBuf,
        #[source]
        source: docx::DocxError,
    },
}

/// Resolve the document text from direct text or a file path.
///
/// Empty text counts as not supplied, so `--text ""` with no file is
/// [`InputError::Missing`].
pub fn resolve(text: Option<&str>, file: Option<&Path>) -> Result<String, InputError> {
    let text = text.filter(|t| !t.is_empty());

    match (text, file) {
        (None, None) => Err(InputError::Missing),
        (Some(_), Some(_)) => Err(InputError::Ambiguous),
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => read_document(path),
    }
}

/// Read a document from disk as plain text.
///
/// The format comes from the extension and is checked before the file is
/// opened.
pub fn read_document(path: &Path) -> Result<String, InputError> {
    match format_of(path)? {
        Format::PlainText => read_plain_text(path),
        Format::Word => read_word(path),
    }
}

fn format_of(path: &Path) -> Result<Format, InputError> {
    let Some(ext) = path.extension() else {
        return Ok(Format::PlainText);
    };

    let extension = ext.to_string_lossy().to_lowercase();
    if PLAIN_TEXT_EXTENSIONS.contains(&extension.as_str()) {
        Ok(Format::PlainText)
    } else if WORD_EXTENSIONS.contains(&extension.as_str()) {
        Ok(Format::Word)
    } else {
        Err(InputError::UnsupportedFormat { extension })
    }
}

fn read_plain_text(path: &Path) -> Result<String, InputError> {
    let bytes = fs::read(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Read input document");

    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

fn read_word(path: &Path) -> Result<String, InputError> {
    let file = File::open(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = docx::extract_text(BufReader::new(file)).map_err(|source| InputError::Word {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), chars = text.len(), "Extracted Word document text");
    Ok(text)
}
