use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The only media type the workflow accepts.
pub const ACCEPTED_MEDIA_TYPE: &str = "application/pdf";

/// Where a candidate's bytes come from. Content is read once, on acceptance.
#[derive(Debug, Clone)]
pub enum CandidateSource {
    File(PathBuf),
    Memory(Arc<[u8]>),
}

impl CandidateSource {
    fn read(&self) -> std::io::Result<Arc<[u8]>> {
        match self {
            Self::File(path) => Ok(Arc::from(std::fs::read(path)?)),
            Self::Memory(bytes) => Ok(Arc::clone(bytes)),
        }
    }
}

/// A file offered by the picker or dropped on the drop zone, not yet validated.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub name: String,
    /// Declared media type, if the file's name maps to one.
    pub media_type: Option<String>,
    pub source: CandidateSource,
}

impl Candidate {
    /// Build a candidate for a file on disk. The media type is declared from
    /// the extension, the same way a browser fills in `File.type`.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = media_type_for_name(&name).map(str::to_string);
        Self {
            name,
            media_type,
            source: CandidateSource::File(path),
        }
    }

    pub fn from_bytes(
        name: impl Into<String>,
        media_type: Option<&str>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.map(str::to_string),
            source: CandidateSource::Memory(bytes.into()),
        }
    }

    /// Parse text delivered by a drop (a pasted path or `file://` URI).
    ///
    /// Returns `None` for blank input.
    pub fn from_dropped_text(text: &str) -> Option<Self> {
        dropped_path(text).map(Self::from_path)
    }

    pub fn declares_accepted_type(&self) -> bool {
        self.media_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(ACCEPTED_MEDIA_TYPE))
    }

    /// Read the candidate's content into an immutable document snapshot.
    pub(crate) fn load(&self) -> std::io::Result<Document> {
        Ok(Document {
            name: self.name.clone(),
            media_type: self
                .media_type
                .clone()
                .unwrap_or_else(|| ACCEPTED_MEDIA_TYPE.to_string()),
            bytes: self.source.read()?,
        })
    }
}

/// An accepted document. Cloning is cheap; the bytes are shared.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub media_type: String,
    pub bytes: Arc<[u8]>,
}

impl Document {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Extension used for scratch copies of this document.
    pub(crate) fn extension(&self) -> &str {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("pdf")
    }
}

/// Declared media type for a file name, keyed on its extension.
pub fn media_type_for_name(name: &str) -> Option<&'static str> {
    let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
    let media_type = match ext.as_str() {
        "pdf" => "application/pdf",
        "txt" | "text" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "rtf" => "application/rtf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "odt" => "application/vnd.oasis.opendocument.text",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "zip" => "application/zip",
        _ => return None,
    };
    Some(media_type)
}

/// Normalise dropped text into a path: trim, strip one layer of quotes, and
/// decode `file://` URIs.
fn dropped_path(text: &str) -> Option<PathBuf> {
    // Multi-file drops arrive newline-separated; the first file wins.
    let first = text.lines().map(str::trim).find(|l| !l.is_empty())?;

    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| first.strip_prefix(*q).and_then(|s| s.strip_suffix(*q)))
        .unwrap_or(first);

    if let Some(rest) = unquoted.strip_prefix("file://") {
        // file://localhost/path and file:///path both name a local path
        let rest = rest.strip_prefix("localhost").unwrap_or(rest);
        let decoded = urlencoding::decode(rest)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| rest.to_string());
        return Some(PathBuf::from(decoded));
    }

    // Shells escape spaces when a file is dragged onto the terminal
    Some(PathBuf::from(unquoted.replace("\\ ", " ")))
}
