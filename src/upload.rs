// Upload screen: takes a file from the browse dialog or from a drop onto
// the terminal and accepts it only when its declared media type is PDF.
// The file's bytes are never opened.

use crate::router::{Route, Router};
use crate::style::{Palette, Tone};
use log::{info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// The only media type the upload screen accepts.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Message shown when a file with another media type is presented.
pub const REJECTION_MESSAGE: &str = "Please upload a PDF file";

/// Extension to media type table, in the spirit of what a browser reports
/// as `File.type`. Lookup is case-insensitive.
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("pdf", PDF_MEDIA_TYPE),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("csv", "text/csv"),
    ("html", "text/html"),
    ("htm", "text/html"),
    ("json", "application/json"),
    ("xml", "application/xml"),
    ("zip", "application/zip"),
    ("epub", "application/epub+zip"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("svg", "image/svg+xml"),
];

/// Declared media type for a path, derived from its extension only.
/// Unknown or missing extensions give an empty string.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return "";
    };
    MEDIA_TYPES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, media_type)| *media_type)
        .unwrap_or("")
}

/// What the upload screen knows about a presented file: its name and
/// declared media type, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>) -> Self {
        SelectedFile {
            name: name.into(),
            media_type: media_type.into(),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        SelectedFile::new(name, media_type_for_path(path))
    }

    pub fn is_pdf(&self) -> bool {
        self.media_type == PDF_MEDIA_TYPE
    }
}

/// Turn candidate paths into selected files, dropping anything that is not
/// an existing regular file. Only metadata is consulted.
pub fn files_from_paths<I>(paths: I) -> Vec<SelectedFile>
where
    I: IntoIterator<Item = PathBuf>,
{
    paths
        .into_iter()
        .filter(|p| {
            let exists = p.is_file();
            if !exists {
                warn!("ignoring dropped path {}: not a file", p.display());
            }
            exists
        })
        .map(|p| SelectedFile::from_path(&p))
        .collect()
}

/// How backslashes in dropped text are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropSyntax {
    /// Unix terminals: `\` escapes the next character outside quotes.
    Posix,
    /// Windows terminals: `\` is the path separator and never escapes.
    Windows,
}

impl DropSyntax {
    pub fn native() -> Self {
        if cfg!(windows) {
            DropSyntax::Windows
        } else {
            DropSyntax::Posix
        }
    }
}

/// Split the text a terminal pastes when files are dropped on it into
/// individual paths, using the current platform's syntax.
pub fn parse_dropped_paths(input: &str) -> Vec<PathBuf> {
    parse_dropped_paths_with(input, DropSyntax::native())
}

/// Handles the forms terminals commonly produce: bare paths separated by
/// whitespace, single or double quoted paths, backslash-escaped spaces and
/// `file://` URIs with percent-encoding.
///
/// Inside double quotes only `\"` and `\\` are unescaped, and only for
/// [`DropSyntax::Posix`].
pub fn parse_dropped_paths_with(input: &str, syntax: DropSyntax) -> Vec<PathBuf> {
    let escapes = syntax == DropSyntax::Posix;
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = input.trim().chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_token = true;
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    current.push(q);
                }
            }
            '"' => {
                in_token = true;
                while let Some(q) = chars.next() {
                    match q {
                        '"' => break,
                        '\\' if escapes && matches!(chars.peek(), Some('"' | '\\')) => {
                            current.extend(chars.next());
                        }
                        _ => current.push(q),
                    }
                }
            }
            '\\' if escapes => {
                in_token = true;
                current.extend(chars.next());
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    tokens
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(|t| match t.strip_prefix("file://") {
            Some(rest) => file_uri_path(rest, syntax),
            None => PathBuf::from(t),
        })
        .collect()
}

/// Path of a `file://` URI with the scheme already removed. An empty or
/// `localhost` host is dropped; other hosts are kept and will not resolve.
fn file_uri_path(rest: &str, syntax: DropSyntax) -> PathBuf {
    let rest = match rest.get(..10) {
        Some(host) if host.eq_ignore_ascii_case("localhost/") => &rest[9..],
        _ => rest,
    };
    let mut bytes = percent_decode(rest);
    // file:///C:/dir/a.pdf names C:/dir/a.pdf on Windows.
    if syntax == DropSyntax::Windows
        && bytes.len() >= 3
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && bytes[2] == b':'
    {
        bytes.remove(0);
    }
    path_from_bytes(bytes)
}

#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}

fn percent_decode(s: &str) -> Vec<u8> {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).ok();
            if let Some(v) = hex.and_then(|h| u8::from_str_radix(h, 16).ok()) {
                out.push(v);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

/// Receives the blocking "wrong file" notice. The terminal UI shows it and
/// waits for the user; tests count the calls. An error means the notice
/// could not be acknowledged.
pub trait Notifier {
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Result of presenting a list of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// First file was a PDF; the router now shows the contents screen.
    Accepted,
    /// First file was something else; the user was notified.
    Rejected,
    /// Nothing was presented.
    Empty,
}

#[derive(Debug, Default)]
pub struct UploadScreen {
    is_dragging: bool,
}

impl UploadScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag currently hovers over the drop zone. Cosmetic only.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn drag_enter(&mut self) {
        self.is_dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.is_dragging = false;
    }

    /// Files chosen through the browse dialog. Only the first one counts.
    pub fn select(
        &mut self,
        files: &[SelectedFile],
        router: &mut Router,
        notifier: &mut dyn Notifier,
    ) -> io::Result<UploadOutcome> {
        let Some(file) = files.first() else {
            return Ok(UploadOutcome::Empty);
        };
        if file.is_pdf() {
            info!("accepted {} ({})", file.name, file.media_type);
            router.navigate(Route::Contents);
            Ok(UploadOutcome::Accepted)
        } else {
            info!("rejected {} (declared type {:?})", file.name, file.media_type);
            notifier.notify(REJECTION_MESSAGE)?;
            Ok(UploadOutcome::Rejected)
        }
    }

    /// Files dropped onto the drop zone. Ends the hover, then validates the
    /// same way as a browse selection.
    pub fn drop_files(
        &mut self,
        files: &[SelectedFile],
        router: &mut Router,
        notifier: &mut dyn Notifier,
    ) -> io::Result<UploadOutcome> {
        self.is_dragging = false;
        self.select(files, router, notifier)
    }

    pub fn render<W: Write>(&self, out: &mut W, palette: Palette) -> io::Result<()> {
        const WIDTH: usize = 44;
        let border_tone = if self.is_dragging { Tone::Highlight } else { Tone::Muted };
        let edge = if self.is_dragging { "=" } else { "-" };
        let side = if self.is_dragging { "‖" } else { "¦" };

        writeln!(out, "{}", palette.paint("Physics Textbook TOC", Tone::Heading))?;
        writeln!(out)?;
        let rule = format!("+{}+", edge.repeat(WIDTH));
        writeln!(out, "{}", palette.paint(&rule, border_tone))?;
        let lines = [
            ("", Tone::Body),
            ("[PDF]", Tone::Accent),
            ("Drag and drop your PDF here", Tone::Body),
            ("or", Tone::Muted),
            ("Browse Files", Tone::Accent),
            ("", Tone::Body),
            ("Only PDF files are accepted", Tone::Muted),
        ];
        for (text, tone) in lines {
            let padded = format!("{:^width$}", text, width = WIDTH);
            writeln!(
                out,
                "{}{}{}",
                palette.paint(side, border_tone),
                palette.paint(&padded, tone),
                palette.paint(side, border_tone)
            )?;
        }
        writeln!(out, "{}", palette.paint(&rule, border_tone))?;
        Ok(())
    }
}
