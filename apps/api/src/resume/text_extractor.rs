//! Plain text out of uploaded résumé documents.
//!
//! Never fails: unreadable or corrupt documents yield an empty string and a
//! `warn!` log line.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::{debug, warn};

use crate::resume::normalize::clean_document_text;

/// Upload extensions accepted by the HTTP layer.
pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// `.docx` and legacy `.doc`; both are read as Office Open XML.
    Word,
    PlainText,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        match extension_of(path).as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("docx") | Some("doc") => DocumentKind::Word,
            _ => DocumentKind::PlainText,
        }
    }
}

/// Lower-cased extension without the dot.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

pub fn is_allowed_extension(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Text of the document at `path`, dispatched on its extension. Returns an
/// empty string when the document cannot be read.
pub fn extract_text(path: &Path) -> String {
    let kind = DocumentKind::from_path(path);
    let result = match kind {
        DocumentKind::Pdf => read_pdf(path).map(|t| clean_document_text(&t)),
        DocumentKind::Word => read_docx(path).map(|t| clean_document_text(&t)),
        DocumentKind::PlainText => read_plain(path),
    };

    match result {
        Ok(text) => {
            debug!(path = %path.display(), ?kind, chars = text.len(), "Document text extracted");
            text
        }
        Err(e) => {
            warn!(path = %path.display(), ?kind, "Document text extraction failed: {e:#}");
            String::new()
        }
    }
}

fn read_pdf(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    // pdf-extract panics on some malformed inputs instead of returning Err.
    match catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
        Ok(Ok(text)) => return Ok(text),
        Ok(Err(e)) => debug!("Whole-document PDF read failed, going page by page: {e:?}"),
        Err(_) => debug!("Whole-document PDF read panicked, going page by page"),
    }
    read_pdf_pages(&bytes)
}

/// Page-at-a-time fallback so one broken page does not lose the rest.
fn read_pdf_pages(bytes: &[u8]) -> Result<String> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| anyhow!("not a PDF: {e}"))?;
    let pages: Vec<u32> = doc.get_pages().into_keys().collect();
    join_pages(&pages, |page| {
        doc.extract_text(&[page])
            .map_err(|e| anyhow!("page {page}: {e}"))
    })
}

/// Text of every page `extract` can read, in page order. Pages that fail or
/// panic are logged and skipped; it is an error only when none survive.
fn join_pages<F>(pages: &[u32], extract: F) -> Result<String>
where
    F: Fn(u32) -> Result<String>,
{
    let mut texts = Vec::with_capacity(pages.len());
    for &page in pages {
        match catch_unwind(AssertUnwindSafe(|| extract(page))) {
            Ok(Ok(text)) => texts.push(text),
            Ok(Err(e)) => warn!(page, "Skipping unreadable PDF page: {e:#}"),
            Err(_) => warn!(page, "Skipping PDF page that crashed the parser"),
        }
    }
    if texts.is_empty() && !pages.is_empty() {
        bail!("none of {} PDF pages could be read", pages.len());
    }
    Ok(texts.join("\n"))
}

fn read_docx(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let docx = docx_rs::read_docx(&bytes).map_err(|e| anyhow!("DOCX parse failed: {e:?}"))?;

    let mut lines = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
            DocumentChild::Table(table) => table_lines(table, &mut lines),
            _ => {}
        }
    }
    Ok(lines.join("\n"))
}

/// Runs of one paragraph; tabs and breaks keep neighbouring words apart.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_runs(&paragraph.children, &mut text);
    text
}

fn push_runs(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_runs(&link.children, out),
            _ => {}
        }
    }
}

/// Résumé layouts often sit in tables; each cell paragraph becomes a line.
fn table_lines(table: &Table, lines: &mut Vec<String>) {
    let cells = table
        .rows
        .iter()
        .filter_map(|row| match row {
            TableChild::TableRow(row) => Some(&row.cells),
            #[allow(unreachable_patterns)]
            _ => None,
        })
        .flatten()
        .filter_map(|cell| match cell {
            TableRowChild::TableCell(cell) => Some(&cell.children),
            #[allow(unreachable_patterns)]
            _ => None,
        })
        .flatten();

    for content in cells {
        if let TableCellContent::Paragraph(paragraph) = content {
            lines.push(paragraph_text(paragraph));
        }
    }
}

fn read_plain(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
