//! PDF serialization of laid-out pages.
//!
//! Assembles a complete single-file PDF document from the layout engine's
//! output: header, catalog, page tree, per-page content streams, Base-14
//! font resources, cross-reference table, and trailer. Text is encoded as
//! WinAnsi so French accented characters render with the standard Helvetica
//! faces, and content streams are Flate-compressed by default.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::fonts::FontFace;
use crate::geometry::{A4_HEIGHT, A4_WIDTH};
use crate::layout::Page;

/// Configuration for PDF serialization.
#[derive(Debug, Clone)]
pub struct PdfRenderConfig {
    /// PDF version written in the header
    pub version: String,
    /// Document title metadata
    pub title: Option<String>,
    /// Document author metadata
    pub author: Option<String>,
    /// Document subject metadata
    pub subject: Option<String>,
    /// Creator application metadata
    pub creator: Option<String>,
    /// Whether to Flate-compress content streams
    pub compress: bool,
}

impl Default for PdfRenderConfig {
    fn default() -> Self {
        Self {
            version: "1.4".to_string(),
            title: None,
            author: None,
            subject: None,
            creator: Some("bilan_pdf".to_string()),
            compress: true,
        }
    }
}

impl PdfRenderConfig {
    /// Set document title metadata.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set document author metadata.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set document subject metadata.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Enable or disable content stream compression.
    pub fn with_compress(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Compress data using Flate/Deflate compression.
///
/// Returns compressed bytes suitable for the FlateDecode filter.
fn compress_data(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Serializer turning layout pages into PDF bytes.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    config: PdfRenderConfig,
}

impl PdfRenderer {
    /// Create a renderer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with a custom configuration.
    pub fn with_config(config: PdfRenderConfig) -> Self {
        Self { config }
    }

    /// Serialize pages into a complete PDF document.
    ///
    /// An empty page list still produces a valid one-page document so that
    /// degenerate layouts never yield an unreadable file.
    pub fn render(&self, pages: &[Page]) -> Result<Vec<u8>> {
        let blank;
        let pages = if pages.is_empty() {
            blank = [Page {
                width: A4_WIDTH,
                height: A4_HEIGHT,
                runs: Vec::new(),
            }];
            &blank[..]
        } else {
            pages
        };

        // Object layout: 1 catalog, 2 page tree, 3/4 fonts, then one page
        // object and one content object per page, info dictionary last.
        let first_page_obj = 5u32;
        let info_obj = first_page_obj + 2 * pages.len() as u32;
        let object_count = info_obj; // highest object number

        let mut buf: Vec<u8> = Vec::new();
        buf.extend_from_slice(format!("%PDF-{}\n", self.config.version).as_bytes());
        // Binary marker comment so transports treat the file as binary
        buf.extend_from_slice(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n']);

        let mut offsets: Vec<usize> = vec![0; object_count as usize + 1];

        // 1: document catalog
        offsets[1] = buf.len();
        buf.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        // 2: page tree
        offsets[2] = buf.len();
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", first_page_obj + 2 * i as u32))
            .collect();
        buf.extend_from_slice(
            format!(
                "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
                kids.join(" "),
                pages.len()
            )
            .as_bytes(),
        );

        // 3 and 4: the two Base-14 font resources
        for (obj, face) in [(3usize, FontFace::Helvetica), (4, FontFace::HelveticaBold)] {
            offsets[obj] = buf.len();
            buf.extend_from_slice(
                format!(
                    "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /{} \
                     /Encoding /WinAnsiEncoding >>\nendobj\n",
                    obj,
                    face.postscript_name()
                )
                .as_bytes(),
            );
        }

        // Page and content stream objects
        for (index, page) in pages.iter().enumerate() {
            let page_obj = first_page_obj + 2 * index as u32;
            let content_obj = page_obj + 1;

            offsets[page_obj as usize] = buf.len();
            buf.extend_from_slice(
                format!(
                    "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> \
                     /Contents {} 0 R >>\nendobj\n",
                    page_obj,
                    format_number(page.width),
                    format_number(page.height),
                    content_obj
                )
                .as_bytes(),
            );

            let content = build_content_stream(page);
            offsets[content_obj as usize] = buf.len();
            if self.config.compress {
                let compressed = compress_data(&content)?;
                buf.extend_from_slice(
                    format!(
                        "{} 0 obj\n<< /Length {} /Filter /FlateDecode >>\nstream\n",
                        content_obj,
                        compressed.len()
                    )
                    .as_bytes(),
                );
                buf.extend_from_slice(&compressed);
            } else {
                buf.extend_from_slice(
                    format!(
                        "{} 0 obj\n<< /Length {} >>\nstream\n",
                        content_obj,
                        content.len()
                    )
                    .as_bytes(),
                );
                buf.extend_from_slice(&content);
            }
            buf.extend_from_slice(b"\nendstream\nendobj\n");
        }

        // Info dictionary
        offsets[info_obj as usize] = buf.len();
        buf.extend_from_slice(format!("{} 0 obj\n<<", info_obj).as_bytes());
        for (key, value) in [
            ("Title", &self.config.title),
            ("Author", &self.config.author),
            ("Subject", &self.config.subject),
            ("Creator", &self.config.creator),
        ] {
            if let Some(value) = value {
                buf.extend_from_slice(format!(" /{} ", key).as_bytes());
                append_show_text(&mut buf, value);
            }
        }
        buf.extend_from_slice(b" >>\nendobj\n");

        // Cross-reference table and trailer
        let xref_offset = buf.len();
        buf.extend_from_slice(format!("xref\n0 {}\n", object_count + 1).as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for obj in 1..=object_count {
            buf.extend_from_slice(format!("{:010} 00000 n \n", offsets[obj as usize]).as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
                object_count + 1,
                info_obj,
                xref_offset
            )
            .as_bytes(),
        );

        log::debug!(
            "serialized {} page(s) into {} bytes (compress: {})",
            pages.len(),
            buf.len(),
            self.config.compress
        );
        Ok(buf)
    }

    /// Serialize pages and write the document to a file.
    pub fn render_to_file(&self, pages: &[Page], path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(pages)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Build the content stream operators for one page.
fn build_content_stream(page: &Page) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    for run in &page.runs {
        let font = if run.bold { "/F2" } else { "/F1" };
        out.extend_from_slice(
            format!(
                "BT\n{} {} Tf\n{} {} Td\n",
                font,
                format_number(run.font_size),
                format_number(run.x),
                format_number(run.y)
            )
            .as_bytes(),
        );
        append_show_text(&mut out, &run.text);
        out.extend_from_slice(b" Tj\nET\n");
    }
    out
}

/// Append a PDF literal string in WinAnsi bytes, with delimiters escaped.
fn append_show_text(out: &mut Vec<u8>, text: &str) {
    out.push(b'(');
    for ch in text.chars() {
        let byte = win_ansi_byte(ch);
        if byte == b'(' || byte == b')' || byte == b'\\' {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out.push(b')');
}

/// Map a character to its WinAnsiEncoding byte, `?` when unmapped.
fn win_ansi_byte(ch: char) -> u8 {
    let code = ch as u32;
    match ch {
        _ if code < 0x80 => code as u8,
        '\u{A0}'..='\u{FF}' => code as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

/// Format a coordinate or size without a trailing `.0` for whole values.
fn format_number(value: f32) -> String {
    if (value - value.round()).abs() < 0.005 {
        format!("{}", value.round() as i64)
    } else {
        format!("{:.2}", value)
    }
}
