// Plain text from Word (.docx) documents.
//
// A .docx file is a zip archive. The body lives in `word/document.xml` as
// `<w:t>` text runs inside `<w:p>` paragraphs. Each paragraph ends with a
// blank line, so the sentence splitter treats paragraphs as hard breaks.

use std::io::{Read, Seek};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

/// Archive entry holding the main document body.
const DOCUMENT_PART: &str = "word/document.xml";

/// Anything that can go wrong between the zip container and the XML body.
pub type DocxError = Box<dyn std::error::Error + Send + Sync>;

/// Extract the body text of a Word document.
pub fn extract_text<R: Read + Seek>(reader: R) -> Result<String, DocxError> {
    let mut archive = ZipArchive::new(reader)?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    document_text(&xml)
}

/// Collect run text from WordprocessingML.
///
/// Tabs and line breaks inside a paragraph become `\t` and `\n`. Everything
/// outside `<w:t>` (properties, field codes, drawings) is skipped.
fn document_text(xml: &str) -> Result<String, DocxError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run_text => text.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text.trim_end().to_string())
}
