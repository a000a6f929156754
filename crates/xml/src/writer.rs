use crate::error::SaveError;
use lectern_document::{Presentation, Slide, SlideItem};
use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes presentations, one element per line.
///
/// Content is written verbatim (escaped but not trimmed), so loading the
/// output and writing it again reproduces it byte for byte. Carriage returns
/// are written as `&#13;` because parsers fold raw ones into `\n`. Text with
/// characters XML 1.0 cannot carry is rejected.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: Writer::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    pub fn write(&mut self, presentation: &Presentation) -> Result<(), SaveError> {
        check_presentation(presentation)?;
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        self.newline()?;
        self.event(Event::Start(BytesStart::new("presentation")))?;
        self.newline()?;
        self.text_element(BytesStart::new("showtitle"), presentation.title())?;

        for slide in presentation.slides() {
            self.write_slide(slide)?;
        }

        self.event(Event::End(BytesEnd::new("presentation")))?;
        self.newline()
    }

    fn write_slide(&mut self, slide: &Slide) -> Result<(), SaveError> {
        self.event(Event::Start(BytesStart::new("slide")))?;
        self.newline()?;
        self.text_element(BytesStart::new("title"), slide.title())?;
        for item in slide.items() {
            self.write_item(item)?;
        }
        self.event(Event::End(BytesEnd::new("slide")))?;
        self.newline()
    }

    fn write_item(&mut self, item: &SlideItem) -> Result<(), SaveError> {
        let level = item.level().to_string();
        let mut start = BytesStart::new("item");
        start.push_attribute(("kind", item.kind().as_str()));
        start.push_attribute(("level", level.as_str()));
        self.text_element(start, item.content())
    }

    fn text_element(&mut self, start: BytesStart<'_>, text: &str) -> Result<(), SaveError> {
        let end = start.to_end().into_owned();
        let content = escape_content(text);
        self.event(Event::Start(start))?;
        if !content.is_empty() {
            self.event(Event::Text(BytesText::from_escaped(content)))?;
        }
        self.event(Event::End(end))?;
        self.newline()
    }

    fn newline(&mut self) -> Result<(), SaveError> {
        self.event(Event::Text(BytesText::new("\n")))
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), SaveError> {
        self.writer
            .write_event(event)
            .map_err(|e| SaveError::Write(e.to_string()))
    }
}

fn is_xml_char(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}')
        || ch >= '\u{10000}'
}

fn check_chars(text: &str) -> Result<(), SaveError> {
    match text.chars().find(|&ch| !is_xml_char(ch)) {
        Some(ch) => Err(SaveError::Write(format!("character {ch:?} cannot be stored in XML"))),
        None => Ok(()),
    }
}

/// Checks every string up front so a rejected save writes nothing.
fn check_presentation(presentation: &Presentation) -> Result<(), SaveError> {
    check_chars(presentation.title())?;
    for slide in presentation.slides() {
        check_chars(slide.title())?;
        for item in slide.items() {
            check_chars(item.content())?;
        }
    }
    Ok(())
}

fn escape_content(text: &str) -> Cow<'_, str> {
    let escaped = escape(text);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}

/// Serializes `presentation` to a string.
pub fn to_string(presentation: &Presentation) -> Result<String, SaveError> {
    let mut writer = XmlWriter::new(Vec::new());
    writer.write(presentation)?;
    String::from_utf8(writer.into_inner()).map_err(|e| SaveError::Write(e.to_string()))
}

/// Writes `presentation` to `path`, replacing any existing file.
pub fn write_file(presentation: &Presentation, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    let io_error = |source: std::io::Error| SaveError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = XmlWriter::new(BufWriter::new(file));
    writer.write(presentation)?;
    writer.into_inner().flush().map_err(io_error)?;
    log::info!(
        "Saved presentation '{}' ({} slides) to '{}'",
        presentation.title(),
        presentation.len(),
        path.display()
    );
    Ok(())
}
