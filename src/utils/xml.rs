//! Small quick-xml writing helpers shared by the HTML emitters.

use anyhow::Result;
use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{Cursor, Write};

pub type XmlWriter = Writer<Cursor<Vec<u8>>>;

#[inline]
pub fn create_xml_writer() -> XmlWriter {
    Writer::new(Cursor::new(Vec::new()))
}

/// Consume the writer and return what it wrote.
pub fn into_string(writer: XmlWriter) -> Result<String> {
    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

/// End the current line of output.
#[inline]
pub fn newline(writer: &mut XmlWriter) -> Result<()> {
    writer.get_mut().write_all(b"\n")?;
    Ok(())
}

/// Write a text element: `<tag>text</tag>`.
#[inline]
pub fn write_text_element(writer: &mut XmlWriter, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Write an empty element with attributes: `<tag attr1="val1" ... />`.
#[inline]
pub fn write_empty_elem(writer: &mut XmlWriter, tag: &str, attrs: &[(&str, &str)]) -> Result<()> {
    let mut elem = BytesStart::new(tag);
    for (k, v) in attrs {
        elem.push_attribute((*k, *v));
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write an external script element: `<script src=".." async></script>`.
pub fn write_script(writer: &mut XmlWriter, src: &str, async_attr: bool) -> Result<()> {
    let mut elem = BytesStart::new("script");
    if async_attr {
        elem.push_attribute(("async", ""));
    }
    elem.push_attribute(("src", src));
    writer.write_event(Event::Start(elem))?;
    // Space ensures proper HTML parsing of script tags
    writer.write_event(Event::Text(BytesText::new(" ")))?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}

/// Write an inline script. The body is emitted verbatim and must already be
/// safe to embed (no `</script`).
pub fn write_inline_script(writer: &mut XmlWriter, body: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("script")))?;
    writer.write_event(Event::Text(BytesText::from_escaped(body)))?;
    writer.write_event(Event::End(BytesEnd::new("script")))?;
    Ok(())
}
