//! XML text output for element trees.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::config::EmitConfig;
use crate::element::Element;
use crate::error::{Result, UrdfError};

/// Write `root` as an XML document to `out`.
///
/// Childless elements are written as empty tags. `config.indent` of zero
/// puts the whole document on one line.
pub fn write_xml<W: Write>(root: &Element, out: W, config: &EmitConfig) -> Result<()> {
    let mut writer = if config.indent > 0 {
        Writer::new_with_indent(out, b' ', config.indent)
    } else {
        Writer::new(out)
    };

    if config.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| UrdfError::XmlWrite(format!("failed to write XML declaration: {e}")))?;
    }
    write_element(&mut writer, root)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children().is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| UrdfError::XmlWrite(format!("failed to write <{}>: {e}", element.name())));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| UrdfError::XmlWrite(format!("failed to write <{}>: {e}", element.name())))?;
    for child in element.children() {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name())))
        .map_err(|e| UrdfError::XmlWrite(format!("failed to close <{}>: {e}", element.name())))
}

impl Element {
    /// Serialize this tree to an XML string.
    pub fn to_xml_string(&self, config: &EmitConfig) -> Result<String> {
        let mut buffer = Vec::new();
        write_xml(self, &mut buffer, config)?;
        String::from_utf8(buffer).map_err(|e| UrdfError::XmlWrite(e.to_string()))
    }
}
