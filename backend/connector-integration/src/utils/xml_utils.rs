//! Ordered element tree used between typed messages and XML text.
//!
//! Only what the APM schema needs is modelled: attributes, a single text value and
//! child elements, all kept in document order. Mixed content is flattened into the
//! element's text.

use common_utils::errors::{CustomResult, ParsingError};
use error_stack::{report, ResultExt};
use quick_xml::{
    events::{attributes::Attribute, BytesDecl, BytesEnd, BytesStart, BytesText, Event},
    Reader, Writer,
};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct WireElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<WireElement>,
}

/// Result of looking a child element up by name.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Lookup<'a> {
    /// No such child, or the child is empty.
    Absent,
    /// A leaf carrying only text.
    Text(&'a str),
    /// A child with attributes or children of its own.
    Nested(&'a WireElement),
}

impl Lookup<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl WireElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Adds the attribute unless the value is absent or empty.
    pub fn attribute<V: AsRef<str>>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = non_empty(value.as_ref().map(AsRef::as_ref)) {
            self.attributes.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Sets the text unless the value is absent or empty.
    pub fn text<V: AsRef<str>>(mut self, value: Option<V>) -> Self {
        self.text = non_empty(value.as_ref().map(AsRef::as_ref)).map(str::to_string);
        self
    }

    /// Appends a leaf element unless the value is absent or empty.
    pub fn text_child<V: AsRef<str>>(self, name: &str, value: Option<V>) -> Self {
        self.child(Some(Self::new(name).text(value)))
    }

    /// Appends the child unless it is absent or serialized to nothing.
    pub fn child(mut self, child: Option<Self>) -> Self {
        if let Some(child) = child.filter(|child| !child.is_empty()) {
            self.children.push(child);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.text.is_none() && self.children.is_empty()
    }

    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .and_then(|(_, value)| non_empty(Some(value.as_str())))
    }

    pub fn get_text(&self) -> Option<&str> {
        non_empty(self.text.as_deref())
    }

    /// First child with the given name.
    pub fn find(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn lookup(&self, name: &str) -> Lookup<'_> {
        match self.find(name) {
            None => Lookup::Absent,
            Some(child) if !child.children.is_empty() || !child.attributes.is_empty() => {
                Lookup::Nested(child)
            }
            Some(child) => child.get_text().map_or(Lookup::Absent, Lookup::Text),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Serializes the tree as a UTF-8 document with an XML declaration.
pub fn write_xml(root: &WireElement) -> CustomResult<String, ParsingError> {
    let mut writer = Writer::new(Vec::new());
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .change_context(ParsingError::XmlEncodeFailure)?;
    write_element(&mut writer, root)?;

    String::from_utf8(writer.into_inner()).change_context(ParsingError::XmlEncodeFailure)
}

fn write_element(
    writer: &mut Writer<Vec<u8>>,
    element: &WireElement,
) -> CustomResult<(), ParsingError> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .change_context(ParsingError::XmlEncodeFailure);
    }

    writer
        .write_event(Event::Start(start))
        .change_context(ParsingError::XmlEncodeFailure)?;
    if let Some(text) = &element.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .change_context(ParsingError::XmlEncodeFailure)?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .change_context(ParsingError::XmlEncodeFailure)?;

    Ok(())
}

/// Parses a complete document into its root element.
///
/// Text is not trimmed: hashed fields must reach the hash engine exactly as received.
/// Whitespace-only text is dropped from elements that have children.
///
/// Anything that is not well-formed, including unclosed or mismatched tags, stray text
/// outside the root and multiple roots, is an [`ParsingError::XmlParseFailure`].
pub fn parse_xml(xml: &str) -> CustomResult<WireElement, ParsingError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<WireElement> = Vec::new();
    let mut root: Option<WireElement> = None;

    loop {
        let event = reader
            .read_event()
            .change_context(ParsingError::XmlParseFailure)
            .attach_printable_lazy(|| format!("at byte {}", reader.buffer_position()))?;

        match event {
            Event::Start(start) => {
                if root.is_some() {
                    return Err(report!(ParsingError::XmlParseFailure))
                        .attach_printable("content after the root element");
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or_else(|| {
                    report!(ParsingError::XmlParseFailure).attach_printable("unbalanced end tag")
                })?;
                close_element(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .change_context(ParsingError::XmlParseFailure)?;
                append_text(&mut stack, &text)?;
            }
            Event::CData(data) => {
                let text = std::str::from_utf8(&data)
                    .change_context(ParsingError::XmlParseFailure)?
                    .to_string();
                append_text(&mut stack, &text)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
        }
    }

    if !stack.is_empty() {
        return Err(report!(ParsingError::XmlParseFailure))
            .attach_printable("document ended inside an element");
    }

    root.ok_or_else(|| {
        report!(ParsingError::XmlParseFailure).attach_printable("document has no root element")
    })
}

/// [`parse_xml`] for raw response bytes.
pub fn parse_xml_bytes(xml: &[u8]) -> CustomResult<WireElement, ParsingError> {
    let xml = std::str::from_utf8(xml).change_context(ParsingError::XmlParseFailure)?;
    parse_xml(xml)
}

fn element_from_start(start: &BytesStart<'_>) -> CustomResult<WireElement, ParsingError> {
    let name = utf8(start.name().as_ref())?;
    let attributes = start
        .attributes()
        .map(|attribute| {
            let attribute: Attribute<'_> =
                attribute.change_context(ParsingError::XmlParseFailure)?;
            let key = utf8(attribute.key.as_ref())?;
            let value = attribute
                .unescape_value()
                .change_context(ParsingError::XmlParseFailure)?
                .into_owned();
            Ok((key, value))
        })
        .collect::<CustomResult<Vec<_>, ParsingError>>()?;

    Ok(WireElement {
        name,
        attributes,
        text: None,
        children: Vec::new(),
    })
}

fn close_element(
    stack: &mut [WireElement],
    root: &mut Option<WireElement>,
    mut element: WireElement,
) -> CustomResult<(), ParsingError> {
    // Indentation between child elements is not content; leaf text is kept verbatim.
    if !element.children.is_empty()
        && element
            .text
            .as_deref()
            .is_some_and(|text| text.trim().is_empty())
    {
        element.text = None;
    }

    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(report!(ParsingError::XmlParseFailure))
                .attach_printable("more than one root element")
        }
    }
    Ok(())
}

fn append_text(stack: &mut [WireElement], text: &str) -> CustomResult<(), ParsingError> {
    match stack.last_mut() {
        Some(element) => element.text.get_or_insert_with(String::new).push_str(text),
        None if text.trim().is_empty() => {}
        None => {
            return Err(report!(ParsingError::XmlParseFailure))
                .attach_printable("text outside the root element")
        }
    }
    Ok(())
}

fn utf8(bytes: &[u8]) -> CustomResult<String, ParsingError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .change_context(ParsingError::XmlParseFailure)
}
