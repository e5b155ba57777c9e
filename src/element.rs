/// A single attribute of an element.
///
/// Attributes are kept as a list, not a map: duplicates are allowed and
/// document order is preserved.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Attribute {
    /// The attribute's name, such as `"href"`.
    pub key: String,
    /// The attribute's value. An attribute written without a value has an
    /// empty string here.
    pub value: String,
}

/// An element as assembled by [`crate::Parser`].
///
/// How much of an element is populated depends on how it was selected:
/// elements emitted at their close tag carry everything that was collected;
/// elements emitted at end-of-attributes carry tag and attributes only.
/// Consumers of attributes-only emissions must not assume `children` or
/// `text` are populated.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    /// The element's tag name, such as `"item"`.
    pub tag: String,

    /// The element's attributes, in document order.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub attrs: Vec<Attribute>,

    /// Child elements, in document order.
    ///
    /// Only populated while a collecting ancestor is active; for elements
    /// outside any selected subtree this stays empty no matter what the
    /// document contains.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<Element>,

    /// Concatenation of all text and CDATA runs directly inside this
    /// element, in encounter order. `None` if there were none.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub text: Option<String>,
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(tag: String) -> Self {
        Element {
            tag,
            ..Element::default()
        }
    }

    /// Append a run of text to this element's `text` field.
    pub(crate) fn push_text(&mut self, text: &str) {
        match self.text {
            Some(ref mut existing) => existing.push_str(text),
            None => self.text = Some(text.to_owned()),
        }
    }

    /// Clone the parts of this element that are known once its start tag is
    /// complete: tag name and attributes, but never children or text.
    pub(crate) fn attribute_snapshot(&self) -> Element {
        Element {
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            ..Element::default()
        }
    }
}
