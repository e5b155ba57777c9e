use std::collections::{HashSet, VecDeque};

use crate::{Attribute, Element, Error, Handler};

/// The default implementation of [`crate::Handler`]: a tree builder that
/// materializes only selected subtrees.
///
/// A parser holds two selection sets, both keyed by tag name:
///
/// * *emit on close*: the element's whole subtree is collected and pushed to
///   the ready queue when its close tag arrives.
/// * *emit on attributes*: a snapshot of tag name and attributes is pushed to
///   the ready queue as soon as the start tag is complete; the element's
///   content is never collected on its behalf.
///
/// Anything outside a selected subtree is dropped as soon as it closes, so
/// memory use is bounded by the largest selected subtree, not by the
/// document.
///
/// At most one close-selected ancestor collects at a time. When a selected
/// element opens inside an already collecting subtree it does not open a
/// second collection scope; it is retained as a descendant of the outer
/// element and additionally emitted on its own when it closes. A tag listed
/// in both sets is emitted twice, once early and once at close; that is
/// intentional, callers who want only one of the two pick one set.
#[derive(Debug, Default)]
pub struct Parser {
    emit_on_close: HashSet<String>,
    emit_on_attributes: HashSet<String>,
    stack: Vec<Element>,
    /// Stack index of the element currently collecting its subtree.
    collecting: Option<usize>,
    ready: VecDeque<Element>,
    closed: bool,
}

impl Parser {
    /// Create a parser with empty selection sets.
    ///
    /// Without any selection the parser still checks well-formedness but
    /// never emits an element.
    #[must_use]
    pub fn new() -> Self {
        Parser::default()
    }

    /// Select a tag name for emission at its close tag, subtree included.
    pub fn emit_on_close(&mut self, tag: &str) {
        self.emit_on_close.insert(tag.to_owned());
    }

    /// Select a tag name for early emission at end-of-attributes.
    ///
    /// The emitted element carries tag name and attributes only; `children`
    /// and `text` are empty no matter what the document contains.
    pub fn emit_on_attributes(&mut self, tag: &str) {
        self.emit_on_attributes.insert(tag.to_owned());
    }

    /// Remove and return the next ready element, in document order of the
    /// event that emitted it.
    pub fn pop_element(&mut self) -> Option<Element> {
        self.ready.pop_front()
    }

    /// Whether `end_of_file` has been seen. Once this is true and
    /// [`Parser::pop_element`] returns `None`, no element will ever follow.
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Handler for Parser {
    fn start_element(&mut self, tag: String) {
        if self.collecting.is_none() && self.emit_on_close.contains(&tag) {
            self.collecting = Some(self.stack.len());
        }
        self.stack.push(Element::new(tag));
    }

    fn attribute_name(&mut self, name: String) -> Result<(), Error> {
        let element = self.stack.last_mut().ok_or(Error::NoOpenElement)?;
        element.attrs.push(Attribute {
            key: name,
            value: String::new(),
        });
        Ok(())
    }

    fn attribute_value(&mut self, value: String) -> Result<(), Error> {
        let attribute = self
            .stack
            .last_mut()
            .and_then(|element| element.attrs.last_mut())
            .ok_or(Error::NoOpenElement)?;
        attribute.value = value;
        Ok(())
    }

    fn end_of_attributes(&mut self) {
        if let Some(element) = self.stack.last() {
            if self.emit_on_attributes.contains(&element.tag) {
                self.ready.push_back(element.attribute_snapshot());
            }
        }
    }

    fn text_node(&mut self, text: String) -> Result<(), Error> {
        let element = self.stack.last_mut().ok_or(Error::NoOpenElement)?;
        element.push_text(&text);
        Ok(())
    }

    fn cdata_node(&mut self, text: String) -> Result<(), Error> {
        self.text_node(text)
    }

    fn comment_node(&mut self, _text: String) {}

    fn close_element(&mut self, tag: String) -> Result<(), Error> {
        let element = match self.stack.pop() {
            Some(element) => element,
            None => return Err(Error::UnbalancedClose),
        };
        if element.tag != tag {
            return Err(Error::MismatchedClose {
                expected: element.tag,
                found: tag,
            });
        }
        // the collecting element closing ends its own collection scope
        if self.collecting == Some(self.stack.len()) {
            self.collecting = None;
        }
        let selected = self.emit_on_close.contains(&element.tag);
        if self.collecting.is_some() {
            // still inside a collecting subtree, so the parent keeps this
            // element; if it is selected itself it also goes out on its own
            if selected {
                self.ready.push_back(element.clone());
            }
            if let Some(parent) = self.stack.last_mut() {
                parent.children.push(element);
            }
        } else if selected {
            self.ready.push_back(element);
        }
        Ok(())
    }

    fn end_of_file(&mut self) {
        self.closed = true;
    }
}
