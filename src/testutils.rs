//! Module of helper functions for integration tests.
//!
//! Those tests should only test public API surface in general, with some
//! exceptions as provided by this module.

use crate::{Error, Handler};

/// One recorded lexer event, mirroring the [`Handler`] methods one to one.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Event {
    /// `start_element`
    StartElement(String),
    /// `attribute_name`
    AttributeName(String),
    /// `attribute_value`
    AttributeValue(String),
    /// `end_of_attributes`
    EndOfAttributes,
    /// `text_node`
    Text(String),
    /// `cdata_node`
    Cdata(String),
    /// `comment_node`
    Comment(String),
    /// `close_element`
    CloseElement(String),
    /// `end_of_file`
    EndOfFile,
}

/// A [`Handler`] that records every event it sees and never fails.
///
/// Integration tests assert on the exact event sequence a document lexes
/// to; this is the handler they do it with.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    /// All events recorded so far, in order.
    pub events: Vec<Event>,
}

impl Handler for RecordingHandler {
    fn start_element(&mut self, tag: String) {
        self.events.push(Event::StartElement(tag));
    }

    fn attribute_name(&mut self, name: String) -> Result<(), Error> {
        self.events.push(Event::AttributeName(name));
        Ok(())
    }

    fn attribute_value(&mut self, value: String) -> Result<(), Error> {
        self.events.push(Event::AttributeValue(value));
        Ok(())
    }

    fn end_of_attributes(&mut self) {
        self.events.push(Event::EndOfAttributes);
    }

    fn text_node(&mut self, text: String) -> Result<(), Error> {
        self.events.push(Event::Text(text));
        Ok(())
    }

    fn cdata_node(&mut self, text: String) -> Result<(), Error> {
        self.events.push(Event::Cdata(text));
        Ok(())
    }

    fn comment_node(&mut self, text: String) {
        self.events.push(Event::Comment(text));
    }

    fn close_element(&mut self, tag: String) -> Result<(), Error> {
        self.events.push(Event::CloseElement(tag));
        Ok(())
    }

    fn end_of_file(&mut self) {
        self.events.push(Event::EndOfFile);
    }
}
