use crate::Error;

/// A handler is an object the lexer feeds as syntactic units complete.
///
/// Domain-specific consumers can implement this trait directly to build
/// something other than [`crate::Element`] trees, for example counters,
/// validators or direct-to-output converters. The lexer never looks at what
/// a handler does with an event; it only stops when a fallible event returns
/// an error.
///
/// The lexer guarantees the following call discipline:
///
/// * `attribute_name`, `attribute_value` and `end_of_attributes` only occur
///   between a `start_element` and the matching close or the next
///   `start_element`.
/// * `attribute_value` refers to the most recent `attribute_name`. An
///   attribute without a written value gets no `attribute_value` call at
///   all.
/// * A self-closing tag produces `end_of_attributes` immediately followed by
///   `close_element`, with no events in between.
/// * `end_of_file` is called exactly once, after which no further events
///   occur.
///
/// Balance of open and close tags is *not* guaranteed; checking it is the
/// handler's business (see [`crate::Parser`]).
pub trait Handler {
    /// A start tag's name is complete, the element is now open.
    ///
    /// Attributes, if any, follow as separate events.
    fn start_element(&mut self, tag: String);

    /// An attribute name is complete. Its value, if it has one, follows.
    fn attribute_name(&mut self, name: String) -> Result<(), Error>;

    /// The value for the most recently announced attribute name is complete.
    fn attribute_value(&mut self, value: String) -> Result<(), Error>;

    /// The start tag is complete; all attributes of the current element have
    /// been announced.
    fn end_of_attributes(&mut self);

    /// A run of character data is complete, with entities decoded and line
    /// endings normalized.
    fn text_node(&mut self, text: String) -> Result<(), Error>;

    /// A `<![CDATA[..]]>` section is complete. The content is literal; no
    /// entity decoding has happened.
    fn cdata_node(&mut self, text: String) -> Result<(), Error>;

    /// A `<!-- .. -->` comment is complete.
    fn comment_node(&mut self, text: String);

    /// A close tag is complete, or a self-closing tag closed itself.
    fn close_element(&mut self, tag: String) -> Result<(), Error>;

    /// The input ended. No further events follow.
    fn end_of_file(&mut self);
}
