/// The states of the lexer, one per meaning of "what does the next character
/// do".
///
/// The entity and carriage-return states are sub-machines entered from
/// several places; the state to resume afterwards is kept in
/// `Lexer::return_state` rather than encoded in extra variants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum State {
    /// Outside any construct at document level, waiting for the next `<`.
    ///
    /// This is the initial state. Anything that is not `<` is ignored here,
    /// which is what skips prolog leftovers and whitespace between top-level
    /// constructs.
    AwaitingTag,
    /// Accumulating character data inside an element.
    Text,
    /// Just read `<`, deciding what kind of construct follows.
    TagDispatch,
    /// Accumulating a start tag's name.
    TagName,
    /// Accumulating a close tag's name, after `</`.
    CloseTagName,
    /// Read `/` inside a start tag, waiting for the closing `>`.
    SelfClosing,
    /// Inside a start tag, before an attribute name.
    BeforeAttributeName,
    /// Accumulating an attribute name.
    AttributeName,
    /// After a flushed attribute name, waiting for `=` or the next name.
    AfterAttributeName,
    /// Just read `=`, deciding how the value is delimited.
    BeforeAttributeValue,
    /// Accumulating an attribute value delimited by `"`.
    AttributeValueDoubleQuoted,
    /// Accumulating an attribute value delimited by `'`.
    AttributeValueSingleQuoted,
    /// Accumulating an attribute value with no delimiter.
    AttributeValueUnquoted,
    /// Just read `<!`, deciding between comment, CDATA and DTD.
    MarkupDeclaration,
    /// Read `<!-`, expecting the second `-`.
    CommentStart,
    /// Accumulating a comment until `-->`.
    Comment,
    /// Read `<![`, consuming the first character of `CDATA[`.
    CdataStart,
    /// Skipping the remaining fixed characters of `<![CDATA[`.
    CdataSkip,
    /// Accumulating CDATA content until `]]>`.
    CdataSection,
    /// Skipping a DTD, counting `<`/`>` nesting.
    Dtd,
    /// Skipping a processing instruction or XML declaration until `>`.
    ProcessingInstruction,
    /// Just read `&`, deciding between a named and a numeric entity.
    Entity,
    /// Just read `&#`, deciding between decimal and hexadecimal digits.
    EntityNumeric,
    /// Accumulating decimal digits of a character reference.
    EntityDecimal,
    /// Accumulating hexadecimal digits of a character reference.
    EntityHex,
    /// Accumulating the name of a named entity.
    EntityNamed,
    /// Just read a bare `\r`, looking at the next character to normalize the
    /// line ending.
    CarriageReturn,
}
