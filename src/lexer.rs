use crate::machine;
use crate::state::State;
use crate::{Error, Handler, Parser};

/// Configuration for a [`Lexer`].
#[derive(Debug, Clone, Copy)]
pub struct LexerOptions {
    /// Trim text runs and attribute values at their edges and drop text runs
    /// that are whitespace-only.
    ///
    /// On by default, which is what callers extracting data usually want.
    /// Turn it off to receive character data and values exactly as written.
    /// Tag names, comments and CDATA content are trimmed regardless of this
    /// setting.
    pub ignore_whitespace: bool,

    /// Log one line per character at trace level to the `xmlsieve::machine`
    /// target: position, codepoint, resulting state, depth and a snapshot of
    /// the accumulation buffer.
    ///
    /// Off by default. Has no effect on parse results.
    pub dump: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            ignore_whitespace: true,
            dump: false,
        }
    }
}

/// An XML lexer. See crate-level docs for basic usage.
///
/// The lexer is push-based: callers hand it string chunks of any size and it
/// drives its [`Handler`] as units complete. Chunk boundaries carry no
/// meaning, feeding a document character by character produces exactly the
/// same events as feeding it whole.
#[derive(Debug)]
pub struct Lexer<H: Handler = Parser> {
    pub(crate) handler: H,
    pub(crate) options: LexerOptions,
    pub(crate) state: State,
    pub(crate) return_state: State,
    /// The current lexical unit: text run, tag name, attribute name or
    /// value, CDATA content.
    pub(crate) buffer: String,
    pub(crate) comment: String,
    pub(crate) entity: String,
    pub(crate) cdata_skip: u8,
    pub(crate) dtd_depth: u32,
    /// Number of currently open elements.
    pub(crate) depth: usize,
    /// Name of the element opened most recently, kept for self-closing tags.
    pub(crate) tag_name: String,
    pub(crate) line: u64,
    pub(crate) column: u64,
    finished: bool,
}

impl<H: Handler> Lexer<H> {
    /// Create a lexer with default options that feeds the given handler.
    pub fn new(handler: H) -> Self {
        Lexer::new_with_options(handler, LexerOptions::default())
    }

    /// Create a lexer with explicit options.
    pub fn new_with_options(handler: H, options: LexerOptions) -> Self {
        Lexer {
            handler,
            options,
            state: State::AwaitingTag,
            return_state: State::AwaitingTag,
            buffer: String::new(),
            comment: String::new(),
            entity: String::new(),
            cdata_skip: 0,
            dtd_depth: 0,
            depth: 0,
            tag_name: String::new(),
            line: 1,
            column: 0,
            finished: false,
        }
    }

    /// Process a chunk of input, character by character.
    ///
    /// The first error aborts the parse; the lexer must not be fed further
    /// input afterwards.
    pub fn write(&mut self, chunk: &str) -> Result<(), Error> {
        debug_assert!(!self.finished);
        for c in chunk.chars() {
            self.column += 1;
            machine::consume(self, c)?;
            if self.options.dump {
                self.dump_char(c);
            }
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            }
        }
        Ok(())
    }

    /// Signal end of input. Calls [`Handler::end_of_file`] exactly once; any
    /// later call is a no-op.
    pub fn finish(&mut self) {
        if !self.finished {
            self.finished = true;
            self.handler.end_of_file();
        }
    }

    /// Borrow the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutably borrow the handler.
    ///
    /// This is how elements are drained from a [`Parser`] while lexing is in
    /// progress.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the lexer and return the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Flush the buffer as a text run, applying the whitespace policy.
    pub(crate) fn flush_text(&mut self) -> Result<(), Error> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.buffer);
        if self.options.ignore_whitespace {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(());
            }
            if trimmed.len() == text.len() {
                self.handler.text_node(text)
            } else {
                self.handler.text_node(trimmed.to_owned())
            }
        } else {
            self.handler.text_node(text)
        }
    }

    /// Flush the buffer as a name. Names are always trimmed, `</foo >` still
    /// names `foo`.
    pub(crate) fn flush_tag(&mut self) -> String {
        let name = std::mem::take(&mut self.buffer);
        let trimmed = name.trim();
        if trimmed.len() == name.len() {
            name
        } else {
            trimmed.to_owned()
        }
    }

    /// Flush the buffer as an attribute value, applying the whitespace
    /// policy. Unlike text, an empty value is still a value and gets
    /// reported.
    pub(crate) fn flush_value(&mut self) -> String {
        let value = std::mem::take(&mut self.buffer);
        if !self.options.ignore_whitespace {
            return value;
        }
        let trimmed = value.trim();
        if trimmed.len() == value.len() {
            value
        } else {
            trimmed.to_owned()
        }
    }

    /// Enter the entity sub-machine, remembering where to resume.
    pub(crate) fn enter_entity(&mut self) {
        self.return_state = self.state;
        self.entity.clear();
        self.state = State::Entity;
    }

    /// Enter the line-ending normalization sub-machine.
    pub(crate) fn enter_carriage_return(&mut self) {
        self.return_state = self.state;
        self.state = State::CarriageReturn;
    }

    /// Resume the state that was interrupted by a sub-machine.
    pub(crate) fn exit_sub_state(&mut self) {
        self.state = self.return_state;
    }

    fn dump_char(&self, c: char) {
        log::trace!(
            target: "xmlsieve::machine",
            "{}:{} {:#06x} {:?} => {:?} dep={} len={} mem={:?}",
            self.line,
            self.column,
            c as u32,
            c,
            self.state,
            self.depth,
            self.buffer.len(),
            self.buffer.chars().take(32).collect::<String>(),
        );
    }
}
