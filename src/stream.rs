use std::io::Read;

use crate::reader::Utf8Reader;
use crate::{Element, Lexer, Parser, StreamError};

/// An iterator of selected elements over a byte stream.
///
/// This couples a [`Utf8Reader`], a [`Lexer`] and a [`Parser`] into the
/// usual way of consuming this crate: configure a parser, wrap it in a
/// lexer, hand both to `ElementStream` and iterate.
///
/// The stream is pull-based. Each call to `next` reads only as much input as
/// it takes to complete the next selected element, so a slow consumer
/// throttles reads and memory stays bounded by the largest selected subtree
/// plus one read chunk. Elements come out in document order of the event
/// that emitted them.
///
/// The first error, whether I/O or malformed markup, is yielded once and
/// ends the stream; elements that completed before the offending input are
/// still handed out first. Dropping the stream mid-document simply abandons
/// the parse.
#[derive(Debug)]
pub struct ElementStream<R: Read> {
    lexer: Lexer<Parser>,
    reader: Utf8Reader<R>,
    /// An error that happened mid-chunk, held back until the elements
    /// completed before it have been handed out.
    pending_error: Option<StreamError>,
    eof: bool,
    failed: bool,
}

impl<R: Read> ElementStream<R> {
    /// Create a stream over `input` driven by the given lexer.
    ///
    /// The lexer's handler carries the selection; a parser with empty
    /// selection sets yields nothing (though malformed input still errors).
    pub fn new(input: R, lexer: Lexer<Parser>) -> Self {
        ElementStream {
            lexer,
            reader: Utf8Reader::new(input),
            pending_error: None,
            eof: false,
            failed: false,
        }
    }

    /// One round of the pump: feed the next chunk, or signal end of input.
    fn advance(&mut self) -> Result<(), StreamError> {
        match self.reader.next_chunk()? {
            Some(chunk) => self.lexer.write(chunk)?,
            None => {
                self.eof = true;
                self.lexer.finish();
            }
        }
        Ok(())
    }
}

impl<R: Read> Iterator for ElementStream<R> {
    type Item = Result<Element, StreamError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.lexer.handler_mut().pop_element() {
                break Some(Ok(element));
            } else if let Some(e) = self.pending_error.take() {
                self.failed = true;
                break Some(Err(e));
            } else if self.failed || self.eof {
                break None;
            } else if let Err(e) = self.advance() {
                // elements that completed earlier in the chunk go out first
                self.pending_error = Some(e);
            }
        }
    }
}
