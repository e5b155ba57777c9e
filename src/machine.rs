use crate::entities::{decode_named_entity, decode_numeric_entity};
use crate::lexer::Lexer;
use crate::state::State;
use crate::{Error, Handler};

/// Feed one character through the state machine.
///
/// Implemented as a free function over the lexer rather than a method so the
/// per-state helpers below can take the lexer the same way and the whole
/// machine stays in one file.
pub(crate) fn consume<H: Handler>(slf: &mut Lexer<H>, c: char) -> Result<(), Error> {
    match slf.state {
        State::AwaitingTag => {
            if c == '<' {
                slf.state = State::TagDispatch;
            }
        }

        State::Text => match c {
            '<' => {
                slf.flush_text()?;
                slf.state = State::TagDispatch;
            }
            '&' => slf.enter_entity(),
            '\r' => slf.enter_carriage_return(),
            _ => slf.buffer.push(c),
        },

        State::TagDispatch => match c {
            '!' => slf.state = State::MarkupDeclaration,
            '/' => slf.state = State::CloseTagName,
            '?' => slf.state = State::ProcessingInstruction,
            _ => {
                slf.buffer.push(c);
                slf.state = State::TagName;
            }
        },

        State::TagName => match c {
            '/' => {
                start_tag(slf);
                slf.state = State::SelfClosing;
            }
            '>' => {
                start_tag(slf);
                slf.handler.end_of_attributes();
                slf.state = after_construct(slf);
            }
            c if is_xml_whitespace(c) => {
                start_tag(slf);
                slf.state = State::BeforeAttributeName;
            }
            _ => slf.buffer.push(c),
        },

        State::CloseTagName => {
            if c == '>' {
                close_tag(slf)?;
                slf.state = after_construct(slf);
            } else {
                slf.buffer.push(c);
            }
        }

        State::SelfClosing => {
            if c == '>' {
                self_close(slf)?;
                slf.state = after_construct(slf);
            }
        }

        State::BeforeAttributeName => match c {
            '/' => slf.state = State::SelfClosing,
            '>' => {
                slf.handler.end_of_attributes();
                slf.state = after_construct(slf);
            }
            c if is_xml_whitespace(c) => {}
            _ => {
                slf.buffer.push(c);
                slf.state = State::AttributeName;
            }
        },

        State::AttributeName => match c {
            '=' => {
                flush_attribute_name(slf)?;
                slf.state = State::BeforeAttributeValue;
            }
            '/' => {
                flush_attribute_name(slf)?;
                slf.state = State::SelfClosing;
            }
            '>' => {
                flush_attribute_name(slf)?;
                slf.handler.end_of_attributes();
                slf.state = after_construct(slf);
            }
            c if is_xml_whitespace(c) => {
                flush_attribute_name(slf)?;
                slf.state = State::AfterAttributeName;
            }
            _ => slf.buffer.push(c),
        },

        State::AfterAttributeName => match c {
            '=' => slf.state = State::BeforeAttributeValue,
            '/' => slf.state = State::SelfClosing,
            '>' => {
                slf.handler.end_of_attributes();
                slf.state = after_construct(slf);
            }
            c if is_xml_whitespace(c) => {}
            _ => {
                // the previous attribute stays value-less, a new name starts
                slf.buffer.push(c);
                slf.state = State::AttributeName;
            }
        },

        State::BeforeAttributeValue => match c {
            '"' => slf.state = State::AttributeValueDoubleQuoted,
            '\'' => slf.state = State::AttributeValueSingleQuoted,
            '>' => {
                slf.handler.end_of_attributes();
                slf.state = after_construct(slf);
            }
            c if is_xml_whitespace(c) => {}
            _ => {
                slf.buffer.push(c);
                slf.state = State::AttributeValueUnquoted;
            }
        },

        State::AttributeValueDoubleQuoted => match c {
            '"' => {
                flush_attribute_value(slf)?;
                slf.state = State::BeforeAttributeName;
            }
            '&' => slf.enter_entity(),
            _ => slf.buffer.push(c),
        },

        State::AttributeValueSingleQuoted => match c {
            '\'' => {
                flush_attribute_value(slf)?;
                slf.state = State::BeforeAttributeName;
            }
            '&' => slf.enter_entity(),
            _ => slf.buffer.push(c),
        },

        State::AttributeValueUnquoted => match c {
            '>' => {
                flush_attribute_value(slf)?;
                slf.handler.end_of_attributes();
                slf.state = after_construct(slf);
            }
            c if is_xml_whitespace(c) => {
                flush_attribute_value(slf)?;
                slf.state = State::BeforeAttributeName;
            }
            _ => slf.buffer.push(c),
        },

        State::MarkupDeclaration => match c {
            '-' => slf.state = State::CommentStart,
            '[' => slf.state = State::CdataStart,
            _ => {
                slf.dtd_depth = 1;
                return redispatch(slf, State::Dtd, c);
            }
        },

        State::CommentStart => {
            if c == '-' {
                slf.comment.clear();
                slf.state = State::Comment;
            } else {
                // `<!-` not followed by `-` is not a comment, skip it like a
                // declaration
                slf.dtd_depth = 1;
                return redispatch(slf, State::Dtd, c);
            }
        }

        State::Comment => {
            slf.comment.push(c);
            if slf.comment.ends_with("-->") {
                finish_comment(slf);
            }
        }

        State::CdataStart => {
            // c is the `C` of `CDATA[`, five more fixed characters follow
            slf.cdata_skip = 5;
            slf.state = State::CdataSkip;
        }

        State::CdataSkip => {
            slf.cdata_skip -= 1;
            if slf.cdata_skip == 0 {
                slf.state = State::CdataSection;
            }
        }

        State::CdataSection => {
            if c == '\r' {
                slf.enter_carriage_return();
            } else {
                slf.buffer.push(c);
                if slf.buffer.ends_with("]]>") {
                    finish_cdata(slf)?;
                }
            }
        }

        State::Dtd => match c {
            '<' => slf.dtd_depth += 1,
            '>' => {
                slf.dtd_depth -= 1;
                if slf.dtd_depth == 0 {
                    slf.state = after_construct(slf);
                }
            }
            _ => {}
        },

        State::ProcessingInstruction => {
            if c == '>' {
                slf.state = after_construct(slf);
            }
        }

        State::Entity => {
            if c == '#' {
                slf.state = State::EntityNumeric;
            } else {
                return redispatch(slf, State::EntityNamed, c);
            }
        }

        State::EntityNumeric => {
            if c == 'x' {
                slf.state = State::EntityHex;
            } else {
                return redispatch(slf, State::EntityDecimal, c);
            }
        }

        State::EntityDecimal => {
            if c == ';' {
                finish_numeric_entity(slf, 10);
            } else {
                slf.entity.push(c);
            }
        }

        State::EntityHex => {
            if c == ';' {
                finish_numeric_entity(slf, 16);
            } else {
                slf.entity.push(c);
            }
        }

        State::EntityNamed => match c {
            ';' => match decode_named_entity(&slf.entity) {
                Some(decoded) => {
                    slf.buffer.push(decoded);
                    slf.entity.clear();
                    slf.exit_sub_state();
                }
                None => {
                    return Err(Error::UnresolvedEntity {
                        entity: std::mem::take(&mut slf.entity),
                    });
                }
            },
            c if c.is_ascii_alphanumeric() => slf.entity.push(c),
            _ => {
                // not an entity after all: keep the reference as literal
                // text, then let the interrupted state see this character
                slf.buffer.push('&');
                slf.buffer.push_str(&slf.entity);
                slf.entity.clear();
                slf.exit_sub_state();
                return consume(slf, c);
            }
        },

        State::CarriageReturn => {
            slf.buffer.push('\n');
            slf.exit_sub_state();
            if c != '\n' {
                return consume(slf, c);
            }
        }
    }

    Ok(())
}

/// Whitespace as XML defines it for markup, the `S` production. Narrower
/// than `char::is_whitespace`: exotic Unicode whitespace inside a tag is
/// name material, not a separator.
fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Re-handle the current character in a different state.
///
/// The sub-machine entry states and the literal-entity fallback use this the
/// way a hand-written lexer would fall through to another case.
fn redispatch<H: Handler>(slf: &mut Lexer<H>, state: State, c: char) -> Result<(), Error> {
    slf.state = state;
    consume(slf, c)
}

/// Where the machine goes after a construct-completing `>`: back to text
/// inside an element, back to idling once the document root has closed.
fn after_construct<H: Handler>(slf: &Lexer<H>) -> State {
    if slf.depth == 0 {
        State::AwaitingTag
    } else {
        State::Text
    }
}

fn start_tag<H: Handler>(slf: &mut Lexer<H>) {
    let name = slf.flush_tag();
    slf.tag_name.clear();
    slf.tag_name.push_str(&name);
    slf.depth += 1;
    slf.handler.start_element(name);
}

fn close_tag<H: Handler>(slf: &mut Lexer<H>) -> Result<(), Error> {
    let name = slf.flush_tag();
    slf.handler.close_element(name)?;
    slf.depth = slf.depth.saturating_sub(1);
    Ok(())
}

/// `/>` seen: the current element closes without a close tag. The name comes
/// from the lexer's current-tag field since the buffer was flushed when the
/// name completed.
fn self_close<H: Handler>(slf: &mut Lexer<H>) -> Result<(), Error> {
    slf.handler.end_of_attributes();
    let name = slf.tag_name.clone();
    slf.handler.close_element(name)?;
    slf.depth = slf.depth.saturating_sub(1);
    Ok(())
}

fn flush_attribute_name<H: Handler>(slf: &mut Lexer<H>) -> Result<(), Error> {
    let name = slf.flush_tag();
    slf.handler.attribute_name(name)
}

fn flush_attribute_value<H: Handler>(slf: &mut Lexer<H>) -> Result<(), Error> {
    let value = slf.flush_value();
    slf.handler.attribute_value(value)
}

fn finish_comment<H: Handler>(slf: &mut Lexer<H>) {
    slf.comment.truncate(slf.comment.len() - "-->".len());
    let content = slf.comment.trim().to_owned();
    slf.comment.clear();
    slf.handler.comment_node(content);
    slf.state = after_construct(slf);
}

fn finish_cdata<H: Handler>(slf: &mut Lexer<H>) -> Result<(), Error> {
    slf.buffer.truncate(slf.buffer.len() - "]]>".len());
    let content = slf.buffer.trim().to_owned();
    slf.buffer.clear();
    slf.handler.cdata_node(content)?;
    slf.state = after_construct(slf);
    Ok(())
}

fn finish_numeric_entity<H: Handler>(slf: &mut Lexer<H>, radix: u32) {
    let decoded = decode_numeric_entity(&slf.entity, radix);
    slf.buffer.push(decoded);
    slf.entity.clear();
    slf.exit_sub_state();
}
