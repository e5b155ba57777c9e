//! An example of using a custom handler to pull single attributes out of a
//! document without building any trees.
//!
//! The [`xmlsieve::Parser`] with `emit_on_attributes` would do this too, but
//! it clones tag names and attribute lists per element. A hand-written
//! handler allocates nothing beyond the matched values.
//!
//! ```text
//! printf '<feed><link href="https://example.com/a"/></feed>' | cargo run --example=custom_handler
//! ```
//!
//! Output:
//!
//! ```text
//! link: https://example.com/a
//! ```
use std::io::{self, Read};

use xmlsieve::{Error, Handler, Lexer};

#[derive(Default)]
struct LinkExtractor {
    in_link: bool,
    current_attribute_is_href: bool,
    links: Vec<String>,
}

impl Handler for LinkExtractor {
    fn start_element(&mut self, tag: String) {
        self.in_link = tag == "link";
        self.current_attribute_is_href = false;
    }

    fn attribute_name(&mut self, name: String) -> Result<(), Error> {
        self.current_attribute_is_href = self.in_link && name == "href";
        Ok(())
    }

    fn attribute_value(&mut self, value: String) -> Result<(), Error> {
        if self.current_attribute_is_href {
            self.links.push(value);
            self.current_attribute_is_href = false;
        }
        Ok(())
    }

    fn end_of_attributes(&mut self) {}

    fn text_node(&mut self, _: String) -> Result<(), Error> {
        Ok(())
    }

    fn cdata_node(&mut self, _: String) -> Result<(), Error> {
        Ok(())
    }

    fn comment_node(&mut self, _: String) {}

    fn close_element(&mut self, _: String) -> Result<(), Error> {
        Ok(())
    }

    fn end_of_file(&mut self) {}
}

fn main() -> io::Result<()> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;

    let mut lexer = Lexer::new(LinkExtractor::default());
    if let Err(e) = lexer.write(&input) {
        eprintln!("parse failed: {}", e);
        std::process::exit(1);
    }
    lexer.finish();

    for link in lexer.into_handler().links {
        println!("link: {}", link);
    }

    Ok(())
}

#[test]
fn basic() {
    let mut lexer = Lexer::new(LinkExtractor::default());
    lexer
        .write(concat!(
            "<feed><link href=\"https://example.com/a\"/>",
            "<entry><link href=\"https://example.com/b\" rel=\"alternate\"/></entry></feed>",
        ))
        .unwrap();
    lexer.finish();

    assert_eq!(
        lexer.into_handler().links,
        vec![
            "https://example.com/a".to_owned(),
            "https://example.com/b".to_owned(),
        ]
    );
}
