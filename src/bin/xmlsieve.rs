//! Stream selected elements out of an XML document as NDJSON.
//!
//! One JSON object per emitted element, one element per line:
//!
//! ```sh
//! xmlsieve -c item feed.xml | jq .tag
//! curl -s https://example.invalid/feed.xml | xmlsieve -c item -
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use anyhow::Context;
use argh::FromArgs;

use xmlsieve::{ElementStream, Lexer, LexerOptions, Parser};

/// Read XML, write the selected elements as newline-delimited JSON.
#[derive(FromArgs)]
struct Cli {
    /// tag name to emit with its whole subtree when it closes. Can be given
    /// multiple times.
    #[argh(option, short = 'c', long = "collect")]
    collect: Vec<String>,

    /// tag name to emit as soon as its attributes are known, without
    /// content. Can be given multiple times.
    #[argh(option, short = 'a', long = "attribute-only")]
    attribute_only: Vec<String>,

    /// trace every character the lexer sees to stderr
    #[argh(switch, short = 'd')]
    dump: bool,

    /// keep whitespace-only text nodes and exact spacing
    #[argh(switch)]
    keep_whitespace: bool,

    /// input file, or - for stdin
    #[argh(positional)]
    input: String,

    /// output file, or - for stdout
    #[argh(positional)]
    output: Option<String>,
}

/// Logger for `--dump`: everything straight to stderr, no timestamps, since
/// the trace lines already carry their own position info.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.target().starts_with("xmlsieve")
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> anyhow::Result<()> {
    let cli: Cli = argh::from_env();

    if cli.collect.is_empty() && cli.attribute_only.is_empty() {
        anyhow::bail!("nothing selected, pass --collect or --attribute-only at least once");
    }

    if cli.dump {
        log::set_logger(&LOGGER)?;
        log::set_max_level(log::LevelFilter::Trace);
    }

    let input: Box<dyn Read> = match cli.input.as_str() {
        "-" => Box::new(io::stdin()),
        path => Box::new(File::open(path).with_context(|| format!("cannot open {}", path))?),
    };
    let output: Box<dyn Write> = match cli.output.as_deref() {
        None | Some("-") => Box::new(io::stdout()),
        Some(path) => Box::new(File::create(path).with_context(|| format!("cannot create {}", path))?),
    };
    let mut output = BufWriter::new(output);

    let mut parser = Parser::new();
    for tag in &cli.collect {
        parser.emit_on_close(tag);
    }
    for tag in &cli.attribute_only {
        parser.emit_on_attributes(tag);
    }
    let lexer = Lexer::new_with_options(
        parser,
        LexerOptions {
            ignore_whitespace: !cli.keep_whitespace,
            dump: cli.dump,
        },
    );

    for element in ElementStream::new(input, lexer) {
        let element = element?;
        serde_json::to_writer(&mut output, &element)?;
        output.write_all(b"\n")?;
    }
    output.flush()?;

    Ok(())
}
