//! Interactive REPL for trying annotations.
//!
//! Each input line is stripped and shown with its entities. `:restore TEXT`
//! then restores those entities into TEXT, standing in for the output of
//! the external transformation.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use netag_foundation::{Error, ErrorKind, Result};
use netag_placeholder::{FallbackPolicy, LineStatus, PlaceholderOptions, SentenceRecord};
use std::io::{self, Write};

/// What the REPL should do after evaluating one input.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text and keep going.
    Print(String),
    /// Leave the REPL.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Placeholder configuration used for every line.
    options: PlaceholderOptions,

    /// The most recently stripped line.
    last: Option<SentenceRecord>,

    /// Number of lines stripped so far.
    line_count: usize,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new(options: PlaceholderOptions) -> Result<Self> {
        let editor = RustylineEditor::with_options(&options)?;
        Ok(Self::with_editor(editor, options))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E, options: PlaceholderOptions) -> Self {
        Self {
            editor,
            options,
            last: None,
            line_count: 0,
            show_banner: true,
            prompt: "ne> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the most recently stripped line.
    #[must_use]
    pub fn last_record(&self) -> Option<&SentenceRecord> {
        self.last.as_ref()
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.kind.is_markup() || matches!(e.kind, ErrorKind::InvalidArgument(_)) => {
                    print_error(&e);
                }
                Err(e) => return Err(e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input)? {
            Outcome::Print(text) => println!("{text}"),
            Outcome::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, `:restore` before any line was
    /// stripped, or a rejected line.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let trimmed = input.trim();
        if !trimmed.starts_with(':') {
            return self.strip(input);
        }

        let (command, argument) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        match command {
            ":restore" | ":r" => {
                let record = self.last.as_ref().ok_or_else(|| {
                    Error::new(ErrorKind::InvalidArgument(
                        "no line has been stripped yet".to_string(),
                    ))
                })?;
                let restored = record.restore_all([argument.trim()]);
                Ok(Outcome::Print(restored.concat()))
            }
            ":entities" | ":e" => Ok(Outcome::Print(
                self.last
                    .as_ref()
                    .map_or_else(|| "[]".to_string(), |r| r.entities().to_string()),
            )),
            ":reject" => {
                self.options.fallback = FallbackPolicy::Reject;
                Ok(Outcome::Print("malformed lines are now rejected".to_string()))
            }
            ":pass" => {
                self.options.fallback = FallbackPolicy::PassThrough;
                Ok(Outcome::Print("malformed lines now pass through".to_string()))
            }
            ":help" | ":h" => Ok(Outcome::Print(HELP.to_string())),
            ":quit" | ":q" => Ok(Outcome::Quit),
            other => Err(Error::new(ErrorKind::InvalidArgument(format!(
                "unknown command: {other} (try :help)"
            )))),
        }
    }

    fn strip(&mut self, input: &str) -> Result<Outcome> {
        self.line_count += 1;
        let record = SentenceRecord::parse_at(self.line_count, input, &self.options)?;

        let mut text = format!(
            "clean:    {}\nentities: {}",
            record.clean_line(),
            record.entities()
        );
        if record.status() == LineStatus::PassedThrough {
            text.push_str("\n(malformed markup; line passed through unchanged)");
        }

        self.last = Some(record);
        Ok(Outcome::Print(text))
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mnetag\x1b[0m {}", env!("CARGO_PKG_VERSION"));
        println!("Type an annotated line to strip it. :help lists commands, Ctrl+D exits.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

const HELP: &str = "\
LINE             strip LINE and show its clean text and entities
:restore TEXT    restore the last line's entities into TEXT (:r)
:entities        show the last line's entities (:e)
:reject          reject malformed lines with an error
:pass            pass malformed lines through unchanged
:help            show this help (:h)
:quit            exit (:q)";
