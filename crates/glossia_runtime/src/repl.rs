//! The interactive REPL.
//!
//! Plain text parses in the current language; directives start with `:`.
//! `execute` is separated from the terminal loop so the command handling is
//! testable without a TTY.

use glossia_foundation::{Result, SemanticNode};
use glossia_parser::SemanticParser;
use glossia_stdlib::standard_parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Outcome of executing one REPL line.
#[derive(Debug, PartialEq, Eq)]
pub enum LineResult {
    /// Text to print.
    Output(String),
    /// Nothing to print (blank line).
    Quiet,
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl {
    parser: SemanticParser,
    language: String,
    last_node: Option<SemanticNode>,
}

impl Repl {
    /// Creates a REPL over the standard languages, starting in English.
    ///
    /// # Errors
    ///
    /// Propagates standard-language registration failures.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parser(standard_parser()?))
    }

    /// Creates a REPL over a custom parser.
    #[must_use]
    pub fn with_parser(parser: SemanticParser) -> Self {
        Self {
            parser,
            language: "en".to_string(),
            last_node: None,
        }
    }

    /// The current input language.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Runs the terminal loop until quit or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error when the line editor cannot be initialized or read.
    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new()
            .map_err(|err| glossia_foundation::Error::internal(err.to_string()))?;

        println!("glossia {} — multilingual command parser", env!("CARGO_PKG_VERSION"));
        println!("type :help for directives, :quit to leave");

        loop {
            let prompt = format!("{}> ", self.language);
            match editor.readline(&prompt) {
                Ok(line) => {
                    let _ = editor.add_history_entry(&line);
                    match self.execute(&line) {
                        LineResult::Output(text) => println!("{text}"),
                        LineResult::Quiet => {}
                        LineResult::Quit => break,
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("(interrupted — :quit to leave)");
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    return Err(glossia_foundation::Error::internal(err.to_string()));
                }
            }
        }

        Ok(())
    }

    /// Executes one line: a `:` directive or command text to parse.
    pub fn execute(&mut self, line: &str) -> LineResult {
        let line = line.trim();
        if line.is_empty() {
            return LineResult::Quiet;
        }

        if let Some(directive) = line.strip_prefix(':') {
            return self.directive(directive);
        }

        match self.parser.parse(line, &self.language) {
            Ok(node) => {
                let text = node.to_string();
                self.last_node = Some(node);
                LineResult::Output(text)
            }
            Err(err) => LineResult::Output(format!("error: {err}")),
        }
    }

    fn directive(&mut self, directive: &str) -> LineResult {
        let mut parts = directive.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit" | "q"), _) => LineResult::Quit,
            (Some("help" | "h"), _) => LineResult::Output(HELP.to_string()),
            (Some("languages" | "langs"), _) => {
                LineResult::Output(self.parser.registry().registered_languages().join(" "))
            }
            (Some("lang"), Some(code)) => {
                if self.parser.registry().is_registered(code) {
                    self.language = code.to_string();
                    LineResult::Output(format!("language: {code}"))
                } else {
                    LineResult::Output(format!("error: language not loaded: {code}"))
                }
            }
            (Some("lang"), None) => LineResult::Output(format!("language: {}", self.language)),
            (Some("to"), Some(code)) => match &self.last_node {
                Some(node) => match self.parser.render(node, code) {
                    Ok(surface) => LineResult::Output(surface),
                    Err(err) => LineResult::Output(format!("error: {err}")),
                },
                None => LineResult::Output("error: nothing parsed yet".to_string()),
            },
            _ => LineResult::Output(format!("error: unknown directive :{directive}")),
        }
    }
}

const HELP: &str = "\
directives:
  :lang <code>   switch input language
  :lang          show current language
  :languages     list registered languages
  :to <code>     render the last parsed command in another language
  :help          this text
  :quit          leave";
