//! logo2-drv - Interpreter driver
//!
//! Orchestrates the pipeline (tokenize → parse → evaluate), binds the
//! native functions, and runs the REPL. The exit-status contract: 0 on a
//! clean exit, 1 when a script file fails to parse, and whatever code a
//! script passed to `quit`.

mod natives;

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use tracing::debug;

use logo2_eval::{Exit, Interpreter, Value};
use logo2_par::Parser;
use logo2_turtle::{CommandSink, Turtle, TurtleCommand};

/// Driver options, filled from the command line.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Dump the token stream of each input before parsing.
    pub emit_tokens: bool,
    /// Dump the AST of each input before evaluation.
    pub emit_ast: bool,
}

/// What running an input produced.
#[derive(Debug)]
pub enum Outcome {
    /// Evaluation finished; the value is the last statement's (null when
    /// a runtime error was already reported).
    Completed(Value),
    /// Parse errors were reported.
    ParseFailed,
    /// Script requested application exit.
    Quit(i32),
}

/// Forwards every turtle command to the log; stands in for the live
/// renderer connection.
struct TraceSink;

impl CommandSink for TraceSink {
    fn add_command(&mut self, turtle: &Turtle, cmd: &TurtleCommand) {
        let pose = turtle.save();
        debug!(?cmd, x = pose.x, y = pose.y, "turtle command");
    }
}

/// An interpreter session: one parser (whose symbol tables accumulate
/// across inputs), one evaluator, one turtle.
pub struct Session {
    parser: Parser,
    interp: Interpreter,
    turtle: Rc<RefCell<Turtle>>,
    options: Options,
    /// Next line number handed to the tokenizer; grows per REPL input.
    line: u32,
}

impl Session {
    pub fn new(options: Options) -> Self {
        let turtle = Rc::new(RefCell::new(Turtle::new()));
        turtle.borrow_mut().set_notify(Box::new(TraceSink));

        let mut interp = Interpreter::new();
        natives::register_defaults(&mut interp, &turtle);

        Self {
            parser: Parser::new(),
            interp,
            turtle,
            options,
            line: 1,
        }
    }

    /// The shared turtle, for hosts that consume the command buffer.
    pub fn turtle(&self) -> Rc<RefCell<Turtle>> {
        Rc::clone(&self.turtle)
    }

    /// Parses and runs a script file.
    pub fn run_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<Outcome> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        debug!(path = %path.display(), bytes = text.len(), "running script");
        Ok(self.run_source(&text, 1))
    }

    /// Parses and runs one REPL input line.
    pub fn run_line(&mut self, text: &str) -> Outcome {
        let line = self.line;
        self.line += 1 + text.matches('\n').count() as u32;
        self.run_source(text, line)
    }

    /// The full pipeline over one source string. Parse errors and runtime
    /// errors are printed here, in their reporting formats.
    fn run_source(&mut self, text: &str, line: u32) -> Outcome {
        if self.options.emit_tokens {
            for token in self.parser.tokenize_all(text) {
                println!("{:?} {:?} {}", token.kind, token.lexeme, token.span);
            }
        }

        let program = match self.parser.parse_with_line(text, line) {
            Ok(program) => program,
            Err(err) => {
                println!("{err}");
                for recovered in self.parser.errors() {
                    println!("{recovered}");
                }
                return Outcome::ParseFailed;
            }
        };
        if self.parser.has_errors() {
            for err in self.parser.errors() {
                println!("{err}");
            }
            return Outcome::ParseFailed;
        }

        if self.options.emit_ast {
            println!("{program:#?}");
        }

        debug!(statements = program.stmts.len(), "evaluating");
        match self.interp.eval(&program) {
            Ok(value) => Outcome::Completed(value),
            // a top-level return carries its value out like a result
            Err(Exit::Return(value)) => Outcome::Completed(value),
            Err(Exit::Break) | Err(Exit::Continue) => Outcome::Completed(Value::Null),
            Err(Exit::Quit(code)) => Outcome::Quit(code),
            Err(Exit::Error(err)) => {
                println!("{err}");
                Outcome::Completed(Value::Null)
            }
        }
    }

    /// The read-eval-print loop. Returns the process exit code.
    pub fn repl(&mut self) -> anyhow::Result<i32> {
        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            print!(">> ");
            io::stdout().flush().ok();

            input.clear();
            let read = stdin.lock().read_line(&mut input).context("reading stdin")?;
            if read == 0 {
                return Ok(0); // EOF
            }
            let text = input.trim();
            if text.is_empty() {
                self.line += 1;
                continue;
            }

            match self.run_line(text) {
                Outcome::Completed(value) if !value.is_null() => println!("{value}"),
                Outcome::Completed(_) | Outcome::ParseFailed => {}
                Outcome::Quit(code) => return Ok(code),
            }
        }
    }
}

/// Runs the driver: optional script first, then the REPL (unless
/// suppressed). Returns the process exit code.
pub fn run(script: Option<&Path>, no_repl: bool, options: Options) -> anyhow::Result<i32> {
    let mut session = Session::new(options);

    if let Some(path) = script {
        match session.run_file(path)? {
            Outcome::ParseFailed => return Ok(1),
            Outcome::Quit(code) => return Ok(code),
            Outcome::Completed(value) => {
                if !value.is_null() {
                    println!("{value}");
                }
            }
        }
    }

    if no_repl {
        return Ok(0);
    }
    session.repl()
}
