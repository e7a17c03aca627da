use std::fs;

use ansi_term::Color;
use clap::Parser;
use muldiv::evaluate;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};

/// muldiv evaluates chains of non-negative integers combined with `*` and
/// `/`, left to right.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells muldiv to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// The expression to evaluate. When omitted, an interactive session
    /// starts.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.contents {
        Some(contents) if args.file => {
            let text = fs::read_to_string(&contents).unwrap_or_else(|_| {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                std::process::exit(1);
            });

            for line in text.lines() {
                eval_line(line);
            }
        },
        Some(contents) => eval_line(&contents),
        None => repl(),
    }
}

/// Evaluates one line, printing the result to stdout or the error to
/// stderr. Blank lines are skipped without being evaluated, and a bad line
/// never stops the caller from feeding further lines.
fn eval_line(line: &str) {
    if line.trim().is_empty() {
        return;
    }

    match evaluate(line) {
        Ok(result) => println!("{result}"),
        Err(e) => eprintln!("{e}"),
    }
}

/// Runs the interactive `calc>` loop until end of input.
fn repl() {
    let mut line_editor = Reedline::create();
    let prompt = DefaultPrompt::new(DefaultPromptSegment::Basic("calc".to_string()),
                                    DefaultPromptSegment::Empty);

    loop {
        match line_editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => {
                if line.trim().is_empty() {
                    continue;
                }

                match evaluate(&line) {
                    Ok(result) => println!("{result}"),
                    Err(e) => println!("{}", Color::Red.paint(e.to_string())),
                }
            },
            Ok(Signal::CtrlC | Signal::CtrlD) => break,
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            },
        }
    }
}
