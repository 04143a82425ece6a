//! The `flashdeck study` command.
//!
//! Reads one command per line from stdin and redraws the card after each.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::warn;

use flashdeck_core::{Action, Judgment, Session, SessionState};

use crate::GlobalOpts;

const BAR_WIDTH: usize = 20;

const HELP: &str = "\
Commands:
  f, <enter>  flip the card
  n           next card
  p           previous card
  y, +        I knew it (+1)
  x, -        I did not know it (-1)
  r           restart from the first card
  a           add cards (not available yet)
  ?           show this help
  q           quit";

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Action(Action),
    AddCards,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let input = match line.trim().to_lowercase().as_str() {
        "" | "f" | "flip" => Input::Action(Action::Flip),
        "n" | "next" => Input::Action(Action::Next),
        "p" | "prev" => Input::Action(Action::Prev),
        "y" | "+" | "known" => Input::Action(Action::Judge(Judgment::Known)),
        "x" | "-" | "unknown" => Input::Action(Action::Judge(Judgment::Unknown)),
        "r" | "restart" => Input::Action(Action::Restart),
        "a" | "add" => Input::AddCards,
        "?" | "h" | "help" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => return None,
    };
    Some(input)
}

pub async fn execute(opts: &GlobalOpts) -> Result<()> {
    let config = super::settings(opts)?;
    let loader = super::loader(&config)?;

    let mut state = SessionState::new();
    render(&state, &mut io::stdout())?;

    let resolved = loader.resolve().await;
    state.resolve(Session::new(resolved.deck, loader.store(), loader.key()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut state, stdin.lock(), &mut stdout.lock())
}

/// Drive the session from `input` until `q` or end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily and end up as unknown
/// commands.
fn run<R: BufRead, W: Write>(state: &mut SessionState, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "Type ? for help.")?;
    render(state, out)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        match parse_input(&line) {
            Some(Input::Quit) => break,
            Some(Input::Action(action)) => {
                if let Err(e) = state.dispatch(action) {
                    if !e.state_was_applied() {
                        return Err(e.into());
                    }
                    warn!(error = %e, "score change kept in memory only");
                }
            }
            Some(Input::AddCards) => writeln!(out, "Adding cards is not available yet.")?,
            Some(Input::Help) => writeln!(out, "{HELP}")?,
            None => {
                writeln!(out, "Unknown command: {}", line.trim())?;
                continue;
            }
        }
        render(state, out)?;
    }

    if let Some(session) = state.session() {
        writeln!(out, "Stopped at card {}.", session.progress())?;
    }
    Ok(())
}

fn render<W: Write>(state: &SessionState, out: &mut W) -> Result<()> {
    let Some(session) = state.session() else {
        writeln!(out, "Loading...")?;
        return Ok(());
    };

    let card = session.current();
    writeln!(out)?;
    if session.is_flipped() {
        writeln!(out, "[{} pts] {}", card.points, card.answer)?;
    } else {
        writeln!(out, "[#{}] {}", session.index() + 1, card.question)?;
    }

    let progress = session.progress();
    let filled = ((progress.fraction() * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    writeln!(
        out,
        "[{}{}] {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress
    )?;
    out.flush()?;
    Ok(())
}
