use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use fetch_logging::fetch_info;
use vtu_core::{update, AppState, Msg};

use crate::effects::EffectRunner;
use crate::render;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// One unit of input for the main loop: either a core message or an
/// app-level command handled outside the state machine.
pub enum Input {
    Core(Msg),
    Show,
    Help,
    Unknown(String),
    Quit,
}

pub fn run() -> io::Result<()> {
    let base_url =
        std::env::var("VTU_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
    fetch_info!("using result service at {base_url}");

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    let runner = EffectRunner::new(&base_url, input_tx.clone());
    spawn_stdin_reader(input_tx);

    let mut out = io::stdout();
    render::print_banner(&mut out, &base_url)?;

    let mut state = AppState::new();
    while let Ok(input) = input_rx.recv() {
        match input {
            Input::Quit => break,
            Input::Help => render::print_help(&mut out)?,
            Input::Unknown(line) => {
                writeln!(out, "unrecognized command: {line} (try `help`)")?;
            }
            Input::Show => render::render(&mut out, &state.view())?,
            Input::Core(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
                if state.consume_dirty() {
                    render::render(&mut out, &state.view())?;
                }
            }
        }
    }

    Ok(())
}

/// Reads stdin line by line and turns each line into an [`Input`].
fn spawn_stdin_reader(input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let input = parse_command(&line);
            let quit = matches!(input, Input::Quit);
            if input_tx.send(input).is_err() || quit {
                break;
            }
        }
        let _ = input_tx.send(Input::Quit);
    });
}

fn parse_command(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Core(Msg::NoOp);
    }
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    match command {
        "gen" => parse_generate(rest),
        "usns" => Input::Core(Msg::UsnInputChanged(rest.to_string())),
        "subject" => Input::Core(Msg::SubjectCodeChanged(rest.to_string())),
        "index" => Input::Core(Msg::IndexUrlChanged(rest.to_string())),
        "result" => Input::Core(Msg::ResultUrlChanged(rest.to_string())),
        "fetch" => Input::Core(Msg::FetchClicked),
        "abort" => Input::Core(Msg::AbortClicked),
        "show" => Input::Show,
        "help" => Input::Help,
        "quit" | "exit" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

fn parse_generate(rest: &str) -> Input {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(prefix), Some(start), Some(end)) => {
            match (start.parse::<u32>(), end.parse::<u32>()) {
                (Ok(start), Ok(end)) => Input::Core(Msg::GenerateClicked {
                    prefix: prefix.to_string(),
                    start,
                    end,
                }),
                _ => Input::Unknown(format!("gen {rest}")),
            }
        }
        _ => Input::Unknown(format!("gen {rest}")),
    }
}
