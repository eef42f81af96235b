use anyhow::Context;
use clap::Parser;
use ocean_notes::application::Session;
use ocean_notes::cli::{Cli, Flow, Repl};
use ocean_notes::domain::{Clock, SharedClock, SystemClock};
use ocean_notes::error::NotesError;
use ocean_notes::infrastructure::{sample_notes, Config};
use std::io::{self, BufRead, IsTerminal, Write};
use std::rc::Rc;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<NotesError>()
                .map_or(1, NotesError::exit_code);
            std::process::exit(code);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    cli.apply_overrides(&mut config)?;

    let clock: SharedClock = Rc::new(SystemClock);
    let mut session = Session::new(clock.clone(), config.debounce_window());
    if config.seed_samples {
        session.seed(sample_notes(clock.now()));
    }

    let mut repl = Repl::new(session, config, io::stdout());

    match &cli.script {
        Some(path) => {
            let script = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read script {}", path.display()))?;
            for (index, line) in script.lines().enumerate() {
                let flow = repl
                    .execute_line(line)
                    .with_context(|| format!("line {}", index + 1))?;
                if flow == Flow::Quit {
                    break;
                }
            }
            Ok(())
        }
        None => interactive(&mut repl),
    }
}

/// Read commands from stdin, reporting errors without ending the session
fn interactive<W: Write>(repl: &mut Repl<W>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    if prompt {
        println!("Ocean Notes - type 'help' for commands");
    }

    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            print!("> ");
            io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match repl.execute_line(&line?) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => eprintln!("Error: {}", e.display_with_suggestions()),
        }
    }
    Ok(())
}
