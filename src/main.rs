use std::error::Error;
use std::io::{self, BufRead, Write};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod draw_config;
mod draw_engine;
mod eligible_pool;
mod error;
mod prize;
mod summary;

use crate::draw_engine::{DrawEngine, DrawOutcome};
use crate::error::DrawError;

#[derive(Debug, Default, PartialEq)]
struct Options {
    config_path: Option<String>,
    draw_all: bool,
    seed: Option<u64>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, Box<dyn Error>> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--all" => options.draw_all = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                options.seed = Some(value.parse::<u64>().map_err(|e| format!("invalid seed {value:?}: {e}"))?);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown option {arg}").into()),
            _ => options.config_path = Some(arg),
        }
    }
    Ok(options)
}

enum Command {
    Draw(Option<String>),
    Status,
    Reset,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    match head {
        "" | "d" => Some(Command::Draw(Some(rest.trim()).filter(|s| !s.is_empty()).map(String::from))),
        "s" => Some(Command::Status),
        "r" => Some(Command::Reset),
        "q" => Some(Command::Quit),
        _ => None,
    }
}

/// Draws for `prize`, or for the first prize still open. Returns false once nothing is left.
fn draw_step(engine: &mut DrawEngine, prize: Option<&str>) -> Result<bool, DrawError> {
    let name = match prize {
        Some(name) => name.to_string(),
        None => match engine.next_open_prize() {
            Some(p) => p.name().to_string(),
            None => {
                println!("All prizes have been drawn.");
                return Ok(false);
            }
        },
    };
    match engine.draw_once(&name)? {
        DrawOutcome::Winner(n) => {
            let left = engine.remaining(&name).unwrap_or(0);
            println!("{name}: {n}  ({left} left)");
        }
        DrawOutcome::AlreadyComplete => println!("{name} is already complete."),
    }
    Ok(!engine.is_finished())
}

fn run_interactive(engine: &mut DrawEngine) -> Result<(), Box<dyn Error>> {
    if let Some((lo, hi)) = engine.pool_bounds() {
        println!("Tickets {lo}..={hi}. Enter/d [prize] draw, s status, r reset, q quit.");
    }
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        match parse_command(&line?) {
            Some(Command::Draw(prize)) => match draw_step(engine, prize.as_deref()) {
                Ok(_) => {}
                Err(e @ DrawError::UnknownPrize(_)) => println!("{e}"),
                Err(e @ DrawError::PoolExhausted { .. }) => {
                    error!("{e}");
                    return Err(e.into());
                }
            },
            Some(Command::Status) => print!("{}", summary::render_progress(engine)),
            Some(Command::Reset) => {
                engine.reset();
                println!("All draws cleared.");
            }
            Some(Command::Quit) => break,
            None => println!("unknown command"),
        }
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    let options = parse_args(std::env::args().skip(1))?;
    let path = draw_config::locate_draw_config(options.config_path.as_deref())
        .ok_or("no draw_config.json found (pass a path or set DRAW_CONFIG)")?;
    let config = draw_config::read_draw_config(&path)?;
    info!(path = %path.display(), "loaded draw configuration");

    let mut engine = match options.seed {
        Some(seed) => DrawEngine::seeded(seed),
        None => DrawEngine::new(),
    };
    engine.set_configuration(config.range_start, config.range_end, config.prizes)?;

    if options.draw_all {
        while draw_step(&mut engine, None)? {}
    } else {
        run_interactive(&mut engine)?;
    }

    print!("{}", summary::render_results(&engine));
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{e}");
        eprintln!("Draw failed: {e}");
        std::process::exit(1);
    }
}
