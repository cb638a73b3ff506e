//! Terminal match-three runner (default binary).
//!
//! Line-oriented: the board is printed, then moves are read from stdin as
//! `row col row col`. Other commands: `hint`, `board`, `help`, `quit`.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use match_three::config::CliConfig;
use match_three::core::{ColorSource, Game, MoveResult};
use match_three::effect_log::EffectLog;
use match_three::term::{encode_board_into, encode_result_into};
use match_three::types::{Color, Position};

const HELP: &str = "commands: <row> <col> <row> <col> | hint | board | help | quit";

enum Command {
    Move(Position, Position),
    Hint,
    Board,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Ok(None),
        ["q"] | ["quit"] | ["exit"] => Ok(Some(Command::Quit)),
        ["hint"] => Ok(Some(Command::Hint)),
        ["board"] => Ok(Some(Command::Board)),
        ["help"] | ["?"] => Ok(Some(Command::Help)),
        [r1, c1, r2, c2] => {
            let n = |s: &str| {
                s.parse::<i32>()
                    .map_err(|_| anyhow!("not a coordinate: {}", s))
            };
            Ok(Some(Command::Move(
                Position::new(n(*r1)?, n(*c1)?),
                Position::new(n(*r2)?, n(*c2)?),
            )))
        }
        _ => Err(anyhow!("unrecognized input; {}", HELP)),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = CliConfig::from_env().apply_args(&args)?;
    debug!(?config, "starting");

    run(&config)
}

fn run(config: &CliConfig) -> Result<()> {
    let mut log = match &config.log_path {
        Some(path) => Some(EffectLog::open(path)?),
        None => None,
    };

    let source = ColorSource::new(config.seed);
    let mut game = Game::new(source, config.width, config.height, config.engine)?;

    let settled = game.initial_scan()?;
    info!(effects = settled.effects.len(), "initial board settled");
    if let Some(log) = log.as_mut() {
        log.record(0, &settled.effects)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf: Vec<u8> = Vec::with_capacity(4096);

    encode_board_into(game.board(), &mut buf)?;
    out.write_all(&buf)?;
    writeln!(out, "{}", HELP)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        buf.clear();
        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Board => {
                encode_board_into(game.board(), &mut buf)?;
            }
            Command::Hint => match game.legal_moves().first() {
                Some((a, b)) => writeln!(out, "try {} {} {} {}", a.row, a.col, b.row, b.col)?,
                None => writeln!(out, "no legal moves left")?,
            },
            Command::Move(first, second) => {
                let result = game.apply_move(first, second)?;
                if let Some(log) = log.as_mut() {
                    log.record(game.moves_applied(), &result.effects)?;
                }
                report(config, &result, &mut buf)?;
                if result.is_legal() && !game.has_legal_move() {
                    buf.extend_from_slice(b"no legal moves left\r\n");
                }
            }
        }
        out.write_all(&buf)?;
        out.flush()?;
    }

    info!(moves = game.moves_applied(), "session finished");
    Ok(())
}

fn report(config: &CliConfig, result: &MoveResult<Color>, buf: &mut Vec<u8>) -> Result<()> {
    if config.json {
        serde_json::to_writer(&mut *buf, result)?;
        buf.push(b'\n');
        return Ok(());
    }
    encode_result_into(result, buf)
}
