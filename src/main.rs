//! Console harness: play dice-duel from a terminal.
//!
//! Reads one chat-style command per line from stdin and prints every
//! announcement to stdout, prefixed with its room.
//!
//! ```text
//! /start
//! /join 1 Alice
//! /join 2 Bob
//! /roll 1
//! @7 /join 3 Carol      # room 7 instead of the default room 0
//! /quit
//! ```

use std::io::{self, BufRead, Write};

use clap::Parser;
use dice_duel::core::DEFAULT_ROUNDS;
use dice_duel::{GameConfig, GameRng, Intent, Notifier, PlayerId, Table, TieBreak};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Room = i64;

#[derive(Parser)]
#[command(name = "dice-duel")]
#[command(about = "Two-player dice game played from the terminal")]
struct Args {
    /// Seed for the dice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(long, default_value_t = DEFAULT_ROUNDS, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Announce ties as shared wins instead of favouring the first joiner
    #[arg(long)]
    shared_ties: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Prints announcements to stdout.
struct StdoutNotifier<W: Write> {
    out: W,
}

impl<W: Write> Notifier<Room> for StdoutNotifier<W> {
    fn announce(&mut self, room: &Room, text: &str) {
        for line in text.lines() {
            if let Err(err) = writeln!(self.out, "[{room}] {line}") {
                tracing::warn!(%err, "failed to write announcement");
                return;
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Start,
    Intent(Intent),
    Quit,
}

const USAGE: &str = "commands: /start | /join <user-id> <name> | /roll <user-id> | /quit (prefix with @<room> to pick a room)";

fn parse_user(token: Option<&str>) -> Result<PlayerId, String> {
    let token = token.ok_or_else(|| "missing user id".to_string())?;
    token
        .parse::<u64>()
        .map(PlayerId::new)
        .map_err(|_| format!("invalid user id: {token}"))
}

/// Parse one input line into a room and command. Blank lines yield `None`.
fn parse_line(line: &str, default_room: Room) -> Result<Option<(Room, Command)>, String> {
    let mut tokens = line.split_whitespace().peekable();

    let room = match tokens.peek() {
        None => return Ok(None),
        Some(&t) if t.starts_with('@') => {
            let raw = &t[1..];
            let room = raw
                .parse::<Room>()
                .map_err(|_| format!("invalid room: {raw}"))?;
            tokens.next();
            room
        }
        Some(_) => default_room,
    };

    let command = match tokens.next() {
        None => return Ok(None),
        Some("/start") => Command::Start,
        Some("/quit") => Command::Quit,
        Some("/join") => {
            let player = parse_user(tokens.next())?;
            let name = tokens.collect::<Vec<_>>().join(" ");
            if name.is_empty() {
                return Err("missing display name".to_string());
            }
            Command::Intent(Intent::join(player, name))
        }
        Some("/roll") => Command::Intent(Intent::roll(parse_user(tokens.next())?)),
        Some(other) => return Err(format!("unknown command: {other}")),
    };

    Ok(Some((room, command)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    let mut config = GameConfig::new().with_rounds(args.rounds);
    if args.shared_ties {
        config = config.with_tie_break(TieBreak::Shared);
    }

    let dice = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = dice.seed(), rounds = config.rounds(), "starting harness");

    let mut table = Table::new(config, dice, StdoutNotifier { out: io::stdout() });

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_line(&line, 0) {
            Ok(None) => {}
            Ok(Some((_, Command::Quit))) => break,
            Ok(Some((room, Command::Start))) => {
                table.welcome(&room);
            }
            Ok(Some((room, Command::Intent(intent)))) => {
                // Rejections are already announced to the room.
                let _ = table.handle(&room, intent);
            }
            Err(err) => eprintln!("{err}\n{USAGE}"),
        }
        table.notifier_mut().out.flush()?;
    }

    Ok(())
}
