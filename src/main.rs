use std::io::{self, BufRead, Write};
use std::sync::mpsc::{channel, Sender};
use std::thread;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use grid_chess::engines::engine_trait::Difficulty;
use grid_chess::errors::{ChessError, ChessResult};
use grid_chess::game::config::{GameConfig, PlayerSetup};
use grid_chess::game::game_engine::GameEngine;
use grid_chess::game::promotion::PresetPromotion;
use grid_chess::game_state::chess_types::{Color, PieceKind, Square};
use grid_chess::utils::render_board::render_board;

enum Event {
    Line(String),
    Tick,
    InputClosed,
}

enum Command {
    Clicks {
        squares: Vec<Square>,
        promotion: Option<PieceKind>,
    },
    ShowBoard,
    Quit,
}

fn parse_command(line: &str) -> ChessResult<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["quit"] | ["exit"] => return Ok(Command::Quit),
        ["board"] => return Ok(Command::ShowBoard),
        _ => {}
    }

    let mut squares = Vec::new();
    let mut promotion = None;
    for (i, token) in tokens.iter().enumerate() {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) if i == tokens.len() - 1 && !squares.is_empty() => {
                promotion = Some(
                    PieceKind::from_promotion_letter(letter)
                        .ok_or_else(|| ChessError::UnknownCommand(line.to_owned()))?,
                );
            }
            _ => squares.push(Square::from_algebraic(token)?),
        }
    }

    if squares.is_empty() || squares.len() > 2 {
        return Err(ChessError::UnknownCommand(line.to_owned()));
    }
    Ok(Command::Clicks { squares, promotion })
}

fn config_from_args() -> ChessResult<GameConfig> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "pvp".to_owned());
    let setup = if mode.eq_ignore_ascii_case("pvp") {
        PlayerSetup {
            name1: String::new(),
            name2: String::new(),
            vs_computer: false,
            difficulty: Difficulty::Easy,
        }
    } else {
        PlayerSetup {
            name1: String::new(),
            name2: String::new(),
            vs_computer: true,
            difficulty: mode.parse()?,
        }
    };
    GameConfig::from_setup(&setup).with_env_overrides()
}

fn print_position(engine: &GameEngine) {
    println!("{}", render_board(&engine.board_snapshot()));
    println!(
        "{} | {}",
        engine.clock_label(Color::White),
        engine.clock_label(Color::Black)
    );
    println!("{}", engine.status_message());
    io::stdout().flush().ok();
}

fn spawn_input_reader(events: Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let trimmed = line.trim().to_owned();
            if !trimmed.is_empty() && events.send(Event::Line(trimmed)).is_err() {
                return;
            }
        }
        let _ = events.send(Event::InputClosed);
    });
}

fn spawn_ticker(events: Sender<Event>) {
    thread::spawn(move || loop {
        thread::sleep(Duration::from_secs(1));
        if events.send(Event::Tick).is_err() {
            return;
        }
    });
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match config_from_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("usage: grid_chess [pvp|easy|intermediate|hard]");
            std::process::exit(2);
        }
    };

    let promotion = PresetPromotion::new();
    let mut engine = GameEngine::new(config);
    engine.set_promotion_prompt(Box::new(promotion.handle()));
    print_position(&engine);

    let (event_tx, event_rx) = channel::<Event>();
    spawn_input_reader(event_tx.clone());
    spawn_ticker(event_tx);

    // All engine access happens on this thread, one event at a time.
    while let Ok(event) = event_rx.recv() {
        match event {
            Event::Tick => {
                if engine.on_clock_tick().is_some() {
                    print_position(&engine);
                }
            }
            Event::InputClosed => break,
            Event::Line(line) => match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::ShowBoard) => print_position(&engine),
                Ok(Command::Clicks { squares, promotion: choice }) => {
                    promotion.preset(choice);
                    for square in squares {
                        engine.on_square_interaction(square);
                    }
                    promotion.preset(None);
                    print_position(&engine);
                }
                Err(err) => {
                    println!("{err}");
                    io::stdout().flush().ok();
                }
            },
        }
    }
}
