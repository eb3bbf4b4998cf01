//! Replayable text game records.
//!
//! A record is a block of `[Key "Value"]` headers followed by numbered move
//! text and a result token, in the spirit of chess PGN. Non-standard starting
//! positions are carried as snapshot JSON in a `Position` header with
//! `SetUp "1"`. Reading a record replays every move through the rules, so a
//! record that parses is a legal game.

use std::collections::BTreeMap;

use chrono::Local;

use crate::errors::NotationError;
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_rules::{DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER};
use crate::game_state::quoridor_types::{Move, Player};
use crate::utils::notation::parse_move;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub result: String,
}

/// Result token for a finished or unfinished game.
pub fn result_token(game_state: &GameState) -> &'static str {
    match game_state.winner() {
        Some(Player::North) => "1-0",
        Some(Player::South) => "0-1",
        None => "*",
    }
}

pub fn write_record(
    initial_state: &GameState,
    moves: &[Move],
    result: &str,
) -> Result<String, NotationError> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Plum Quoridor Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("North".to_owned(), "North".to_owned());
    headers.insert("South".to_owned(), "South".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());
    headers.insert("BoardSize".to_owned(), initial_state.size().to_string());
    headers.insert("Walls".to_owned(), initial_state.wall_budget().to_string());

    if !is_standard_start(initial_state) {
        let json = initial_state
            .export_snapshot_json()
            .map_err(|e| NotationError::MalformedRecord(e.to_string()))?;
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("Position".to_owned(), json);
    }

    write_record_with_headers(initial_state, moves, &headers)
}

pub fn write_record_with_headers(
    initial_state: &GameState,
    moves: &[Move],
    headers: &BTreeMap<String, String>,
) -> Result<String, NotationError> {
    let mut out = String::new();
    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_header_value(value)));
    }
    out.push('\n');

    let mut state = initial_state.clone();
    let mut parts = Vec::<String>::with_capacity(moves.len() + 1);
    for (ply, mv) in moves.iter().enumerate() {
        replay(&mut state, *mv, &mv.to_string())?;
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", (ply / 2) + 1, mv));
        } else {
            parts.push(mv.to_string());
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    parts.push(result.to_owned());
    out.push_str(&parts.join(" "));
    out.push('\n');
    Ok(out)
}

pub fn read_record(text: &str) -> Result<GameRecord, NotationError> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext = Vec::<&str>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (key, value) = parse_header_line(trimmed)?;
            headers.insert(key, value);
        } else {
            movetext.push(trimmed);
        }
    }

    let initial_state = initial_state_from_headers(&headers)?;
    let size = initial_state.size();
    let mut state = initial_state.clone();
    let mut moves = Vec::<Move>::new();
    let mut result = "*".to_owned();

    for token in movetext.iter().flat_map(|line| line.split_whitespace()) {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }
        let mv = parse_move(token, size)?;
        replay(&mut state, mv, token)?;
        moves.push(mv);
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(GameRecord {
        headers,
        initial_state,
        moves,
        final_state: state,
        result,
    })
}

fn replay(state: &mut GameState, mv: Move, token: &str) -> Result<(), NotationError> {
    state.apply(mv).map_err(|source| NotationError::Replay {
        token: token.to_owned(),
        source,
    })
}

fn is_standard_start(game_state: &GameState) -> bool {
    GameState::with_rules(game_state.size(), game_state.wall_budget())
        .map(|fresh| fresh.snapshot() == game_state.snapshot())
        .unwrap_or(false)
}

fn initial_state_from_headers(
    headers: &BTreeMap<String, String>,
) -> Result<GameState, NotationError> {
    if headers.get("SetUp").map(String::as_str) == Some("1") {
        let json = headers.get("Position").ok_or_else(|| {
            NotationError::MalformedRecord("SetUp is present but Position is missing".to_owned())
        })?;
        return GameState::import_snapshot_json(json)
            .map_err(|e| NotationError::MalformedRecord(e.to_string()));
    }

    let size = numeric_header(headers, "BoardSize", DEFAULT_BOARD_SIZE)?;
    let walls = numeric_header(headers, "Walls", DEFAULT_WALLS_PER_PLAYER)?;
    GameState::with_rules(size, walls).map_err(|e| NotationError::MalformedRecord(e.to_string()))
}

fn numeric_header(
    headers: &BTreeMap<String, String>,
    key: &str,
    default: u8,
) -> Result<u8, NotationError> {
    match headers.get(key) {
        Some(value) => value
            .parse()
            .map_err(|_| NotationError::MalformedRecord(format!("bad {key} header '{value}'"))),
        None => Ok(default),
    }
}

fn parse_header_line(line: &str) -> Result<(String, String), NotationError> {
    let malformed = || NotationError::MalformedRecord(format!("invalid header line: {line}"));
    let inner = line
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .ok_or_else(malformed)?;
    let (key, value_raw) = inner.split_once(' ').ok_or_else(malformed)?;
    let value_raw = value_raw.trim();
    let quoted = value_raw
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(malformed)?;
    Ok((key.trim().to_owned(), unescape_header_value(quoted)))
}

fn is_move_number_token(token: &str) -> bool {
    token
        .strip_suffix('.')
        .is_some_and(|head| !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_header_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn unescape_header_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(ch);
        }
    }
    out
}
