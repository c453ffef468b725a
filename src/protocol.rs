use crate::game::{GameState, Move, Player, Position, Variant};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};

/// Message payloads exchanged between two peers. The wire shape is
/// `{"type": ..., "data": {...}, "timestamp": ...}` with one JSON object per
/// line; positions travel as `[row, col]` pairs and players by number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Payload {
    GameMode {
        mode: u8,
    },
    Move {
        from: [usize; 2],
        to: [usize; 2],
        player: u8,
    },
    Placement {
        position: [usize; 2],
        player: u8,
    },
    Victory {
        winner: u8,
    },
    Disconnect {},
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(flatten)]
    pub payload: Payload,
    pub timestamp: f64,
}

impl Envelope {
    pub fn new(payload: Payload) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64())
            .unwrap_or(0.0);
        Envelope { payload, timestamp }
    }

    /// One message per line
    pub fn encode(&self) -> Result<String, ProtocolError> {
        let mut line = serde_json::to_string(self)?;
        line.push('\n');
        Ok(line)
    }

    pub fn decode(line: &str) -> Result<Envelope, ProtocolError> {
        Ok(serde_json::from_str(line.trim())?)
    }
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("remote message out of sync with local rules: {0}")]
    Desync(String),
    #[error("connection closed by peer")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Re-run an inbound message through the local rules before it may touch the
/// game. An illegal message leaves the state untouched and surfaces as a
/// recoverable desync, so both peers stay consistent even when the wire does
/// not. Returns the winner when the message ended (or confirmed the end of)
/// the game.
pub fn apply_remote(
    state: &mut GameState,
    envelope: &Envelope,
) -> Result<Option<Player>, ProtocolError> {
    match &envelope.payload {
        Payload::GameMode { mode } => {
            if Variant::from_mode(*mode) != Some(state.variant()) {
                return Err(ProtocolError::Desync(format!(
                    "peer plays mode {}, local game is {}",
                    mode,
                    state.variant().name()
                )));
            }
            Ok(None)
        }
        Payload::Move { from, to, player } => {
            expect_turn(state, *player)?;
            let mv = Move::new(
                Position::new(from[0], from[1]),
                Position::new(to[0], to[1]),
            );
            state
                .apply_move(mv)
                .map_err(|e| ProtocolError::Desync(e.to_string()))
        }
        Payload::Placement { position, player } => {
            expect_turn(state, *player)?;
            state
                .apply_placement(Position::new(position[0], position[1]))
                .map_err(|e| ProtocolError::Desync(e.to_string()))
        }
        Payload::Victory { winner } => {
            // A victory claim is only echoed back when the local game agrees
            let claimed = Player::from_number(*winner);
            if claimed.is_none() || state.winner() != claimed {
                return Err(ProtocolError::Desync(format!(
                    "peer claims victory for player {}",
                    winner
                )));
            }
            Ok(claimed)
        }
        Payload::Disconnect {} => Ok(None),
    }
}

fn expect_turn(state: &GameState, player: u8) -> Result<(), ProtocolError> {
    match Player::from_number(player) {
        Some(p) if p == state.current_player() => Ok(()),
        _ => Err(ProtocolError::Desync(format!(
            "message from player {} out of turn",
            player
        ))),
    }
}

/// A connected opponent. One side hosts and waits, the other joins; both
/// ends speak the same newline-framed JSON afterwards.
pub struct Peer {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl Peer {
    /// Bind `addr` and wait for exactly one opponent
    pub async fn host(addr: &str) -> Result<Peer, ProtocolError> {
        let listener = TcpListener::bind(addr).await?;
        let (stream, _) = listener.accept().await?;
        Ok(Peer::from_stream(stream))
    }

    pub async fn join(addr: &str) -> Result<Peer, ProtocolError> {
        Ok(Peer::from_stream(TcpStream::connect(addr).await?))
    }

    fn from_stream(stream: TcpStream) -> Peer {
        let (read, write) = stream.into_split();
        Peer {
            reader: BufReader::new(read),
            writer: write,
        }
    }

    pub async fn send(&mut self, envelope: &Envelope) -> Result<(), ProtocolError> {
        let line = envelope.encode()?;
        self.writer.write_all(line.as_bytes()).await?;
        Ok(())
    }

    pub async fn recv(&mut self) -> Result<Envelope, ProtocolError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(ProtocolError::Closed);
        }
        Envelope::decode(&line)
    }
}
