//! Seated sessions and peer synchronization.
//!
//! A `Session` wraps one end of a two-player game. Local moves are queued in
//! an outbox for whatever transport carries them; moves from the peer are
//! replayed through the same validation as local ones and must reproduce the
//! peer's record exactly.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, GameState, MoveRecord, Rejected, Square};

/// A message exchanged between the two ends of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SyncMessage {
    /// The sender applied this move
    Move(MoveRecord),
    /// The sender restarted the game
    Reset,
}

impl fmt::Display for SyncMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncMessage::Move(record) => write!(f, "move {record}"),
            SyncMessage::Reset => write!(f, "reset"),
        }
    }
}

/// One end of a game: the state, the color played here, and pending output.
#[derive(Clone, Debug, Default)]
pub struct Session {
    game: GameState,
    seat: Option<Color>,
    outbox: VecDeque<SyncMessage>,
    history: Vec<MoveRecord>,
}

impl Session {
    /// Hot-seat play: both colors move from this end, nothing is sent.
    #[must_use]
    pub fn local() -> Self {
        Session::default()
    }

    /// Online play as `seat`.
    #[must_use]
    pub fn seated(seat: Color) -> Self {
        Session {
            seat: Some(seat),
            ..Session::default()
        }
    }

    #[must_use]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[must_use]
    pub fn seat(&self) -> Option<Color> {
        self.seat
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Change seats. Queued messages are kept.
    pub fn set_seat(&mut self, seat: Option<Color>) {
        self.seat = seat;
    }

    /// True when this end may move now.
    #[must_use]
    pub fn is_our_turn(&self) -> bool {
        self.seat.map_or(true, |seat| seat == self.game.current_player())
    }

    /// Destinations for the piece on `from`; empty while the peer is to move.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        if !self.is_our_turn() {
            return Vec::new();
        }
        self.game.legal_destinations(from)
    }

    /// Play a move from this end and queue it for the peer.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveRecord, Rejected> {
        if let Some(seat) = self.seat {
            if seat != self.game.current_player() {
                return Err(Rejected::NotYourTurn { seat });
            }
        }

        let record = self.game.attempt_move(from, to)?;
        self.history.push(record);
        if self.seat.is_some() {
            self.outbox.push_back(SyncMessage::Move(record));
        }
        Ok(record)
    }

    /// Apply a message from the peer.
    ///
    /// Returns the replayed record for `Move`, `None` for `Reset`. A move the
    /// local rules refuse, or one whose outcome differs from the peer's
    /// record, leaves the state untouched.
    pub fn receive(&mut self, message: SyncMessage) -> Result<Option<MoveRecord>, Rejected> {
        match message {
            SyncMessage::Move(remote) => self.replay(remote).map(Some),
            SyncMessage::Reset => {
                self.game.reset();
                self.history.clear();

                #[cfg(feature = "logging")]
                log::info!("peer reset the game");

                Ok(None)
            }
        }
    }

    /// Apply a bare move from the peer, validated like a local one.
    pub fn receive_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, Rejected> {
        if let Some(seat) = self.seat {
            if seat == self.game.current_player() {
                return Err(Rejected::NotYourTurn {
                    seat: seat.opponent(),
                });
            }
        }

        let local = self.game.apply_remote_move(from, to)?;
        self.history.push(local);
        Ok(local)
    }

    fn replay(&mut self, remote: MoveRecord) -> Result<MoveRecord, Rejected> {
        let local = self.receive_move(remote.from, remote.to)?;
        if local != remote {
            self.history.pop();
            self.game.undo(&local)?;

            #[cfg(feature = "logging")]
            log::warn!("desync on {remote}: peer saw {}, we saw {}", remote.status, local.status);

            return Err(Rejected::Desync {
                from: remote.from,
                to: remote.to,
            });
        }
        Ok(local)
    }

    /// Restart the game, telling the peer when seated.
    pub fn reset(&mut self) {
        self.game.reset();
        self.history.clear();
        if self.seat.is_some() {
            self.outbox.push_back(SyncMessage::Reset);
        }
    }

    /// Take back the last move. Hot-seat only: a seated end would desync.
    pub fn take_back(&mut self) -> Option<MoveRecord> {
        if self.seat.is_some() {
            return None;
        }
        let last = self.history.pop()?;
        match self.game.undo(&last) {
            Ok(()) => Some(last),
            Err(_) => {
                self.history.push(last);
                None
            }
        }
    }

    /// Hand every queued message to the transport.
    pub fn drain_outbox(&mut self) -> Vec<SyncMessage> {
        self.outbox.drain(..).collect()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.outbox.len()
    }
}

/// Error type for `Room::join`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomError {
    /// Both seats are taken by other peers
    Full,
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomError::Full => write!(f, "Room already has two players"),
        }
    }
}

impl std::error::Error for RoomError {}

/// Seat assignment for a two-player room.
///
/// The first peer to join plays White, the second Black. A peer that joins
/// again gets its old seat back.
#[derive(Clone, Debug)]
pub struct Room<P> {
    seats: [Option<P>; 2],
}

impl<P> Default for Room<P> {
    fn default() -> Self {
        Room {
            seats: [None, None],
        }
    }
}

impl<P: PartialEq> Room<P> {
    #[must_use]
    pub fn new() -> Self {
        Room::default()
    }

    pub fn join(&mut self, peer: P) -> Result<Color, RoomError> {
        if let Some(color) = self.seat_of(&peer) {
            return Ok(color);
        }
        let color = Color::BOTH
            .into_iter()
            .find(|color| self.seats[color.index()].is_none())
            .ok_or(RoomError::Full)?;
        self.seats[color.index()] = Some(peer);

        #[cfg(feature = "logging")]
        log::info!("peer joined as {color}");

        Ok(color)
    }

    /// Free the peer's seat, returning the color it held.
    pub fn leave(&mut self, peer: &P) -> Option<Color> {
        let color = self.seat_of(peer)?;
        self.seats[color.index()] = None;
        Some(color)
    }

    #[must_use]
    pub fn seat_of(&self, peer: &P) -> Option<Color> {
        Color::BOTH
            .into_iter()
            .find(|color| self.seats[color.index()].as_ref() == Some(peer))
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.player_count() == 2
    }
}

/// A game shared between threads, e.g. a UI thread and a network reader.
#[derive(Clone, Debug, Default)]
pub struct SharedGame(Arc<Mutex<GameState>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: GameState) -> Self {
        SharedGame(Arc::new(Mutex::new(game)))
    }

    /// Lock the game. Hold the guard only for one engine call.
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.0.lock()
    }

    pub fn attempt_move(&self, from: Square, to: Square) -> Result<MoveRecord, Rejected> {
        self.0.lock().attempt_move(from, to)
    }

    pub fn apply_remote_move(&self, from: Square, to: Square) -> Result<MoveRecord, Rejected> {
        self.0.lock().apply_remote_move(from, to)
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.0.lock().clone()
    }
}
