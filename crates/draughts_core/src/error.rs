use thiserror::Error;

/// Failure kinds surfaced by the core. None of these are retried
/// internally; callers decide whether to reject input or abort the game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Coordinate outside `[1, N]` or on a light square. The command layer
    /// is expected to pre-validate and surface this as input rejection.
    #[error("position <{col},{row}> is out of range or not a dark square")]
    OutOfRange { col: u8, row: u8 },

    /// A structurally broken move: empty step list, or a step that starts
    /// from an empty square. Moves that are well-formed but not in the
    /// legal list are rejected by the command layer via `contains`.
    #[error("illegal move")]
    IllegalMove,

    /// The board fails the piece-count invariant required to start a game.
    #[error("board is not playable")]
    NotPlayable,
}

pub type Result<T> = std::result::Result<T, Error>;
