use crate::ai::Agent;
use crate::error::{ArenaError, BoardError};
use crate::game::{ConnectFour, GameStatus, Player};

/// Columns played by one `play_game` call and where the game ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub status: GameStatus,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }

    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }
}

/// Drive `engine` to a terminal status, asking `p1` or `p2` for each move in
/// turn. Observers on the engine see every move. The engine is not reset
/// first, so a game already in progress is played out from where it stands.
pub fn play_game(
    engine: &mut ConnectFour,
    p1: &mut dyn Agent,
    p2: &mut dyn Agent,
) -> Result<GameRecord, ArenaError> {
    let mut moves = Vec::new();

    while !engine.status().is_terminal() {
        let player = engine.current_player();
        let agent: &mut dyn Agent = match player {
            Player::P1 => &mut *p1,
            Player::P2 => &mut *p2,
        };
        let column = agent
            .select_action(engine.state())
            .ok_or_else(|| ArenaError::NoMove {
                agent: agent.name().to_string(),
                player,
            })?;

        engine.make_move(column)?;
        moves.push(column);
    }

    Ok(GameRecord {
        moves,
        status: engine.status(),
    })
}

/// Apply a fixed column sequence, stopping at the first rejected move.
pub fn replay(engine: &mut ConnectFour, moves: &[usize]) -> Result<GameStatus, BoardError> {
    for &column in moves {
        engine.make_move(column)?;
    }
    Ok(engine.status())
}
