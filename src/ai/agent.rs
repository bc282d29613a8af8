use crate::game::GameState;

/// Anything that can pick a column for the player to move.
pub trait Agent {
    /// Select a column given the current game state, or `None` when the state
    /// offers no legal move.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
