use crate::game::{Action, GameState, Player, Variant};
use rand::seq::SliceRandom;
use std::time::Duration;

/// Trait that all bots must implement
pub trait Bot: Send {
    /// Get the name of the bot
    fn name(&self) -> &str;

    /// Pick the next action for the current game state
    /// The bot has a time limit to respond
    fn choose(&mut self, state: &GameState, time_limit: Duration) -> Option<Action>;

    /// Notified when the game starts
    fn game_start(&mut self, _player: Player) {}

    /// Notified when an action is committed (by either player)
    fn notify_action(&mut self, _action: Action) {}

    /// Notified when the game ends
    fn game_end(&mut self) {}
}

/// Picks uniformly at random among all legal actions
pub struct RandomBot {
    name: String,
}

impl RandomBot {
    pub fn new(name: String) -> Self {
        RandomBot { name }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(&mut self, state: &GameState, _time_limit: Duration) -> Option<Action> {
        let actions = state.legal_actions(state.current_player());
        actions.choose(&mut rand::thread_rng()).copied()
    }
}

/// One-ply lookahead on a simple per-variant score
pub struct GreedyBot {
    name: String,
}

impl GreedyBot {
    pub fn new(name: String) -> Self {
        GreedyBot { name }
    }

    fn evaluate(&self, state: &GameState, action: Action) -> i32 {
        let player = state.current_player();
        let mut next = state.clone();
        if next.apply_action(action).is_err() {
            return i32::MIN;
        }
        if next.winner() == Some(player) {
            return 1000;
        }

        match state.variant() {
            Variant::Katarenga => {
                // Material plus banked camp pawns, which are worth the
                // pawn they retire and the progress they represent
                let mine = next.player_pawns(player).len() as i32
                    + next.camps().banked(player) as i32 * 2;
                let theirs = next.player_pawns(player.opponent()).len() as i32
                    + next.camps().banked(player.opponent()) as i32 * 2;
                mine - theirs
            }
            Variant::Congress => {
                // Grow the largest own group
                next.player_pawns(player)
                    .iter()
                    .map(|&pawn| next.connected_group(pawn, player).len() as i32)
                    .max()
                    .unwrap_or(0)
            }
            Variant::Isolation => {
                // Starve the opponent of safe cells
                -(next.safe_cells().len() as i32)
            }
        }
    }
}

impl Bot for GreedyBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose(&mut self, state: &GameState, _time_limit: Duration) -> Option<Action> {
        let actions = state.legal_actions(state.current_player());
        actions
            .into_iter()
            .max_by_key(|&action| self.evaluate(state, action))
    }
}
