use crate::bot::Bot;
use crate::game::{GameConfig, GameResult, GameState, Player, Variant};
use std::time::{Duration, Instant};

pub struct MatchConfig {
    pub time_per_action: Duration,
    pub max_actions: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            time_per_action: Duration::from_secs(5),
            max_actions: 200,
        }
    }
}

pub enum MatchResult {
    Player1Win { winner_name: String, actions: usize },
    Player2Win { winner_name: String, actions: usize },
    Draw { actions: usize },
    Timeout { violator: String, winner: String },
    IllegalAction { violator: String, winner: String },
}

impl MatchResult {
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchResult::Player1Win { winner_name, .. } => Some(winner_name),
            MatchResult::Player2Win { winner_name, .. } => Some(winner_name),
            MatchResult::Timeout { winner, .. } => Some(winner),
            MatchResult::IllegalAction { winner, .. } => Some(winner),
            MatchResult::Draw { .. } => None,
        }
    }
}

/// Drives one game between two bots, local hot-seat style: the engine
/// commits every action instantly and the bots only ever see committed state.
pub struct Match {
    config: MatchConfig,
    state: GameState,
    player_one: Box<dyn Bot>,
    player_two: Box<dyn Bot>,
    verbose: bool,
}

impl Match {
    pub fn new(
        player_one: Box<dyn Bot>,
        player_two: Box<dyn Bot>,
        config: MatchConfig,
        verbose: bool,
    ) -> Self {
        Self::with_game(
            player_one,
            player_two,
            config,
            verbose,
            GameConfig::with_default_board(Variant::Katarenga),
        )
    }

    pub fn with_game(
        player_one: Box<dyn Bot>,
        player_two: Box<dyn Bot>,
        config: MatchConfig,
        verbose: bool,
        game: GameConfig,
    ) -> Self {
        Match {
            config,
            state: GameState::new(game),
            player_one,
            player_two,
            verbose,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn play(&mut self) -> MatchResult {
        self.player_one.game_start(Player::One);
        self.player_two.game_start(Player::Two);

        if self.verbose {
            println!("Match starting ({}):", self.state.variant().name());
            println!("  Player 1: {}", self.player_one.name());
            println!("  Player 2: {}", self.player_two.name());
            println!("\nInitial board:");
            println!("{}", self.state.display_board());
        }

        while !self.state.is_game_over() && self.state.move_count() < self.config.max_actions {
            let current = self.state.current_player();
            if let Some(result) = self.play_turn(current) {
                return result;
            }
        }

        self.player_one.game_end();
        self.player_two.game_end();

        let actions = self.state.move_count();
        // A finished board without a recorded result is an exhausted
        // Isolation position, scored by pawn majority
        let result = self
            .state
            .result()
            .copied()
            .or_else(|| self.state.exhaustion_result());
        self.score(result, actions)
    }

    fn score(&self, result: Option<GameResult>, actions: usize) -> MatchResult {
        match result {
            Some(GameResult::PlayerOneWin) => {
                if self.verbose {
                    println!("\n{} wins as Player 1!", self.player_one.name());
                }
                MatchResult::Player1Win {
                    winner_name: self.player_one.name().to_string(),
                    actions,
                }
            }
            Some(GameResult::PlayerTwoWin) => {
                if self.verbose {
                    println!("\n{} wins as Player 2!", self.player_two.name());
                }
                MatchResult::Player2Win {
                    winner_name: self.player_two.name().to_string(),
                    actions,
                }
            }
            Some(GameResult::Draw) | None => {
                if self.verbose {
                    println!("\nGame is a draw after {} actions", actions);
                }
                MatchResult::Draw { actions }
            }
        }
    }

    fn play_turn(&mut self, current: Player) -> Option<MatchResult> {
        let bot = match current {
            Player::One => &mut self.player_one,
            Player::Two => &mut self.player_two,
        };

        if self.verbose {
            println!(
                "\nAction {}: {} to play",
                self.state.move_count() + 1,
                bot.name()
            );
        }

        let start = Instant::now();
        let action = bot.choose(&self.state, self.config.time_per_action);
        let elapsed = start.elapsed();

        let bot_name = match current {
            Player::One => self.player_one.name(),
            Player::Two => self.player_two.name(),
        };

        if elapsed > self.config.time_per_action {
            let violator = bot_name.to_string();
            let winner = match current {
                Player::One => self.player_two.name().to_string(),
                Player::Two => self.player_one.name().to_string(),
            };

            if self.verbose {
                println!(
                    "TIMEOUT: {} took {:?} (limit: {:?})",
                    violator, elapsed, self.config.time_per_action
                );
            }

            return Some(MatchResult::Timeout { violator, winner });
        }

        let action = match action {
            Some(action) => action,
            None => {
                // No action available for the player to move; Isolation
                // scores the full board, everything else is a draw
                if self.verbose {
                    println!("{} has no action", bot_name);
                }
                let actions = self.state.move_count();
                return Some(self.score(self.state.exhaustion_result(), actions));
            }
        };

        if self.verbose {
            println!("{} plays: {} (took {:?})", bot_name, action, elapsed);
        }

        if let Err(e) = self.state.apply_action(action) {
            let violator = bot_name.to_string();
            let winner = match current {
                Player::One => self.player_two.name().to_string(),
                Player::Two => self.player_one.name().to_string(),
            };

            if self.verbose {
                println!("ILLEGAL ACTION: {} - {}", violator, e);
            }

            return Some(MatchResult::IllegalAction { violator, winner });
        }

        self.player_one.notify_action(action);
        self.player_two.notify_action(action);

        if self.verbose {
            println!("{}", self.state.display_board());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::RandomBot;

    fn quick_config() -> MatchConfig {
        MatchConfig {
            time_per_action: Duration::from_secs(1),
            max_actions: 100,
        }
    }

    #[test]
    fn test_random_match_runs_to_completion() {
        let one = Box::new(RandomBot::new("R1".to_string()));
        let two = Box::new(RandomBot::new("R2".to_string()));
        let mut game = Match::new(one, two, quick_config(), false);

        let result = game.play();
        match result {
            MatchResult::Player1Win { actions, .. }
            | MatchResult::Player2Win { actions, .. }
            | MatchResult::Draw { actions } => assert!(actions <= 100),
            MatchResult::Timeout { .. } | MatchResult::IllegalAction { .. } => {
                panic!("random bots neither time out nor cheat")
            }
        }
    }

    #[test]
    fn test_isolation_match_always_resolves() {
        let one = Box::new(RandomBot::new("R1".to_string()));
        let two = Box::new(RandomBot::new("R2".to_string()));
        let mut game = Match::with_game(
            one,
            two,
            quick_config(),
            false,
            GameConfig::with_default_board(Variant::Isolation),
        );

        // Isolation can never exceed 64 placements
        match game.play() {
            MatchResult::Player1Win { actions, .. }
            | MatchResult::Player2Win { actions, .. }
            | MatchResult::Draw { actions } => assert!(actions <= 64),
            _ => panic!("isolation always ends in a scored result"),
        }
    }
}
