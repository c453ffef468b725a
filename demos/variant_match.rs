use katarenga_arena::*;
use std::time::Duration;

fn main() {
    println!("Variant Match Demo\n");

    for variant in [Variant::Katarenga, Variant::Congress, Variant::Isolation] {
        println!("{}", "=".repeat(60));
        println!("Running {} ...\n", variant.name());

        let bot1 = Box::new(RandomBot::new("Random Alice".to_string()));
        let bot2 = Box::new(GreedyBot::new("Greedy Bob".to_string()));

        let config = MatchConfig {
            time_per_action: Duration::from_millis(500),
            max_actions: 120,
        };

        let mut match_game = Match::with_game(
            bot1,
            bot2,
            config,
            false,
            GameConfig::with_default_board(variant),
        );

        println!("Starting board:");
        println!("{}", match_game.state().display_board());

        let result = match_game.play();
        match &result {
            MatchResult::Player1Win { winner_name, actions } => {
                println!("{} won as Player 1 in {} actions!", winner_name, actions);
            }
            MatchResult::Player2Win { winner_name, actions } => {
                println!("{} won as Player 2 in {} actions!", winner_name, actions);
            }
            MatchResult::Draw { actions } => {
                println!("Draw after {} actions", actions);
            }
            MatchResult::Timeout { violator, winner } => {
                println!("{} wins! {} timed out", winner, violator);
            }
            MatchResult::IllegalAction { violator, winner } => {
                println!("{} wins! {} played an illegal action", winner, violator);
            }
        }
        println!();
    }
}
