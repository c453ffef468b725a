use katarenga_arena::*;
use std::time::Duration;

fn main() {
    println!("Katarenga Arena - Board Game Variants");
    println!("=====================================\n");

    let bot1 = Box::new(RandomBot::new("RandomBot".to_string()));
    let bot2 = Box::new(GreedyBot::new("GreedyBot".to_string()));

    let config = MatchConfig {
        time_per_action: Duration::from_secs(2),
        max_actions: 150,
    };

    let mut match_game = Match::new(bot1, bot2, config, true);
    let result = match_game.play();

    println!("\n=====================================");
    println!("Match Result:");
    match result {
        MatchResult::Player1Win { winner_name, actions } => {
            println!("  {} wins as Player 1 in {} actions!", winner_name, actions);
        }
        MatchResult::Player2Win { winner_name, actions } => {
            println!("  {} wins as Player 2 in {} actions!", winner_name, actions);
        }
        MatchResult::Draw { actions } => {
            println!("  Draw after {} actions", actions);
        }
        MatchResult::Timeout { violator, winner } => {
            println!("  {} wins by timeout (opponent: {})", winner, violator);
        }
        MatchResult::IllegalAction { violator, winner } => {
            println!("  {} wins by illegal action (opponent: {})", winner, violator);
        }
    }
    println!("=====================================");
}
