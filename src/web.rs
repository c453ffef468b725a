use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower_http::services::ServeDir;

use crate::bot::{Bot, GreedyBot, RandomBot};
use crate::game::{
    Action, Camps, GameConfig, GameState, Move, Player, Position, Variant,
};

const BOT_TIME_LIMIT: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug)]
enum BotType {
    Greedy,
    Random,
}

#[derive(Clone)]
pub struct AppState {
    game: Arc<Mutex<WebGame>>,
}

#[derive(Clone)]
struct WebGame {
    state: GameState,
    human: Player,
    bot_type: BotType,
}

#[derive(Serialize, Deserialize)]
pub struct NewGameRequest {
    variant: String,
    side: String,
    bot: String,
}

#[derive(Serialize)]
pub struct GameResponse {
    colors: Vec<Vec<String>>,
    pawns: Vec<Vec<String>>,
    camps: Vec<CampResponse>,
    current_player: u8,
    moves: Vec<MoveResponse>,
    placements: Vec<[usize; 2]>,
    game_over: bool,
    winner: Option<u8>,
    variant: String,
    message: String,
}

#[derive(Serialize, Clone)]
pub struct CampResponse {
    row: usize,
    col: usize,
    player: u8,
    filled: bool,
}

#[derive(Serialize, Deserialize)]
pub struct MoveRequest {
    from_row: usize,
    from_col: usize,
    to_row: usize,
    to_col: usize,
}

#[derive(Serialize, Deserialize)]
pub struct PlaceRequest {
    row: usize,
    col: usize,
}

#[derive(Serialize, Clone)]
pub struct MoveResponse {
    from_row: usize,
    from_col: usize,
    to_row: usize,
    to_col: usize,
}

impl AppState {
    pub fn new() -> Self {
        let game = WebGame {
            state: GameState::new_katarenga(),
            human: Player::One,
            bot_type: BotType::Greedy,
        };
        AppState {
            game: Arc::new(Mutex::new(game)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn string_to_variant(s: &str) -> Variant {
    match s.to_lowercase().as_str() {
        "congress" => Variant::Congress,
        "isolation" => Variant::Isolation,
        _ => Variant::Katarenga,
    }
}

fn string_to_player(s: &str) -> Player {
    match s.to_lowercase().as_str() {
        "2" | "two" | "blue" => Player::Two,
        _ => Player::One,
    }
}

fn string_to_bot(s: &str) -> BotType {
    match s.to_lowercase().as_str() {
        "random" => BotType::Random,
        _ => BotType::Greedy,
    }
}

fn bot_instance(bot_type: BotType) -> Box<dyn Bot> {
    match bot_type {
        BotType::Greedy => Box::new(GreedyBot::new("Greedy Bot".to_string())),
        BotType::Random => Box::new(RandomBot::new("Random Bot".to_string())),
    }
}

/// Let the bot answer if it is its turn. The engine commits synchronously;
/// any animation is the browser's business.
fn bot_reply(game: &mut WebGame) -> String {
    if game.state.is_game_over() || game.state.current_player() == game.human {
        return String::new();
    }

    let mut bot = bot_instance(game.bot_type);
    match bot.choose(&game.state, BOT_TIME_LIMIT) {
        Some(action) => {
            let description = format!("Bot played: {}", action);
            let _ = game.state.apply_action(action);
            description
        }
        None => "Bot has no legal action".to_string(),
    }
}

#[axum::debug_handler]
async fn new_game(State(app_state): State<AppState>, Json(req): Json<NewGameRequest>) -> Response {
    let variant = string_to_variant(&req.variant);
    let human = string_to_player(&req.side);
    let bot_type = string_to_bot(&req.bot);

    let message = {
        let mut game = app_state.game.lock().unwrap();
        game.state = GameState::new(GameConfig::with_default_board(variant));
        game.human = human;
        game.bot_type = bot_type;

        let bot_message = bot_reply(&mut game);
        if bot_message.is_empty() {
            "Your turn!".to_string()
        } else {
            bot_message
        }
    };

    let Json(mut response) = game_state(State(app_state)).await;
    response.message = message;
    Json(response).into_response()
}

#[axum::debug_handler]
async fn make_move(State(app_state): State<AppState>, Json(req): Json<MoveRequest>) -> Response {
    let message = {
        let mut game = app_state.game.lock().unwrap();

        if let Some(rejection) = reject_out_of_turn(&game) {
            return rejection;
        }

        let mv = Move::new(
            Position::new(req.from_row, req.from_col),
            Position::new(req.to_row, req.to_col),
        );
        if let Err(e) = game.state.apply_move(mv) {
            return bad_request(&format!("Invalid move: {}", e));
        }

        bot_reply(&mut game)
    };

    let Json(mut response) = game_state(State(app_state)).await;
    response.message = message;
    Json(response).into_response()
}

#[axum::debug_handler]
async fn place_pawn(State(app_state): State<AppState>, Json(req): Json<PlaceRequest>) -> Response {
    let message = {
        let mut game = app_state.game.lock().unwrap();

        if let Some(rejection) = reject_out_of_turn(&game) {
            return rejection;
        }

        if let Err(e) = game.state.apply_placement(Position::new(req.row, req.col)) {
            return bad_request(&format!("Invalid placement: {}", e));
        }

        bot_reply(&mut game)
    };

    let Json(mut response) = game_state(State(app_state)).await;
    response.message = message;
    Json(response).into_response()
}

fn reject_out_of_turn(game: &WebGame) -> Option<Response> {
    if game.state.is_game_over() {
        return Some(bad_request("Game is over"));
    }
    if game.state.current_player() != game.human {
        return Some(bad_request("Not your turn"));
    }
    None
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

async fn game_state(State(app_state): State<AppState>) -> Json<GameResponse> {
    let game = app_state.game.lock().unwrap();
    let state = &game.state;
    let size = crate::board::FRAME_SIZE;

    let mut colors = vec![vec![String::new(); size]; size];
    let mut pawns = vec![vec![String::new(); size]; size];
    for row in 0..size {
        for col in 0..size {
            if let Some(color) = state.board().color_at(row, col) {
                colors[row][col] = color.letter().to_string();
            }
            pawns[row][col] = match state.pawn_at(Position::new(row, col)) {
                Some(player) => player.number().to_string(),
                None => ".".to_string(),
            };
        }
    }

    let camps = if state.variant() == Variant::Katarenga {
        [Player::One, Player::Two]
            .into_iter()
            .flat_map(|player| {
                Camps::positions(player).into_iter().map(move |pos| (player, pos))
            })
            .map(|(player, pos)| CampResponse {
                row: pos.row,
                col: pos.col,
                player: player.number(),
                filled: state.camps().is_filled(player, pos),
            })
            .collect()
    } else {
        Vec::new()
    };

    let human_to_play = !state.is_game_over() && state.current_player() == game.human;
    let mut moves = Vec::new();
    let mut placements = Vec::new();
    if human_to_play {
        for action in state.legal_actions(game.human) {
            match action {
                Action::Move(mv) => moves.push(MoveResponse {
                    from_row: mv.from.row,
                    from_col: mv.from.col,
                    to_row: mv.to.row,
                    to_col: mv.to.col,
                }),
                Action::Place(pos) => placements.push([pos.row, pos.col]),
            }
        }
    }

    Json(GameResponse {
        colors,
        pawns,
        camps,
        current_player: state.current_player().number(),
        moves,
        placements,
        game_over: state.is_game_over(),
        winner: state.winner().map(|player| player.number()),
        variant: state.variant().name().to_string(),
        message: String::new(),
    })
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    let app_state = AppState::new();

    let app = Router::new()
        .route("/api/new-game", post(new_game))
        .route("/api/move", post(make_move))
        .route("/api/place", post(place_pawn))
        .route("/api/game-state", get(game_state))
        .nest_service("/", ServeDir::new("static"))
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    println!("Web server running at http://127.0.0.1:3000");

    axum::serve(listener, app).await?;
    Ok(())
}
