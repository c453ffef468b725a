use crate::board::{Board, Color, Template, FRAME_SIZE, INTERIOR_MAX, INTERIOR_MIN};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Pawns per player in the movement variants
pub const PAWNS_PER_PLAYER: usize = 8;

const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variant {
    Katarenga, // race to the opponent-side camps, captures allowed
    Congress,  // connect all eight pawns, no captures
    Isolation, // place pawns on unattacked cells until someone is starved
}

impl Variant {
    pub fn name(&self) -> &str {
        match self {
            Variant::Katarenga => "Katarenga",
            Variant::Congress => "Congress",
            Variant::Isolation => "Isolation",
        }
    }

    /// Wire code shared with the network protocol and save files
    pub fn mode(&self) -> u8 {
        match self {
            Variant::Katarenga => 0,
            Variant::Congress => 1,
            Variant::Isolation => 2,
        }
    }

    pub fn from_mode(mode: u8) -> Option<Variant> {
        match mode {
            0 => Some(Variant::Katarenga),
            1 => Some(Variant::Congress),
            2 => Some(Variant::Isolation),
            _ => None,
        }
    }

    /// Capture-by-displacement onto an opponent square
    pub fn captures_enabled(&self) -> bool {
        matches!(self, Variant::Katarenga)
    }

    /// Isolation pawns never move once placed
    pub fn placement_only(&self) -> bool {
        matches!(self, Variant::Isolation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_number(number: u8) -> Option<Player> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// One turn's worth of play: a pawn move (Katarenga, Congress) or a pawn
/// placement (Isolation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Move(Move),
    Place(Position),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move(mv) => write!(f, "{}", mv),
            Action::Place(pos) => write!(f, "place at {}", pos),
        }
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("camp at {0} is already occupied")]
    OccupiedCamp(Position),
    #[error("game already over")]
    GameOver,
    #[error("not your turn")]
    NotYourTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

impl GameResult {
    pub fn win(player: Player) -> GameResult {
        match player {
            Player::One => GameResult::PlayerOneWin,
            Player::Two => GameResult::PlayerTwoWin,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::PlayerOneWin => Some(Player::One),
            GameResult::PlayerTwoWin => Some(Player::Two),
            GameResult::Draw => None,
        }
    }
}

/// Per-session configuration, fixed for the lifetime of one game. Passed in
/// at construction; nothing reads ambient globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub variant: Variant,
    pub board: Board,
}

impl GameConfig {
    pub fn new(variant: Variant, board: Board) -> Self {
        GameConfig { variant, board }
    }

    /// Variant on the fallback board, for quick games and tests
    pub fn with_default_board(variant: Variant) -> Self {
        GameConfig::new(variant, Board::checkerboard())
    }
}

/// Katarenga camp slots: two single-occupancy retirement cells per player.
/// Player 1 retires into the bottom corners, player 2 into the top corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camps {
    filled: [[bool; 2]; 2],
}

impl Camps {
    pub fn positions(player: Player) -> [Position; 2] {
        match player {
            Player::One => [
                Position::new(FRAME_SIZE - 1, 0),
                Position::new(FRAME_SIZE - 1, FRAME_SIZE - 1),
            ],
            Player::Two => [Position::new(0, 0), Position::new(0, FRAME_SIZE - 1)],
        }
    }

    fn slot(player: Player, pos: Position) -> Option<usize> {
        Camps::positions(player).iter().position(|&camp| camp == pos)
    }

    pub fn is_filled(&self, player: Player, pos: Position) -> bool {
        Camps::slot(player, pos).is_some_and(|slot| self.filled[player.index()][slot])
    }

    fn fill(&mut self, player: Player, pos: Position) {
        if let Some(slot) = Camps::slot(player, pos) {
            self.filled[player.index()][slot] = true;
        }
    }

    /// Pawns retired into this player's camps
    pub fn banked(&self, player: Player) -> usize {
        self.filled[player.index()].iter().filter(|f| **f).count()
    }

    pub fn both_filled(&self, player: Player) -> bool {
        self.banked(player) == 2
    }
}

/// The full committed state of one game: board, occupancy, camps, and turn.
/// All rule queries and mutations go through here; the UI and network layers
/// only ever see committed state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    pawns: [[Option<Player>; FRAME_SIZE]; FRAME_SIZE],
    camps: Camps,
    current_player: Player,
    selected: Option<(Position, Vec<Position>)>,
    move_count: usize,
    result: Option<GameResult>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let mut state = GameState {
            config,
            pawns: [[None; FRAME_SIZE]; FRAME_SIZE],
            camps: Camps::default(),
            current_player: Player::One,
            selected: None,
            move_count: 0,
            result: None,
        };

        match state.config.variant {
            Variant::Katarenga => state.setup_katarenga(),
            Variant::Congress => state.setup_congress(),
            Variant::Isolation => {} // the board starts empty
        }

        state
    }

    pub fn new_katarenga() -> Self {
        Self::new(GameConfig::with_default_board(Variant::Katarenga))
    }

    pub fn new_congress() -> Self {
        Self::new(GameConfig::with_default_board(Variant::Congress))
    }

    pub fn new_isolation() -> Self {
        Self::new(GameConfig::with_default_board(Variant::Isolation))
    }

    /// Eight pawns per player on the interior rows closest to their own side
    fn setup_katarenga(&mut self) {
        for col in INTERIOR_MIN..=INTERIOR_MAX {
            self.pawns[INTERIOR_MIN][col] = Some(Player::One);
            self.pawns[INTERIOR_MAX][col] = Some(Player::Two);
        }
    }

    /// Fixed symmetric border layout
    fn setup_congress(&mut self) {
        let player_one = [
            (1, 2),
            (1, 5),
            (2, 8),
            (4, 1),
            (5, 8),
            (7, 1),
            (8, 4),
            (8, 7),
        ];
        let player_two = [
            (1, 4),
            (1, 7),
            (2, 1),
            (4, 8),
            (5, 1),
            (7, 8),
            (8, 2),
            (8, 5),
        ];

        for &(row, col) in &player_one {
            self.pawns[row][col] = Some(Player::One);
        }
        for &(row, col) in &player_two {
            self.pawns[row][col] = Some(Player::Two);
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn board(&self) -> &Board {
        &self.config.board
    }

    pub fn camps(&self) -> &Camps {
        &self.camps
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn winner(&self) -> Option<Player> {
        self.result.and_then(|result| result.winner())
    }

    /// Occupancy lookup; out-of-bounds queries fail closed
    pub fn pawn_at(&self, pos: Position) -> Option<Player> {
        if Board::in_bounds(pos.row, pos.col) {
            self.pawns[pos.row][pos.col]
        } else {
            None
        }
    }

    pub fn player_pawns(&self, player: Player) -> Vec<Position> {
        let mut pawns = Vec::new();
        for row in INTERIOR_MIN..=INTERIOR_MAX {
            for col in INTERIOR_MIN..=INTERIOR_MAX {
                if self.pawns[row][col] == Some(player) {
                    pawns.push(Position::new(row, col));
                }
            }
        }
        pawns
    }

    fn count_pawns(&self, player: Player) -> usize {
        self.player_pawns(player).len()
    }

    fn interior(row: i32, col: i32) -> bool {
        row >= INTERIOR_MIN as i32
            && row <= INTERIOR_MAX as i32
            && col >= INTERIOR_MIN as i32
            && col <= INTERIOR_MAX as i32
    }

    /// Legal destinations for the pawn at `from`, dispatched on the color of
    /// the square it stands on. Empty when there is no pawn, the game is
    /// over, or the variant is placement-only.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        if self.result.is_some() || self.config.variant.placement_only() {
            return Vec::new();
        }
        let Some(owner) = self.pawn_at(from) else {
            return Vec::new();
        };
        let Some(color) = self.config.board.color_at(from.row, from.col) else {
            return Vec::new();
        };

        let captures = self.config.variant.captures_enabled();
        let mut destinations = match color.template() {
            Template::King => self.step_destinations(from, &KING_OFFSETS, owner, captures),
            Template::Knight => self.step_destinations(from, &KNIGHT_OFFSETS, owner, captures),
            Template::Rook => self.slide_destinations(from, &ORTHOGONAL, color, owner, captures),
            Template::Bishop => self.slide_destinations(from, &DIAGONAL, color, owner, captures),
        };

        if self.config.variant == Variant::Katarenga {
            destinations.extend(self.camp_destinations(from, owner));
        }

        destinations
    }

    fn step_destinations(
        &self,
        from: Position,
        offsets: &[(i32, i32)],
        owner: Player,
        captures: bool,
    ) -> Vec<Position> {
        let mut destinations = Vec::new();
        for &(dr, dc) in offsets {
            let row = from.row as i32 + dr;
            let col = from.col as i32 + dc;
            if !Self::interior(row, col) {
                continue;
            }
            let to = Position::new(row as usize, col as usize);
            match self.pawn_at(to) {
                None => destinations.push(to),
                Some(occupant) if occupant != owner && captures => destinations.push(to),
                Some(_) => {}
            }
        }
        destinations
    }

    fn slide_destinations(
        &self,
        from: Position,
        directions: &[(i32, i32)],
        stop_color: Color,
        owner: Player,
        captures: bool,
    ) -> Vec<Position> {
        let mut destinations = Vec::new();
        for &(dr, dc) in directions {
            let mut row = from.row as i32 + dr;
            let mut col = from.col as i32 + dc;
            while Self::interior(row, col) {
                let to = Position::new(row as usize, col as usize);
                match self.pawn_at(to) {
                    None => destinations.push(to),
                    Some(occupant) => {
                        if occupant != owner && captures {
                            destinations.push(to);
                        }
                        break;
                    }
                }
                // The landing cell is evaluated first; a cell of the
                // slider's own color is then the end of the line
                if self.config.board.color_at(to.row, to.col) == Some(stop_color) {
                    break;
                }
                row += dr;
                col += dc;
            }
        }
        destinations
    }

    /// A pawn standing on the row next to the opponent's back rank may enter
    /// its own camps, one pawn per camp
    fn camp_destinations(&self, from: Position, owner: Player) -> Vec<Position> {
        if from.row != Self::enemy_baseline(owner) {
            return Vec::new();
        }
        Camps::positions(owner)
            .into_iter()
            .filter(|&camp| !self.camps.is_filled(owner, camp))
            .collect()
    }

    fn enemy_baseline(player: Player) -> usize {
        match player {
            Player::One => INTERIOR_MAX,
            Player::Two => INTERIOR_MIN,
        }
    }

    /// Cache and return the legal destinations of the current player's pawn
    /// at `pos`. The selection is only a hint for the UI; clearing it never
    /// touches game state.
    pub fn select_cell(&mut self, pos: Position) -> Vec<Position> {
        if self.pawn_at(pos) != Some(self.current_player) {
            self.selected = None;
            return Vec::new();
        }
        let destinations = self.legal_destinations(pos);
        self.selected = Some((pos, destinations.clone()));
        destinations
    }

    pub fn selection(&self) -> Option<(Position, &[Position])> {
        self.selected
            .as_ref()
            .map(|(pos, destinations)| (*pos, destinations.as_slice()))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Validate and commit one move for the current player. Nothing is
    /// mutated on any error path. Returns the winner if the move ended the
    /// game.
    pub fn apply_move(&mut self, mv: Move) -> Result<Option<Player>, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        if self.config.variant.placement_only() {
            return Err(GameError::IllegalMove(
                "pawns never move in Isolation".to_string(),
            ));
        }
        match self.pawn_at(mv.from) {
            Some(owner) if owner == self.current_player => {}
            Some(_) => return Err(GameError::NotYourTurn),
            None => {
                return Err(GameError::IllegalMove(format!("no pawn at {}", mv.from)));
            }
        }

        if !self.legal_destinations(mv.from).contains(&mv.to) {
            // A full camp is reported distinctly, and always before any
            // state changes
            if self.config.variant == Variant::Katarenga
                && Camps::positions(self.current_player).contains(&mv.to)
                && self.camps.is_filled(self.current_player, mv.to)
            {
                return Err(GameError::OccupiedCamp(mv.to));
            }
            return Err(GameError::IllegalMove(format!(
                "{} is not a legal destination",
                mv
            )));
        }

        self.pawns[mv.from.row][mv.from.col] = None;
        if Board::is_camp(mv.to.row, mv.to.col) {
            // Entering a camp retires the pawn from the board
            self.camps.fill(self.current_player, mv.to);
        } else {
            self.pawns[mv.to.row][mv.to.col] = Some(self.current_player);
        }

        self.selected = None;
        self.move_count += 1;
        self.check_game_end();
        if self.result.is_none() {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.winner())
    }

    /// Validate and commit one Isolation placement for the current player
    pub fn apply_placement(&mut self, pos: Position) -> Result<Option<Player>, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        if self.config.variant != Variant::Isolation {
            return Err(GameError::IllegalMove(
                "placement is only legal in Isolation".to_string(),
            ));
        }
        if !self.is_safe(pos) {
            return Err(GameError::IllegalMove(format!(
                "{} is not a safe empty cell",
                pos
            )));
        }

        self.pawns[pos.row][pos.col] = Some(self.current_player);
        self.selected = None;
        self.move_count += 1;

        // The mover wins outright when no safe cell is left for the opponent
        if self.safe_cells().is_empty() {
            self.result = Some(GameResult::win(self.current_player));
        } else {
            self.current_player = self.current_player.opponent();
        }

        Ok(self.winner())
    }

    pub fn apply_action(&mut self, action: Action) -> Result<Option<Player>, GameError> {
        match action {
            Action::Move(mv) => self.apply_move(mv),
            Action::Place(pos) => self.apply_placement(pos),
        }
    }

    /// Every legal action for `player`: move pairs in the movement variants,
    /// safe placements in Isolation
    pub fn legal_actions(&self, player: Player) -> Vec<Action> {
        if self.result.is_some() {
            return Vec::new();
        }
        match self.config.variant {
            Variant::Isolation => self.safe_cells().into_iter().map(Action::Place).collect(),
            _ => {
                let mut actions = Vec::new();
                for from in self.player_pawns(player) {
                    for to in self.legal_destinations(from) {
                        actions.push(Action::Move(Move::new(from, to)));
                    }
                }
                actions
            }
        }
    }

    /// A cell is safe when no pawn on the board reaches it through the
    /// movement template of its own square
    pub fn is_safe(&self, pos: Position) -> bool {
        if !Board::is_interior(pos.row, pos.col) || self.pawn_at(pos).is_some() {
            return false;
        }
        for row in INTERIOR_MIN..=INTERIOR_MAX {
            for col in INTERIOR_MIN..=INTERIOR_MAX {
                let from = Position::new(row, col);
                if self.pawns[row][col].is_some() && self.attacked_from(from).contains(&pos) {
                    return false;
                }
            }
        }
        true
    }

    pub fn safe_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        for row in INTERIOR_MIN..=INTERIOR_MAX {
            for col in INTERIOR_MIN..=INTERIOR_MAX {
                let pos = Position::new(row, col);
                if self.is_safe(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// Pure reachability of the pawn at `from`: the movement template of its
    /// square, with occupied and same-colored cells evaluated before they
    /// end a slide. Ownership and turn order play no part.
    fn attacked_from(&self, from: Position) -> Vec<Position> {
        let Some(color) = self.config.board.color_at(from.row, from.col) else {
            return Vec::new();
        };
        match color.template() {
            Template::King => self.step_reach(from, &KING_OFFSETS),
            Template::Knight => self.step_reach(from, &KNIGHT_OFFSETS),
            Template::Rook => self.slide_reach(from, &ORTHOGONAL, color),
            Template::Bishop => self.slide_reach(from, &DIAGONAL, color),
        }
    }

    fn step_reach(&self, from: Position, offsets: &[(i32, i32)]) -> Vec<Position> {
        let mut reached = Vec::new();
        for &(dr, dc) in offsets {
            let row = from.row as i32 + dr;
            let col = from.col as i32 + dc;
            if Self::interior(row, col) {
                reached.push(Position::new(row as usize, col as usize));
            }
        }
        reached
    }

    fn slide_reach(
        &self,
        from: Position,
        directions: &[(i32, i32)],
        stop_color: Color,
    ) -> Vec<Position> {
        let mut reached = Vec::new();
        for &(dr, dc) in directions {
            let mut row = from.row as i32 + dr;
            let mut col = from.col as i32 + dc;
            while Self::interior(row, col) {
                let to = Position::new(row as usize, col as usize);
                reached.push(to);
                if self.pawn_at(to).is_some()
                    || self.config.board.color_at(to.row, to.col) == Some(stop_color)
                {
                    break;
                }
                row += dr;
                col += dc;
            }
        }
        reached
    }

    /// Score an Isolation position where nobody can place any more: strict
    /// pawn majority wins, equal counts draw. None while a safe cell remains
    /// or for the movement variants. Used for resumed positions that were
    /// not produced by an immediately-preceding placement.
    pub fn exhaustion_result(&self) -> Option<GameResult> {
        if self.config.variant != Variant::Isolation || !self.safe_cells().is_empty() {
            return None;
        }
        let one = self.count_pawns(Player::One);
        let two = self.count_pawns(Player::Two);
        Some(if one > two {
            GameResult::PlayerOneWin
        } else if two > one {
            GameResult::PlayerTwoWin
        } else {
            GameResult::Draw
        })
    }

    fn check_game_end(&mut self) {
        match self.config.variant {
            Variant::Katarenga => self.check_katarenga_end(),
            Variant::Congress => self.check_congress_end(),
            Variant::Isolation => {} // handled inside apply_placement
        }
    }

    fn check_katarenga_end(&mut self) {
        // Camp-fill victory takes priority
        for player in [Player::One, Player::Two] {
            if self.camps.both_filled(player) {
                self.result = Some(GameResult::win(player));
                return;
            }
        }

        // Elimination: down to the last on-board pawn with nothing banked,
        // or no on-board pawns at all
        for player in [Player::One, Player::Two] {
            let on_board = self.count_pawns(player);
            let banked = self.camps.banked(player);
            if on_board == 0 || (on_board == 1 && banked == 0) {
                self.result = Some(GameResult::win(player.opponent()));
                return;
            }
        }
    }

    fn check_congress_end(&mut self) {
        for player in [Player::One, Player::Two] {
            let pawns = self.player_pawns(player);
            let Some(&seed) = pawns.first() else {
                continue;
            };
            if self.connected_group(seed, player).len() == pawns.len() {
                self.result = Some(GameResult::win(player));
                return;
            }
        }
    }

    /// All of `player`'s pawns reachable from `seed` through 4-directional
    /// adjacency. Empty when `seed` is not that player's pawn.
    pub fn connected_group(&self, seed: Position, player: Player) -> Vec<Position> {
        if self.pawn_at(seed) != Some(player) {
            return Vec::new();
        }
        let mut visited = vec![seed];
        let mut stack = vec![seed];
        while let Some(pos) = stack.pop() {
            for &(dr, dc) in &ORTHOGONAL {
                let row = pos.row as i32 + dr;
                let col = pos.col as i32 + dc;
                if !Self::interior(row, col) {
                    continue;
                }
                let next = Position::new(row as usize, col as usize);
                if self.pawn_at(next) == Some(player) && !visited.contains(&next) {
                    visited.push(next);
                    stack.push(next);
                }
            }
        }
        visited
    }

    /// Text rendering of the frame for logs and demos
    pub fn display_board(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("[{}]\n", self.config.variant.name()));
        out.push_str("   ");
        for col in 0..FRAME_SIZE {
            out.push_str(&format!("{:2} ", col));
        }
        out.push('\n');

        for row in 0..FRAME_SIZE {
            out.push_str(&format!("{:2} ", row));
            for col in 0..FRAME_SIZE {
                let pos = Position::new(row, col);
                let cell = if Board::is_camp(row, col) && self.config.variant == Variant::Katarenga
                {
                    let owner = [Player::One, Player::Two]
                        .into_iter()
                        .find(|&player| Camps::positions(player).contains(&pos));
                    match owner {
                        Some(player) if self.camps.is_filled(player, pos) => {
                            (b'0' + player.number()) as char
                        }
                        Some(_) => '+',
                        None => ' ',
                    }
                } else if Board::is_interior(row, col) {
                    match self.pawns[row][col] {
                        Some(player) => (b'0' + player.number()) as char,
                        None => '.',
                    }
                } else {
                    ' '
                };
                out.push_str(&format!(" {} ", cell));
            }
            out.push('\n');
        }

        out
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_katarenga()
    }
}
