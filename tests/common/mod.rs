//! Knight's Isolation board shared by the integration tests and benches.
//!
//! An 11x9 board where both players first place their piece on any open
//! cell, then alternate knight jumps. Every cell a piece has occupied stays
//! blocked for the rest of the game; the first player left without a jump
//! loses. Open cells live in a single `u128` bitboard.
#![allow(dead_code)]

use isolation_engine::game_repr::{Cell, GameState, PlayerId, Score};
use smallvec::SmallVec;

pub const WIDTH: u8 = 11;
pub const HEIGHT: u8 = 9;
pub const CELL_COUNT: u8 = WIDTH * HEIGHT;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Clone, Debug)]
pub struct IsolationState {
    /// Bit i set = cell i is open.
    open: u128,
    locs: [Option<Cell>; 2],
    ply: u32,
}

impl IsolationState {
    pub fn new() -> Self {
        Self {
            open: (1u128 << CELL_COUNT) - 1,
            locs: [None, None],
            ply: 0,
        }
    }

    /// Fresh board with the given cells pre-blocked.
    pub fn with_blocked(blocked: &[Cell]) -> Self {
        let mut state = Self::new();
        for &cell in blocked {
            state.open &= !(1u128 << cell.0);
        }
        state
    }

    /// Fresh board where only the given cells are open.
    pub fn with_only_open(open: &[u8]) -> Self {
        let mut state = Self::new();
        state.open = 0;
        for &cell in open {
            state.open |= 1u128 << cell;
        }
        state
    }

    /// Apply a sequence of actions from the initial position.
    pub fn after_moves(moves: &[u8]) -> Self {
        moves
            .iter()
            .fold(Self::new(), |state, &cell| state.result(Cell(cell)))
    }

    pub fn active_player(&self) -> PlayerId {
        if self.ply % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    fn is_open(&self, cell: Cell) -> bool {
        self.open & (1u128 << cell.0) != 0
    }

    fn player_index(player: PlayerId) -> usize {
        match player {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    fn knight_reach(cell: Cell) -> SmallVec<[Cell; 8]> {
        let row = (cell.0 / WIDTH) as i8;
        let col = (cell.0 % WIDTH) as i8;
        let mut reach = SmallVec::new();
        for (dr, dc) in KNIGHT_OFFSETS {
            let (r, c) = (row + dr, col + dc);
            if (0..HEIGHT as i8).contains(&r) && (0..WIDTH as i8).contains(&c) {
                reach.push(Cell((r as u8) * WIDTH + c as u8));
            }
        }
        reach
    }
}

impl Default for IsolationState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for IsolationState {
    type Action = Cell;

    fn ply_count(&self) -> u32 {
        self.ply
    }

    fn loc(&self, player: PlayerId) -> Cell {
        self.locs[Self::player_index(player)].expect("player has not placed yet")
    }

    fn actions(&self) -> Vec<Cell> {
        match self.locs[Self::player_index(self.active_player())] {
            // Placement ply: any open cell
            None => (0..CELL_COUNT)
                .map(Cell)
                .filter(|&cell| self.is_open(cell))
                .collect(),
            Some(loc) => self.liberties(loc).into_vec(),
        }
    }

    fn result(&self, action: Cell) -> Self {
        let mut next = self.clone();
        next.open &= !(1u128 << action.0);
        next.locs[Self::player_index(self.active_player())] = Some(action);
        next.ply += 1;
        next
    }

    fn is_terminal(&self) -> bool {
        self.ply >= 2 && self.actions().is_empty()
    }

    fn utility(&self, player: PlayerId) -> Score {
        // The player stuck without a jump is the player to move.
        if self.active_player() == player {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        }
    }

    fn liberties(&self, cell: Cell) -> SmallVec<[Cell; 8]> {
        Self::knight_reach(cell)
            .into_iter()
            .filter(|&target| self.is_open(target))
            .collect()
    }
}
