//! Hex board geometry with axial coordinates and the dense board store

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{Result, ReversiError};

/// Smallest side length that still gives a playable board
pub const MIN_BOARD_SIZE: usize = 3;

/// Axial hex coordinates. The third cube coordinate is `s = -q - r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived third coordinate
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Check if this hex exists on a board of the given side length
    pub fn is_on_board(&self, size: usize) -> bool {
        let n = size as i64;
        let (q, r) = (self.q as i64, self.r as i64);
        -n < q && q < n && -n < r && r < n && (q + r).abs() < n
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: usize) -> Hex {
        let (dq, dr) = DIRECTIONS[direction % 6];
        Hex::new(self.q + dq, self.r + dr)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Direction vectors in axial coordinates (dq, dr), one pair per fixed axis.
/// The implied ds is always `-dq - dr`.
pub const DIRECTIONS: [(i32, i32); 6] = [
    (0, -1),  // q fixed, r descending
    (0, 1),   // q fixed, r ascending
    (1, 0),   // r fixed, q ascending
    (-1, 0),  // r fixed, q descending
    (1, -1),  // s fixed, q ascending
    (-1, 1),  // s fixed, q descending
];

/// Starting tiles: two interleaved triads around the origin
const BLACK_START: [Hex; 3] = [Hex::new(1, 0), Hex::new(0, -1), Hex::new(-1, 1)];
const WHITE_START: [Hex; 3] = [Hex::new(1, -1), Hex::new(-1, 0), Hex::new(0, 1)];

/// Number of cells on a hexagonal board of side length `size`
pub fn cell_count(size: usize) -> usize {
    3 * size * size - 3 * size + 1
}

/// Board store: every on-board hex maps to a cell.
///
/// Backed by a dense `(2N-1)²` array indexed by an affine transform of
/// `(q, r)`. Slots outside the hexagon are never addressed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a board with the standard six-tile start
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE || size > i32::MAX as usize / 2 {
            return Err(ReversiError::InvalidSize { size });
        }

        let width = 2 * size - 1;
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; width * width],
        };

        for hex in BLACK_START {
            board.set(hex, Cell::Black);
        }
        for hex in WHITE_START {
            board.set(hex, Cell::White);
        }

        Ok(board)
    }

    /// Side length used at construction
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, hex: Hex) -> bool {
        hex.is_on_board(self.size)
    }

    /// Get the cell at a hex
    pub fn get(&self, hex: Hex) -> Result<Cell> {
        self.index(hex)
            .map(|idx| self.cells[idx])
            .ok_or(ReversiError::UnknownCoordinate { q: hex.q, r: hex.r })
    }

    /// Overwrite a cell. Off-board hexes are ignored.
    pub(crate) fn set(&mut self, hex: Hex, cell: Cell) {
        if let Some(idx) = self.index(hex) {
            self.cells[idx] = cell;
        }
    }

    /// Iterate all on-board coordinates, row by row (r outer, q inner)
    pub fn coords(&self) -> impl Iterator<Item = Hex> + '_ {
        let n = self.size as i32;
        (-n + 1..n)
            .flat_map(move |r| (-n + 1..n).map(move |q| Hex::new(q, r)))
            .filter(move |hex| hex.is_on_board(self.size))
    }

    /// Iterate (hex, cell) pairs in the same order as `coords`
    pub fn cells(&self) -> impl Iterator<Item = (Hex, Cell)> + '_ {
        self.coords().map(move |hex| (hex, self.cells[self.slot(hex)]))
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells().filter(|&(_, c)| c == cell).count()
    }

    pub fn cell_count(&self) -> usize {
        cell_count(self.size)
    }

    /// Independent copy of the whole board
    pub fn snapshot(&self) -> FxHashMap<Hex, Cell> {
        self.cells().collect()
    }

    /// The six corner cells
    pub fn corners(&self) -> [Hex; 6] {
        let m = self.size as i32 - 1;
        [
            Hex::new(m, 0),
            Hex::new(m, -m),
            Hex::new(0, -m),
            Hex::new(-m, 0),
            Hex::new(-m, m),
            Hex::new(0, m),
        ]
    }

    pub fn is_corner(&self, hex: Hex) -> bool {
        self.corners().contains(&hex)
    }

    /// True for non-corner cells touching a corner
    pub fn is_adjacent_to_corner(&self, hex: Hex) -> bool {
        !self.is_corner(hex)
            && self.contains(hex)
            && (0..6).any(|dir| self.is_corner(hex.neighbor(dir)))
    }

    fn index(&self, hex: Hex) -> Option<usize> {
        self.contains(hex).then(|| self.slot(hex))
    }

    fn slot(&self, hex: Hex) -> usize {
        let offset = self.size as i32 - 1;
        let width = 2 * self.size - 1;
        (hex.q + offset) as usize * width + (hex.r + offset) as usize
    }
}
