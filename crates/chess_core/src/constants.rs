//! Board constants and direction tables

/// Standard initial position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Position 2 from the perft suite ("Kiwipete")
pub const KIWIPETE_FEN: &str =
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

pub const BOARD_SIZE: u8 = 8;
pub const SQUARE_COUNT: usize = 64;

/// Rook directions as (rank delta, file delta). Rank 0 is the top of the board.
pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions as (rank delta, file delta)
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// All eight neighbours, used by the king
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// File of both kings at the start
pub const KING_HOME_FILE: u8 = 4;
/// Corner file of the rook castling toward the a-file
pub const LEFT_ROOK_FILE: u8 = 0;
/// Corner file of the rook castling toward the h-file
pub const RIGHT_ROOK_FILE: u8 = 7;

/// Largest halfmove clock or fullmove number accepted from a position string
pub const MAX_MOVE_COUNTER: u32 = 1_000_000;
