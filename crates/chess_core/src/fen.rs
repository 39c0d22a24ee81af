//! Position strings (FEN)
//!
//! Six space-separated fields: placement, side to move, castling rights,
//! en-passant target, halfmove clock, fullmove number. The same format is used
//! for loading and saving.
//!
//! Castling rights are not stored separately. On load they become `has_moved`
//! flags on kings and corner rooks; on save they are read back from the kings'
//! castling categories, in the fixed order `KQkq`.

use tracing::debug;

use crate::board::SquareId;
use crate::constants::{BOARD_SIZE, KING_HOME_FILE, LEFT_ROOK_FILE, MAX_MOVE_COUNTER, RIGHT_ROOK_FILE};
use crate::error::FenError;
use crate::position::Position;
use crate::types::{Color, MoveCategory, PieceKind};

/// Builds a position from a position string. Fails before any state is built.
pub fn parse_fen(fen: &str) -> Result<Position, FenError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(FenError::FieldCount { found: fields.len() });
    }

    let placement = parse_placement(fields[0])?;
    for color in Color::BOTH {
        let found = placement
            .iter()
            .filter(|(_, c, k)| *c == color && *k == PieceKind::King)
            .count();
        if found != 1 {
            let color = match color {
                Color::White => "white",
                Color::Black => "black",
            };
            return Err(FenError::KingCount { color, found });
        }
    }

    let turn = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => return Err(FenError::InvalidSideToMove { field: other.to_string() }),
    };

    let mut pos = Position::empty();
    pos.turn = turn;
    for &(square, color, kind) in &placement {
        pos.add_piece(color, kind, square);
    }

    apply_castling(&mut pos, fields[2])?;
    apply_en_passant(&mut pos, fields[3])?;

    pos.halfmoves = parse_counter("halfmove", fields[4], 0)?;
    pos.fullmoves = parse_counter("fullmove", fields[5], 1)?;

    pos.rebuild_all();
    debug!("[FEN] Loaded position: {}", fen);
    Ok(pos)
}

/// Counter in `min..=MAX_MOVE_COUNTER`.
fn parse_counter(name: &'static str, field: &str, min: u32) -> Result<u32, FenError> {
    match field.parse::<u32>() {
        Ok(n) if (min..=MAX_MOVE_COUNTER).contains(&n) => Ok(n),
        _ => Err(FenError::InvalidCounter { name, field: field.to_string() }),
    }
}

fn parse_placement(field: &str) -> Result<Vec<(SquareId, Color, PieceKind)>, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != BOARD_SIZE as usize {
        return Err(FenError::RankCount { found: ranks.len() });
    }

    let mut placement = Vec::with_capacity(32);
    for (rank, row) in ranks.iter().enumerate() {
        let mut width = 0usize;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                width += skip as usize;
                continue;
            }
            let (kind, color) = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { letter: c })?;
            if width >= BOARD_SIZE as usize {
                return Err(FenError::RankWidth { rank, width: width + 1 });
            }
            let square = SquareId::from_coords(rank as u8, width as u8);
            if kind == PieceKind::Pawn && (rank == 0 || rank == BOARD_SIZE as usize - 1) {
                return Err(FenError::PawnOnBackRank { square });
            }
            placement.push((square, color, kind));
            width += 1;
        }
        if width != BOARD_SIZE as usize {
            return Err(FenError::RankWidth { rank, width });
        }
    }
    Ok(placement)
}

/// Turns the castling field into `has_moved` flags on kings and rooks.
fn apply_castling(pos: &mut Position, field: &str) -> Result<(), FenError> {
    let invalid = || FenError::InvalidCastling { field: field.to_string() };

    // (color, rook file) for each granted right
    let mut rights: Vec<(Color, u8)> = Vec::with_capacity(4);
    if field != "-" {
        for c in field.chars() {
            let right = match c {
                'K' => (Color::White, RIGHT_ROOK_FILE),
                'Q' => (Color::White, LEFT_ROOK_FILE),
                'k' => (Color::Black, RIGHT_ROOK_FILE),
                'q' => (Color::Black, LEFT_ROOK_FILE),
                _ => return Err(invalid()),
            };
            if rights.contains(&right) {
                return Err(invalid());
            }
            rights.push(right);
        }
    }

    for &(color, file) in &rights {
        let home = color.home_rank();
        let king_ok = pos
            .piece_at(SquareId::from_coords(home, KING_HOME_FILE))
            .is_some_and(|p| p.kind == PieceKind::King && p.color == color);
        let rook_ok = pos
            .piece_at(SquareId::from_coords(home, file))
            .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
        if !king_ok || !rook_ok {
            return Err(invalid());
        }
    }

    let ids: Vec<_> = pos.live_pieces().map(|p| p.id).collect();
    for id in ids {
        let piece = pos.piece(id);
        let (color, square) = (piece.color, piece.square);
        let has_moved = match piece.kind {
            PieceKind::King => !rights.iter().any(|&(c, _)| c == color),
            PieceKind::Rook => {
                !(square.rank() == color.home_rank() && rights.contains(&(color, square.file())))
            }
            _ => false,
        };
        pos.piece_mut(id).flags.has_moved = has_moved;
    }
    Ok(())
}

/// Marks the pawn in front of the en-passant target as the double-pushed pawn.
fn apply_en_passant(pos: &mut Position, field: &str) -> Result<(), FenError> {
    if field == "-" {
        return Ok(());
    }
    let invalid = || FenError::InvalidEnPassant { field: field.to_string() };

    let target = SquareId::from_algebraic(field).ok_or_else(invalid)?;
    let pusher = pos.turn.opposite();
    // The target sits directly behind the pushed pawn, one step past its start rank.
    let skipped_rank = pusher.pawn_start_rank() as i8 + pusher.forward();
    if target.rank() as i8 != skipped_rank || !pos.board.is_empty(target) {
        return Err(invalid());
    }
    // The pawn's start square was vacated by the push.
    let start = target.offset(-pusher.forward(), 0).ok_or_else(invalid)?;
    if !pos.board.is_empty(start) {
        return Err(invalid());
    }

    let pawn = target
        .offset(pusher.forward(), 0)
        .and_then(|sq| pos.piece_at(sq))
        .filter(|p| p.kind == PieceKind::Pawn && p.color == pusher)
        .map(|p| p.id)
        .ok_or_else(invalid)?;

    pos.piece_mut(pawn).flags.moved_two = true;
    pos.ep_pawn = Some(pawn);
    Ok(())
}

/// Serializes a position.
pub fn to_fen(pos: &Position) -> String {
    let mut out = String::with_capacity(90);

    for rank in 0..BOARD_SIZE {
        if rank > 0 {
            out.push('/');
        }
        let mut empty = 0;
        for file in 0..BOARD_SIZE {
            match pos.piece_at(SquareId::from_coords(rank, file)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.kind.to_char(piece.color));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
    }

    out.push(' ');
    out.push(match pos.turn {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    out.push_str(&castling_rights(pos));

    out.push(' ');
    match pos.ep_target() {
        Some(target) => out.push_str(&target.to_string()),
        None => out.push('-'),
    }

    out.push_str(&format!(" {} {}", pos.halfmoves, pos.fullmoves));
    out
}

/// `KQkq` subset derived from the kings' castling categories.
pub fn castling_rights(pos: &Position) -> String {
    let mut rights = String::with_capacity(4);
    for color in Color::BOTH {
        let Some(king) = pos.king_of(color) else {
            continue;
        };
        if !king.moves.get(MoveCategory::RightCastle).is_empty() {
            rights.push(PieceKind::King.to_char(color));
        }
        if !king.moves.get(MoveCategory::LeftCastle).is_empty() {
            rights.push(PieceKind::Queen.to_char(color));
        }
    }
    if rights.is_empty() {
        rights.push('-');
    }
    rights
}
