use std::fmt;

use thiserror::Error;

use crate::types::*;

/// Errors from [`Position::from_fen`].
#[derive(Debug, Error)]
pub enum FenError {
    #[error("FEN needs at least piece placement and side to move")]
    MissingFields,
    #[error("FEN board must describe 8 ranks")]
    BadRankCount,
    #[error("FEN rank does not describe exactly 8 files: {0:?}")]
    BadRankWidth(String),
    #[error("invalid piece character in FEN: {0:?}")]
    BadPiece(char),
    #[error("invalid side to move in FEN: {0:?}")]
    BadSideToMove(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
}

/// Everything needed to reverse one [`Position::make_move`] exactly.
/// Consumed by the matching `unmake_move`; the pair must nest strictly
/// (last made, first unmade).
#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub moved_piece: Piece,
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
        };

        // Pawns
        for f in 0..8 {
            p.board[8 + f] = Some(Piece {
                color: Color::White,
                kind: PieceKind::Pawn,
            });
            p.board[48 + f] = Some(Piece {
                color: Color::Black,
                kind: PieceKind::Pawn,
            });
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece {
                color: Color::White,
                kind,
            });
            p.board[56 + f] = Some(Piece {
                color: Color::Black,
                kind,
            });
        }
        p
    }

    /// Parses the piece-placement and side-to-move fields of a FEN string.
    ///
    /// Castling, en-passant and move-counter fields are accepted and
    /// ignored: this rule set does not track them, and tolerating them keeps
    /// standard six-field FEN strings usable in tests.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let board_part = parts.next().ok_or(FenError::MissingFields)?;
        let stm_part = parts.next().ok_or(FenError::MissingFields)?;

        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::BadRankCount);
        }

        let mut board = [None; 64];
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as i8;
                } else {
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(FenError::BadPiece(ch)),
                    };
                    let sq = sq(file, rank)
                        .ok_or_else(|| FenError::BadRankWidth((*rank_str).to_string()))?;
                    board[sq as usize] = Some(Piece { color, kind });
                    file += 1;
                }
                if file > 8 {
                    return Err(FenError::BadRankWidth((*rank_str).to_string()));
                }
            }
            if file != 8 {
                return Err(FenError::BadRankWidth((*rank_str).to_string()));
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::BadSideToMove(stm_part.to_string())),
        };

        Ok(Position {
            board,
            side_to_move,
        })
    }

    /// Exports the two FEN fields this position model carries:
    /// piece placement and side to move.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                let s = (rank * 8 + file) as u8;
                match self.piece_at(s) {
                    None => empty += 1,
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece_char(pc));
                    }
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        (0..64u8).find(|&i| {
            matches!(self.piece_at(i), Some(pc) if pc.color == c && pc.kind == PieceKind::King)
        })
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: u8, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// True if `c`'s king is attacked.
    ///
    /// # Panics
    /// A board without a king for `c` violates the reachability invariant;
    /// querying it is a caller bug.
    pub fn in_check(&self, c: Color) -> bool {
        let ksq = self
            .king_sq(c)
            .expect("in_check queried for a color with no king on the board");
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: u8, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // Pawn attacks: a pawn of `by` attacks `target` from one rank behind
        // it (relative to its own push direction) on an adjacent file.
        let pawn_dirs: &[(i8, i8)] = match by {
            Color::White => &[(-1, -1), (1, -1)],
            Color::Black => &[(-1, 1), (1, 1)],
        };
        for &(df, dr) in pawn_dirs {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::Pawn
            {
                return true;
            }
        }

        // Knight attacks
        for (df, dr) in KNIGHT_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::Knight
            {
                return true;
            }
        }

        // King adjacency
        for (df, dr) in KING_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr)
                && let Some(pc) = self.piece_at(s)
                && pc.color == by
                && pc.kind == PieceKind::King
            {
                return true;
            }
        }

        // Sliding: bishop/rook/queen
        for (df, dr) in DIAG_DIRS {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(sq2) = sq(f, r) {
                if let Some(pc) = self.piece_at(sq2) {
                    if pc.color == by
                        && (pc.kind == PieceKind::Bishop || pc.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }
        for (df, dr) in ORTHO_DIRS {
            let mut f = tf + df;
            let mut r = tr + dr;
            while let Some(sq2) = sq(f, r) {
                if let Some(pc) = self.piece_at(sq2) {
                    if pc.color == by && (pc.kind == PieceKind::Rook || pc.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
                f += df;
                r += dr;
            }
        }

        false
    }

    /// Applies `mv` in place: moves the piece, removes any captured piece,
    /// replaces a pawn arriving on the last rank with the promotion kind,
    /// and flips the side to move.
    ///
    /// Legality is not re-checked; `mv` must come from `legal_moves` for
    /// this exact position. An empty origin square panics.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self.piece_at(mv.from).expect("no piece on from-square");
        let captured = self.piece_at(mv.to);

        self.set_piece(mv.from, None);
        self.set_piece(mv.to, Some(moved));

        if moved.kind == PieceKind::Pawn {
            let r = rank_of(mv.to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                let kind = mv.promo.unwrap_or(PieceKind::Queen);
                self.set_piece(
                    mv.to,
                    Some(Piece {
                        color: moved.color,
                        kind,
                    }),
                );
            }
        }

        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            moved_piece: moved,
        }
    }

    /// Reverses the paired `make_move` exactly. Must be called with the
    /// `Undo` that call returned, before any other mutation of `self`.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        // Restoring the recorded piece undoes a promotion as a side effect.
        self.set_piece(mv.from, Some(undo.moved_piece));
        self.set_piece(mv.to, undo.captured);
    }
}

fn piece_char(pc: Piece) -> char {
    let ch = match pc.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match pc.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}

impl fmt::Display for Position {
    /// ASCII diagram: uppercase white, lowercase black, `.` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let s = (rank * 8 + file) as u8;
                let ch = match self.piece_at(s) {
                    Some(pc) => piece_char(pc),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
