//! movegen.rs：
//! - 負責各棋種的走法計算（可達格與吃子標記）。
//! - 只看棋盤佔據情況，不看地雷與勝負狀態；踩雷是結算期（apply）的效果。
//! - 不做王車易位、吃過路兵、升變，也不判斷將軍。
use crate::*;

const ROOK_DIRS: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const BISHOP_DIRS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];
const KING_STEPS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveTarget {
    pub pos: Pos,
    pub is_capture: bool,
}

/// 計算 from 位置棋子的所有可達格
/// 空格或超界回傳空集合，不視為錯誤
pub fn generate_moves(board: &Board, from: Pos) -> Vec<MoveTarget> {
    let mut moves = Vec::new();
    let Some(piece) = board.get(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut moves),
        PieceKind::Rook => sliding_moves(board, from, piece.color, &ROOK_DIRS, &mut moves),
        PieceKind::Bishop => sliding_moves(board, from, piece.color, &BISHOP_DIRS, &mut moves),
        PieceKind::Queen => {
            sliding_moves(board, from, piece.color, &ROOK_DIRS, &mut moves);
            sliding_moves(board, from, piece.color, &BISHOP_DIRS, &mut moves);
        }
        PieceKind::Knight => step_moves(board, from, piece.color, &KNIGHT_JUMPS, &mut moves),
        PieceKind::King => step_moves(board, from, piece.color, &KING_STEPS, &mut moves),
    }
    moves
}

use inner::*;
mod inner {
    use super::*;

    /// 位移後仍在棋盤內才回傳座標
    pub fn offset(from: Pos, dx: isize, dy: isize) -> Option<Pos> {
        let x = from.x as isize + dx;
        let y = from.y as isize + dy;
        if x < 0 || y < 0 {
            return None;
        }
        let pos = Pos {
            x: x as usize,
            y: y as usize,
        };
        Board::is_valid_position(pos).then_some(pos)
    }

    /// 兵：前進一步（空格）、起始列前進兩步（兩格皆空）、斜前吃子
    pub fn pawn_moves(board: &Board, from: Pos, color: Color, moves: &mut Vec<MoveTarget>) {
        let (dir, start_row) = match color {
            Color::White => (-1, BOARD_SIZE - 2),
            Color::Black => (1, 1),
        };

        if let Some(one) = offset(from, 0, dir) {
            if board.get(one).is_none() {
                moves.push(MoveTarget {
                    pos: one,
                    is_capture: false,
                });

                if from.y == start_row {
                    if let Some(two) = offset(from, 0, 2 * dir) {
                        if board.get(two).is_none() {
                            moves.push(MoveTarget {
                                pos: two,
                                is_capture: false,
                            });
                        }
                    }
                }
            }
        }

        for dx in [-1, 1] {
            let Some(pos) = offset(from, dx, dir) else {
                continue;
            };
            if let Some(target) = board.get(pos) {
                if target.color != color {
                    moves.push(MoveTarget {
                        pos,
                        is_capture: true,
                    });
                }
            }
        }
    }

    /// 滑行棋種：沿方向前進直到被擋
    /// 空格是普通移動，第一個佔據格若是敵方則為吃子，己方則整條射線結束
    pub fn sliding_moves(
        board: &Board,
        from: Pos,
        color: Color,
        dirs: &[(isize, isize)],
        moves: &mut Vec<MoveTarget>,
    ) {
        for &(dx, dy) in dirs {
            let mut current = from;
            while let Some(pos) = offset(current, dx, dy) {
                match board.get(pos) {
                    None => {
                        moves.push(MoveTarget {
                            pos,
                            is_capture: false,
                        });
                        current = pos;
                    }
                    Some(target) => {
                        if target.color != color {
                            moves.push(MoveTarget {
                                pos,
                                is_capture: true,
                            });
                        }
                        break;
                    }
                }
            }
        }
    }

    /// 跳躍棋種（馬、王）：固定位移，己方佔據則跳過
    pub fn step_moves(
        board: &Board,
        from: Pos,
        color: Color,
        offsets: &[(isize, isize)],
        moves: &mut Vec<MoveTarget>,
    ) {
        for &(dx, dy) in offsets {
            let Some(pos) = offset(from, dx, dy) else {
                continue;
            };
            match board.get(pos) {
                None => moves.push(MoveTarget {
                    pos,
                    is_capture: false,
                }),
                Some(target) => {
                    if target.color != color {
                        moves.push(MoveTarget {
                            pos,
                            is_capture: true,
                        });
                    }
                }
            }
        }
    }
}
