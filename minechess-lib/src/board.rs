//! board.rs：
//! - 負責 8×8 棋盤格線與棋子的存放、查詢與搬動。
//! - 不負責走法計算與落子結算（見 action 子模組）。
use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<Option<Piece>>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: vec![vec![None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 標準開局：y=0 為黑方底線，y=6 為白兵起始列
    pub fn standard() -> Self {
        use PieceKind::*;
        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        let mut board = Board::empty();
        for (x, kind) in back_rank.into_iter().enumerate() {
            board.set(Pos { x, y: 0 }, Some(Piece::new(Color::Black, kind)));
            board.set(
                Pos { x, y: BOARD_SIZE - 1 },
                Some(Piece::new(Color::White, kind)),
            );
        }
        for x in 0..BOARD_SIZE {
            board.set(Pos { x, y: 1 }, Some(Piece::new(Color::Black, Pawn)));
            board.set(
                Pos { x, y: BOARD_SIZE - 2 },
                Some(Piece::new(Color::White, Pawn)),
            );
        }
        board
    }

    pub fn is_valid_position(pos: Pos) -> bool {
        pos.x < BOARD_SIZE && pos.y < BOARD_SIZE
    }

    pub fn get(&self, pos: Pos) -> Option<Piece> {
        let Pos { x, y } = pos;
        *self.grid.get(y)?.get(x)?
    }

    pub fn set(&mut self, pos: Pos, piece: Option<Piece>) {
        let Pos { x, y } = pos;
        if let Some(cell) = self.grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = piece;
        }
    }

    /// 取走棋子，原格清空
    pub fn take(&mut self, pos: Pos) -> Option<Piece> {
        let Pos { x, y } = pos;
        self.grid.get_mut(y)?.get_mut(x)?.take()
    }

    pub fn has_king(&self, color: Color) -> bool {
        let king = Piece::new(color, PieceKind::King);
        self.grid
            .iter()
            .any(|row| row.iter().any(|cell| *cell == Some(king)))
    }

    pub fn piece_count(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|cell| cell.is_some()).count())
            .sum()
    }

    /// 走訪所有有棋子的格子
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        self.grid.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|piece| (Pos { x, y }, piece)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.get(Pos { x: 4, y: 0 }),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board.get(Pos { x: 4, y: 7 }),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get(Pos { x: 3, y: 7 }),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        for x in 0..BOARD_SIZE {
            assert_eq!(
                board.get(Pos { x, y: 1 }),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
            assert_eq!(
                board.get(Pos { x, y: 6 }),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
        }
        // 中央四列為空
        for y in 2..6 {
            for x in 0..BOARD_SIZE {
                assert_eq!(board.get(Pos { x, y }), None, "({x}, {y}) 應為空格");
            }
        }
    }

    #[test]
    fn test_bounds() {
        let board = Board::standard();
        assert!(Board::is_valid_position(Pos { x: 7, y: 7 }));
        assert!(!Board::is_valid_position(Pos { x: 8, y: 0 }));
        assert!(!Board::is_valid_position(Pos { x: 0, y: 8 }));
        assert_eq!(board.get(Pos { x: 8, y: 8 }), None);
    }

    #[test]
    fn test_take_and_king_scan() {
        let mut board = Board::standard();
        assert!(board.has_king(Color::White));
        assert!(board.has_king(Color::Black));

        let taken = board.take(Pos { x: 4, y: 0 });
        assert_eq!(taken, Some(Piece::new(Color::Black, PieceKind::King)));
        assert_eq!(board.get(Pos { x: 4, y: 0 }), None);
        assert!(!board.has_king(Color::Black));
        assert!(board.has_king(Color::White));
        assert_eq!(board.piece_count(), 31);
    }
}
