//! piece.rs：
//! - 定義棋子（Piece）的顏色與種類，以及代號（`wP`、`bK`）與符號（`♙`、`♚`）轉換。
//! - 僅負責靜態資料與轉換，不含走法或結算邏輯。
use crate::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, Display, EnumIter, PartialEq, Eq, Hash,
)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// 代號首字母（`w` / `b`）
    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// 顯示用名稱
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "白",
            Color::Black => "黑",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Display, EnumIter, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// 代號次字母（`P`、`R`、`N`、`B`、`Q`、`K`）
    pub fn code(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }

    /// 兩字元代號，如 `wP`、`bK`
    pub fn code(&self) -> String {
        format!("{}{}", self.color.code(), self.kind.code())
    }

    /// 解析兩字元代號
    pub fn from_code(code: &str) -> Result<Self, Error> {
        let func = "Piece::from_code";

        let mut chars = code.chars();
        let (Some(color), Some(kind), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(Error::BadScenario {
                func,
                detail: format!("未知的棋子代號 `{code}`"),
            });
        };
        let color = match color {
            'w' => Color::White,
            'b' => Color::Black,
            _ => {
                return Err(Error::BadScenario {
                    func,
                    detail: format!("未知的棋子代號 `{code}`"),
                });
            }
        };
        let kind = match kind {
            'P' => PieceKind::Pawn,
            'R' => PieceKind::Rook,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => {
                return Err(Error::BadScenario {
                    func,
                    detail: format!("未知的棋子代號 `{code}`"),
                });
            }
        };
        Ok(Piece { color, kind })
    }

    /// 文字渲染用符號
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
