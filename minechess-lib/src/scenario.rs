//! scenario.rs：
//! - 以 TOML/JSON 描述的開局設定：盤面、佈雷位置與先行方。
//! - 測試與謎題式開局用；進行中的對局仍只存在於記憶體，不做存檔。
//! - 盤面每列是 8 個以空白分隔的棋子代號，`.` 為空格。
use crate::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ScenarioConfig {
    pub name: String,
    /// 8 列，由黑方底線（y=0）往白方底線排
    pub rows: Vec<String>,
    #[serde(default)]
    pub mines: Vec<Pos>,
    #[serde(default)]
    pub turn: Color,
}

impl ScenarioConfig {
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let func = "ScenarioConfig::from_toml";
        toml::from_str(text).map_err(|e| Error::BadScenario {
            func,
            detail: e.to_string(),
        })
    }

    /// 標準開局（隨機佈雷請改用 `Game::new`）
    pub fn standard() -> Self {
        ScenarioConfig {
            name: "standard".to_string(),
            rows: vec![
                "bR bN bB bQ bK bB bN bR".to_string(),
                "bP bP bP bP bP bP bP bP".to_string(),
                ". . . . . . . .".to_string(),
                ". . . . . . . .".to_string(),
                ". . . . . . . .".to_string(),
                ". . . . . . . .".to_string(),
                "wP wP wP wP wP wP wP wP".to_string(),
                "wR wN wB wQ wK wB wN wR".to_string(),
            ],
            mines: Vec::new(),
            turn: Color::White,
        }
    }

    pub fn into_game(self) -> Result<Game, Error> {
        let func = "ScenarioConfig::into_game";

        if self.rows.len() != BOARD_SIZE {
            return Err(Error::BadScenario {
                func,
                detail: format!("盤面應為 {BOARD_SIZE} 列，實際 {} 列", self.rows.len()),
            });
        }
        let mut board = Board::empty();
        for (y, row) in self.rows.iter().enumerate() {
            let cells: Vec<&str> = row.split_whitespace().collect();
            if cells.len() != BOARD_SIZE {
                return Err(Error::BadScenario {
                    func,
                    detail: format!("第 {y} 列應為 {BOARD_SIZE} 格，實際 {} 格", cells.len()),
                });
            }
            for (x, cell) in cells.into_iter().enumerate() {
                if cell == "." {
                    continue;
                }
                let piece = Piece::from_code(cell).map_err(|e| Error::Wrap {
                    func,
                    source: Box::new(e),
                })?;
                board.set(Pos { x, y }, Some(piece));
            }
        }
        // 每色國王至多一個（可以是零個，開局前就被吃掉的殘局）
        for color in [Color::White, Color::Black] {
            let kings = board
                .pieces()
                .filter(|(_, piece)| *piece == Piece::new(color, PieceKind::King))
                .count();
            if kings > 1 {
                return Err(Error::BadScenario {
                    func,
                    detail: format!("{}方有 {kings} 個國王，至多一個", color.name()),
                });
            }
        }
        let mines = MineField::with_mines(&self.mines).map_err(|e| Error::Wrap {
            func,
            source: Box::new(e),
        })?;
        Ok(Game {
            board,
            mines,
            exploded: ExplosionMarkers::empty(),
            turn: self.turn,
            status: GameStatus::InProgress,
        })
    }
}
