//! game.rs：
//! - 對局狀態總成：棋盤、地雷場、爆炸痕跡、行動方與勝負狀態。
//! - 狀態由呼叫端持有並以 `&mut` 傳入，不使用全域變數。
//! - 勝負只看國王存亡；終局狀態一經設定不再改變。
use crate::*;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, Default, Display, EnumIter, PartialEq, Eq,
)]
pub enum GameStatus {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameStatus {
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// 終局訊息；未終局回傳 None
    pub fn end_message(self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::WhiteWins => Some("黑方國王消失了，白方獲勝！"),
            GameStatus::BlackWins => Some("白方國王消失了，黑方獲勝！"),
            GameStatus::Draw => Some("雙方國王都消失了，平手。"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub mines: MineField,
    pub exploded: ExplosionMarkers,
    pub turn: Color,
    pub status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: Board::empty(),
            mines: MineField::empty(),
            exploded: ExplosionMarkers::empty(),
            turn: Color::White,
            status: GameStatus::InProgress,
        }
    }
}

impl Game {
    /// 標準開局加隨機佈雷，白方先行
    pub fn new<R: rand::Rng>(rng: &mut R) -> Self {
        Game {
            board: Board::standard(),
            mines: MineField::generate(rng),
            ..Default::default()
        }
    }

    /// 重新掃描雙方國王並更新勝負狀態
    /// 終局狀態不再重算，直接回傳原狀態
    pub fn refresh_status(&mut self) -> GameStatus {
        if self.status.is_finished() {
            return self.status;
        }
        let white_alive = self.board.has_king(Color::White);
        let black_alive = self.board.has_king(Color::Black);
        self.status = match (white_alive, black_alive) {
            (false, false) => GameStatus::Draw,
            (false, true) => GameStatus::BlackWins,
            (true, false) => GameStatus::WhiteWins,
            (true, true) => GameStatus::InProgress,
        };
        self.status
    }

    /// 行動方提示訊息
    pub fn turn_message(&self) -> String {
        format!("輪到{}方。", self.turn.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_game() {
        let mut rng = StdRng::seed_from_u64(7);
        let game = Game::new(&mut rng);
        assert_eq!(game.board.piece_count(), 32);
        assert_eq!(game.mines.armed_count(), 6);
        assert_eq!(game.exploded.marked_count(), 0);
        assert_eq!(game.turn, Color::White);
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.turn_message(), "輪到白方。");
    }

    #[test]
    fn test_refresh_status_matrix() {
        // (白王存活, 黑王存活, 預期狀態)
        let test_data = [
            (true, true, GameStatus::InProgress),
            (true, false, GameStatus::WhiteWins),
            (false, true, GameStatus::BlackWins),
            (false, false, GameStatus::Draw),
        ];
        for (white_alive, black_alive, expect) in test_data {
            let mut game = Game {
                board: Board::standard(),
                ..Default::default()
            };
            if !white_alive {
                game.board.take(Pos { x: 4, y: 7 });
            }
            if !black_alive {
                game.board.take(Pos { x: 4, y: 0 });
            }
            assert_eq!(
                game.refresh_status(),
                expect,
                "白王 {white_alive} 黑王 {black_alive}"
            );
            assert_eq!(game.status, expect);
        }
    }

    #[test]
    fn test_terminal_status_sticky() {
        let mut game = Game {
            board: Board::standard(),
            ..Default::default()
        };
        game.board.take(Pos { x: 4, y: 0 });
        assert_eq!(game.refresh_status(), GameStatus::WhiteWins);

        // 把黑王放回去也不會扭轉已終局的狀態
        game.board.set(
            Pos { x: 4, y: 0 },
            Some(Piece::new(Color::Black, PieceKind::King)),
        );
        assert_eq!(game.refresh_status(), GameStatus::WhiteWins);
    }

    #[test]
    fn test_end_messages() {
        assert_eq!(GameStatus::InProgress.end_message(), None);
        assert!(GameStatus::WhiteWins.end_message().unwrap().contains("白方獲勝"));
        assert!(GameStatus::BlackWins.end_message().unwrap().contains("黑方獲勝"));
        assert!(GameStatus::Draw.end_message().unwrap().contains("平手"));
    }
}
