//! mines.rs：
//! - 負責地雷場（MineField）的生成與觸發，以及爆炸痕跡（ExplosionMarkers）的記錄。
//! - 佈雷不參考棋子位置，起始棋子底下也可能有雷。
//! - 隨機來源由呼叫端注入，固定種子即可重現佈局。
use crate::*;
use serde::{Deserialize, Serialize};

/// 地雷數量 = max(1, round(格數 / 10))，8×8 即 6 顆
pub fn mine_count(total_cells: usize) -> usize {
    std::cmp::max(1, (total_cells as f64 / 10.0).round() as usize)
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct MineField {
    grid: Vec<Vec<bool>>,
}

impl Default for MineField {
    fn default() -> Self {
        Self::empty()
    }
}

impl MineField {
    pub fn empty() -> Self {
        MineField {
            grid: vec![vec![false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 在互不重複的隨機格子佈雷
    pub fn generate<R: rand::Rng>(rng: &mut R) -> Self {
        let mut field = Self::empty();
        let count = mine_count(BOARD_SIZE * BOARD_SIZE);

        let mut placed = 0;
        while placed < count {
            let pos = Pos {
                x: rng.random_range(0..BOARD_SIZE),
                y: rng.random_range(0..BOARD_SIZE),
            };
            if !field.is_armed(pos) {
                field.grid[pos.y][pos.x] = true;
                placed += 1;
            }
        }
        field
    }

    /// 指定佈雷位置（測試與開局設定用）
    pub fn with_mines(mines: &[Pos]) -> Result<Self, Error> {
        let func = "MineField::with_mines";

        let mut field = Self::empty();
        for &pos in mines {
            if !Board::is_valid_position(pos) {
                return Err(Error::OutOfBounds { func, pos });
            }
            if field.is_armed(pos) {
                return Err(Error::BadScenario {
                    func,
                    detail: format!("位置 {pos:?} 重複佈雷"),
                });
            }
            field.grid[pos.y][pos.x] = true;
        }
        Ok(field)
    }

    pub fn is_armed(&self, pos: Pos) -> bool {
        let Pos { x, y } = pos;
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// 引爆後解除，地雷不會重新上膛
    pub fn disarm(&mut self, pos: Pos) {
        let Pos { x, y } = pos;
        if let Some(cell) = self.grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = false;
        }
    }

    pub fn armed_count(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|armed| **armed).count())
            .sum()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ExplosionMarkers {
    grid: Vec<Vec<bool>>,
}

impl Default for ExplosionMarkers {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExplosionMarkers {
    pub fn empty() -> Self {
        ExplosionMarkers {
            grid: vec![vec![false; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn is_marked(&self, pos: Pos) -> bool {
        let Pos { x, y } = pos;
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// 爆炸痕跡只會新增，對局中不清除
    pub fn mark(&mut self, pos: Pos) {
        let Pos { x, y } = pos;
        if let Some(cell) = self.grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = true;
        }
    }

    pub fn marked_count(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|marked| **marked).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_mine_count() {
        let test_data = [(64, 6), (100, 10), (10, 1), (4, 1), (1, 1), (25, 3)];
        for (cells, expect) in test_data {
            assert_eq!(mine_count(cells), expect, "{cells} 格應有 {expect} 顆地雷");
        }
    }

    #[test]
    fn test_generate_exact_count() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let field = MineField::generate(&mut rng);
            // grid 本身保證無重複，armed_count 即佈雷數
            assert_eq!(field.armed_count(), 6, "種子 {seed} 的佈雷數");
        }
    }

    #[test]
    fn test_generate_deterministic() {
        let a = MineField::generate(&mut StdRng::seed_from_u64(42));
        let b = MineField::generate(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_with_mines() {
        let pos = Pos { x: 4, y: 4 };
        let field = MineField::with_mines(&[pos, Pos { x: 0, y: 7 }]).unwrap();
        assert_eq!(field.armed_count(), 2);
        assert!(field.is_armed(pos));
        assert!(!field.is_armed(Pos { x: 0, y: 0 }));
    }

    #[test]
    fn test_with_mines_invalid() {
        let out = Pos { x: 8, y: 0 };
        assert!(matches!(
            MineField::with_mines(&[out]),
            Err(Error::OutOfBounds { pos, .. }) if pos == out
        ));

        let dup = Pos { x: 1, y: 1 };
        assert!(matches!(
            MineField::with_mines(&[dup, dup]),
            Err(Error::BadScenario { .. })
        ));
    }

    #[test]
    fn test_disarm_and_mark() {
        let pos = Pos { x: 2, y: 5 };
        let mut field = MineField::with_mines(&[pos]).unwrap();
        let mut markers = ExplosionMarkers::empty();

        field.disarm(pos);
        markers.mark(pos);
        assert!(!field.is_armed(pos));
        assert!(markers.is_marked(pos));
        assert_eq!(markers.marked_count(), 1);

        // 解除後不會重新上膛
        field.disarm(pos);
        assert_eq!(field.armed_count(), 0);
    }
}
