//! session.rs：
//! - 控制器邊界：持有選取狀態，把「點一格」翻譯成走法查詢或落子。
//! - 負責落子前的合法性與終局把關，呼叫端只管把座標丟進來並依事件重繪。
//! - 不碰任何呈現層。
use crate::*;

/// 開局訊息（原樣寫進訊息紀錄）
pub const START_MESSAGE: &str = "新對局開始！全盤約一成的棋格藏有地雷……";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub pos: Pos,
    /// 選取當下算好的走法，落子時直接比對
    pub targets: Vec<MoveTarget>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    /// 無效輸入，狀態不變
    Ignored,
    /// 選取（或改選）某顆己方棋子
    Selected {
        pos: Pos,
        targets: Vec<MoveTarget>,
    },
    /// 取消選取
    Deselected,
    /// 完成落子
    Moved(MoveOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub game: Game,
    pub selection: Option<Selection>,
}

impl Session {
    pub fn new<R: rand::Rng>(rng: &mut R) -> Self {
        Session {
            game: Game::new(rng),
            selection: None,
        }
    }

    /// 重開一局，回傳開局訊息
    pub fn reset<R: rand::Rng>(&mut self, rng: &mut R) -> &'static str {
        self.game = Game::new(rng);
        self.selection = None;
        START_MESSAGE
    }

    /// 第一段點擊：嘗試選取己方棋子
    /// 空格與敵方棋子一律忽略；點同一格則取消選取
    pub fn select_square(&mut self, pos: Pos) -> SessionEvent {
        if self.game.status.is_finished() {
            return SessionEvent::Ignored;
        }
        if self.selection.as_ref().is_some_and(|sel| sel.pos == pos) {
            self.selection = None;
            return SessionEvent::Deselected;
        }
        let Some(piece) = self.game.board.get(pos) else {
            return SessionEvent::Ignored;
        };
        if piece.color != self.game.turn {
            return SessionEvent::Ignored;
        }
        let targets = generate_moves(&self.game.board, pos);
        self.selection = Some(Selection {
            pos,
            targets: targets.clone(),
        });
        SessionEvent::Selected { pos, targets }
    }

    /// 第二段點擊：以現有選取嘗試落子
    /// 點己方另一顆棋子改選；點不合法的格子忽略並保留選取
    pub fn choose_square(&mut self, pos: Pos) -> Result<SessionEvent, Error> {
        let func = "Session::choose_square";

        if self.game.status.is_finished() {
            return Ok(SessionEvent::Ignored);
        }
        let Some(selection) = &self.selection else {
            return Ok(SessionEvent::Ignored);
        };
        let from = selection.pos;
        // 選取的棋子已不在原格（不該發生），清掉選取
        let Some(from_piece) = self.game.board.get(from) else {
            self.selection = None;
            return Ok(SessionEvent::Deselected);
        };

        if let Some(piece) = self.game.board.get(pos) {
            if piece.color == from_piece.color {
                return Ok(self.select_square(pos));
            }
        }

        if !selection.targets.iter().any(|m| m.pos == pos) {
            return Ok(SessionEvent::Ignored);
        }

        let outcome = apply_move(&mut self.game, from, pos).map_err(|e| Error::Wrap {
            func,
            source: Box::new(e),
        })?;
        self.selection = None;
        Ok(SessionEvent::Moved(outcome))
    }

    /// 單一入口：依目前有無選取分派
    pub fn handle_click(&mut self, pos: Pos) -> Result<SessionEvent, Error> {
        if self.game.status.is_finished() {
            return Ok(SessionEvent::Ignored);
        }
        match &self.selection {
            None => Ok(self.select_square(pos)),
            Some(sel) if sel.pos == pos => Ok(self.select_square(pos)),
            Some(_) => self.choose_square(pos),
        }
    }
}
