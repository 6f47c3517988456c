//! apply.rs：
//! - 負責落子結算：搬動棋子、吃子、踩雷引爆、國王存亡與換手。
//! - 走法合法性在此檢查（不合法回傳錯誤，不靜默破壞狀態）。
//! - 踩雷與吃王互斥：落在雷格一律只算引爆，即使該格原本站著國王。
use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEvent {
    /// 移動到空格
    Moved,
    /// 吃掉 victim
    Captured { victim: Piece },
    /// 踩雷：lost 是引爆消失的行動棋子，victim 是同格被吃的原佔據者
    Detonated { lost: Piece, victim: Option<Piece> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub event: MoveEvent,
    pub status: GameStatus,
    /// 顯示用訊息（引爆、吃王、終局），由呼叫端決定如何呈現
    pub messages: Vec<String>,
}

/// 落子主流程
/// 依序：前置檢查 → 搬動與吃子 → 地雷結算 → 國王掃描 → 換手或終局
pub fn apply_move(game: &mut Game, from: Pos, to: Pos) -> Result<MoveOutcome, Error> {
    let func = "apply_move";

    if game.status.is_finished() {
        return Err(Error::GameFinished { func });
    }
    let piece = game.board.get(from).ok_or(Error::NoPieceAtPos { func, pos: from })?;
    if piece.color != game.turn {
        return Err(Error::NotYourTurn {
            func,
            color: piece.color,
        });
    }
    let legal = generate_moves(&game.board, from)
        .iter()
        .any(|m| m.pos == to);
    if !legal {
        return Err(Error::IllegalMove { func, from, to });
    }

    // 吃子即覆蓋：先取走目標格原佔據者
    let victim = game.board.take(to);
    game.board.take(from);
    game.board.set(to, Some(piece));

    let mut messages = Vec::new();
    let event = if game.mines.is_armed(to) {
        game.mines.disarm(to);
        game.exploded.mark(to);
        game.board.take(to);
        messages.push(format!(
            "{}方棋子踩中地雷爆炸了！({}, {})",
            piece.color.name(),
            to.x,
            to.y
        ));
        MoveEvent::Detonated {
            lost: piece,
            victim,
        }
    } else if let Some(victim) = victim {
        if victim.kind == PieceKind::King {
            messages.push(format!("{}方吃掉了對方的國王！", piece.color.name()));
        }
        MoveEvent::Captured { victim }
    } else {
        MoveEvent::Moved
    };

    let status = game.refresh_status();
    match status.end_message() {
        Some(msg) => messages.push(msg.to_string()),
        None => game.turn = game.turn.opponent(),
    }

    Ok(MoveOutcome {
        event,
        status,
        messages,
    })
}
