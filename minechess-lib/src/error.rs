// 棋局邏輯錯誤型別，攜帶 function name 與 context，支援來源錯誤巢狀
use crate::*;
use thiserror::Error;

/// 棋局核心錯誤型別
#[derive(Debug, Error)]
pub enum Error {
    #[error("`{func}`: 位置 {pos:?} 超出棋盤")]
    OutOfBounds { func: &'static str, pos: Pos },

    #[error("`{func}`: 位置 {pos:?} 無棋子")]
    NoPieceAtPos { func: &'static str, pos: Pos },

    #[error("`{func}`: 尚未輪到 {color} 行動")]
    NotYourTurn { func: &'static str, color: Color },

    #[error("`{func}`: 棋子無法從 {from:?} 移動到 {to:?}")]
    IllegalMove {
        func: &'static str,
        from: Pos,
        to: Pos,
    },

    #[error("`{func}`: 對局已結束")]
    GameFinished { func: &'static str },

    #[error("`{func}`: 開局設定錯誤：{detail}")]
    BadScenario { func: &'static str, detail: String },

    #[error("`{func}`: 包裝: {source}")]
    Wrap {
        func: &'static str,
        #[source]
        source: Box<Error>,
    },
}

pub fn root_error(err: &Error) -> &Error {
    let mut err = err;
    while let Error::Wrap { source, .. } = err {
        err = source.as_ref();
    }
    err
}
