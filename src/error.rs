use thiserror::Error;

/// 使用者輸入錯誤，可由呼叫端決定是否重新提示
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("'{0}' is not a number or a range")]
    InvalidToken(String),

    #[error("range {start}-{end} must go from low to high")]
    DescendingRange { start: usize, end: usize },

    #[error("{index} is not between 1 and {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("'{0}' is not a valid option")]
    InvalidMenuOption(String),
}
