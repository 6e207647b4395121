//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。CLI 境界で `exit_code()` により終了コードへ落とす。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// ファイル I/O の失敗（作成・読み書き・削除）
    #[error("{0}")]
    Io(String),
    /// 対象が存在しない（delete 対象のファイル等）
    #[error("not found: {0}")]
    NotFound(String),
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数の不足・不正
    #[error("{0}")]
    Env(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Error::Env(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Error::Json(msg.into())
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// sysexits.h に準じた終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::NotFound(_) => 66,
            Error::Json(_) => 70,
            Error::Io(_) => 74,
            Error::Env(_) => 78,
        }
    }
}
