//! 環境変数解決 Outbound ポート
//!
//! 保存先ディレクトリ・ログファイルの場所を環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::{HomeDir, StoreDir};
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ユーザーのホームディレクトリ（$HOME）
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// 記録の保存先（$HOME/.pino）
    fn resolve_store_dir(&self) -> Result<StoreDir, Error>;

    /// 構造化ログの出力先
    ///
    /// 優先順位:
    /// 1. $XDG_STATE_HOME/pino/pino.log
    /// 2. $HOME/.local/state/pino/pino.log
    fn resolve_log_file_path(&self) -> Result<PathBuf, Error>;
}
