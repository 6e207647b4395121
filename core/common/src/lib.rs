//! pino 共通ライブラリ
//!
//! エラー型と、外界（FS・時刻・環境変数・ログ）へのポートおよび標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Outbound ポート（trait）
pub mod ports;

/// ポートの標準実装
pub mod adapter;
