//! 時刻取得 Outbound ポート
//!
//! usecase / adapter はこの trait 経由で「現在時刻」を取得する。
//! 記録の作成日時・ファイル名の日付はここから決まる。

use chrono::{DateTime, Local};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻（ローカルタイムゾーン）
    fn now(&self) -> DateTime<Local>;
}
