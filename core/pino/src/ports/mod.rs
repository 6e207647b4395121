//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: 記録の保存先（common の FileSystem / Clock / Log も利用）

pub mod inbound;
pub mod outbound;
