//! ドメイン型（記録・slug・Markdown 形式・コマンド）

pub mod command;
pub mod markdown;
pub mod pino;
pub mod slug;

pub use pino::Pino;
