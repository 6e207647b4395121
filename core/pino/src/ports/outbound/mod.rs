//! Outbound ポート: アプリが記録の保存先を使うための trait

pub mod pino_store;

pub use pino_store::PinoStore;
