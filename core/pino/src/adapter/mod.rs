//! アダプター（Outbound ポートの実装）

mod file_pino_store;
mod logging_pino_store;

pub use file_pino_store::FilePinoStore;
pub use logging_pino_store::LoggingPinoStore;
