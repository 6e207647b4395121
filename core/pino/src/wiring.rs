//! 配線: 標準アダプタで UseCase を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StdClock, StdEnvResolver, StdFileSystem};
use common::domain::StoreDir;
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log};

use crate::adapter::{FilePinoStore, LoggingPinoStore};
use crate::ports::outbound::PinoStore;
use crate::usecase::PinoUseCase;

/// 配線で組み立てたポート群（main の Command ディスパッチで利用）
pub struct App {
    /// 構造化ログ（ファイルへ JSONL）。エラー時のコンソール表示とは別。
    pub logger: Arc<dyn Log>,
    pub pino_use_case: PinoUseCase,
}

/// ログ先が解決できなければ NoopLog
fn wire_logger(env_resolver: &dyn EnvResolver, fs: &Arc<dyn FileSystem>) -> Arc<dyn Log> {
    env_resolver
        .resolve_log_file_path()
        .map(|path| Arc::new(FileJsonLog::new(Arc::clone(fs), path)) as Arc<dyn Log>)
        .unwrap_or_else(|_| Arc::new(NoopLog))
}

/// 配線: 標準アダプタで App を組み立てる。
/// `store_dir` が None なら $HOME/.pino を使う。
pub fn wire_pino(store_dir: Option<PathBuf>) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let logger = wire_logger(env_resolver.as_ref(), &fs);

    let dir = match store_dir {
        Some(d) => StoreDir::new(d),
        None => env_resolver.resolve_store_dir()?,
    };
    Ok(wire_with(fs, clock, logger, dir))
}

/// 任意のポート実装で App を組み立てる（テストからも使う）
pub fn wire_with(
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Log>,
    dir: StoreDir,
) -> App {
    let file_store: Arc<dyn PinoStore> =
        Arc::new(FilePinoStore::new(fs, clock, Arc::clone(&logger), dir));
    let store: Arc<dyn PinoStore> =
        Arc::new(LoggingPinoStore::new(file_store, Arc::clone(&logger)));
    App {
        logger,
        pino_use_case: PinoUseCase::new(store),
    }
}
