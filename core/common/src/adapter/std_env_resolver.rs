//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::{HomeDir, StoreDir};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// ホーム直下の保存ディレクトリ名
const STORE_DIR_NAME: &str = ".pino";
const LOG_FILE_NAME: &str = "pino.log";

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        non_empty_var("HOME")
            .map(|h| HomeDir::new(PathBuf::from(h)))
            .ok_or_else(|| Error::env("HOME is not set"))
    }

    fn resolve_store_dir(&self) -> Result<StoreDir, Error> {
        let home = self.resolve_home_dir()?;
        Ok(StoreDir::new(home.join(STORE_DIR_NAME)))
    }

    fn resolve_log_file_path(&self) -> Result<PathBuf, Error> {
        let state_base = match non_empty_var("XDG_STATE_HOME") {
            Some(s) => PathBuf::from(s),
            None => self.resolve_home_dir()?.join(".local").join("state"),
        };
        Ok(state_base.join("pino").join(LOG_FILE_NAME))
    }
}
