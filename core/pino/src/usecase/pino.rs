//! 記録の push / list / search / show / delete のユースケース

use common::error::Error;
use std::sync::Arc;

use crate::domain::Pino;
use crate::ports::outbound::PinoStore;

/// パス区切りを含まず単一成分か（`.` / `..` も禁止）
fn is_safe_filename(s: &str) -> bool {
    if s.is_empty() || s == "." || s == ".." {
        return false;
    }
    !s.contains('/') && !s.contains('\\')
}

fn check_filename(filename: &str) -> Result<(), Error> {
    if is_safe_filename(filename) {
        Ok(())
    } else {
        Err(Error::invalid_argument(format!(
            "invalid pino filename: '{}'",
            filename
        )))
    }
}

/// pino コマンドのユースケース
pub struct PinoUseCase {
    store: Arc<dyn PinoStore>,
}

impl PinoUseCase {
    pub fn new(store: Arc<dyn PinoStore>) -> Self {
        Self { store }
    }

    /// 記録を追加し、ファイル名を返す。summary / prompt は必須。
    pub fn push(&self, summary: &str, prompt: &str, plan: &str) -> Result<String, Error> {
        if summary.is_empty() || prompt.is_empty() {
            return Err(Error::invalid_argument(
                "push requires --summary and --prompt",
            ));
        }
        self.store.create(summary, prompt, plan)
    }

    /// 全件（新しい順）
    pub fn list(&self) -> Result<Vec<Pino>, Error> {
        self.store.list_all()
    }

    pub fn search(&self, keyword: &str) -> Result<Vec<Pino>, Error> {
        self.store.search(keyword)
    }

    /// 指定ファイル名の記録の markdown。見つからなければ NotFound。
    pub fn show(&self, filename: &str) -> Result<String, Error> {
        check_filename(filename)?;
        self.store.read(filename)
    }

    /// 指定ファイル名の記録を削除。見つからなければ NotFound。
    pub fn delete(&self, filename: &str) -> Result<(), Error> {
        check_filename(filename)?;
        self.store.delete(filename)
    }
}
