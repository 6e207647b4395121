//! 記録の作成・一覧・検索・表示・削除 Outbound ポート

use crate::domain::Pino;
use common::error::Error;

/// 記録の保存先
///
/// 実装は `FilePinoStore`（ディレクトリ内の *.md）と、それを包む `LoggingPinoStore`。
pub trait PinoStore: Send + Sync {
    /// 記録を 1 件作成し、衝突しないファイル名（拡張子なし）を返す
    fn create(&self, summary: &str, prompt: &str, plan: &str) -> Result<String, Error>;

    /// 全件を created_at の新しい順で返す。読めないファイルは飛ばす。
    fn list_all(&self) -> Result<Vec<Pino>, Error>;

    /// summary / prompt / plan のいずれかにキーワードを含むもの（大文字小文字無視）。
    /// 並びは list_all と同じ。空キーワードは全件。
    fn search(&self, keyword: &str) -> Result<Vec<Pino>, Error> {
        let keyword = keyword.to_lowercase();
        Ok(self
            .list_all()?
            .into_iter()
            .filter(|p| p.matches_lowercase(&keyword))
            .collect())
    }

    /// `<filename>.md` の中身をそのまま返す。存在しなければ `Error::NotFound`。
    fn read(&self, filename: &str) -> Result<String, Error>;

    /// `<filename>.md` を削除する。存在しなければ `Error::NotFound`。
    fn delete(&self, filename: &str) -> Result<(), Error>;
}
