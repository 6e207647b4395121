//! ファイルシステム Outbound ポート
//!
//! usecase / adapter はこの trait 経由でのみファイル I/O を行う。

use crate::error::Error;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// ファイルメタデータ（通常ファイルか・更新日時）
#[derive(Debug, Clone)]
pub struct FileMetadata {
    is_file: bool,
    modified: Option<SystemTime>,
}

impl FileMetadata {
    pub fn new(is_file: bool, modified: Option<SystemTime>) -> Self {
        Self { is_file, modified }
    }

    /// 通常ファイルか（シンボリックリンクは辿った先で判定）
    pub fn is_file(&self) -> bool {
        self.is_file
    }

    /// 最終更新日時（プラットフォームが提供しない場合は None）
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }
}

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用のメモリ FS など。
/// 対象が存在しない場合は `Error::NotFound` を返す。
pub trait FileSystem: Send + Sync {
    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
    fn write(&self, path: &Path, contents: &str) -> Result<(), Error>;
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    fn metadata(&self, path: &Path) -> Result<FileMetadata, Error>;
    fn remove_file(&self, path: &Path) -> Result<(), Error>;
    /// ディレクトリ直下のエントリのフルパス一覧（順序は不定）
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;

    /// パスが存在するか（metadata が取れれば true）
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }
}
