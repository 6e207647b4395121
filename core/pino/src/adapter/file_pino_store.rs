//! ディレクトリ内の *.md を記録として扱う PinoStore の標準実装
//!
//! 1 記録 = 1 ファイル（`<filename>.md`）。索引は持たず毎回ディレクトリを走査する。
//! 複数プロセスからの同時作成は考慮しない（存在確認と書き込みの間は無防備）。

use crate::domain::markdown;
use crate::domain::slug::{self, FILENAME_SLUG_MAX_CHARS};
use crate::domain::Pino;
use crate::ports::outbound::PinoStore;
use chrono::{DateTime, Local};
use common::domain::StoreDir;
use common::error::Error;
use common::ports::outbound::{Clock, FileSystem, Log, LogLevel, LogRecord};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::UNIX_EPOCH;

const ENTRY_EXTENSION: &str = "md";
const FILENAME_DATE_FORMAT: &str = "%Y-%m-%d";

pub struct FilePinoStore {
    fs: Arc<dyn FileSystem>,
    clock: Arc<dyn Clock>,
    log: Arc<dyn Log>,
    dir: StoreDir,
}

impl FilePinoStore {
    pub fn new(
        fs: Arc<dyn FileSystem>,
        clock: Arc<dyn Clock>,
        log: Arc<dyn Log>,
        dir: StoreDir,
    ) -> Self {
        Self { fs, clock, log, dir }
    }

    /// base が使われていれば base-1, base-2, ... の最初の空き番号
    fn next_free_filename(&self, base: &str) -> String {
        let mut filename = base.to_string();
        let mut n: u64 = 1;
        while self.fs.exists(&self.dir.entry_path(&filename)) {
            filename = format!("{}-{}", base, n);
            n += 1;
        }
        filename
    }

    /// 日付行が無いときの created_at（更新日時が取れなければ epoch）
    fn modified_time(&self, path: &Path) -> DateTime<Local> {
        let modified = self
            .fs
            .metadata(path)
            .ok()
            .and_then(|m| m.modified())
            .unwrap_or(UNIX_EPOCH);
        DateTime::<Local>::from(modified)
    }

    fn read_entry(&self, path: &Path) -> Result<Pino, Error> {
        let text = self.fs.read_to_string(path)?;
        let filename = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(markdown::parse(&text, &filename, || self.modified_time(path)))
    }

    /// 直下の通常ファイル *.md をファイル名順で返す（ディレクトリが無ければ空）
    fn entry_paths(&self) -> Result<Vec<PathBuf>, Error> {
        let paths = match self.fs.read_dir(&self.dir) {
            Ok(p) => p,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };
        let mut paths: Vec<PathBuf> = paths
            .into_iter()
            .filter(|p| p.extension().map_or(false, |ext| ext == ENTRY_EXTENSION))
            .filter(|p| self.fs.metadata(p).map_or(false, |m| m.is_file()))
            .collect();
        paths.sort();
        Ok(paths)
    }
}

impl PinoStore for FilePinoStore {
    fn create(&self, summary: &str, prompt: &str, plan: &str) -> Result<String, Error> {
        self.fs.create_dir_all(&self.dir)?;

        let now = self.clock.now();
        let slug = slug::slugify(summary);
        // 切り詰めで末尾に残ったハイフンは落とす（衝突時の `--1` を避ける）
        let slug = slug::cap(&slug, FILENAME_SLUG_MAX_CHARS).trim_end_matches('-');
        let base = format!("{}_{}", now.format(FILENAME_DATE_FORMAT), slug);
        let filename = self.next_free_filename(&base);

        let pino = Pino {
            filename: filename.clone(),
            created_at: now,
            summary: summary.to_string(),
            prompt: prompt.to_string(),
            plan: plan.to_string(),
        };
        self.fs
            .write(&self.dir.entry_path(&filename), &markdown::render(&pino))?;
        Ok(filename)
    }

    fn list_all(&self) -> Result<Vec<Pino>, Error> {
        let paths = self.entry_paths()?;
        let mut pinos = Vec::with_capacity(paths.len());
        for path in &paths {
            match self.read_entry(path) {
                Ok(p) => pinos.push(p),
                Err(e) => {
                    let _ = self.log.log(
                        &LogRecord::now(LogLevel::Warn, "skipped unreadable pino")
                            .layer("adapter")
                            .kind("store")
                            .field("path", serde_json::json!(path.display().to_string()))
                            .field("error", serde_json::json!(e.to_string())),
                    );
                }
            }
        }
        // 安定ソートなので同時刻はファイル名順のまま
        pinos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pinos)
    }

    fn read(&self, filename: &str) -> Result<String, Error> {
        self.fs
            .read_to_string(&self.dir.entry_path(filename))
            .map_err(|e| pino_not_found(e, filename))
    }

    fn delete(&self, filename: &str) -> Result<(), Error> {
        self.fs
            .remove_file(&self.dir.entry_path(filename))
            .map_err(|e| pino_not_found(e, filename))
    }
}

/// NotFound をファイル名入りのメッセージに差し替える（それ以外はそのまま）
fn pino_not_found(e: Error, filename: &str) -> Error {
    if e.is_not_found() {
        Error::not_found(format!("pino {}", filename))
    } else {
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use common::adapter::{NoopLog, StdFileSystem};
    use std::sync::Mutex;

    /// set で進められる固定時計
    struct FixedClock(Mutex<DateTime<Local>>);

    impl FixedClock {
        fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Self {
            Self(Mutex::new(Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()))
        }

        fn set(&self, t: DateTime<Local>) {
            *self.0.lock().unwrap() = t;
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            *self.0.lock().unwrap()
        }
    }

    fn store_in(dir: &Path, clock: Arc<FixedClock>) -> FilePinoStore {
        FilePinoStore::new(
            Arc::new(StdFileSystem),
            clock,
            Arc::new(NoopLog),
            StoreDir::new(dir.to_path_buf()),
        )
    }

    #[test]
    fn test_create_writes_expected_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("pino");
        let store = store_in(&dir, Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));

        let filename = store
            .create("Fix bug", "The login button crashes", "")
            .unwrap();
        assert_eq!(filename, "2024-01-15_fix-bug");

        let content = std::fs::read_to_string(dir.join("2024-01-15_fix-bug.md")).unwrap();
        assert_eq!(
            content,
            "# Fix bug\n\n> 2024-01-15 10:30\n\n## Prompt\n\nThe login button crashes\n"
        );
    }

    #[test]
    fn test_create_avoids_collisions() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));

        let first = store.create("Fix bug", "a", "").unwrap();
        let second = store.create("Fix bug", "b", "").unwrap();
        let third = store.create("Fix bug!", "c", "").unwrap();
        assert_eq!(first, "2024-01-15_fix-bug");
        assert_eq!(second, "2024-01-15_fix-bug-1");
        assert_eq!(third, "2024-01-15_fix-bug-2");
    }

    #[test]
    fn test_create_fills_first_gap_in_suffixes() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));
        std::fs::write(tmp.path().join("2024-01-15_fix-bug.md"), "# x\n").unwrap();
        std::fs::write(tmp.path().join("2024-01-15_fix-bug-2.md"), "# x\n").unwrap();

        assert_eq!(store.create("Fix bug", "p", "").unwrap(), "2024-01-15_fix-bug-1");
        assert_eq!(store.create("Fix bug", "p", "").unwrap(), "2024-01-15_fix-bug-3");
    }

    #[test]
    fn test_create_caps_slug_length() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));
        let summary = "a".repeat(80);
        let filename = store.create(&summary, "p", "").unwrap();
        assert_eq!(filename, format!("2024-01-15_{}", "a".repeat(FILENAME_SLUG_MAX_CHARS)));
    }

    #[test]
    fn test_create_drops_hyphen_left_by_cap() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));
        // 50 文字目がちょうど区切りになる summary
        let summary = format!("{} tail", "a".repeat(FILENAME_SLUG_MAX_CHARS - 1));

        let first = store.create(&summary, "p", "").unwrap();
        let second = store.create(&summary, "p", "").unwrap();
        let stem = format!("2024-01-15_{}", "a".repeat(FILENAME_SLUG_MAX_CHARS - 1));
        assert_eq!(first, stem);
        assert_eq!(second, format!("{}-1", stem));
        assert!(!second.contains("--"));
    }

    #[test]
    fn test_create_fails_with_io_error_when_dir_cannot_be_created() {
        let tmp = tempfile::tempdir().unwrap();
        let plain = tmp.path().join("plainfile");
        std::fs::write(&plain, "not a directory").unwrap();
        let store = store_in(&plain.join("sub"), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));

        let err = store.create("Fix bug", "p", "").unwrap_err();
        assert!(matches!(err, Error::Io(_)), "unexpected error: {:?}", err);
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_failed_create_leaves_no_file_behind() {
        let tmp = tempfile::tempdir().unwrap();
        let plain = tmp.path().join("plainfile");
        std::fs::write(&plain, "not a directory").unwrap();
        let store = store_in(&plain.join("sub"), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));

        assert!(store.create("Fix bug", "p", "").is_err());
        let names: Vec<_> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("plainfile")]);
        assert_eq!(std::fs::read_to_string(&plain).unwrap(), "not a directory");
    }

    #[test]
    fn test_list_all_on_regular_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let plain = tmp.path().join("plainfile");
        std::fs::write(&plain, "not a directory").unwrap();
        let store = store_in(&plain, Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));

        let err = store.list_all().unwrap_err();
        assert!(!err.is_not_found());
        assert_eq!(err.exit_code(), 74);
        assert!(store.search("anything").is_err());
    }

    #[test]
    fn test_list_all_missing_dir_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp.path().join("nope"), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_list_all_sorted_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = Arc::new(FixedClock::at(2024, 1, 15, 9, 0));
        let store = store_in(tmp.path(), Arc::clone(&clock));

        store.create("one", "p", "").unwrap();
        clock.set(Local.with_ymd_and_hms(2024, 1, 17, 9, 0, 0).unwrap());
        store.create("three", "p", "").unwrap();
        clock.set(Local.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap());
        store.create("two", "p", "").unwrap();

        let summaries: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|p| p.summary)
            .collect();
        assert_eq!(summaries, vec!["three", "two", "one"]);
    }

    #[test]
    fn test_list_all_ties_keep_filename_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 9, 0)));
        store.create("b", "p", "").unwrap();
        store.create("a", "p", "").unwrap();
        store.create("c", "p", "").unwrap();

        let names: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|p| p.filename)
            .collect();
        assert_eq!(names, vec!["2024-01-15_a", "2024-01-15_b", "2024-01-15_c"]);
    }

    #[test]
    fn test_list_all_ignores_other_files_and_skips_unreadable() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 9, 0)));
        store.create("kept", "p", "").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "# not a pino\n").unwrap();
        std::fs::write(tmp.path().join("binary.md"), [0xff, 0xfe, 0x00]).unwrap();
        std::fs::create_dir(tmp.path().join("folder.md")).unwrap();

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].summary, "kept");
    }

    /// 書かれたレコードの message を溜める Log
    #[derive(Default)]
    struct MessageLog(Mutex<Vec<String>>);

    impl Log for MessageLog {
        fn log(&self, record: &LogRecord) -> Result<(), Error> {
            self.0.lock().unwrap().push(record.message.clone());
            Ok(())
        }
    }

    #[test]
    fn test_list_all_skips_md_directories_without_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let log = Arc::new(MessageLog::default());
        let store = FilePinoStore::new(
            Arc::new(StdFileSystem),
            Arc::new(FixedClock::at(2024, 1, 15, 9, 0)),
            Arc::clone(&log) as Arc<dyn Log>,
            StoreDir::new(tmp.path().to_path_buf()),
        );
        store.create("kept", "p", "").unwrap();
        std::fs::create_dir(tmp.path().join("folder.md")).unwrap();

        assert_eq!(store.list_all().unwrap().len(), 1);
        assert!(log.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_list_all_falls_back_to_mtime_without_date_line() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 9, 0)));
        let path = tmp.path().join("handwritten.md");
        std::fs::write(&path, "# Handwritten\n\n## Prompt\n\nno date here\n").unwrap();
        let mtime = DateTime::<Local>::from(std::fs::metadata(&path).unwrap().modified().unwrap());

        let all = store.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].filename, "handwritten");
        assert_eq!(all[0].prompt, "no date here");
        assert_eq!(all[0].created_at, mtime);
    }

    #[test]
    fn test_search_case_insensitive_and_ordered() {
        let tmp = tempfile::tempdir().unwrap();
        let clock = Arc::new(FixedClock::at(2024, 1, 15, 9, 0));
        let store = store_in(tmp.path(), Arc::clone(&clock));
        store.create("Fix Login Bug", "button crashes", "").unwrap();
        clock.set(Local.with_ymd_and_hms(2024, 1, 16, 9, 0, 0).unwrap());
        store.create("Refactor auth", "touches the login form", "").unwrap();
        clock.set(Local.with_ymd_and_hms(2024, 1, 17, 9, 0, 0).unwrap());
        store.create("Unrelated", "nothing", "plan text").unwrap();

        for kw in ["LOGIN", "login", "LoGiN"] {
            let found: Vec<String> = store
                .search(kw)
                .unwrap()
                .into_iter()
                .map(|p| p.summary)
                .collect();
            assert_eq!(found, vec!["Refactor auth", "Fix Login Bug"]);
        }
        assert_eq!(store.search("PLAN TEXT").unwrap().len(), 1);
        assert!(store.search("absent").unwrap().is_empty());

        let all = store.list_all().unwrap();
        assert_eq!(store.search("").unwrap(), all);
    }

    #[test]
    fn test_delete() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 9, 0)));
        let keep = store.create("keep", "p", "").unwrap();
        let gone = store.create("gone", "p", "").unwrap();

        store.delete(&gone).unwrap();
        let names: Vec<String> = store.list_all().unwrap().into_iter().map(|p| p.filename).collect();
        assert_eq!(names, vec![keep.clone()]);

        let err = store.delete(&gone).unwrap_err();
        assert!(err.is_not_found());
        let names: Vec<String> = store.list_all().unwrap().into_iter().map(|p| p.filename).collect();
        assert_eq!(names, vec![keep]);
    }

    #[test]
    fn test_read_returns_stored_markdown() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(tmp.path(), Arc::new(FixedClock::at(2024, 1, 15, 10, 30)));
        let filename = store.create("Fix bug", "It crashes", "Patch it").unwrap();

        assert_eq!(
            store.read(&filename).unwrap(),
            "# Fix bug\n\n> 2024-01-15 10:30\n\n## Prompt\n\nIt crashes\n\n## Plan\n\nPatch it\n"
        );
        let err = store.read("2024-01-15_missing").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err, Error::not_found("pino 2024-01-15_missing"));
    }
}
