//! 記録（pino）1 件のドメイン型と表示用ヘルパー

use chrono::{DateTime, Local, SecondsFormat};
use serde::{Serialize, Serializer};

/// 一覧表示のプロンプトプレビューの最大文字数
pub const PREVIEW_MAX_CHARS: usize = 60;

const ELLIPSIS: char = '…';
const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y %H:%M";

/// 保存された記録 1 件
///
/// `filename` は保存ディレクトリ内で一意な拡張子なしのファイル名。作成後は変わらない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pino {
    pub filename: String,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub created_at: DateTime<Local>,
    pub summary: String,
    pub prompt: String,
    /// 空のときは Plan セクションなし
    #[serde(skip_serializing_if = "String::is_empty")]
    pub plan: String,
}

fn serialize_rfc3339<S: Serializer>(t: &DateTime<Local>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true))
}

impl Pino {
    /// 一覧の見出し
    pub fn title(&self) -> &str {
        &self.summary
    }

    /// 一覧の補足行（作成日時 + プロンプトの先頭）
    pub fn description(&self) -> String {
        format!(
            "{}  {}",
            self.created_at.format(DISPLAY_DATE_FORMAT),
            truncate(&self.prompt, PREVIEW_MAX_CHARS)
        )
    }

    /// 検索対象のテキスト（summary / prompt / plan を空白で連結）
    pub fn filter_value(&self) -> String {
        format!("{} {} {}", self.summary, self.prompt, self.plan)
    }

    /// 小文字化済みのキーワードを部分文字列として含むか
    pub fn matches_lowercase(&self, keyword_lower: &str) -> bool {
        self.filter_value().to_lowercase().contains(keyword_lower)
    }
}

/// `max` 文字を超える場合は `max - 1` 文字 + 省略記号にする
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}
