//! 記録の Markdown 形式（書き出しと読み戻し）
//!
//! ```text
//! # <summary>
//!
//! > <YYYY-MM-DD HH:MM>
//!
//! ## Prompt
//!
//! <prompt>
//!
//! ## Plan            (plan が空なら省略)
//!
//! <plan>
//! ```
//!
//! 読み戻しは崩れた Markdown でも失敗せず、取れるフィールドだけ埋める。

use crate::domain::Pino;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use regex::Regex;
use std::sync::OnceLock;

/// 日付行・ファイル名の日時書式（分精度）
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

const SUMMARY_PREFIX: &str = "# ";
const PROMPT_MARKER: &str = "## Prompt";
const PLAN_MARKER: &str = "## Plan";

fn date_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^>\s*(.+)$").expect("date line pattern is valid"))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Prompt,
    Plan,
}

/// 記録を Markdown テキストにする
pub fn render(pino: &Pino) -> String {
    let mut b = String::new();
    b.push_str(&format!("{}{}\n\n", SUMMARY_PREFIX, pino.summary));
    b.push_str(&format!("> {}\n\n", pino.created_at.format(DATE_FORMAT)));
    b.push_str(PROMPT_MARKER);
    b.push_str("\n\n");
    b.push_str(&pino.prompt);
    b.push('\n');
    if !pino.plan.is_empty() {
        b.push('\n');
        b.push_str(PLAN_MARKER);
        b.push_str("\n\n");
        b.push_str(&pino.plan);
        b.push('\n');
    }
    b
}

/// "YYYY-MM-DD HH:MM" をローカル時刻として解釈する
pub fn parse_date(s: &str) -> Option<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), DATE_FORMAT).ok()?;
    Local.from_local_datetime(&naive).earliest()
}

/// Markdown テキストを記録に戻す（1 パス）
///
/// - 最初の `# ` 行が summary
/// - 最初の `> ...` 行が日付行。解釈できなくても読み捨てる
/// - `## Prompt` / `## Plan` の行以降をそれぞれのセクションに積む
///
/// 日付が取れなかった場合のみ `modified`（ファイルの更新日時など）を呼んで created_at にする。
pub fn parse<F>(text: &str, filename: &str, modified: F) -> Pino
where
    F: FnOnce() -> DateTime<Local>,
{
    let mut summary: Option<String> = None;
    let mut date_seen = false;
    let mut created_at: Option<DateTime<Local>> = None;
    let mut section = Section::None;
    let mut prompt_lines: Vec<&str> = Vec::new();
    let mut plan_lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        if summary.is_none() {
            if let Some(rest) = line.strip_prefix(SUMMARY_PREFIX) {
                summary = Some(rest.to_string());
                continue;
            }
        }

        if !date_seen {
            if let Some(caps) = date_line_re().captures(line) {
                date_seen = true;
                created_at = parse_date(&caps[1]);
                continue;
            }
        }

        if line == PROMPT_MARKER {
            section = Section::Prompt;
            continue;
        }
        if line == PLAN_MARKER {
            section = Section::Plan;
            continue;
        }

        match section {
            Section::Prompt => prompt_lines.push(line),
            Section::Plan => plan_lines.push(line),
            Section::None => {}
        }
    }

    Pino {
        filename: filename.to_string(),
        created_at: created_at.unwrap_or_else(modified),
        summary: summary.unwrap_or_default(),
        prompt: prompt_lines.join("\n").trim().to_string(),
        plan: plan_lines.join("\n").trim().to_string(),
    }
}
