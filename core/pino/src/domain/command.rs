//! pino コマンドの enum（Command Pattern）
//!
//! 引数解析の結果を enum に落とし、match でディスパッチする。

/// pino のサブコマンド
///
/// コマンドなし = 一覧の簡易表示。それ以外は文字列から解析。
/// ヘルプは保存先の解決より前に cli 側で処理するため、ここには含めない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 一覧を人間向けに表示（コマンド未指定時）
    Browse,

    /// 記録を追加（push --summary --prompt [--plan]）
    Push {
        summary: String,
        prompt: String,
        plan: String,
    },

    /// 全件を JSON で表示
    List,

    /// キーワード検索（search <keyword>）
    Search { keyword: Option<String> },

    /// 記録を削除（delete <filename>）
    Delete { filename: Option<String> },

    /// 記録の markdown をそのまま表示（show <filename>）
    Show { filename: Option<String> },
}

impl Command {
    /// コマンド名と位置引数から Command に解析する（push は Config のフラグから組み立てる）。
    /// 未知の名前は None。
    pub fn parse_with_args(name: &str, args: &[String]) -> Option<Self> {
        let command = match name {
            "list" => Command::List,
            "search" => Command::Search {
                keyword: args.first().cloned(),
            },
            "delete" => Command::Delete {
                filename: args.first().cloned(),
            },
            "show" => Command::Show {
                filename: args.first().cloned(),
            },
            _ => return None,
        };
        Some(command)
    }

    /// ログ用のコマンド名
    pub fn name(&self) -> &'static str {
        match self {
            Command::Browse => "browse",
            Command::Push { .. } => "push",
            Command::List => "list",
            Command::Search { .. } => "search",
            Command::Delete { .. } => "delete",
            Command::Show { .. } => "show",
        }
    }
}
