use crate::domain::command::Command;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

/// CLI から受け取った生の設定（command は文字列のまま保持）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -d / --dir: 保存先ディレクトリ（未指定なら $HOME/.pino）
    pub dir: Option<String>,
    /// コマンド名（None の場合は一覧の簡易表示）
    pub command_name: Option<String>,
    /// search / delete の位置引数
    pub command_args: Vec<String>,
    /// push --summary
    pub summary: Option<String>,
    /// push --prompt
    pub prompt: Option<String>,
    /// push --plan
    pub plan: Option<String>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

const SUBCOMMANDS: [&str; 6] = ["delete", "help", "list", "push", "search", "show"];

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .disable_help_subcommand(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("directory")
                .help("Directory holding the pino files (default: ~/.pino)")
                .global(true)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_push_subcommand() -> clap::Command {
    clap::Command::new("push")
        .about("Save a new pino")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("summary")
                .long("summary")
                .value_name("text")
                .help("One-line summary (becomes the heading and the filename slug)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("prompt")
                .long("prompt")
                .value_name("text")
                .help("Original prompt")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("plan")
                .long("plan")
                .value_name("text")
                .help("Plan content (optional)")
                .num_args(1),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new("pino")
            .about("Keep short markdown notes of prompts and plans")
            .subcommand_required(false)
            .subcommand(build_push_subcommand())
            .subcommand(
                clap::Command::new("list")
                    .about("Print all pinos as JSON (newest first)")
                    .disable_help_flag(true),
            )
            .subcommand(
                clap::Command::new("search")
                    .about("Print pinos containing the keyword as JSON (case-insensitive)")
                    .disable_help_flag(true)
                    .arg(clap::Arg::new("keyword").index(1).value_name("keyword")),
            )
            .subcommand(
                clap::Command::new("delete")
                    .about("Delete a pino by filename")
                    .disable_help_flag(true)
                    .arg(clap::Arg::new("filename").index(1).value_name("filename")),
            )
            .subcommand(
                clap::Command::new("show")
                    .about("Print the stored markdown of a pino")
                    .disable_help_flag(true)
                    .arg(clap::Arg::new("filename").index(1).value_name("filename")),
            )
            .subcommand(
                clap::Command::new("help")
                    .about("Display this help message")
                    .disable_help_flag(true),
            ),
    )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let sub = matches.subcommand();
    let sub_matches = sub.map(|(_, m)| m);

    let help = matches.get_flag("help") || sub_matches.map_or(false, |m| m.get_flag("help"));
    let dir = sub_matches
        .and_then(|m| m.get_one::<String>("dir"))
        .or_else(|| matches.get_one::<String>("dir"))
        .cloned();

    let mut config = Config {
        help,
        dir,
        ..Default::default()
    };

    match sub {
        None => {}
        Some(("push", m)) => {
            config.command_name = Some("push".to_string());
            config.summary = m.get_one::<String>("summary").cloned();
            config.prompt = m.get_one::<String>("prompt").cloned();
            config.plan = m.get_one::<String>("plan").cloned();
        }
        Some(("search", m)) => {
            config.command_name = Some("search".to_string());
            config.command_args = m.get_one::<String>("keyword").cloned().into_iter().collect();
        }
        Some((name @ ("delete" | "show"), m)) => {
            config.command_name = Some(name.to_string());
            config.command_args = m.get_one::<String>("filename").cloned().into_iter().collect();
        }
        Some(("help", _)) => config.help = true,
        Some((name, _)) => config.command_name = Some(name.to_string()),
    }
    config
}

/// 引数列を解析する（先頭はプログラム名）。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// プロセスのコマンドラインを解析する。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する。
/// 注: clap_complete::generate はグローバルな help 引数と衝突するため、簡易フォールバックを常に使用する。
pub fn print_completion(shell: Shell) {
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for pino (subcommands only)
_pino() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{}" -- "$cur"))
}}
complete -F _pino pino
"#,
                SUBCOMMANDS.join(" ")
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for pino (subcommands only)
#compdef pino
local subcommands
subcommands=({})
_describe 'command' subcommands
"#,
                SUBCOMMANDS
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for pino (subcommands only)
complete -c pino -a "{}"
"#,
                SUBCOMMANDS.join(" ")
            );
        }
        _ => {}
    }
}

/// Config を Command に変換する（help は呼び出し側で `config.help` を先に見る）
pub fn config_to_command(config: &Config) -> Result<Command, Error> {
    match config.command_name.as_deref() {
        None => Ok(Command::Browse),
        Some("push") => Ok(Command::Push {
            summary: config.summary.clone().unwrap_or_default(),
            prompt: config.prompt.clone().unwrap_or_default(),
            plan: config.plan.clone().unwrap_or_default(),
        }),
        Some(name) => Command::parse_with_args(name, &config.command_args)
            .ok_or_else(|| Error::invalid_argument(format!("unknown command: {}", name))),
    }
}
