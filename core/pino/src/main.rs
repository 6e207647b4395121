mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::path::PathBuf;
use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::command::Command;
use domain::Pino;
use ports::inbound::UseCaseRunner;
use wiring::{wire_pino, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn dispatch(&self, command: Command) -> Result<i32, Error> {
        let uc = &self.app.pino_use_case;
        match command {
            Command::Browse => {
                print!("{}", format_browse(&uc.list()?));
                Ok(0)
            }
            Command::Push {
                summary,
                prompt,
                plan,
            } => {
                let filename = uc.push(&summary, &prompt, &plan)?;
                println!("{}", filename);
                Ok(0)
            }
            Command::List => {
                println!("{}", to_json(&uc.list()?)?);
                Ok(0)
            }
            Command::Search { keyword } => {
                let keyword = keyword
                    .ok_or_else(|| Error::invalid_argument("search requires a keyword"))?;
                println!("{}", to_json(&uc.search(&keyword)?)?);
                Ok(0)
            }
            Command::Delete { filename } => {
                let filename = filename
                    .ok_or_else(|| Error::invalid_argument("delete requires a filename"))?;
                uc.delete(&filename)?;
                println!("deleted");
                Ok(0)
            }
            Command::Show { filename } => {
                let filename = filename
                    .ok_or_else(|| Error::invalid_argument("show requires a filename"))?;
                print!("{}", uc.show(&filename)?);
                Ok(0)
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let command = config_to_command(&config)?;
        let command_name = command.name();
        let _ = self.app.logger.log(
            &LogRecord::now(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name)),
        );

        let result = self.dispatch(command);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        let _ = self.app.logger.log(
            &LogRecord::now(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", serde_json::json!(command_name))
                .field("exit_code", serde_json::json!(code)),
        );
        if let Err(ref e) = result {
            let _ = self
                .app
                .logger
                .log(&LogRecord::now(LogLevel::Error, e.to_string()).layer("cli").kind("error"));
        }
        result
    }
}

/// list / search の出力（整形済み JSON 配列、0 件なら `[]`）
fn to_json(pinos: &[Pino]) -> Result<String, Error> {
    serde_json::to_string_pretty(pinos).map_err(|e| Error::json(e.to_string()))
}

/// コマンド未指定時の一覧表示（見出し + 補足行）
fn format_browse(pinos: &[Pino]) -> String {
    if pinos.is_empty() {
        return "(no pinos)\n".to_string();
    }
    let mut out = String::new();
    for p in pinos {
        out.push_str(&format!("{}  ({})\n", p.title(), p.filename));
        out.push_str(&format!("  {}\n", p.description()));
    }
    out
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("pino: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    // help は保存先の解決（$HOME）を必要としない
    if config.help {
        print_help();
        return Ok(0);
    }
    let app = wire_pino(config.dir.as_ref().map(PathBuf::from))?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: pino [-h] [-d|--dir directory] [push|list|search|show|delete] [args...]");
    eprintln!("       pino push --summary \"...\" --prompt \"...\" [--plan \"...\"]");
}

fn print_help() {
    println!("Usage: pino [-h] [-d|--dir directory] [<command> [args...]]");
    println!("  -h, --help            Display this help message.");
    println!("  -d, --dir             Directory holding the pino files. Default: ~/.pino");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish).");
    println!("  <command>             Command to execute. Omit to print a short listing.");
    println!();
    println!("Commands:");
    println!("  push --summary <text> --prompt <text> [--plan <text>]");
    println!("                        Save a new pino and print its filename.");
    println!("  list                  Print all pinos as JSON (newest first).");
    println!("  search <keyword>      Print pinos whose summary, prompt or plan contains <keyword> (case-insensitive).");
    println!("  show <filename>       Print the stored markdown of the pino <filename>.");
    println!("  delete <filename>     Delete the pino <filename> (as printed by push / list).");
    println!();
    println!("Files:");
    println!("  ~/.pino/<YYYY-MM-DD>_<slug>.md   One markdown file per pino.");
    println!("  $XDG_STATE_HOME/pino/pino.log    Structured log (or ~/.local/state/pino/pino.log).");
}
