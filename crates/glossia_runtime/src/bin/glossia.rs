//! Glossia CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use glossia_runtime::Repl;
use glossia_runtime::repl::LineResult;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    language: Option<String>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31merror: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => config.show_help = true,
            "--version" | "-V" => config.show_version = true,
            "--lang" | "-l" => {
                i += 1;
                let code = args
                    .get(i)
                    .ok_or("--lang requires a language code")?;
                config.language = Some(code.clone());
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown flag: {flag}").into());
            }
            file => config.files.push(PathBuf::from(file)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(&args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }
    if config.show_version {
        println!("glossia {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut repl = Repl::new()?;
    if let Some(code) = &config.language {
        let result = repl.execute(&format!(":lang {code}"));
        if let LineResult::Output(text) = &result {
            if text.starts_with("error:") {
                return Err(text.clone().into());
            }
        }
    }

    if config.files.is_empty() {
        repl.run()?;
        return Ok(());
    }

    for file in &config.files {
        run_script(&mut repl, file)?;
    }
    Ok(())
}

/// Executes a script file: one command per line, `#` comments skipped.
fn run_script(repl: &mut Repl, file: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match repl.execute(line) {
            LineResult::Output(output) => {
                if output.starts_with("error:") {
                    return Err(format!("{}: {output}", file.display()).into());
                }
                println!("{output}");
            }
            LineResult::Quiet => {}
            LineResult::Quit => break,
        }
    }
    Ok(())
}

fn print_help() {
    println!("glossia — multilingual command parser");
    println!();
    println!("usage: glossia [options] [script ...]");
    println!();
    println!("options:");
    println!("  -l, --lang <code>   starting language (default: en)");
    println!("  -h, --help          show this help");
    println!("  -V, --version       show version");
    println!();
    println!("with no script files, starts an interactive REPL.");
}
