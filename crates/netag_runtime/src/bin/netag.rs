//! netag CLI entry point.

use netag_foundation::Error;
use netag_placeholder::{FallbackPolicy, PlaceholderOptions};
use netag_runtime::logging::{self, Verbosity};
use netag_runtime::{Repl, batch, serialize};
use std::env;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Which stream operation to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Command {
    Strip,
    Restore,
    Roundtrip,
    #[default]
    Repl,
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    command: Command,
    entities: Option<PathBuf>,
    reject: bool,
    no_placeholders: bool,
    sentinel: Option<char>,
    verbosity: Verbosity,
    show_help: bool,
    show_version: bool,
}

impl CliConfig {
    fn placeholder_options(&self) -> PlaceholderOptions {
        let mut options = PlaceholderOptions::default().with_enabled(!self.no_placeholders);
        if self.reject {
            options = options.with_fallback(FallbackPolicy::Reject);
        }
        if let Some(sentinel) = self.sentinel {
            options = options.with_sentinel(sentinel);
        }
        options
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            if let Some(context) = e.downcast_ref::<Error>().and_then(|e| e.context.as_ref()) {
                eprintln!("  {context}");
            }
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut command = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.louder(),
            "-q" | "--quiet" => config.verbosity = Verbosity::Quiet,
            "--reject" => config.reject = true,
            "--no-placeholders" => config.no_placeholders = true,
            "--entities" => {
                i += 1;
                if i >= args.len() {
                    return Err("--entities requires a path".into());
                }
                config.entities = Some(PathBuf::from(&args[i]));
            }
            "--sentinel" => {
                i += 1;
                let value = args.get(i).ok_or("--sentinel requires a character")?;
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => config.sentinel = Some(c),
                    _ => return Err(format!("invalid --sentinel value: {value}").into()),
                }
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            name => {
                if command.is_some() {
                    return Err(format!("unexpected argument: {name}").into());
                }
                command = Some(match name {
                    "strip" => Command::Strip,
                    "restore" => Command::Restore,
                    "roundtrip" => Command::Roundtrip,
                    "repl" => Command::Repl,
                    other => return Err(format!("unknown command: {other}").into()),
                });
            }
        }
        i += 1;
    }

    config.command = command.unwrap_or_default();
    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("netag {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.verbosity)?;
    let options = config.placeholder_options();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match config.command {
        Command::Strip => {
            let sidecar = batch::strip_stream(stdin, stdout, &options)?;
            if let Some(path) = &config.entities {
                serialize::save_to_file(&sidecar, path)?;
            }
        }
        Command::Restore => {
            let path = config
                .entities
                .as_ref()
                .ok_or("restore requires --entities FILE")?;
            let sidecar = serialize::load_from_file(path)?;
            batch::restore_stream(stdin, stdout, &sidecar, &options)?;
        }
        Command::Roundtrip => batch::roundtrip_stream(stdin, stdout, &options)?,
        Command::Repl => {
            drop(stdin);
            drop(stdout);
            Repl::new(options)?.run()?;
        }
    }

    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mnetag\x1b[0m - Strip inline entity markup and restore it after transformation

\x1b[1mUSAGE:\x1b[0m
    netag [OPTIONS] [COMMAND]

\x1b[1mCOMMANDS:\x1b[0m
    strip        Read annotated lines from stdin, write clean lines to stdout
    restore      Read transformed lines from stdin, restore entities from --entities
    roundtrip    Strip and restore each line with no transformation in between
    repl         Interactive session (default)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -v, --verbose         More diagnostics on stderr (repeatable)
    -q, --quiet           Errors only
    --entities FILE       Entity sidecar written by strip, read by restore
    --reject              Fail on malformed markup instead of passing the line through
    --no-placeholders     Leave lines and placeholders untouched
    --sentinel C          Placeholder marker character (default $)

\x1b[1mEXAMPLES:\x1b[0m
    netag strip --entities ents.mp < in.txt | translate > out.txt
    netag restore --entities ents.mp < out.txt
    echo 'pay <ne entity=\"100\">$num</ne>' | netag roundtrip

\x1b[1mREPL COMMANDS:\x1b[0m
    LINE                 Strip LINE and show its entities
    :restore TEXT        Restore the last line's entities into TEXT
    :entities            Show the last line's entities
    :reject / :pass      Switch the malformed-markup policy
    Ctrl+D               Exit REPL"
    );
}
