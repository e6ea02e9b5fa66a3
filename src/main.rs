// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use toolbelt::cli_cfg::{CliParser, ParserSpec};
use toolbelt::commands::{apply_overrides, github_meta, xxargs, Delimiter, XxargsOptions};
use toolbelt::errors::CliConfigError;
use toolbelt::files::file_args;
use toolbelt::observability::init_logging;
use toolbelt::version::{setup_version, VERSION};

#[derive(Parser)]
#[command(name = "toolbelt", version = VERSION)]
#[command(about = "Small command line utilities")]
#[command(after_help = "Arguments of the form @FILE are replaced by the contents of FILE.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build and run command lines from input items
    Xxargs {
        /// Input items are terminated by DELIM (\n, \t, \0 and \\ accepted)
        #[arg(short, long, value_name = "DELIM", conflicts_with_all = ["null", "whitespace"])]
        delimiter: Option<String>,

        /// Input items are terminated by a NUL character
        #[arg(short = '0', long, conflicts_with = "whitespace")]
        null: bool,

        /// Input items are separated by runs of whitespace
        #[arg(short = 's', long)]
        whitespace: bool,

        /// Read items from FILE instead of standard input
        #[arg(short = 'a', long = "arg-file", value_name = "FILE")]
        arg_file: Option<PathBuf>,

        /// Use at most N items per command line
        #[arg(short = 'n', long = "max-args", value_name = "N")]
        max_args: Option<usize>,

        /// Reopen stdin as /dev/tty in the child process
        #[arg(short = 'o', long = "open-tty")]
        open_tty: bool,

        /// Print each command line on stderr before running it
        #[arg(short = 't', long)]
        verbose: bool,

        /// Command to run, followed by its initial arguments (default: echo)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Publish release metadata for a GitHub Actions build
    GithubMeta {
        /// Environment overrides; a bare KEY means KEY=true
        #[arg(value_name = "KEY[=VALUE]")]
        overrides: Vec<String>,
    },

    /// Print the embedded version
    Version,

    /// Parse arguments with a declarative parser spec and print the result
    CliSpec {
        /// YAML, JSON or TOML parser spec
        spec: PathBuf,

        /// Arguments for the described program
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() {
    init_logging();

    let args = match file_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("toolbelt: {e}");
            std::process::exit(2);
        }
    };
    let cli = Cli::parse_from(args);

    match run(cli.command) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("toolbelt: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(command: Command) -> anyhow::Result<i32> {
    match command {
        Command::Xxargs {
            delimiter,
            null,
            whitespace,
            arg_file,
            max_args,
            open_tty,
            verbose,
            command,
        } => {
            let delimiter = match (delimiter, null, whitespace) {
                (Some(text), _, _) => Delimiter::parse(&text)?,
                (None, true, _) => Delimiter::Byte(0),
                (None, false, true) => Delimiter::Whitespace,
                (None, false, false) => Delimiter::default(),
            };
            let options = XxargsOptions {
                delimiter,
                max_args,
                open_tty,
                verbose,
                command,
            };
            let code = match arg_file {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("cannot open {}", path.display()))?;
                    xxargs::run(&options, BufReader::new(file))?
                }
                None => xxargs::run(&options, io::stdin().lock())?,
            };
            Ok(code)
        }
        Command::GithubMeta { overrides } => {
            let mut env: HashMap<String, String> = std::env::vars().collect();
            apply_overrides(&mut env, &overrides);
            let workdir = std::env::current_dir()?;
            Ok(github_meta::run(&env, &workdir, &mut io::stdout().lock())?)
        }
        Command::Version => {
            println!("VERSION = \"{VERSION}\"");
            match setup_version() {
                Some(version) => println!("SETUP_VERSION = '{version}'"),
                None => println!("SETUP_VERSION = None"),
            }
            Ok(0)
        }
        Command::CliSpec { spec, args } => {
            let spec = ParserSpec::load(&spec)
                .with_context(|| format!("cannot load parser spec {}", spec.display()))?;
            let parser = CliParser::build(&spec)?;
            let ns = match parser.parse_from(args) {
                Ok(ns) => ns,
                Err(CliConfigError::Clap(e)) => e.exit(),
                Err(e) => return Err(e.into()),
            };
            println!("{}", serde_json::to_string_pretty(&ns)?);
            Ok(0)
        }
    }
}
