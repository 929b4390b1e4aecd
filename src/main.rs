//! outnum: renumber, promote and demote dotted outline headings.
#![allow(clippy::multiple_crate_versions)]

use clap::{ArgAction, Parser, Subcommand};
use outnum::{config, formats, input, outline, range_edit, save};
use outnum::{Document, DocumentSettings, HeadingMatcher, Span};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::info;

#[derive(Parser)]
#[command(name = "outnum")]
#[command(about = "Hierarchical dotted numbering for outline headings", long_about = None)]
struct Args {
    /// Configuration file (defaults to ./outnum.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Document format, overriding the configuration (plain or markdown)
    #[arg(long, global = true)]
    format: Option<String>,

    /// Log more detail; repeat for debug and trace output
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Renumber every heading in files or directories
    Renumber {
        /// Files or directories to renumber
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Write nothing; exit with status 1 if any file is not canonical
        #[arg(long)]
        check: bool,

        /// Print the result instead of writing it back
        #[arg(long)]
        stdout: bool,

        /// File extensions to match
        #[arg(long, short = 'e', value_name = "EXT")]
        ext: Vec<String>,
    },
    /// Move headings one level up, then renumber
    Promote(RangeArgs),
    /// Move headings one level down, then renumber
    Demote(RangeArgs),
    /// Print the nesting depth of a heading number
    Depth {
        /// Heading number, e.g. 1.2.3
        number: String,
    },
    /// List the numbered headings of files or directories
    Outline {
        /// Files or directories to list
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        /// Emit JSON instead of an indented listing
        #[arg(long)]
        json: bool,

        /// File extensions to match
        #[arg(long, short = 'e', value_name = "EXT")]
        ext: Vec<String>,
    },
}

#[derive(clap::Args)]
struct RangeArgs {
    /// File to edit
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Lines to edit as A:B (inclusive, from 1); defaults to the whole file
    #[arg(long, value_parser = parse_lines)]
    lines: Option<(usize, usize)>,

    /// Print the result instead of writing it back
    #[arg(long)]
    stdout: bool,
}

fn parse_lines(s: &str) -> Result<(usize, usize), String> {
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid line number '{part}': {e}"))
    };
    match s.split_once(':') {
        Some((first, last)) => Ok((parse(first)?, parse(last)?)),
        None => {
            let line = parse(s)?;
            Ok((line, line))
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        match verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run(args: Args) -> outnum::Result<ExitCode> {
    let mut cfg = config::Config::load(args.config.as_deref())?;

    // Override config with command line args
    if let Some(format) = args.format {
        cfg.format = format;
    }

    match args.command {
        Command::Depth { number } => {
            println!("{}", outnum::depth(&number));
            Ok(ExitCode::SUCCESS)
        }
        Command::Renumber {
            paths,
            check,
            stdout,
            ext,
        } => {
            if !ext.is_empty() {
                cfg.file_extensions = ext;
            }
            let matcher = formats::from_config(&cfg)?;
            renumber_paths(&paths, &cfg, matcher.as_ref(), check, stdout)
        }
        Command::Promote(range) => {
            let matcher = formats::from_config(&cfg)?;
            edit_file(&range, &cfg, matcher.as_ref(), range_edit::promote)
        }
        Command::Demote(range) => {
            let matcher = formats::from_config(&cfg)?;
            edit_file(&range, &cfg, matcher.as_ref(), range_edit::demote)
        }
        Command::Outline { paths, json, ext } => {
            if !ext.is_empty() {
                cfg.file_extensions = ext;
            }
            let matcher = formats::from_config(&cfg)?;
            print_outline(&paths, &cfg, matcher.as_ref(), json)
        }
    }
}

fn renumber_paths(
    paths: &[PathBuf],
    cfg: &config::Config,
    matcher: &dyn HeadingMatcher,
    check: bool,
    stdout: bool,
) -> outnum::Result<ExitCode> {
    let documents = input::find_documents(paths, &cfg.file_extensions)?;
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(ExitCode::SUCCESS);
    }

    let settings = DocumentSettings::from(cfg);
    let mut dirty = false;
    for path in &documents {
        let mut doc = Document::load(path, settings)?;
        if check {
            if !outline::is_canonical(&doc, matcher)? {
                println!("{}", path.display());
                dirty = true;
            }
            continue;
        }

        let before = doc.text().to_string();
        let headings = outnum::renumber(&mut doc, matcher)?;
        if stdout {
            print!("{}", doc.text());
        } else if doc.text() != before {
            save::save(&mut doc, path, matcher)?;
            info!(path = %path.display(), headings, "renumbered");
        }
    }

    Ok(if dirty {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

type RangeEdit = fn(&mut Document, usize, usize, &dyn HeadingMatcher) -> outnum::Result<usize>;

fn edit_file(
    range: &RangeArgs,
    cfg: &config::Config,
    matcher: &dyn HeadingMatcher,
    edit: RangeEdit,
) -> outnum::Result<ExitCode> {
    let mut doc = Document::load(&range.file, DocumentSettings::from(cfg))?;
    let span = match range.lines {
        Some((first, last)) => doc.line_span(first, last)?,
        None => Span::new(0, doc.len()),
    };

    let headings = edit(&mut doc, span.start, span.end, matcher)?;
    info!(path = %range.file.display(), headings, "edited range");

    if range.stdout {
        print!("{}", doc.text());
    } else {
        save::save(&mut doc, &range.file, matcher)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn print_outline(
    paths: &[PathBuf],
    cfg: &config::Config,
    matcher: &dyn HeadingMatcher,
    json: bool,
) -> outnum::Result<ExitCode> {
    let documents = input::find_documents(paths, &cfg.file_extensions)?;
    let settings = DocumentSettings::from(cfg);

    let mut outlines = BTreeMap::new();
    for path in &documents {
        let doc = Document::load(path, settings)?;
        outlines.insert(path.display().to_string(), outline::collect(&doc, matcher)?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outlines)?);
    } else {
        for (path, entries) in &outlines {
            if outlines.len() > 1 {
                println!("{path}:");
            }
            println!("{}", outline::render(entries));
        }
    }
    Ok(ExitCode::SUCCESS)
}
