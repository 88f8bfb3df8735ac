//! Command-line host for bible-linker.
//!
//! Usage:
//!   bible-linker convert `<reference>`...              - Convert one reference to a link
//!   bible-linker convert-all [`<path>`] [--in-place]   - Convert every reference in a note
//!   bible-linker paste                               - Auto-link text piped on stdin
//!   bible-linker preview `<reference>`... [--json]     - Show link, validity and message
//!   bible-linker books                               - List the canon
//!   bible-linker config [--init]                     - Show or create the config file

use anyhow::{Context, Result, bail};
use bible_linker_config::Config;
use bible_linker_engine::BibleLinker;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn cli() -> Command {
    let reference_arg = Arg::new("reference")
        .help("Reference text, e.g. 'James 4:1-2'")
        .required(true)
        .num_args(1..)
        .index(1);

    Command::new("bible-linker")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns Bible references into [[wiki links]]")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file to use instead of the default location"),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a single reference to a link")
                .arg(reference_arg.clone()),
        )
        .subcommand(
            Command::new("convert-all")
                .about("Convert all Bible references in a note")
                .arg(
                    Arg::new("path")
                        .help("Note to convert (reads stdin when omitted)")
                        .value_parser(value_parser!(PathBuf))
                        .index(1),
                )
                .arg(
                    Arg::new("in-place")
                        .long("in-place")
                        .short('i')
                        .help("Write the converted note back to its file")
                        .requires("path")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("paste").about("Auto-link text read from stdin"))
        .subcommand(
            Command::new("preview")
                .about("Preview the link for a reference")
                .arg(reference_arg)
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the preview as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("books").about("List the books of the canon"))
        .subcommand(
            Command::new("config")
                .about("Show the effective configuration")
                .arg(
                    Arg::new("init")
                        .long("init")
                        .help("Write a config file with default settings")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let matches = cli().get_matches();
    let config_path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let linker = BibleLinker::standard();

    match matches.subcommand() {
        Some(("convert", sub)) => {
            let config = load_config(config_path)?;
            handle_convert(linker, &config, &reference_from(sub))
        }
        Some(("convert-all", sub)) => handle_convert_all(
            linker,
            sub.get_one::<PathBuf>("path").map(PathBuf::as_path),
            sub.get_flag("in-place"),
        ),
        Some(("paste", _)) => {
            let config = load_config(config_path)?;
            handle_paste(linker, &config)
        }
        Some(("preview", sub)) => {
            handle_preview(linker, &reference_from(sub), sub.get_flag("json"))
        }
        Some(("books", _)) => {
            handle_books(linker);
            Ok(())
        }
        Some(("config", sub)) => handle_config(config_path, sub.get_flag("init")),
        _ => unreachable!("subcommand is required"),
    }
}

/// Loads the config from `custom` or the default location; defaults if absent.
fn load_config(custom: Option<&Path>) -> Result<Config> {
    let config = match custom {
        Some(path) => Config::load_from_path(path)?.unwrap_or_default(),
        None => Config::load_or_default()?,
    };
    log::debug!("Using config {config:?}");
    Ok(config)
}

fn reference_from(matches: &ArgMatches) -> String {
    matches
        .get_many::<String>("reference")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

/// Handle the convert command
fn handle_convert(linker: &BibleLinker, config: &Config, reference: &str) -> Result<()> {
    let reference = reference.trim();
    if reference.is_empty() {
        bail!("Please provide some text to convert");
    }

    let link = linker.render(reference);
    println!("{link}");

    if config.enable_validation {
        let validation = linker.validate(reference);
        if validation.is_valid {
            eprintln!("Converted: {reference} → {link}");
        } else {
            eprintln!("Warning: {}", validation.message);
        }
    }
    Ok(())
}

/// Handle the convert-all command
fn handle_convert_all(linker: &BibleLinker, path: Option<&Path>, in_place: bool) -> Result<()> {
    let content = read_input(path)?;
    let outcome = linker.scan_and_convert_document(&content);

    match path {
        Some(path) if in_place => {
            fs::write(path, &outcome.result)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        _ => print!("{}", outcome.result),
    }

    eprintln!("Converted {} Bible references to links", outcome.count);
    Ok(())
}

/// Handle the paste command
fn handle_paste(linker: &BibleLinker, config: &Config) -> Result<()> {
    let content = read_input(None)?;
    if !config.enable_auto_link {
        log::info!("Auto-linking is disabled, passing paste through");
        print!("{content}");
        return Ok(());
    }

    let outcome = linker.scan_and_convert_document(&content);
    print!("{}", outcome.result);
    Ok(())
}

/// Handle the preview command
fn handle_preview(linker: &BibleLinker, reference: &str, json: bool) -> Result<()> {
    let reference = reference.trim();
    let link = linker.render(reference);
    let validation = linker.validate(reference);

    if json {
        let preview = serde_json::json!({
            "reference": reference,
            "link": link,
            "parsed": linker.parse_reference(reference),
            "validation": validation,
        });
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    println!("Link: {link}");
    println!("Valid: {}", if validation.is_valid { "Yes" } else { "No" });
    println!("Message: {}", validation.message);
    Ok(())
}

/// Handle the books command
fn handle_books(linker: &BibleLinker) {
    for book in linker.registry().books() {
        println!(
            "{} {:<16} {:>3} chapters  {}",
            book.entry.ordinal,
            book.entry.canonical_name,
            book.entry.chapter_count,
            book.spellings.join(", ")
        );
    }
}

/// Handle the config command
fn handle_config(custom: Option<&Path>, init: bool) -> Result<()> {
    let config_path = custom.map_or_else(Config::config_path, Path::to_path_buf);

    if init {
        if config_path.exists() {
            bail!("Config file already exists at {}", config_path.display());
        }
        match custom {
            Some(path) => Config::default().save_to_path(path)?,
            None => Config::default().save()?,
        }
        println!("Created config file at {}", config_path.display());
    }

    let config = load_config(custom)?;
    println!("Config path: {}", config_path.display());
    println!("Bible folder: {}", config.bible_path.display());
    println!("Auto-link on paste: {}", config.enable_auto_link);
    println!("Validate on convert: {}", config.enable_validation);
    Ok(())
}
