//! Command-line interface for sentex
//! Classifies, parses and ciphers single sentences against a flat word dictionary.
//!
//! Usage:
//!   sentex tokens `<text>` [--format simple|json]        - Print classified tokens
//!   sentex parse `<text>` [--format `<format>`]          - Print the parse tree
//!   sentex encode `<text>` [--shift `<n>`] [--show-tree] - Check the grammar, then encipher
//!   sentex decode `<text>` [--shift `<n>`]               - Decipher
//!   sentex list-formats                                - List tree formats
//!
//! Every command accepts `--config <file>`, `--dictionary <file>` and `--verbose`.
//! Configuration layers, later wins: built-in defaults, `sentex.toml` in the working
//! directory when present, the `--config` file, then `--dictionary`.

mod transforms;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use sentex_config::{Loader, SentexConfig};
use sentex_parser::sentex::cipher::{self, Shift};
use sentex_parser::sentex::dictionary::Dictionary;
use sentex_parser::sentex::parsing::SentenceParser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when it exists
const LOCAL_CONFIG: &str = "sentex.toml";

fn text_arg() -> Arg {
    Arg::new("text")
        .help("Sentence to process (surrounding whitespace is ignored)")
        .required(true)
        .index(1)
}

fn shift_arg() -> Arg {
    Arg::new("shift")
        .long("shift")
        .short('s')
        .help("Cipher shift, 0-25 (default: cipher.shift from config)")
        .value_parser(value_parser!(i64))
        .allow_negative_numbers(true)
}

fn build_cli() -> Command {
    Command::new("sentex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify, parse and encipher sentences against a word dictionary")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .help("Dictionary file (overrides dictionary.path)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print each word with its class")
                .arg(text_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Token format (default: output.token_format from config)")
                        .value_parser(transforms::TOKEN_FORMATS.to_vec()),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the parse tree of a sentence")
                .arg(text_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Tree format (default: output.tree_format from config)"),
                ),
        )
        .subcommand(
            Command::new("encode")
                .about("Check that a sentence parses, then encipher it")
                .arg(text_arg())
                .arg(shift_arg())
                .arg(
                    Arg::new("show-tree")
                        .long("show-tree")
                        .help("Print the parse tree before the cipher text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("decode")
                .about("Decipher text")
                .arg(text_arg())
                .arg(shift_arg()),
        )
        .subcommand(Command::new("list-formats").about("List tree formats"))
}

fn main() {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    if let Err(message) = run(&matches) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let config = load_config(matches)?;

    match matches.subcommand() {
        Some(("tokens", sub)) => handle_tokens_command(&config, sub),
        Some(("parse", sub)) => handle_parse_command(&config, sub),
        Some(("encode", sub)) => handle_encode_command(&config, sub),
        Some(("decode", sub)) => handle_decode_command(&config, sub),
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(())
        }
        _ => Err("no command given".to_string()),
    }
}

fn load_config(matches: &ArgMatches) -> Result<SentexConfig, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("dictionary") {
        loader = loader
            .set_override("dictionary.path", path.to_string_lossy().into_owned())
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| format!("configuration: {}", e))
}

fn load_dictionary(config: &SentexConfig) -> Result<Dictionary, String> {
    let path = &config.dictionary.path;
    let result = if config.dictionary.required {
        Dictionary::load_strict(path)
    } else {
        Dictionary::load(path)
    };
    result.map_err(|e| e.to_string())
}

fn input_text(matches: &ArgMatches) -> &str {
    matches
        .get_one::<String>("text")
        .map(|text| text.trim())
        .unwrap_or_default()
}

fn shift(config: &SentexConfig, matches: &ArgMatches) -> Result<Shift, String> {
    let value = matches
        .get_one::<i64>("shift")
        .copied()
        .unwrap_or_else(|| i64::from(config.cipher.shift));
    Shift::new(value).map_err(|e| e.to_string())
}

/// Print `output`, ending it with exactly one newline
fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
}

fn handle_tokens_command(config: &SentexConfig, matches: &ArgMatches) -> Result<(), String> {
    let format = match matches.get_one::<String>("format") {
        Some(name) => transforms::token_format(name)?,
        None => config.output.token_format,
    };

    let dictionary = load_dictionary(config)?;
    let tokens = SentenceParser::new(&dictionary)
        .classify(input_text(matches))
        .map_err(|e| e.to_string())?;

    let output = transforms::render_tokens(&tokens, format)?;
    if !output.is_empty() {
        emit(&output);
    }
    Ok(())
}

fn handle_parse_command(config: &SentexConfig, matches: &ArgMatches) -> Result<(), String> {
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.output.tree_format);

    let dictionary = load_dictionary(config)?;
    let tree = SentenceParser::new(&dictionary)
        .parse(input_text(matches))
        .map_err(|e| e.to_string())?;

    emit(&transforms::render_tree(&tree, format)?);
    Ok(())
}

fn handle_encode_command(config: &SentexConfig, matches: &ArgMatches) -> Result<(), String> {
    let shift = shift(config, matches)?;
    let text = input_text(matches);

    let dictionary = load_dictionary(config)?;
    let tree = SentenceParser::new(&dictionary)
        .parse(text)
        .map_err(|e| e.to_string())?;

    if matches.get_flag("show-tree") {
        emit(&transforms::render_tree(&tree, &config.output.tree_format)?);
    }

    tracing::debug!(%shift, "encoding");
    println!("{}", cipher::encode(text, shift));
    Ok(())
}

fn handle_decode_command(config: &SentexConfig, matches: &ArgMatches) -> Result<(), String> {
    let shift = shift(config, matches)?;
    println!("{}", cipher::decode(input_text(matches), shift));
    Ok(())
}

fn handle_list_formats_command() {
    println!("Available tree formats:\n");

    for (name, description) in transforms::tree_formats() {
        println!("  {}", name);
        println!("    {}", description);
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_shift_flag_overrides_config() {
        let config = sentex_config::load_defaults().unwrap();
        let matches = build_cli()
            .try_get_matches_from(["sentex", "decode", "abc", "--shift", "5"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(shift(&config, sub).unwrap().get(), 5);
    }

    #[test]
    fn test_shift_defaults_to_config() {
        let config = sentex_config::load_defaults().unwrap();
        let matches = build_cli()
            .try_get_matches_from(["sentex", "decode", "abc"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(shift(&config, sub).unwrap().get(), 3);
    }

    #[test]
    fn test_negative_shift_is_rejected_by_range_check() {
        let config = sentex_config::load_defaults().unwrap();
        let matches = build_cli()
            .try_get_matches_from(["sentex", "decode", "abc", "--shift", "-1"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(
            shift(&config, sub).unwrap_err(),
            "shift must be between 0 and 25, got -1"
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        let matches = build_cli()
            .try_get_matches_from(["sentex", "parse", "  the cat runs \t"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();

        assert_eq!(input_text(sub), "the cat runs");
    }

    #[test]
    fn test_global_dictionary_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["sentex", "parse", "he ran", "--dictionary", "words.txt"])
            .unwrap();

        let config = load_config(&matches).unwrap();
        assert_eq!(config.dictionary.path, PathBuf::from("words.txt"));
    }
}
