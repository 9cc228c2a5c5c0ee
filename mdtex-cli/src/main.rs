// Command-line interface for mdtex
//
// This binary converts Markdown files to LaTeX and lets you inspect the document tree the
// renderer works on. The conversion itself lives in the mdtex-babel crate; this crate only
// wires files, configuration and the format registry together.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. The to defaults to latex.
// Usage:
//  mdtex <input> [--to <format>] [--from <format>] [--output <file>]          - Convert (default)
//  mdtex convert <input> [--to <format>] [--from <format>] [--output <file>]  - Same as above
//  mdtex inspect <path> [<transform>]      - Show the document tree (defaults to "ast-treeviz")
//  mdtex --list-formats                    - List formats and transforms
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; known keys override the configuration, the rest
// are passed to the target format.
// Example:
//  mdtex notes.md --extra-standalone false

use mdtex_cli::transforms;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mdtex_babel::formats::{LatexFormat, MarkdownFormat};
use mdtex_babel::FormatRegistry;
use mdtex_config::{Loader, MdtexConfig};
use std::collections::HashMap;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("mdtex")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown documents to LaTeX")
        .long_about(
            "mdtex renders Markdown into LaTeX source that compiles with a standard TeX distribution.\n\n\
            Commands:\n  \
            - convert: Render a document (default command)\n  \
            - inspect: View the document tree the renderer works on\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            mdtex notes.md                            # LaTeX document on stdout\n  \
            mdtex notes.md -o notes.tex               # Write to a file\n  \
            mdtex notes.md --extra-standalone false   # Body only, for \\input\n  \
            mdtex inspect notes.md                    # View the document tree"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdtex.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect the document tree of a Markdown file")
                .long_about(
                    "View the document tree produced from a Markdown file, as the LaTeX renderer sees it.\n\n\
                    Transforms:\n  \
                    - ast-treeviz:  Tree visualization (default)\n  \
                    - ast-json:     Tree as JSON (accepted back with --from json)\n\n\
                    Extra Parameters:\n  \
                    --extra-ast-full      List node attributes in the tree visualization\n\n\
                    Examples:\n  \
                    mdtex inspect notes.md                     # Tree visualization\n  \
                    mdtex inspect notes.md ast-json            # JSON output\n  \
                    mdtex inspect notes.md --extra-ast-full    # Tree with all attributes"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the Markdown file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'ast-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document (default command)")
                .long_about(
                    "Convert a document to LaTeX or another serializable format.\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    mdtex convert notes.md                      # LaTeX to stdout\n  \
                    mdtex convert notes.md -o notes.tex         # LaTeX file\n  \
                    mdtex convert tree.json --to latex          # Render a JSON tree\n  \
                    mdtex notes.md                              # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .default_value("latex")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

/// Re-parse with `convert` injected when the first argument looks like a file.
fn get_matches(cli: Command, args: &[String]) -> ArgMatches {
    match cli.clone().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) => {
            let looks_like_file = args.len() > 1
                && !args[1].starts_with('-')
                && !matches!(args[1].as_str(), "inspect" | "convert" | "help");
            if !looks_like_file {
                e.exit();
            }

            let mut new_args = vec![args[0].clone(), "convert".to_string()];
            new_args.extend_from_slice(&args[1..]);
            match cli.try_get_matches_from(&new_args) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);
    let matches = get_matches(build_cli(), &cleaned_args);

    init_tracing(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("path is required");
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            let to = sub_matches
                .get_one::<String>("to")
                .map(|s| s.as_str())
                .unwrap_or("latex");
            let registry = build_registry(&config);

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

/// Registry whose markdown and latex formats carry the configured options
fn build_registry(config: &MdtexConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::with_defaults();
    registry.register(MarkdownFormat::new((&config.markdown).into()));
    registry.register(LatexFormat::new((&config.convert.latex).into()));
    registry
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MdtexConfig,
) {
    let source = fs::read_to_string(path)
        .unwrap_or_else(|e| fail(&format!("Error reading file '{path}': {e}")));

    let params = build_inspect_params(config, extra_params);
    let markdown = (&config.markdown).into();

    let output = transforms::execute_transform(&source, transform, &markdown, &params)
        .unwrap_or_else(|e| fail(&e.to_string()));

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    // Validate formats exist
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            fail(&e.to_string());
        }
    }

    let source = fs::read_to_string(input)
        .unwrap_or_else(|e| fail(&format!("Error reading file '{input}': {e}")));

    let doc = registry
        .parse(&source, from)
        .unwrap_or_else(|e| fail(&e.to_string()));

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| fail(&e.to_string()));

    match output {
        Some(path) => {
            fs::write(path, result)
                .unwrap_or_else(|e| fail(&format!("Error writing file '{path}': {e}")));
            tracing::debug!(path, format = to, "wrote output");
        }
        None => print!("{result}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &MdtexConfig) {
    let registry = build_registry(config);

    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            let mut modes = Vec::new();
            if format.supports_parsing() {
                modes.push("from");
            }
            if format.supports_serialization() {
                modes.push("to");
            }
            println!(
                "  {:<10} {:<9} {}",
                format_name,
                modes.join("/"),
                format.description()
            );
        }
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MdtexConfig {
    let loader = Loader::new().with_optional_file("mdtex.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

/// Fold extra parameters that mirror configuration keys into the configuration.
///
/// Matched keys are removed; whatever is left is passed to the target format.
fn apply_config_overrides(config: &mut MdtexConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = extra_params.remove("ast-full") {
        config.inspect.ast.include_all_properties = parse_bool_arg("ast-full", &raw);
    }
    if let Some(raw) = extra_params.remove("autolink") {
        config.markdown.autolink = parse_bool_arg("autolink", &raw);
    }
    if let Some(raw) = extra_params.remove("standalone") {
        config.convert.latex.standalone = parse_bool_arg("standalone", &raw);
    }
}

fn build_inspect_params(
    config: &MdtexConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if config.inspect.ast.include_all_properties {
        params.insert("ast-full".to_string(), "true".to_string());
    }

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}
