use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use maifmt::rewrite::{self, RewriteOutcome};
use maifmt::{FormatOptions, MaidataFormatter, NOTE_TRACK_PREFIX};
use std::path::PathBuf;

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let matches = Command::new("maifmt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrites maidata note tracks with minimal beat subdivisions")
        .arg(
            Arg::new("input")
                .help("maidata file(s) to format in place")
                .required(true)
                .num_args(1..)
                .value_name("INPUT_FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output")
                .help("Write the result to this file instead of the input")
                .short('o')
                .long("output")
                .value_name("OUTPUT_FILE")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("stdout")
                .help("Print the formatted document instead of writing it")
                .long("stdout")
                .action(ArgAction::SetTrue)
                .conflicts_with("output"),
        )
        .arg(
            Arg::new("check")
                .help("Only report files that would change (exit code 1 if any)")
                .long("check")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["output", "stdout"]),
        )
        .arg(
            Arg::new("prefix")
                .help("Key prefix of note-track entries")
                .long("prefix")
                .value_name("PREFIX")
                .default_value(NOTE_TRACK_PREFIX),
        )
        .arg(
            Arg::new("verbose")
                .help("Enable verbose output")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let inputs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("input")
        .unwrap_or_default()
        .cloned()
        .collect();
    let output = matches.get_one::<PathBuf>("output");
    let to_stdout = matches.get_flag("stdout");
    let check = matches.get_flag("check");
    let verbose = matches.get_flag("verbose");
    let prefix = matches
        .get_one::<String>("prefix")
        .cloned()
        .unwrap_or_else(|| NOTE_TRACK_PREFIX.to_string());

    init_logging(verbose);
    log::debug!("maifmt v{}", env!("CARGO_PKG_VERSION"));

    if output.is_some() && inputs.len() != 1 {
        bail!("--output needs exactly one input file, got {}", inputs.len());
    }

    let formatter = MaidataFormatter::new(FormatOptions {
        note_track_prefix: prefix,
    });
    log::debug!("Note tracks: keys starting with {}", formatter.options().note_track_prefix);

    let mut needs_formatting = false;

    for input in &inputs {
        if check {
            let (original, formatted) = rewrite::format_path(input, &formatter)?;
            if original != formatted {
                log::info!("{} would be reformatted", input.display());
                needs_formatting = true;
            }
        } else if to_stdout {
            let (_, formatted) = rewrite::format_path(input, &formatter)?;
            print!("{}", formatted);
        } else if let Some(output) = output {
            let (_, formatted) = rewrite::format_path(input, &formatter)?;
            std::fs::write(output, formatted)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            log::info!("Formatted {} into {}", input.display(), output.display());
        } else {
            match rewrite::rewrite_file(input, &formatter)? {
                RewriteOutcome::Changed => log::info!("Formatted {}", input.display()),
                RewriteOutcome::Unchanged => {
                    log::info!("{} is already formatted", input.display())
                }
            }
        }
    }

    if needs_formatting {
        std::process::exit(1);
    }

    Ok(())
}
