//! CLI entry point for twig

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use termcolor::{Buffer, BufferedStandardStream, ColorChoice, WriteColor};
use tracing::{debug, info};

use twig::tree::{DEFAULT_MAX_DEPTH, compile_exclude, parse_extensions};
use twig::{
    KindFilter, MetadataColumns, Result, SortKey, TraversalConfig, TreeFormatter, TreeWalker,
    TwigError, count_by_extension, histogram_json, strip_styling, write_histogram,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Print a filtered, depth-bounded directory tree or an extension histogram")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend at most N levels (0 shows only the root and summary)
    #[arg(
        short = 'd',
        long = "depth",
        value_name = "N",
        env = "TWIG_DEPTH",
        default_value_t = DEFAULT_MAX_DEPTH
    )]
    depth: usize,

    /// Include hidden entries (names starting with '.')
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Show file sizes
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Show permission strings
    #[arg(short = 'p', long = "perms")]
    perms: bool,

    /// Show modification times
    #[arg(short = 't', long = "time")]
    time: bool,

    /// List directories only
    #[arg(short = 'D', long = "dirs-only", conflicts_with = "files_only")]
    dirs_only: bool,

    /// List files only
    #[arg(short = 'F', long = "files-only")]
    files_only: bool,

    /// Only show files with these extensions (comma-separated, e.g. mp4,mkv)
    #[arg(short = 'e', long = "ext", value_name = "LIST")]
    ext: Option<String>,

    /// Hide entries whose name matches REGEX
    #[arg(short = 'x', long = "exclude", value_name = "REGEX")]
    exclude: Option<String>,

    /// Also write the result, without colors, to FILE
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Show a file extension histogram instead of a tree
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Output the histogram as JSON (requires --count)
    #[arg(long = "json", requires = "count")]
    json: bool,

    /// Sort key; directories always come first and entries are ordered by name
    #[arg(long = "sort", value_enum, value_name = "KEY", default_value = "name")]
    sort: SortKey,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Disable colors (same as --color never)
    #[arg(long = "no-color")]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env("TWIG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("twig={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Fold the parsed arguments into one immutable traversal config.
fn build_config(args: &Args) -> Result<TraversalConfig> {
    let extensions = match &args.ext {
        Some(list) => parse_extensions(list)?,
        None => BTreeSet::new(),
    };
    let exclude = args.exclude.as_deref().map(compile_exclude).transpose()?;
    let kind_filter = KindFilter::from_flags(args.dirs_only, args.files_only)?;

    if args.sort != SortKey::Name {
        info!(sort = ?args.sort, "listings are always ordered by name");
    }

    let config = TraversalConfig {
        max_depth: args.depth,
        show_hidden: args.all,
        extensions,
        exclude,
        kind_filter,
        sort: args.sort,
        columns: MetadataColumns {
            size: args.size,
            permissions: args.perms,
            modified: args.time,
        },
        use_color: !args.no_color && should_use_color(args.color),
    };
    config.validate()?;
    Ok(config)
}

/// Run `render` against the terminal, or, with an output file, against a
/// buffer that is then echoed to the terminal and saved without styling.
fn emit<F>(config: &TraversalConfig, output_file: Option<&Path>, render: F) -> Result<()>
where
    F: FnOnce(&mut dyn WriteColor) -> Result<()>,
{
    let Some(path) = output_file else {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = BufferedStandardStream::stdout(choice);
        render(&mut stdout)?;
        stdout.flush()?;
        return Ok(());
    };

    let mut buffer = if config.use_color {
        Buffer::ansi()
    } else {
        Buffer::no_color()
    };
    render(&mut buffer)?;

    let text = String::from_utf8_lossy(buffer.as_slice());
    io::stdout().write_all(text.as_bytes())?;
    fs::write(path, strip_styling(&text).as_bytes()).map_err(|source| TwigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "wrote plain-text output");
    eprintln!("twig: output written to {}", path.display());
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    debug!(?config, "built traversal config");

    if args.count {
        // Resolve and scan before anything is written
        let histogram = count_by_extension(&args.path, &config)?;
        emit(&config, args.output.as_deref(), |out| {
            if args.json {
                writeln!(out, "{}", histogram_json(&histogram)?)?;
            } else {
                write_histogram(out, &histogram)?;
            }
            Ok(())
        })
    } else {
        emit(&config, args.output.as_deref(), |out| {
            let mut formatter = TreeFormatter::new(out);
            TreeWalker::new(&config).render(&args.path, &mut formatter)?;
            Ok(())
        })
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("twig: {}", e);
        process::exit(e.exit_code());
    }
}
