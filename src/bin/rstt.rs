//! restables CLI - reStructuredText grid table ↔ list table converter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use restables::{
    convert_table, convert_table_at, detect_notation,
    diagnostics::{check_table, format_diagnostics},
    ConversionOutput, ConversionResult, ConversionWarning, ConvertOptions, Notation,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "rstt")]
#[command(version)]
#[command(
    about = "restables - reStructuredText grid table ↔ list table converter",
    long_about = None
)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Output notation
    #[arg(short, long, value_enum, default_value_t = Target::Auto)]
    target: Target,

    /// Convert only the table around this line (1-based) and keep the rest of the input
    #[arg(long)]
    line: Option<usize>,

    /// Widen grid columns to fit their content
    #[arg(long)]
    fit_widths: bool,

    /// Detect and print the input notation without converting
    #[arg(long)]
    detect: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Check a table for potential conversion issues
    Check {
        /// Input file to check
        input: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Target {
    /// The other notation than the input's
    Auto,
    /// Grid table
    Grid,
    /// List table
    List,
}

#[cfg(feature = "cli")]
impl Target {
    fn notation(self) -> Option<Notation> {
        match self {
            Target::Auto => None,
            Target::Grid => Some(Notation::Grid),
            Target::List => Some(Notation::ListTable),
        }
    }
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = read_input(cli.input_file.as_deref())?;

    // If detect mode, just print notation and exit
    if cli.detect {
        match detect_notation(&input) {
            Some(notation) => println!("{}", notation),
            None => println!("unknown"),
        }
        return Ok(());
    }

    let options = ConvertOptions {
        target: cli.target.notation(),
        keep_notation: false,
        fit_widths: cli.fit_widths,
    };

    let converted: ConversionResult<ConversionOutput> = match cli.line {
        Some(0) => {
            eprintln!("Error: --line is 1-based");
            std::process::exit(2);
        }
        Some(line) => convert_table_at(&input, line - 1, &options),
        None => convert_table(&input, &options),
    };

    let result = match converted {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Print warnings to stderr (unless quiet mode)
    if !cli.quiet && result.has_warnings() {
        print_warnings_to_stderr(&result.warnings, true);
    }

    // Check strict mode
    if cli.strict && result.has_warnings() {
        eprintln!(
            "Error: {} conversion warning(s) in strict mode",
            result.warnings.len()
        );
        std::process::exit(1);
    }

    // A whole document keeps its own line ending; a bare table gets one
    let mut content = result.content;
    if !content.ends_with('\n') {
        content.push('\n');
    }

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            file.write_all(content.as_bytes())?;
            if result.warnings.is_empty() {
                eprintln!("✓ Output written to: {}", path);
            } else {
                eprintln!(
                    "⚠ Output written to: {} ({} warning(s))",
                    path,
                    result.warnings.len()
                );
            }
        }
        None => {
            print!("{}", content);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Check { input, no_color } => {
            let content = read_input(input.as_deref())?;

            let result = check_table(&content);
            let output = format_diagnostics(&result, !no_color);
            println!("{}", output);

            if result.has_errors() {
                std::process::exit(1);
            }
        }

        Commands::Info => {
            println!("restables - reStructuredText grid table ↔ list table converter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Features:");
            println!("  ✓ Grid table → list table");
            println!("  ✓ List table → grid table");
            println!("  ✓ Multi-line cells and header rows");
            println!("  ✓ In-place conversion of one table in a document (--line)");
            println!("  ✓ Grid table diagnostics (check)");
            println!("  ✓ Auto-detection of input notation");
            println!();
            println!("Not supported:");
            println!("  - Row or column spans");
            println!("  - Simple tables");
            println!();
        }
    }

    Ok(())
}

/// Print warnings to stderr with optional color coding
#[cfg(feature = "cli")]
fn print_warnings_to_stderr(warnings: &[ConversionWarning], use_color: bool) {
    eprintln!();
    eprintln!(
        "{}Conversion Warnings ({}):{}",
        if use_color { "\x1b[33m" } else { "" },
        warnings.len(),
        if use_color { "\x1b[0m" } else { "" }
    );
    eprintln!();

    let color = if use_color { "\x1b[33m" } else { "" };
    let reset = if use_color { "\x1b[0m" } else { "" };

    for warning in warnings {
        match warning.line {
            Some(line) => eprintln!(
                "  {}[warning]{} line {}: {}",
                color, reset, line, warning.message
            ),
            None => eprintln!("  {}[warning]{} {}", color, reset, warning.message),
        }
        if let Some(ref suggestion) = warning.suggestion {
            eprintln!("    = help: {}", suggestion);
        }
    }
    eprintln!();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install restables --features cli");
    eprintln!("  rstt [OPTIONS] [INPUT_FILE]");
}
