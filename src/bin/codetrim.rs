use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use codetrim::{LineSeparator, Strategy, TrimConfig};
use codetrim::{compare_all, parse_leading_char, strip_edge_newlines, trim_with};
use env_logger::Env;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::io::{self, Read, Write};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyOpt { Scalar, SinglePass, Vectorized, Buffered }

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeparatorOpt { Lf, Crlf }

#[derive(Debug, Parser)]
#[command(name = "codetrim", version, about = "Strip the common indentation from a code block")]
struct Args {
    /// Trim strategy (default: vectorized, or $CODETRIM_STRATEGY)
    #[arg(short = 's', long = "strategy", value_enum, global = true)]
    strategy: Option<StrategyOpt>,

    /// Leading character to strip: one char, or \t / tab / \s / space (default: space, or $CODETRIM_CHAR)
    #[arg(short = 'c', long = "char", global = true, allow_hyphen_values = true)]
    leading: Option<String>,

    /// Line separator (default: lf, or $CODETRIM_SEPARATOR)
    #[arg(long = "separator", value_enum, global = true)]
    separator: Option<SeparatorOpt>,

    /// Strip leading and trailing newlines before trimming
    #[arg(long = "strip-edges", default_value_t = false, global = true)]
    strip_edges: bool,

    /// Read the block from a file instead of stdin
    #[arg(short = 'i', long = "input", global = true)]
    input: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Trim the block and print it (default)
    Trim,
    /// Run every strategy over the block and report whether they agree
    Compare,
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Serialize)]
struct TrimOutput<'a> {
    strategy: Strategy,
    leading: char,
    separator: LineSeparator,
    output: &'a str,
}

fn main() -> anyhow::Result<()> {
    // Initialize logger once; default level comes from RUST_LOG
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(""))
        .format_timestamp(None)
        .try_init();
    let args = Args::parse();

    match &args.cmd {
        Some(Command::Completions { shell }) => {
            let mut cmd = Args::command();
            clap_complete::generate(*shell, &mut cmd, "codetrim", &mut io::stdout());
            Ok(())
        }
        Some(Command::Compare) => run_compare(&args),
        Some(Command::Trim) | None => run_trim(&args),
    }
}

fn resolve_config(args: &Args) -> anyhow::Result<TrimConfig> {
    let mut cfg = TrimConfig::from_env()?;
    if let Some(s) = args.strategy {
        cfg.strategy = match s {
            StrategyOpt::Scalar => Strategy::Scalar,
            StrategyOpt::SinglePass => Strategy::SinglePass,
            StrategyOpt::Vectorized => Strategy::Vectorized,
            StrategyOpt::Buffered => Strategy::Buffered,
        };
    }
    if let Some(c) = args.leading.as_deref() {
        cfg.leading = parse_leading_char(c)?;
    }
    if let Some(sep) = args.separator {
        cfg.separator = match sep {
            SeparatorOpt::Lf => LineSeparator::Lf,
            SeparatorOpt::Crlf => LineSeparator::CrLf,
        };
    }
    Ok(cfg)
}

fn read_input(args: &Args) -> anyhow::Result<String> {
    let text = match args.input.as_deref() {
        Some("-") | None => {
            if io::stdin().is_terminal() {
                anyhow::bail!("no stdin detected: pipe a code block into codetrim or pass --input");
            }
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", path, e))?,
    };
    if args.strip_edges {
        return Ok(strip_edge_newlines(&text).to_string());
    }
    Ok(text)
}

fn run_trim(args: &Args) -> anyhow::Result<()> {
    let cfg = resolve_config(args)?;
    let text = read_input(args)?;
    log::info!("mode=trim strategy={} bytes={}", cfg.strategy, text.len());
    let out = trim_with(&cfg, &text);
    match args.format {
        OutputFormat::Text => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let report = TrimOutput {
                strategy: cfg.strategy,
                leading: cfg.leading,
                separator: cfg.separator,
                output: &out,
            };
            print_structured(args.format, &report)?;
        }
    }
    Ok(())
}

fn run_compare(args: &Args) -> anyhow::Result<()> {
    let cfg = resolve_config(args)?;
    let text = read_input(args)?;
    log::info!("mode=compare bytes={}", text.len());
    let report = compare_all(&text, cfg.leading, cfg.separator);
    match args.format {
        OutputFormat::Text => anyhow::bail!("format not supported for 'compare': use json|yaml"),
        fmt => print_structured(fmt, &report)?,
    }
    Ok(())
}

fn print_structured<T: Serialize>(fmt: OutputFormat, value: &T) -> anyhow::Result<()> {
    match fmt {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        OutputFormat::Text => anyhow::bail!("text output has no structured form"),
    }
    Ok(())
}
