//! mta-crumbs CLI
//!
//! Renders a breadcrumb trail into html, list, styled-list or xml markup.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use mta_crumbs_core::{
    load_crumbs, parse_crumbs, render_crumbs, Crumb, Format, InputKind, RenderOptions,
};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Breadcrumb navigation renderer
#[derive(Parser)]
#[command(name = "mta-crumbs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render breadcrumb trails into html, list, styled-list or xml markup")]
#[command(long_about = r#"
mta-crumbs: Breadcrumb Navigation Renderer

Renders an ordered trail of breadcrumbs (label and optional URL) into a
markup string. A crumb without a URL is the current page.

Input:
  - A JSON or YAML file holding a list of {label, url} entries
  - Standard input when no file is given (see --input-format)
  - --crumb Label=url entries, appended after any file input

Formats:
  - html (default)   - Inline links joined by the separator
  - list             - <ul> of <li> items (alias: html_list)
  - styled-list      - <ul class="breadcrumb"> with divider spans (alias: bootstrap)
  - xml              - One element per crumb, named by the separator

Examples:
  mta-crumbs trail.json                                # Inline html links
  mta-crumbs -c Home=/ -c Shop=/shop -c Cart           # Crumbs from arguments
  mta-crumbs trail.yaml --format list --ul-id nav      # <ul id="nav"> list
  cat trail.json | mta-crumbs --format xml -s step     # <step> elements
"#)]
pub struct Args {
    /// Crumb file (.json, .yaml, .yml); reads stdin when omitted and piped
    pub input: Option<PathBuf>,

    /// Crumb as Label=url, or Label for the current page (repeatable)
    #[arg(short, long = "crumb", action = clap::ArgAction::Append)]
    pub crumbs: Vec<Crumb>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<Format>,

    /// Separator text (tag name for xml, divider for styled-list)
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Render every crumb as plain text
    #[arg(long)]
    pub no_links: bool,

    /// Class on linked list items
    #[arg(long)]
    pub li_class: Option<String>,

    /// Class on the current list item
    #[arg(long)]
    pub active_li_class: Option<String>,

    /// Class on the enclosing list
    #[arg(long)]
    pub ul_class: Option<String>,

    /// Id of the enclosing list
    #[arg(long)]
    pub ul_id: Option<String>,

    /// Print nothing when the trail is empty
    #[arg(long)]
    pub skip_if_blank: bool,

    /// Options file (.json, .yaml, .yml); flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Format of crumbs read from stdin
    #[arg(long, value_enum, default_value_t = InputFormatArg::Json)]
    pub input_format: InputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Stdin format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum InputFormatArg {
    Json,
    Yaml,
}

impl From<InputFormatArg> for InputKind {
    fn from(arg: InputFormatArg) -> Self {
        match arg {
            InputFormatArg::Json => InputKind::Json,
            InputFormatArg::Yaml => InputKind::Yaml,
        }
    }
}

fn main() {
    let args = Args::parse();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&args) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let options = build_options(args)?;
    let crumbs = read_crumbs(args)?;

    tracing::info!(crumbs = crumbs.len(), "Loaded breadcrumb trail");

    let output = render_crumbs(&crumbs, &options);
    write_output(&output, args.output.as_ref())
}

/// Build render options from the config file and flags
fn build_options(args: &Args) -> Result<RenderOptions> {
    let base = match &args.config {
        Some(path) => RenderOptions::from_path(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => RenderOptions::default(),
    };

    let mut flags = RenderOptions::new();
    flags.format = args.format;
    flags.separator = args.separator.clone();
    flags.li_class = args.li_class.clone();
    flags.active_li_class = args.active_li_class.clone();
    flags.ul_class = args.ul_class.clone();
    flags.ul_id = args.ul_id.clone();
    if args.no_links {
        flags.links = Some(false);
    }
    if args.skip_if_blank {
        flags.skip_if_blank = Some(true);
    }

    Ok(base.merge(flags))
}

/// Collect crumbs from the input file or stdin, then from --crumb flags
fn read_crumbs(args: &Args) -> Result<Vec<Crumb>> {
    let mut crumbs = if let Some(path) = &args.input {
        load_crumbs(path)
            .with_context(|| format!("Failed to read crumbs from {}", path.display()))?
    } else if !atty::is(atty::Stream::Stdin) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        if text.trim().is_empty() {
            Vec::new()
        } else {
            parse_crumbs(&text, args.input_format.clone().into())
                .context("Failed to parse crumbs from stdin")?
        }
    } else {
        Vec::new()
    };

    crumbs.extend(args.crumbs.iter().cloned());
    Ok(crumbs)
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
