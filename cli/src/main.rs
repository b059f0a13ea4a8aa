//! brandoc CLI - branded document conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use brandoc::convert::{extract_metadata, find_markdown_files, split_frontmatter};
use brandoc::sow::{self, DirectoryStore, ErrorMode, SowContext, SowGenerator, SowTemplate};
use brandoc::{
    parse_markdown, BatchConverter, BlockStats, ConvertOptions, Converter, Error,
    RenderOptions, Theme,
};

#[derive(Parser)]
#[command(name = "brandoc")]
#[command(author = "brandoc contributors")]
#[command(version)]
#[command(about = "Convert markdown to branded HTML, JSON and text documents", long_about = None)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a directory tree, a phase or a single file
    Convert {
        /// Source directory of phase folders
        #[arg(long, value_name = "DIR", default_value = "opportunity")]
        input_dir: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "output")]
        output: PathBuf,

        /// Output format (html, json, text)
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Convert only one phase directory (e.g. 9-contract)
        #[arg(long, conflicts_with = "file")]
        phase: Option<String>,

        /// Convert only one file
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Number of parallel conversions
        #[arg(long, default_value = "4")]
        parallel: usize,

        /// Theme JSON file
        #[arg(long, value_name = "FILE", env = "BRANDOC_THEME")]
        theme: Option<PathBuf>,

        /// Cover-page logo image
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Directory for conversion logs (default: OUTPUT/_metadata)
        #[arg(long, value_name = "DIR")]
        metadata_dir: Option<PathBuf>,
    },

    /// Generate a Statement of Work from a template and context
    Sow {
        /// Markdown template with {{ name }} placeholders
        #[arg(short, long, value_name = "FILE")]
        template: PathBuf,

        /// Context JSON file
        #[arg(short, long, value_name = "FILE")]
        context: PathBuf,

        /// Output file (default: named after customer and project)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (html, json, text)
        #[arg(short, long, default_value = "html")]
        format: String,

        /// Theme JSON file
        #[arg(long, value_name = "FILE", env = "BRANDOC_THEME")]
        theme: Option<PathBuf>,

        /// Substitute empty text for unknown placeholders
        #[arg(long)]
        lenient: bool,
    },

    /// Show document metadata and block statistics
    Info {
        /// Markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Convert {
            input_dir,
            output,
            format,
            phase,
            file,
            parallel,
            theme,
            logo,
            metadata_dir,
        } => cmd_convert(ConvertArgs {
            input_dir,
            output,
            format,
            phase,
            file,
            parallel,
            theme,
            logo,
            metadata_dir,
        }),
        Commands::Sow {
            template,
            context,
            output,
            format,
            theme,
            lenient,
        } => cmd_sow(
            &template,
            &context,
            output.as_deref(),
            &format,
            theme.as_deref(),
            lenient,
        ),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

struct ConvertArgs {
    input_dir: PathBuf,
    output: PathBuf,
    format: String,
    phase: Option<String>,
    file: Option<PathBuf>,
    parallel: usize,
    theme: Option<PathBuf>,
    logo: Option<PathBuf>,
    metadata_dir: Option<PathBuf>,
}

fn load_theme(path: Option<&Path>) -> Result<Theme, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let theme = Theme::from_path(path)?;
            log::info!("Using theme '{}' from {}", theme.name, path.display());
            Ok(theme)
        }
        None => Ok(Theme::corporate()),
    }
}

fn cmd_convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut render = RenderOptions::new();
    if let Some(logo) = args.logo {
        render = render.with_logo(logo);
    }
    let options = ConvertOptions::new()
        .with_theme(load_theme(args.theme.as_deref())?)
        .with_format(&args.format)
        .with_render_options(render);
    let converter = Converter::new(options);
    converter.writer()?;

    let (base, files) = if let Some(file) = args.file {
        if !file.is_file() {
            return Err(Error::NotFound(file).into());
        }
        let base = if file.starts_with(&args.input_dir) {
            args.input_dir.clone()
        } else {
            file.parent().map(Path::to_path_buf).unwrap_or_default()
        };
        println!("{} {}", "Processing file:".cyan(), file.display());
        (base, vec![file])
    } else if let Some(phase) = &args.phase {
        let phase_dir = args.input_dir.join(phase);
        println!("{} {}", "Processing phase:".cyan(), phase);
        (args.input_dir.clone(), find_markdown_files(&phase_dir)?)
    } else {
        println!("{}", "Processing all phases...".cyan());
        (args.input_dir.clone(), find_markdown_files(&args.input_dir)?)
    };
    println!("Parallel workers: {}", args.parallel);

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    let bar = pb.clone();
    let batch = BatchConverter::new(converter)
        .with_parallel(args.parallel)
        .on_progress(move |input, ok| {
            let name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if !ok {
                bar.println(format!("{} {}", "Failed".red(), input.display()));
            }
            bar.set_message(name);
            bar.inc(1);
        });

    let report = batch.convert_files(&base, &files, &args.output)?;
    pb.finish_with_message("Done!");

    let metadata_dir = args
        .metadata_dir
        .unwrap_or_else(|| args.output.join("_metadata"));
    report.write_metadata(&metadata_dir)?;

    println!("\n{}", "Conversion Results:".green().bold());
    println!("  {} Total files: {}", "├─".dimmed(), report.total);
    println!("  {} Successful: {}", "├─".dimmed(), report.successful.to_string().green());
    println!("  {} Failed: {}", "└─".dimmed(), report.failed.to_string().red());
    println!("\n{} {}", "Output directory:".bold(), args.output.display());
    println!("{} {}", "Metadata saved to:".bold(), metadata_dir.display());

    if !report.is_success() {
        println!(
            "\n{} {}",
            "Failed conversions logged to:".yellow(),
            metadata_dir.join(brandoc::convert::FAILED_CONVERSIONS).display()
        );
        return Err(format!("{} conversion(s) failed", report.failed).into());
    }
    Ok(())
}

fn cmd_sow(
    template: &Path,
    context: &Path,
    output: Option<&Path>,
    format: &str,
    theme: Option<&Path>,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let template = SowTemplate::from_path(template)?;
    let context = SowContext::from_path(context)?;
    let mode = if lenient {
        ErrorMode::Lenient
    } else {
        ErrorMode::Strict
    };
    let options = ConvertOptions::new()
        .with_theme(load_theme(theme)?)
        .with_format(format);
    let generator = SowGenerator::new(options).with_error_mode(mode);

    let stored = match output {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Invalid output path: {}", path.display()))?;
            generator.generate_named(&template, &context, name, &DirectoryStore::new(dir))?
        }
        None => generator.generate(&template, &context, &DirectoryStore::new("."))?,
    };

    println!(
        "{} {} ({} bytes)",
        "Saved to".green(),
        stored.location,
        stored.size
    );
    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;
    let metadata = extract_metadata(&content, input, &Theme::corporate());
    let (_, body) = split_frontmatter(&content);
    let stats = BlockStats::from_blocks(&parse_markdown(body));
    let is_sow = sow::is_sow_template(&content, input);

    if json {
        let value = serde_json::json!({
            "file": input,
            "metadata": metadata,
            "statistics": stats,
            "statement_of_work": is_sow,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Title".bold(), metadata.title);
    println!("{}: {}", "Author".bold(), metadata.author);
    println!("{}: {}", "Type".bold(), metadata.document_type);
    if let Some(ref phase) = metadata.phase {
        println!("{}: {}", "Phase".bold(), phase);
    }
    if let Some(ref date) = metadata.date {
        println!("{}: {}", "Date".bold(), date);
    }
    println!(
        "{}: {}",
        "Statement of Work".bold(),
        if is_sow { "Yes" } else { "No" }
    );

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "List items".bold(), stats.list_item_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "brandoc".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Branded document conversion tool");
    println!();
    println!("Formats: html, json, text");
    println!("License: MIT");
}
