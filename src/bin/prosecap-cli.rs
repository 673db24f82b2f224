// Turn a rendered watch-page snapshot into a readable transcript, then print, save, or
// fetch the pieces around it.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use crossterm::style::Stylize;

use prosecap::fetch::{download_thumbnail, http_client};
use prosecap::files::{save_transcript, thumbnail_filename, transcript_filename};
use prosecap::opts::{DEFAULT_SKIPPED_HEADER_CANDIDATES, DEFAULT_TITLE_SUFFIX};
use prosecap::render::{Paint, render_description, render_with};
use prosecap::{CapturedPage, HtmlPage, Opts, OutputType, PageData, extract, write_page};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Action {
    /// Print the transcript to stdout.
    Print,
    /// Save the transcript as a Markdown file.
    Save,
    /// Download the video thumbnail.
    Thumbnail,
    /// Print the video description.
    Description,
    /// Description, save and thumbnail, in that order.
    All,
}

#[derive(Parser, Debug)]
#[command(name = "prosecap")]
#[command(about = "Rebuild a readable transcript from a video page snapshot")]
struct Params {
    /// Rendered DOM snapshot of the watch page with the transcript panel open (`-` for stdin).
    #[arg(long = "html", required_unless_present = "segments", conflicts_with = "segments")]
    html: Option<String>,

    /// Previously captured segments + metadata as JSON.
    #[arg(long = "segments")]
    segments: Option<PathBuf>,

    #[arg(short = 'a', long = "action", value_enum, default_value_t = Action::Print)]
    action: Action,

    #[arg(
        short = 'o',
        long = "output-type",
        value_enum,
        default_value_t = OutputType::Markdown
    )]
    output_type: OutputType,

    /// Directory that saved files are written into.
    #[arg(long = "out-dir", default_value = ".")]
    out_dir: PathBuf,

    /// Transcript filename (sanitized; `.md` appended when missing).
    #[arg(long = "filename")]
    filename: Option<String>,

    /// Thumbnail filename (sanitized; the image extension is appended when missing).
    #[arg(long = "thumbnail-filename")]
    thumbnail_filename: Option<String>,

    /// Number of leading header-shaped elements that are not real chapters.
    #[arg(long = "skip-headers", default_value_t = DEFAULT_SKIPPED_HEADER_CANDIDATES)]
    skip_headers: usize,

    /// Suffix stripped from the page title.
    #[arg(long = "title-suffix", default_value = DEFAULT_TITLE_SUFFIX)]
    title_suffix: String,
}

impl Params {
    fn opts(&self) -> Opts {
        Opts {
            skipped_header_candidates: self.skip_headers,
            title_suffix: self.title_suffix.clone(),
            output_type: self.output_type,
            ..Opts::default()
        }
    }
}

fn main() -> ExitCode {
    prosecap::init_logging();

    match run(Params::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", format!("❌ Error occurred: {err:#}").dark_red());
            ExitCode::FAILURE
        }
    }
}

fn run(params: Params) -> Result<()> {
    let opts = params.opts();
    let data = load_page(&params, &opts)?;
    eprintln!("{}", "✅ All data fetched successfully!".dark_green());

    match params.action {
        Action::Print => print_transcript(&data, opts.output_type),
        Action::Save => save(&params, &data),
        Action::Thumbnail => thumbnail(&params, &data),
        Action::Description => show_description(&data),
        Action::All => {
            show_description(&data)?;

            // Each follow-up reports its own failure; one failing doesn't stop the next.
            let mut failed = 0;
            if let Err(err) = save(&params, &data) {
                eprintln!("{}", format!("❌ Error saving file: {err:#}").dark_red());
                failed += 1;
            }
            if let Err(err) = thumbnail(&params, &data) {
                eprintln!(
                    "{}",
                    format!("❌ Error downloading thumbnail: {err:#}").dark_red()
                );
                failed += 1;
            }
            if failed > 0 {
                bail!("{failed} action(s) failed");
            }
            Ok(())
        }
    }
}

fn load_page(params: &Params, opts: &Opts) -> Result<PageData> {
    if let Some(path) = &params.segments {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read segments: {}", path.display()))?;
        let page = CapturedPage::from_json(&json)?;
        return Ok(extract(&page, opts)?);
    }

    let html = match params.html.as_deref() {
        Some("-") => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("failed to read snapshot from stdin")?;
            html
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read snapshot: {path}"))?,
        None => bail!("either --html or --segments is required"),
    };

    eprintln!("{}", "⏳ Extracting transcript...".dark_blue());
    let page = HtmlPage::parse(&html)?;
    Ok(extract(&page, opts)?)
}

fn print_transcript(data: &PageData, output_type: OutputType) -> Result<()> {
    let stdout = io::stdout();
    match output_type {
        OutputType::Markdown => {
            render_with(&data.transcript.body, stdout.lock(), stdout_paint())?
        }
        OutputType::Json => write_page(data, stdout.lock(), OutputType::Json)?,
    }
    Ok(())
}

fn save(params: &Params, data: &PageData) -> Result<()> {
    let filename = transcript_filename(params.filename.as_deref(), &data.title);
    let path = save_transcript(&params.out_dir, &filename, &data.transcript.body)?;
    eprintln!(
        "{}",
        format!("✅ Transcript saved to {}!", path.display()).dark_green()
    );
    Ok(())
}

fn thumbnail(params: &Params, data: &PageData) -> Result<()> {
    let url = data.thumbnail_url.as_deref().unwrap_or_default();
    let filename = thumbnail_filename(params.thumbnail_filename.as_deref(), &data.title, url);
    let dest = params.out_dir.join(filename);

    let client = http_client()?;
    download_thumbnail(&client, data.thumbnail_url.as_deref(), &dest)?;
    eprintln!(
        "{}",
        format!("✅ Thumbnail downloaded as {}!", dest.display()).dark_green()
    );
    Ok(())
}

fn show_description(data: &PageData) -> Result<()> {
    render_description(data.description.as_deref(), io::stdout().lock(), stdout_paint())?;
    Ok(())
}

/// Colour only when a terminal is watching.
fn stdout_paint() -> Paint {
    if io::stdout().is_terminal() {
        Paint::Color
    } else {
        Paint::Plain
    }
}
