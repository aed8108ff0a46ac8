//! txt2epub - plain text to EPUB converter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use txt2epub::{ConvertOptions, convert_file};

#[derive(Parser)]
#[command(name = "txt2epub")]
#[command(version, about = "Convert plain-text manuscripts to EPUB", long_about = None)]
#[command(after_help = "EXAMPLES:
    txt2epub book.txt                      Convert to book.epub
    txt2epub 'MyBook(Jane Doe).txt'        Title/author from the filename
    txt2epub book.txt out.epub -c art.png  Custom output path and cover")]
struct Cli {
    /// Input text file (UTF-8)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output EPUB file (defaults to the input path with .epub extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Book identifier (defaults to a random UUID)
    #[arg(long)]
    identifier: Option<String>,

    /// Book title (defaults to the filename stem)
    #[arg(short, long)]
    title: Option<String>,

    /// Book author (defaults to the filename stem, or "Unknown")
    #[arg(short, long)]
    author: Option<String>,

    /// Language tag (detected from the text when omitted)
    #[arg(short, long)]
    language: Option<String>,

    /// Cover image path (converted to JPEG)
    #[arg(short, long)]
    cover: Option<PathBuf>,

    /// Number of consecutive newlines that separate chapters
    #[arg(long, default_value_t = 3)]
    linebreaks: usize,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let options = ConvertOptions {
        identifier: cli.identifier,
        title: cli.title,
        author: cli.author,
        language: cli.language,
        cover: cli.cover,
        linebreaks: cli.linebreaks,
    };

    match convert_file(&cli.input, cli.output.as_deref(), &options) {
        Ok(written) => {
            if !cli.quiet {
                println!("{} -> {}", cli.input.display(), written.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
