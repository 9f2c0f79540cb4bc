use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use interlinear_reader::alignment::PhraseAligner;
use interlinear_reader::config::{self, Config, DEFAULT_CONFIG_FILE};
use interlinear_reader::error::{ReaderError, Result};
use interlinear_reader::navigation::{next_chapter, prev_chapter, resolve_view, table_of_contents};
use interlinear_reader::numerals::hebrew_to_number;
use interlinear_reader::parsing::load_document;
use interlinear_reader::render::{book_name, Renderer, PLACEHOLDER};
use interlinear_reader::search::{search, DEFAULT_LIMIT};
use interlinear_reader::state::{DisplayMode, ReaderState, Theme, View, FONT_STEP};
use interlinear_reader::state_io::{load_state_or, save_state};
use interlinear_reader::types::document::Document;

#[derive(Parser, Debug)]
#[command(name = "interlinear-reader", version, about = "Hebrew/English interlinear reader")]
struct Cli {
    /// TOML configuration file. Defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Reading document (JSON). Overrides `data_file` from the config.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Saved position and preferences. Overrides `state_file` from the config.
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a Hebrew verse-number label to an integer.
    Numeral { label: String },
    /// Print the phrase chunks of a Hebrew verse, one per line.
    Chunk { text: String },
    /// Align a Hebrew verse with its translation.
    Align {
        source: String,
        #[arg(default_value = "")]
        translation: String,
        #[arg(long)]
        json: bool,
    },
    /// Render a chapter, front-matter section or the title page as HTML.
    Show(ShowArgs),
    /// Render the chapter after the saved position.
    Next {
        /// he, en, dual or inter.
        #[arg(long)]
        mode: Option<DisplayMode>,
    },
    /// Render the chapter before the saved position.
    Prev {
        /// he, en, dual or inter.
        #[arg(long)]
        mode: Option<DisplayMode>,
    },
    /// Search verse text.
    Search {
        query: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Print the table of contents.
    Toc,
    /// Update the saved display preferences.
    Prefs {
        /// he, en, dual or inter.
        #[arg(long)]
        mode: Option<DisplayMode>,
        #[arg(long, conflicts_with = "font_down")]
        font_up: bool,
        #[arg(long)]
        font_down: bool,
        /// light or dark.
        #[arg(long)]
        theme: Option<Theme>,
    },
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Book number, starting at 1.
    #[arg(long, conflicts_with_all = ["front_matter", "title"])]
    book: Option<usize>,
    /// Chapter number within the book, starting at 1.
    #[arg(long, requires = "book")]
    chapter: Option<usize>,
    #[arg(long, conflicts_with = "title")]
    front_matter: Option<String>,
    #[arg(long)]
    title: bool,
    /// Display mode for this render only: he, en, dual or inter.
    #[arg(long)]
    mode: Option<DisplayMode>,
}

struct Session {
    config: Config,
    data_path: PathBuf,
    state_path: PathBuf,
    state: ReaderState,
}

impl Session {
    fn open(cli: &Cli) -> Result<Self> {
        let config = config::load_config_or_default(&cli.config)?;
        let data_path = cli.data.clone().unwrap_or_else(|| config.data_file.clone());
        let state_path = cli.state.clone().unwrap_or_else(|| config.state_file.clone());

        let state = load_state_or(&state_path, config.display.initial_state())?;
        debug!(data = %data_path.display(), state = %state_path.display(), "session opened");

        Ok(Self {
            config,
            data_path,
            state_path,
            state,
        })
    }

    fn aligner(&self) -> Result<PhraseAligner> {
        Ok(PhraseAligner::with_break_starters(
            self.config.chunker.break_starters()?,
        ))
    }

    fn document(&self) -> Result<Document> {
        load_document(&self.data_path)
    }

    fn save(&self) -> Result<()> {
        save_state(&self.state, &self.state_path)
    }

    /// Renders `view`, prints it and records it as the reading position.
    fn show(&mut self, doc: &Document, view: View, mode: Option<DisplayMode>) -> Result<()> {
        let renderer = Renderer::new(self.aligner()?);
        let mut view_state = self.state.view_state();
        if let Some(mode) = mode {
            view_state.mode = mode;
        }
        let html = renderer.render_view(doc, &view, &view_state)?;
        println!("{}", html);

        self.state.position = view;
        self.save()
    }
}

fn one_based(value: usize, what: &str) -> Result<usize> {
    value
        .checked_sub(1)
        .ok_or_else(|| ReaderError::NotFound(format!("{} 0 (numbering starts at 1)", what)))
}

fn run(cli: Cli) -> Result<()> {
    let mut session = Session::open(&cli)?;

    match cli.command {
        Command::Numeral { label } => {
            println!("{}", hebrew_to_number(&label));
        }
        Command::Chunk { text } => {
            for chunk in session.aligner()?.chunker().chunk(&text) {
                println!("{}", chunk);
            }
        }
        Command::Align {
            source,
            translation,
            json,
        } => {
            let groups = session.aligner()?.align(&source, &translation);
            if json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for group in &groups {
                    let source = if group.has_source() {
                        group.source_phrase.as_str()
                    } else {
                        PLACEHOLDER
                    };
                    println!("{} ⟷ {}", source, group.translation_phrase);
                }
            }
        }
        Command::Show(args) => {
            let doc = session.document()?;
            let view = if let Some(book) = args.book {
                View::Chapter {
                    book: one_based(book, "book")?,
                    chapter: one_based(args.chapter.unwrap_or(1), "chapter")?,
                }
            } else if let Some(id) = args.front_matter {
                View::FrontMatter { id }
            } else if args.title {
                View::Title
            } else {
                resolve_view(&doc, &session.state.position)
            };
            session.show(&doc, view, args.mode)?;
        }
        Command::Next { mode } => {
            let doc = session.document()?;
            let target = match resolve_view(&doc, &session.state.position) {
                View::Chapter { book, chapter } => next_chapter(&doc, book, chapter)
                    .ok_or_else(|| ReaderError::NotFound("chapter after the last one".into()))?,
                _ => first_chapter(&doc)
                    .ok_or_else(|| ReaderError::NotFound("document has no chapters".into()))?,
            };
            session.show(&doc, chapter_view(target), mode)?;
        }
        Command::Prev { mode } => {
            let doc = session.document()?;
            let target = match resolve_view(&doc, &session.state.position) {
                View::Chapter { book, chapter } => prev_chapter(&doc, book, chapter)
                    .ok_or_else(|| ReaderError::NotFound("chapter before the first one".into()))?,
                _ => {
                    return Err(ReaderError::NotFound(
                        "saved position is not a chapter".into(),
                    ))
                }
            };
            session.show(&doc, chapter_view(target), mode)?;
        }
        Command::Search { query, limit } => {
            let doc = session.document()?;
            for hit in search(&doc, &query, limit) {
                println!("{}\t{}", hit.reference, hit.preview_line());
            }
        }
        Command::Toc => {
            let doc = session.document()?;
            let mode = session.state.lang;
            let toc = table_of_contents(&doc, |book| book_name(book, mode));
            for fm in &toc.front_matter {
                println!("{}\t{}", fm.id, fm.label);
            }
            for book in &toc.books {
                if book.chapters.is_empty() {
                    println!("{}.\t{}", book.index + 1, book.name);
                } else {
                    println!("{}.\t{}\t[{}]", book.index + 1, book.name, book.chapters.join(" "));
                }
            }
        }
        Command::Prefs {
            mode,
            font_up,
            font_down,
            theme,
        } => {
            if let Some(mode) = mode {
                session.state.lang = mode;
            }
            if font_up {
                session.state.adjust_font(FONT_STEP);
            }
            if font_down {
                session.state.adjust_font(-FONT_STEP);
            }
            if let Some(theme) = theme {
                session.state.theme = theme;
            }
            session.save()?;
            println!("{}", serde_json::to_string_pretty(&session.state)?);
        }
    }
    Ok(())
}

fn first_chapter(doc: &Document) -> Option<(usize, usize)> {
    doc.books
        .iter()
        .position(|b| !b.chapters.is_empty())
        .map(|b| (b, 0))
}

fn chapter_view((book, chapter): (usize, usize)) -> View {
    View::Chapter { book, chapter }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    debug!(config = %cli.config.display(), "starting");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
