use std::path::{Path, PathBuf};
use std::process::ExitCode;

use api::{ConversationRequest, DescriptorsResponse, LessonRequest, ObjectDescriptorsRequest};
use clap::{Args, Parser, Subcommand};
use client::media::{LoadedImage, MediaError};
use client::net::{ApiError, Backend, BackendConfig, LessonsClient};
use client::session::{SessionError, WordCamSession};
use client::state::{LanguagePair, StoreError};
use overlay::geom::LayoutRect;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("request failed: {0}")]
    Api(#[from] ApiError),
    #[error("word-cam failed: {0}")]
    Session(#[from] SessionError),
    #[error("image failed: {0}")]
    Media(#[from] MediaError),
    #[error("language preferences failed: {0}")]
    Store(#[from] StoreError),
    #[error("invalid viewport `{0}`; expected WIDTHxHEIGHT, e.g. 390x560")]
    InvalidViewport(String),
    #[error("json encode failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lingolens", about = "LingoLens language-lesson CLI")]
struct Cli {
    /// Backend origin; falls back to LINGOLENS_BASE_URL, then the default.
    #[arg(long)]
    base_url: Option<String>,

    /// Override the stored source language for this invocation.
    #[arg(long)]
    source: Option<String>,

    /// Override the stored target language for this invocation.
    #[arg(long)]
    target: Option<String>,

    /// Language preferences file; defaults to the platform config directory.
    #[arg(long, env = "LINGOLENS_CONFIG")]
    config: Option<PathBuf>,

    /// Print raw JSON responses instead of formatted text.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Vocabulary and phrases for a purpose.
    Lesson {
        /// What the user is preparing for, e.g. "ordering at a cafe".
        #[arg(long)]
        purpose: String,
    },
    /// Grammar topics relevant to a purpose, with examples.
    Grammar {
        #[arg(long)]
        purpose: String,
    },
    /// A short dialogue full of slang, with notes per line.
    Conversation,
    /// Detect objects in an image and print their bounding boxes.
    Wordcam {
        image: PathBuf,

        /// Project boxes into a viewport of this size, WIDTHxHEIGHT.
        #[arg(long)]
        viewport: Option<String>,

        /// Also crop this detection out and fetch descriptors for it.
        #[arg(long)]
        select: Option<usize>,
    },
    /// Descriptors for a named object in a whole image.
    Describe {
        image: PathBuf,

        /// Name of the object the image shows.
        #[arg(long)]
        object: String,
    },
    /// Show or update the stored language pair.
    Languages(LanguagesCommand),
}

#[derive(Args, Debug)]
struct LanguagesCommand {
    #[command(subcommand)]
    command: LanguagesSubcommand,
}

#[derive(Subcommand, Debug)]
enum LanguagesSubcommand {
    /// Print the stored pair.
    Show,
    /// Set one or both languages (BCP 47 tags).
    Set {
        #[arg(long)]
        source: Option<String>,

        #[arg(long)]
        target: Option<String>,
    },
    /// Swap source and target.
    Swap,
}

#[derive(Debug)]
struct CliContext {
    base_url: Option<String>,
    languages: LanguagePair,
    json: bool,
}

impl CliContext {
    fn backend(&self) -> Result<LessonsClient, CliError> {
        let mut config = BackendConfig::from_env();
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url);
        }
        Ok(LessonsClient::new(config)?)
    }

    fn lesson_request(&self, purpose: String) -> LessonRequest {
        LessonRequest {
            source_language: self.languages.source_language.clone(),
            target_language: self.languages.target_language.clone(),
            purpose,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => LanguagePair::default_path()?,
    };

    // Ephemeral overrides apply to this invocation only; the `languages`
    // subcommand is the one place the stored pair changes.
    let mut languages = LanguagePair::load(&config_path)?;
    if let Some(source) = cli.source.clone() {
        languages.source_language = source;
    }
    if let Some(target) = cli.target.clone() {
        languages.target_language = target;
    }

    let ctx = CliContext { base_url: cli.base_url.clone(), languages, json: cli.json };

    match cli.command {
        Command::Lesson { purpose } => run_lesson(&ctx, purpose).await,
        Command::Grammar { purpose } => run_grammar(&ctx, purpose).await,
        Command::Conversation => run_conversation(&ctx).await,
        Command::Wordcam { image, viewport, select } => {
            run_wordcam(&ctx, &image, viewport.as_deref(), select).await
        }
        Command::Describe { image, object } => run_describe(&ctx, &image, object).await,
        Command::Languages(cmd) => run_languages(&config_path, cmd.command),
    }
}

async fn run_lesson(ctx: &CliContext, purpose: String) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    let response = backend.lesson(&ctx.lesson_request(purpose)).await?;
    if ctx.json {
        return print_json(&response);
    }

    println!("Vocabulary:");
    for term in &response.vocabulary {
        println!("  {}{}: {}", term.term, reading(&term.transliteration), term.translation);
    }
    println!();
    println!("Phrases:");
    for phrase in &response.phrases {
        println!("  {}{}: {}", phrase.phrase, reading(&phrase.transliteration), phrase.translation);
    }
    Ok(())
}

async fn run_grammar(ctx: &CliContext, purpose: String) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    let response = backend.grammar(&ctx.lesson_request(purpose)).await?;
    if ctx.json {
        return print_json(&response);
    }

    for topic in &response.relevant_grammar {
        println!("{}", topic.topic);
        println!("  {}", topic.description);
        for example in &topic.examples {
            println!("  {}", example.sentence);
            println!("    {}", example.explanation);
        }
        println!();
    }
    Ok(())
}

async fn run_conversation(ctx: &CliContext) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    let request = ConversationRequest {
        source_language: ctx.languages.source_language.clone(),
        target_language: ctx.languages.target_language.clone(),
    };
    let response = backend.conversation(&request).await?;
    if ctx.json {
        return print_json(&response);
    }

    println!("{}", response.context);
    println!();
    for line in &response.dialogue {
        println!("{}: {}", line.speaker, line.message);
        if !line.notes.is_empty() {
            println!("   note: {}", line.notes);
        }
    }
    Ok(())
}

async fn run_wordcam(
    ctx: &CliContext,
    image: &Path,
    viewport: Option<&str>,
    select: Option<usize>,
) -> Result<(), CliError> {
    let layout = viewport.map(parse_viewport).transpose()?;
    let backend = ctx.backend()?;
    let capture = LoadedImage::from_path(image)?;
    let mut session = WordCamSession::start(&backend, ctx.languages.clone(), capture).await?;
    let boxes = session.overlay_boxes(layout);

    let described = if let Some(index) = select {
        session.select(index)?;
        Some(session.describe_selected(&backend).await?)
    } else {
        None
    };

    if ctx.json {
        let overlay: Vec<serde_json::Value> = boxes
            .iter()
            .map(|screen| {
                serde_json::json!({
                    "left": screen.left,
                    "top": screen.top,
                    "width": screen.width,
                    "height": screen.height,
                })
            })
            .collect();
        return print_json(&serde_json::json!({
            "objects": session.detections(),
            "overlay": overlay,
            "descriptors": described,
        }));
    }

    let dims = session.image().dimensions();
    println!("image: {}x{}, {} object(s)", dims.width, dims.height, session.detections().len());
    for (index, detection) in session.detections().iter().enumerate() {
        println!(
            "{index}. {}{}: {}",
            detection.name,
            reading(&detection.pronunciation),
            detection.translation
        );
        println!("   box: {:?}", detection.coordinates);
        if let Some(screen) = boxes.get(index) {
            println!(
                "   screen: left={:.1} top={:.1} width={:.1} height={:.1}",
                screen.left, screen.top, screen.width, screen.height
            );
        }
    }

    if let Some(response) = described {
        println!();
        if let Some(detection) = session.selected_detection() {
            println!("{}: {}", detection.name, detection.translation);
        }
        print_descriptors(&response);
    }
    Ok(())
}

async fn run_describe(ctx: &CliContext, image: &Path, object: String) -> Result<(), CliError> {
    let backend = ctx.backend()?;
    let capture = LoadedImage::from_path(image)?;
    let request = ObjectDescriptorsRequest {
        source_language: ctx.languages.source_language.clone(),
        target_language: ctx.languages.target_language.clone(),
        object,
        image: capture.to_payload(),
    };
    let response = backend.object_descriptors(&request).await?;

    if ctx.json {
        return print_json(&response);
    }
    print_descriptors(&response);
    Ok(())
}

fn run_languages(path: &Path, command: LanguagesSubcommand) -> Result<(), CliError> {
    let mut pair = LanguagePair::load(path)?;

    match command {
        LanguagesSubcommand::Show => {}
        LanguagesSubcommand::Set { source, target } => {
            if let Some(source) = source {
                pair.source_language = source;
            }
            if let Some(target) = target {
                pair.target_language = target;
            }
            pair.save(path)?;
        }
        LanguagesSubcommand::Swap => {
            pair.swap();
            pair.save(path)?;
        }
    }

    println!("source: {}", pair.source_language);
    println!("target: {}", pair.target_language);
    Ok(())
}

/// Parse a `WIDTHxHEIGHT` viewport size into a layout at the origin.
fn parse_viewport(raw: &str) -> Result<LayoutRect, CliError> {
    let Some((width, height)) = raw.split_once(['x', 'X']) else {
        return Err(CliError::InvalidViewport(raw.to_string()));
    };
    let width: f64 = width.trim().parse().map_err(|_| CliError::InvalidViewport(raw.to_string()))?;
    let height: f64 = height.trim().parse().map_err(|_| CliError::InvalidViewport(raw.to_string()))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(CliError::InvalidViewport(raw.to_string()));
    }
    Ok(LayoutRect::new(width, height, 0.0, 0.0))
}

fn reading(transliteration: &str) -> String {
    if transliteration.is_empty() {
        String::new()
    } else {
        format!(" [{transliteration}]")
    }
}

fn print_descriptors(response: &DescriptorsResponse) {
    for descriptor in &response.descriptors {
        println!("- {}", descriptor.descriptor);
        println!("  {}", descriptor.example_sentence);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
