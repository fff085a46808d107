use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use kielo_drill::{DrillConfig, ExerciseGenerator};
use kielo_morph::{paradigm_cells, Conjugation, Declension, EngineConfig, Inflector, LexiconIndex};
use kielo_parser::analysis::analyze;
use kielo_parser::tags::{parse_difficulty, parse_pos, parse_tense, parse_tier};
use kielo_protocol::{PartOfSpeech, Tense, Voice};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles, checks and queries Finnish lexicons")]
struct Cli {
    /// JSON seed or compiled archive. Defaults to the built-in lexicon.
    #[arg(short, long, global = true, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// JSON file with `engine` and `drill` sections
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Overrides RUST_LOG
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Generate words outside the curated tables by rule
    #[arg(long, global = true)]
    open: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serializes the lexicon to a validated rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Loads the lexicon and inflects every cell of every curated word
    Check,
    /// Prints the paradigm of a word
    Inflect {
        word: String,
        #[arg(short, long, default_value = "verb")]
        pos: String,
        /// Only this tense (verbs)
        #[arg(short, long)]
        tense: Option<String>,
    },
    /// Lists the words and cells that produce a surface form
    Analyze { surface: String },
    /// Generates drill exercises
    Drill {
        #[arg(long, default_value = "A1")]
        tier: String,
        #[arg(long, default_value = "easy")]
        difficulty: String,
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    engine: EngineConfig,
    drill: DrillConfig,
}

impl Config {
    fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let json = fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        serde_json::from_str(&json).with_context(|| format!("parsing config {:?}", path))
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_lexicon(path: Option<&Path>) -> anyhow::Result<LexiconIndex> {
    let Some(path) = path else {
        return Ok(LexiconIndex::builtin()?);
    };
    info!(path = ?path, "loading lexicon");
    let index = if path.extension().map_or(false, |ext| ext == "json") {
        let json = fs::read_to_string(path).with_context(|| format!("reading seed {:?}", path))?;
        LexiconIndex::from_seed_json(&json)?
    } else {
        let bytes = fs::read(path).with_context(|| format!("reading archive {:?}", path))?;
        LexiconIndex::from_archive(&bytes)?
    };
    Ok(index)
}

fn row(label: &str, form: &str) -> String {
    format!("  {:<12} {}\n", label, form)
}

fn render_conjugation(conjugation: &Conjugation) -> String {
    let mut out = format!("{} {}\n", conjugation.voice, conjugation.tense);
    for (person, form) in conjugation.cells() {
        let label = match person {
            Some(p) => format!("{} ({})", p.key(), p.pronoun()),
            None => "passive".to_string(),
        };
        out.push_str(&row(&label, form));
    }
    out
}

fn render_declension(declension: &Declension) -> String {
    declension
        .forms
        .iter()
        .map(|(case, form)| row(case.name(), form))
        .collect()
}

/// Inflects every cell of every supported word. Returns the number of cells and the failures.
fn check_lexicon(inflector: &Inflector) -> (usize, Vec<String>) {
    let mut cells = 0;
    let mut failures = Vec::new();
    for pos in PartOfSpeech::ALL {
        let words = match pos {
            PartOfSpeech::Verb => inflector.supported_verbs(),
            PartOfSpeech::Noun => inflector.supported_nouns(),
        };
        for word in words {
            for cell in paradigm_cells(pos) {
                cells += 1;
                match inflector.inflect(word, cell) {
                    Ok(form) => debug!(word, %cell, form = %form, "ok"),
                    Err(err) => failures.push(format!("{} {}: {}", word, cell, err)),
                }
            }
        }
    }
    (cells, failures)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.open {
        config.engine = EngineConfig::open();
    }
    let lexicon = load_lexicon(cli.lexicon.as_deref())?;

    match cli.command {
        Command::Compile { output } => {
            println!(
                "⚙️  Compiling lexicon version {} with {} lexemes and {} exceptions...",
                lexicon.lexicon().version.0,
                lexicon.lexicon().lexemes.len(),
                lexicon.lexicon().exceptions.len()
            );
            let bytes = lexicon.to_archive()?;
            fs::write(&output, &bytes).with_context(|| format!("writing {:?}", output))?;
            println!("✅ Success! {} bytes written to {:?}", bytes.len(), output);
        }
        Command::Check => {
            let inflector = Inflector::new(lexicon, config.engine);
            let (cells, failures) = check_lexicon(&inflector);
            if !failures.is_empty() {
                for failure in &failures {
                    eprintln!("❌ {}", failure);
                }
                bail!("{} of {} cells failed", failures.len(), cells);
            }
            println!(
                "✅ {} verbs, {} nouns, {} cells inflected",
                inflector.supported_verbs().len(),
                inflector.supported_nouns().len(),
                cells
            );
        }
        Command::Inflect { word, pos, tense } => {
            let inflector = Inflector::new(lexicon, config.engine);
            let pos = parse_pos(&pos)?;
            let class = inflector.classify(&word, pos);
            println!("{} ({}), stem \"{}\"", word, class, inflector.extract_stem(&word, class));
            match pos {
                PartOfSpeech::Verb => {
                    let tenses = match tense {
                        Some(tense) => vec![parse_tense(&tense)?],
                        None => Tense::ALL.to_vec(),
                    };
                    for tense in tenses {
                        let active = inflector.conjugate(&word, tense, Voice::Active)?;
                        print!("{}", render_conjugation(&active));
                        if tense != Tense::Imperative {
                            let passive = inflector.conjugate(&word, tense, Voice::Passive)?;
                            print!("{}", render_conjugation(&passive));
                        }
                    }
                }
                PartOfSpeech::Noun => {
                    print!("{}", render_declension(&inflector.decline_all(&word)?))
                }
            }
        }
        Command::Analyze { surface } => {
            let inflector = Inflector::new(lexicon, config.engine);
            let found = analyze(&inflector, &surface);
            if found.is_empty() {
                println!("no curated word produces \"{}\"", surface);
            }
            for analysis in found {
                println!("{}", analysis.describe(&surface));
            }
        }
        Command::Drill {
            tier,
            difficulty,
            count,
            seed,
        } => {
            let tier = parse_tier(&tier)?;
            let difficulty = parse_difficulty(&difficulty)?;
            let inflector = Inflector::new(lexicon, config.engine);
            let generator = ExerciseGenerator::new(&inflector, inflector.lexicon(), config.drill);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            for (i, exercise) in generator
                .generate_mixed(&mut rng, tier, difficulty, count)?
                .iter()
                .enumerate()
            {
                println!("{}. {} [{} pt]", i + 1, exercise.prompt(), exercise.points());
                if let Some(options) = &exercise.options {
                    println!("   options: {}", options.join(" / "));
                }
                println!("   answer: {}", exercise.correct_answer);
            }
        }
    }

    Ok(())
}
