//! WORDVEC CLI
//!
//! Looks up a word's embedding, reports normalized distances and prints
//! its nearest neighbors and analogy completions.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};
use wordvec::{normalized_distance, Lexicon, NearestQuery, Neighbor, DEFAULT_NEIGHBORS};

/// WORDVEC - Word embedding nearest neighbors and analogies
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to word embeddings file
    #[arg(long, default_value = "glove.6B.50d.txt", value_parser = existing_file)]
    embeddings: PathBuf,

    /// Word to look up
    #[arg(long)]
    word: String,

    /// Word whose vector is subtracted for analogies
    #[arg(long)]
    minus: Option<String>,

    /// Word whose vector is added for analogies
    #[arg(long)]
    plus: Option<String>,

    /// Number of most similar words to return
    #[arg(long, default_value_t = DEFAULT_NEIGHBORS)]
    n: usize,

    /// Words to report the normalized distance to
    #[arg(long, value_delimiter = ',', default_value = "woman,man")]
    compare: Vec<String>,

    /// Extra words to leave out of the results
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Log debug output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else if self.quiet {
            Level::WARN
        } else {
            Level::INFO
        }
    }

    fn neighbor_query(&self) -> NearestQuery {
        NearestQuery::new(&self.word)
            .with_exclude(self.exclude.iter().cloned())
            .excluding_self()
            .with_n(self.n)
    }

    /// `None` unless `--plus` or `--minus` was given
    fn analogy_query(&self) -> Option<NearestQuery> {
        let mut query = self.neighbor_query();
        query.plus = self.plus.clone();
        query.minus = self.minus.clone();
        query.is_analogy().then_some(query)
    }
}

fn existing_file(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);
    if path.is_file() {
        Ok(path)
    } else {
        Err(format!(
            "{} is not a file; you need to provide a real file of embeddings",
            path.display()
        ))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("wordvec={}", args.log_level()).parse()?),
        )
        .init();

    info!("Loading word vectors from {}", args.embeddings.display());
    let lexicon = Lexicon::from_path(&args.embeddings)
        .with_context(|| format!("loading {}", args.embeddings.display()))?;

    let stdout = io::stdout();
    run(&args, &lexicon, &mut stdout.lock())
}

fn run(args: &Args, lexicon: &Lexicon, out: &mut impl Write) -> anyhow::Result<()> {
    let vector = lexicon
        .get_vector(&args.word)
        .context("looking up query word")?;
    debug!("Vector of {} has {} components", args.word, vector.len());

    let rendered: Vec<String> = vector.iter().map(|x| x.to_string()).collect();
    writeln!(out, "{}: [{}]", args.word, rendered.join(" "))?;

    for other in &args.compare {
        let other_vector = lexicon
            .get_vector(other)
            .context("looking up comparison word")?;
        let distance = normalized_distance(vector, other_vector)
            .with_context(|| format!("distance between {} and {}", args.word, other))?;
        writeln!(out, "distance({}, {}) = {:.6}", args.word, other, distance)?;
    }

    let query = args.neighbor_query();
    let neighbors = lexicon
        .find_nearest(&query)
        .context("nearest neighbor search")?;
    writeln!(out, "\nTop {} similar words to {}:", args.n, args.word)?;
    print_neighbors(out, &neighbors)?;

    if let Some(query) = args.analogy_query() {
        let neighbors = lexicon.find_nearest(&query).context("analogy search")?;
        writeln!(
            out,
            "\nTop {} similar words to {}{}{}:",
            args.n,
            args.word,
            query
                .minus
                .as_deref()
                .map(|w| format!(" - {}", w))
                .unwrap_or_default(),
            query
                .plus
                .as_deref()
                .map(|w| format!(" + {}", w))
                .unwrap_or_default(),
        )?;
        print_neighbors(out, &neighbors)?;
    }

    Ok(())
}

fn print_neighbors(out: &mut impl Write, neighbors: &[Neighbor]) -> io::Result<()> {
    if neighbors.is_empty() {
        return writeln!(out, "  (no results)");
    }
    for (rank, neighbor) in neighbors.iter().enumerate() {
        writeln!(out, "{:4}: {:10.6} {}", rank + 1, neighbor.score, neighbor.word)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const VECTORS: &str = "\
king 1 1 0
man 1 0 0
woman 0 0 1
queen 0 1 1
prince 1 0.9 0.1
";

    fn embeddings_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(VECTORS.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn parse(file: &NamedTempFile, extra: &[&str]) -> Result<Args, clap::Error> {
        let path = file.path().to_str().unwrap().to_string();
        let mut argv = vec!["wordvec".to_string(), "--embeddings".to_string(), path];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv)
    }

    fn render(args: &Args) -> anyhow::Result<String> {
        let lexicon = Lexicon::from_reader(VECTORS.as_bytes())?;
        let mut out = Vec::new();
        run(args, &lexicon, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_defaults() {
        let file = embeddings_file();
        let args = parse(&file, &["--word", "king"]).unwrap();

        assert_eq!(args.n, DEFAULT_NEIGHBORS);
        assert_eq!(args.compare, vec!["woman", "man"]);
        assert!(args.exclude.is_empty());
        assert_eq!(args.log_level(), Level::INFO);
        assert!(args.analogy_query().is_none());
    }

    #[test]
    fn test_missing_embeddings_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let result = Args::try_parse_from([
            "wordvec",
            "--embeddings",
            missing.to_str().unwrap(),
            "--word",
            "king",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let file = embeddings_file();
        assert!(parse(&file, &["--word", "king", "-v", "-q"]).is_err());
        assert_eq!(
            parse(&file, &["--word", "king", "-v"]).unwrap().log_level(),
            Level::DEBUG
        );
        assert_eq!(
            parse(&file, &["--word", "king", "--quiet"]).unwrap().log_level(),
            Level::WARN
        );
    }

    #[test]
    fn test_analogy_query_excludes_word() {
        let file = embeddings_file();
        let args = parse(
            &file,
            &["--word", "king", "--plus", "woman", "--minus", "man", "--n", "2"],
        )
        .unwrap();

        let query = args.analogy_query().unwrap();
        assert!(query.exclude.contains("king"));
        assert_eq!(query.n, 2);
        assert_eq!(query.plus.as_deref(), Some("woman"));
    }

    #[test]
    fn test_run_prints_neighbors_and_analogy() {
        let file = embeddings_file();
        let args = parse(
            &file,
            &["--word", "king", "--plus", "woman", "--minus", "man", "--n", "1"],
        )
        .unwrap();

        let output = render(&args).unwrap();
        assert!(output.starts_with("king: [1 1 0]"));
        assert!(output.contains("distance(king, woman) = 1.414214\n"));
        assert!(output.contains("distance(king, man) = 0.765367\n"));
        assert!(output.contains("Top 1 similar words to king:\n   1:"));
        assert!(output.contains("Top 1 similar words to king - man + woman:"));
        assert!(output.trim_end().ends_with("queen"));
    }

    #[test]
    fn test_run_unknown_word_fails() {
        let file = embeddings_file();
        let args = parse(&file, &["--word", "emperor"]).unwrap();

        let err = render(&args).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<wordvec::LexiconError>(),
            Some(wordvec::LexiconError::UnknownWord(w)) if w == "emperor"
        ));
    }
}
