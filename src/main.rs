use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lyrictf::stats::top_k;
use lyrictf::{api, loader, LyricsEngine};

// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "TF-IDF analysis over a scraped song-lyrics corpus", long_about = None)]
struct Args {
    /// Corpus file: a JSON array of scraped records, optionally gzipped
    #[arg(short, long, default_value = "lyrics_all.json")]
    path: String,

    /// How many words to show per list
    #[arg(short, long, default_value_t = 10)]
    top: usize,

    /// Report a single artist, with per-song breakdowns
    #[arg(short, long)]
    artist: Option<String>,

    /// Serve the HTTP API instead of printing a report
    #[arg(long)]
    serve: bool,

    /// Listen address for --serve
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let records = loader::load_records(&args.path)?;
    println!("Loaded {} raw records in {:?}", records.len(), start.elapsed());

    let start = Instant::now();
    let engine = LyricsEngine::from_records(records)?;
    println!(
        "Analyzed {} songs in {:?}",
        engine.document_count(),
        start.elapsed()
    );

    if args.serve {
        serve(engine, &args.addr).await
    } else if let Some(artist) = &args.artist {
        print_artist_report(&engine, artist, args.top);
        Ok(())
    } else {
        print_corpus_report(&engine, args.top);
        Ok(())
    }
}

async fn serve(engine: LyricsEngine, addr: &str) -> Result<()> {
    let router = api::create_router(Arc::new(engine));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    println!("Serving API on http://{}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

fn print_corpus_report(engine: &LyricsEngine, top: usize) {
    let stats = engine.stats();

    println!();
    println!(
        "{} songs by {} artists, {} words ({} distinct)",
        stats.document_count,
        stats.artist_count,
        stats.total_words,
        stats.distinct_words()
    );

    println!();
    println!("Most frequent words:");
    let total = stats.total_words.max(1) as f64;
    for (word, count) in top_k(&stats.word_frequency, top) {
        println!(
            "  {:<16} {:>6}  ({:.2}%)",
            word,
            count,
            count as f64 / total * 100.0
        );
    }

    println!();
    println!("Rarest words (highest IDF):");
    for (word, idf) in top_k(&stats.word_idf, top) {
        let songs = stats.document_frequency.get(&word).copied().unwrap_or(0);
        println!(
            "  {:<16} idf = {:.4}  (in {} of {} songs)",
            word, idf, songs, stats.document_count
        );
    }

    println!();
    println!("Characteristic words per artist:");
    for artist in engine.artists() {
        let weights = engine.artist_weights(artist);
        let words: Vec<String> = top_k(&weights, top)
            .into_iter()
            .map(|(word, _)| word)
            .collect();
        println!("  {}: {}", artist, words.join(", "));
    }
}

fn print_artist_report(engine: &LyricsEngine, artist: &str, top: usize) {
    let songs = engine.documents_by_artist(artist);
    if songs.is_empty() {
        println!();
        println!("No songs for artist {:?}", artist);
        return;
    }

    println!();
    println!("Characteristic words for {} ({} songs):", artist, songs.len());
    let weights = engine.artist_weights(artist);
    for (word, score) in top_k(&weights, top) {
        println!("  {:<16} {:.4}", word, score);
    }

    for (id, doc) in songs {
        println!();
        println!("{}:", doc.display_title());
        if let Some(weights) = engine.document_weights(id) {
            for (word, score) in top_k(weights, top) {
                println!("  {:<16} {:.4}", word, score);
            }
        }
    }
}
