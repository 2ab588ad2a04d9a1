//! Example: Find records similar to a book in a small catalog
//!
//! Run with: cargo run --package catalog --example find_similar
//!
//! This example shows how to:
//! 1. Build an in-memory catalog
//! 2. Look records up by name and prefix
//! 3. Rank similar records, with and without extra filters
//! 4. Load custom similarity weights from JSON

use catalog::filters::MinimumRatingFilter;
use catalog::{MediaCatalog, SimilarityIndexBuilder, SortKey};
use media_model::{MediaKind, Record};
use similarity::{SimilarityModel, SimilarityWeights};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    println!("=== Media Catalog Similarity Example ===\n");

    let mut catalog = MediaCatalog::new();
    catalog.extend([
        Record::book("Dune", "Sci-Fi", "Frank Herbert")
            .with_year(1965)
            .with_rating(9.5),
        Record::book("Dune Messiah", "Sci-Fi", "Frank Herbert")
            .with_year(1969)
            .with_rating(7.5),
        Record::book("Children of Dune", "Sci-Fi", "Frank Herbert")
            .with_year(1976)
            .with_rating(8.0),
        Record::book("The Left Hand of Darkness", "Sci-Fi", "Ursula K. Le Guin")
            .with_year(1969)
            .with_rating(9.0),
        Record::book("A Wizard of Earthsea", "Fantasy", "Ursula K. Le Guin")
            .with_year(1968)
            .with_rating(8.5),
        Record::book("Foundation", "Sci-Fi", "Isaac Asimov")
            .with_year(1951)
            .with_rating(8.0),
        Record::book("Emma", "Romance", "Jane Austen")
            .with_year(1815)
            .with_rating(6.5),
        Record::movie("Alien", "Horror", "Ridley Scott", 117)
            .with_year(1979)
            .with_rating(9.0),
        Record::movie("Blade Runner", "Sci-Fi", "Ridley Scott", 117)
            .with_year(1982)
            .with_rating(9.0),
        Record::game("Portal", "Puzzle", "Valve", "PC", 1)
            .with_year(2007)
            .with_rating(9.5),
    ])?;
    println!("Catalog holds {} records\n", catalog.len());

    // Name lookups
    println!("Records named 'dune': {}", catalog.lookup_by_name("dune").len());
    let prefixed: Vec<_> = catalog
        .lookup_prefix("the")
        .iter()
        .map(|r| r.to_string())
        .collect();
    println!("Records starting with 'the': {prefixed:?}");
    let sci_fi_movies = catalog.search("blade", &[MediaKind::Movie]);
    println!("Movies matching 'blade': {}\n", sci_fi_movies.len());

    // Top-rated first
    catalog.sort(SortKey::Rating);
    println!("Top 3 by rating:");
    for record in catalog.records().iter().take(3) {
        println!("  {} - {:.1}", record, record.base.rating);
    }
    println!();

    // Similar to Dune
    let dune = Record::book("Dune", "Sci-Fi", "Frank Herbert").with_year(1965);
    let start = Instant::now();
    let neighbors = catalog.find_similar(&dune, 5)?;
    println!("Most similar to {} (in {:?}):", dune, start.elapsed());
    for (rank, neighbor) in neighbors.iter().enumerate() {
        println!(
            "  {:2}. {:<30} {:.3}",
            rank + 1,
            neighbor.record.name(),
            neighbor.similarity
        );
    }
    println!();

    // Only well-rated books, authors weighted heavily
    let weights: SimilarityWeights =
        serde_json::from_str(r#"{ "book": { "base": 0.5, "author": 0.5 } }"#)?;
    let index = SimilarityIndexBuilder::new()
        .with_model(SimilarityModel::new(weights))
        .with_filter(MinimumRatingFilter::new(8.0))
        .with_top_k(3);
    let catalog = catalog_with(index, catalog.records().iter().map(|r| r.as_ref().clone()))?;

    let neighbors = catalog.find_similar(&dune, 3)?;
    println!("Author-weighted, rating >= 8.0:");
    for neighbor in &neighbors {
        println!("  {:<30} {:.3}", neighbor.record.name(), neighbor.similarity);
    }

    Ok(())
}

fn catalog_with(
    index: SimilarityIndexBuilder,
    records: impl IntoIterator<Item = Record>,
) -> anyhow::Result<MediaCatalog> {
    let mut catalog = MediaCatalog::new().with_similarity(index);
    catalog.extend(records)?;
    Ok(catalog)
}
