//! MovieLens-Style Affinity Analysis
//!
//! Walks the full affinity pipeline over a raw ratings export:
//! - Load the tab-separated interaction log and the item catalog, join on item id
//! - Summarize every title (mean rating, rating count)
//! - Plot the rating-count and mean-rating distributions as ASCII histograms
//! - Pivot into a user x title rating matrix
//! - Correlate a reference title against every column and rank by affinity
//!
//! Run with:
//!   cargo run --example movielens -- data/u.data data/Movie_Id_Titles.csv "Star Wars (1977)" "Liar Liar (1997)"
//!
//! All arguments are optional and default to the values above.

use afinidad::prelude::*;
use afinidad::report;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let interactions_path = args.next().unwrap_or_else(|| "data/u.data".to_string());
    let titles_path = args
        .next()
        .unwrap_or_else(|| "data/Movie_Id_Titles.csv".to_string());
    let first_ref = args.next().unwrap_or_else(|| "Star Wars (1977)".to_string());
    let second_ref = args.next().unwrap_or_else(|| "Liar Liar (1997)".to_string());

    println!("=== Affinity Analysis ===\n");

    // Part 1: Load and join
    println!("=== Part 1: Load and Join ===\n");
    let data = RatingsDataset::from_files(&interactions_path, &titles_path)?;
    println!(
        "{} interactions read, {} joined records, {} dropped by the join\n",
        data.n_interactions(),
        data.len(),
        data.dropped()
    );
    println!("{}", report::records_head(data.records(), 5));

    // Part 2: Fit the pipeline
    let mut analysis = AffinityAnalysis::new().with_min_ratings(100);
    analysis.fit(&data)?;

    let summary = analysis.summary()?;
    println!("=== Part 2: Per-Title Summaries ({} titles) ===\n", summary.len());
    println!("Best-rated titles (mean rating):");
    println!("{}", report::summary_by_mean(summary, 5));
    println!("Most-rated titles (rating count):");
    println!("{}", report::summary_by_count(summary, 5));

    // Part 3: Distributions
    println!("=== Part 3: Distributions ===\n");
    let counts = summary.rating_counts();
    let means = summary.mean_ratings();

    let mut surface = TextSurface::new();
    surface.histogram(
        "Ratings per title",
        &DescriptiveStats::new(&counts).histogram(10)?,
    );
    surface.histogram(
        "Mean rating per title",
        &DescriptiveStats::new(&means).histogram(10)?,
    );
    surface.scatter("Mean rating vs rating count", &summary.mean_vs_count());
    println!("{}", surface.render());

    // Part 4: The rating matrix
    let matrix = analysis.matrix()?;
    println!("=== Part 4: Rating Matrix ===\n");
    println!(
        "{} users x {} titles, reference column {:?} holds {} ratings\n",
        matrix.n_users(),
        matrix.n_titles(),
        first_ref,
        matrix.rated_count(&first_ref)
    );

    // Part 5: Two reference-title case studies
    for reference in [&first_ref, &second_ref] {
        println!("=== Part 5: Similar to {reference:?} ===\n");
        let similar = analysis.similar_to(reference)?;
        println!("{}", report::ranked_head(&similar, 10));
        println!(
            "{} titles survived the popularity filter (more than {} ratings)\n",
            similar.len(),
            analysis.min_ratings()
        );
    }

    Ok(())
}
