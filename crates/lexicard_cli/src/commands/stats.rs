use anyhow::Result;

use crate::app::Service;

const BAR_WIDTH: f64 = 30.0;

pub fn run(service: &Service<'_>) -> Result<()> {
    let stats = service.compute_stats();
    if stats.total_cards == 0 {
        println!("No flashcards available.");
        return Ok(());
    }

    println!("Total cards:      {}", stats.total_cards);
    println!("Total reviews:    {}", stats.total_reviews);
    println!("Average accuracy: {:.1}%", stats.average_accuracy);

    if stats.total_reviews > 0 {
        println!();
        println!("Word-wise performance");
        for row in &stats.per_word_accuracy {
            let filled = (row.accuracy_percent / 100.0 * BAR_WIDTH).round() as usize;
            println!(
                "{:<20} {:<30} {:>5.1}%",
                row.word,
                "#".repeat(filled),
                row.accuracy_percent
            );
        }
    }
    Ok(())
}
