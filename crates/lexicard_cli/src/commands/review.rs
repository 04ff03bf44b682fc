use anyhow::Result;
use chrono::{Local, Utc};

use crate::app::Service;
use crate::prompt::{ask, ask_yes_no, Reply};

/// Presents random due cards until none remain, `rounds` is hit, or the
/// learner quits. Each outcome is persisted before the next card.
pub fn run(service: &mut Service<'_>, rounds: Option<usize>) -> Result<()> {
    let mut rng = rand::rng();
    let mut reviewed = 0;

    while rounds.map_or(true, |limit| reviewed < limit) {
        let now = Utc::now();
        let Some((index, card)) = service.pick_due(now, &mut rng) else {
            println!("No cards due for review!");
            break;
        };
        let translation = card.translation().to_string();

        println!();
        println!("  {}", card.word());
        if ask("Press Enter to show the translation (q to stop) ")? == Reply::Quit {
            break;
        }
        println!("  {translation}");

        let Some(remembered) = ask_yes_no("Did you remember it? [y/n] ")? else {
            break;
        };
        let transition = service.record_outcome(index, remembered, Utc::now())?;
        println!(
            "Level {} -> {}, next review {}",
            transition.from_level,
            transition.to_level,
            transition
                .next_review
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
        );
        reviewed += 1;
    }

    println!("Reviewed {reviewed} card(s).");
    Ok(())
}
