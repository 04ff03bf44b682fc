use anyhow::Result;
use chrono::Utc;

use crate::app::Service;

pub fn run(service: &mut Service<'_>, word: &str, translation: &str) -> Result<()> {
    let card = service.add_card(word, translation, Utc::now())?;
    println!("Added \"{}\" -> \"{}\"", card.word(), card.translation());
    println!("Cards in collection: {}", service.cards().len());
    Ok(())
}
