use anyhow::{bail, Result};
use chrono::{DateTime, Local, Utc};
use lexicard_core::Flashcard;

use crate::app::Service;

pub fn run_list(service: &Service<'_>) -> Result<()> {
    if service.cards().is_empty() {
        println!("No flashcards yet. Add one with `lexicard add <word> <translation>`.");
        return Ok(());
    }
    for (index, card) in service.cards().iter().enumerate() {
        print_row(index, card);
    }
    Ok(())
}

pub fn run_due(service: &Service<'_>) -> Result<()> {
    let due = service.due_cards(Utc::now());
    if due.is_empty() {
        println!("No cards due for review!");
        return Ok(());
    }
    println!("{} card(s) due:", due.len());
    for index in due {
        if let Some(card) = service.card(index) {
            print_row(index, card);
        }
    }
    Ok(())
}

/// Detail view for the 1-based display number.
pub fn run_show(service: &Service<'_>, number: usize) -> Result<()> {
    let total = service.cards().len();
    let Some(card) = number.checked_sub(1).and_then(|index| service.card(index)) else {
        bail!("card {number} does not exist ({total} cards)");
    };

    println!("Card {number} of {total}");
    println!("Word:            {}", card.word());
    println!("Translation:     {}", card.translation());
    println!("Level:           {}", card.level());
    println!("Next review:     {}", local_time(card.next_review()));
    println!("Reviews:         {}", card.reviews());
    println!("Correct answers: {}", card.correct());
    Ok(())
}

fn print_row(index: usize, card: &Flashcard) {
    println!(
        "{:>4}. {:<20} {:<20} L{} next {} ({}/{})",
        index + 1,
        card.word(),
        card.translation(),
        card.level(),
        local_time(card.next_review()),
        card.correct(),
        card.reviews()
    );
}

fn local_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}
