use anyhow::Result;
use lexicard_core::{Quiz, SessionProgress};

use crate::app::Service;
use crate::prompt::{ask, Reply};

/// Multiple-choice rounds over random cards.
///
/// Answers are scored in this run's `SessionProgress` only; card review
/// counters and schedules are left untouched.
pub fn run(service: &Service<'_>, rounds: usize) -> Result<()> {
    let mut rng = rand::rng();
    let mut progress = SessionProgress::new();

    for _ in 0..rounds {
        let Some(quiz) = service.random_quiz(&mut rng)? else {
            println!("Add some flashcards to start the quiz!");
            return Ok(());
        };

        println!();
        println!("What is the translation of: {}?", quiz.prompt);
        for (position, option) in quiz.options.iter().enumerate() {
            println!("  {}) {option}", position + 1);
        }

        let Some(choice) = read_choice(&quiz)? else {
            break;
        };
        let correct = quiz.is_correct(choice);
        progress.record_quiz_result(correct);

        if correct {
            println!("Correct!");
        } else {
            println!("Wrong! The correct answer was: {}", quiz.answer);
        }
        println!(
            "Score {}/{}  Accuracy {:.1}%",
            progress.quiz_score(),
            progress.total_reviews(),
            progress.accuracy_percent()
        );
    }
    Ok(())
}

fn read_choice(quiz: &Quiz) -> Result<Option<&str>> {
    loop {
        let text = match ask("Your answer: ")? {
            Reply::Quit => return Ok(None),
            Reply::Text(text) => text,
        };
        match text.parse::<usize>() {
            Ok(number) if (1..=quiz.options.len()).contains(&number) => {
                return Ok(Some(quiz.options[number - 1].as_str()));
            }
            _ => println!("Enter a number between 1 and {}.", quiz.options.len()),
        }
    }
}
