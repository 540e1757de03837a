//! The terminal game loop.

use anyhow::Result;
use dialoguer::Select;
use narrowing_core::{Answer, NarrowingEngine, Outcome, Question};
use std::io::Write;

const CHOICES: [&str; 3] = ["Yes", "No", "Not sure"];

/// Something that can answer the engine's questions.
pub trait Player {
    fn answer(&mut self, question: &Question) -> Result<Answer>;
}

/// Asks the person at the terminal.
pub struct TerminalPlayer;

impl Player for TerminalPlayer {
    fn answer(&mut self, question: &Question) -> Result<Answer> {
        let selection = Select::new()
            .with_prompt(&question.text)
            .items(&CHOICES)
            .default(0)
            .interact()?;
        Ok(match selection {
            0 => Answer::Yes,
            1 => Answer::No,
            _ => Answer::Unknown,
        })
    }
}

/// Message printed when a game ends.
pub fn verdict(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Guessed { name, .. } => format!("I've guessed your pokemon! It's: {}", name),
        Outcome::CannotGuess => "I can't guess your pokemon T_T".to_string(),
        Outcome::Question(question) => question.text.clone(),
    }
}

/// Play one game to its terminal outcome.
pub fn play_round(
    engine: &mut NarrowingEngine,
    player: &mut dyn Player,
    out: &mut dyn Write,
) -> Result<Outcome> {
    loop {
        match engine.generate_question() {
            Outcome::Question(question) => {
                let answer = player.answer(&question)?;
                engine.resolve_answer(answer)?;
            }
            terminal => {
                writeln!(out, "{}", verdict(&terminal))?;
                writeln!(
                    out,
                    "({} questions, {} candidates left)",
                    engine.questions_asked(),
                    engine.viable_count()
                )?;
                return Ok(terminal);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex::{Catalog, Item};

    /// Answers truthfully for a chosen pokemon.
    struct Oracle {
        item: Item,
        engine_groups: Vec<(String, Vec<String>)>,
    }

    impl Player for Oracle {
        fn answer(&mut self, question: &Question) -> Result<Answer> {
            let (group, labels) = &self.engine_groups[question.target.group];
            let label = &labels[question.target.row];
            let has = match group.as_str() {
                "num_types" => self.item.count("types").to_string() == *label,
                name => self.item.has_value(name, label),
            };
            Ok(if has { Answer::Yes } else { Answer::No })
        }
    }

    fn starters() -> Catalog {
        Catalog::from_items([
            Item::new("bulbasaur")
                .with_attributes("types", ["grass", "poison"])
                .with_attributes("moves", ["tackle", "vine-whip"]),
            Item::new("charmander")
                .with_attributes("types", ["fire"])
                .with_attributes("moves", ["scratch", "ember"]),
            Item::new("squirtle")
                .with_attributes("types", ["water"])
                .with_attributes("moves", ["tackle", "bubble"]),
        ])
    }

    #[test]
    fn test_round_guesses_with_truthful_answers() {
        let mut engine = NarrowingEngine::pokemon(starters()).unwrap();
        let engine_groups = engine
            .model()
            .groups()
            .iter()
            .map(|g| (g.name().to_string(), g.values().to_vec()))
            .collect();
        let item = engine.catalog().find("squirtle").unwrap().clone();
        let mut player = Oracle { item, engine_groups };
        let mut out = Vec::new();

        let outcome = play_round(&mut engine, &mut player, &mut out).unwrap();

        assert!(matches!(outcome, Outcome::Guessed { name, .. } if name == "squirtle"));
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("I've guessed your pokemon! It's: squirtle"));
    }

    #[test]
    fn test_verdict_text() {
        assert_eq!(verdict(&Outcome::CannotGuess), "I can't guess your pokemon T_T");
    }
}
