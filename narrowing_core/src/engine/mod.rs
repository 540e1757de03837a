//! Narrowing engine - asks the most discriminating question and narrows the
//! candidates from the answer.
//!
//! A round works as follows:
//! 1. **Check**: One survivor is a guess; none, or nothing left to ask, is a give-up
//! 2. **Score**: Every unchecked row of every unexhausted group gets an information score
//! 3. **Prune**: Rows scoring 0.0 are checked, groups with nothing positive are exhausted
//! 4. **Ask**: The strictly best row becomes the pending question
//! 5. **Resolve**: The answer intersects the viable set with the row or its complement

mod information;
mod outcome;
mod state;

pub use information::information;
pub use outcome::*;
pub use state::*;

use pokedex::{Catalog, CatalogSchema, Item, ItemId};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::model::AttributeModel;
use information::best_row;

/// One game in progress over a shared attribute model.
///
/// Not internally synchronized. Concurrent games use separate engines built
/// with [`NarrowingEngine::from_model`] over the same `Arc`.
#[derive(Debug, Clone)]
pub struct NarrowingEngine {
    model: Arc<AttributeModel>,
    state: GameState,
}

impl NarrowingEngine {
    /// Build the attribute model for `catalog` and start a game.
    pub fn new(catalog: Catalog, schema: &CatalogSchema) -> Result<Self, EngineError> {
        let model = AttributeModel::build(catalog, schema)?;
        Ok(Self::from_model(Arc::new(model)))
    }

    /// Start a game with the default pokemon schema.
    pub fn pokemon(catalog: Catalog) -> Result<Self, EngineError> {
        Self::new(catalog, &CatalogSchema::pokemon())
    }

    /// Start a game over an already built model.
    pub fn from_model(model: Arc<AttributeModel>) -> Self {
        let state = GameState::new(&model);
        info!(game = %state.game_id(), items = model.item_count(), "starting game");
        Self { model, state }
    }

    /// Produce the next question, or a terminal outcome.
    ///
    /// Calling this again before [`resolve_answer`](Self::resolve_answer)
    /// returns the same question.
    pub fn generate_question(&mut self) -> Outcome {
        match self.state.viable_count {
            0 => return self.give_up(EngineError::DegenerateSplit),
            1 => return self.announce_guess(),
            _ => {}
        }
        if self.state.all_exhausted() {
            self.state.last_question = None;
            return Outcome::CannotGuess;
        }

        let model = Arc::clone(&self.model);
        let mut best: Option<(QuestionRef, f64)> = None;
        for (index, group) in model.groups().iter().enumerate() {
            if self.state.group_exhausted[index] {
                continue;
            }

            let group_best = match best_row(
                group,
                &self.state.viable,
                self.state.viable_count,
                &mut self.state.checked[index],
            ) {
                Ok(group_best) => group_best,
                Err(err) => return self.give_up(err),
            };

            match group_best {
                Some((row, info)) => {
                    if best.map_or(true, |(_, best_info)| info > best_info) {
                        best = Some((QuestionRef { group: index, row }, info));
                    }
                }
                None => {
                    debug!(game = %self.state.game_id, group = group.name(), "group exhausted");
                    self.state.group_exhausted[index] = true;
                }
            }
        }

        let Some((target, information)) = best else {
            debug!(
                game = %self.state.game_id,
                remaining = self.state.viable_count,
                "no question splits the remaining candidates"
            );
            self.state.last_question = None;
            return Outcome::CannotGuess;
        };

        let group = &model.groups()[target.group];
        let text = group.question(target.row);
        debug!(
            game = %self.state.game_id,
            group = group.name(),
            value = group.label(target.row).unwrap_or_default(),
            information,
            remaining = self.state.viable_count,
            "selected question"
        );

        self.state.last_question = Some(target);
        Outcome::Question(Question {
            target,
            text,
            information,
        })
    }

    /// Apply the answer to the pending question.
    pub fn resolve_answer(&mut self, answer: Answer) -> Result<(), EngineError> {
        let target = self
            .state
            .last_question
            .take()
            .ok_or(EngineError::NoPendingQuestion)?;

        let before = self.state.viable_count;
        let row = self.model.groups()[target.group].row(target.row);
        match answer {
            Answer::Yes => self.state.narrow(row, true),
            Answer::No => self.state.narrow(row, false),
            Answer::Unknown => {}
        }

        // Checked on every answer, unknown included, so it is never re-asked.
        self.state.checked[target.group][target.row] = true;
        self.state.questions_asked += 1;

        debug!(
            game = %self.state.game_id,
            %answer,
            before,
            after = self.state.viable_count,
            "resolved answer"
        );
        Ok(())
    }

    /// Start a new game against the same model.
    pub fn reset(&mut self) {
        self.state.reset();
        info!(game = %self.state.game_id(), "reset game");
    }

    fn announce_guess(&mut self) -> Outcome {
        self.state.last_question = None;

        let Some(index) = self.state.viable.iter().position(|v| *v) else {
            return self.give_up(EngineError::DegenerateSplit);
        };
        let item = &self.model.catalog().items()[index];

        info!(
            game = %self.state.game_id,
            item = %item.name,
            questions = self.state.questions_asked,
            "guessed"
        );
        Outcome::Guessed {
            item: item.id,
            name: item.name.clone(),
        }
    }

    fn give_up(&mut self, reason: EngineError) -> Outcome {
        warn!(game = %self.state.game_id, %reason, "giving up");
        self.state.last_question = None;
        Outcome::CannotGuess
    }

    pub fn model(&self) -> &Arc<AttributeModel> {
        &self.model
    }

    pub fn catalog(&self) -> &Catalog {
        self.model.catalog()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn game_id(&self) -> GameId {
        self.state.game_id()
    }

    pub fn viable_count(&self) -> usize {
        self.state.viable_count
    }

    pub fn is_viable(&self, id: ItemId) -> bool {
        self.state.viable.get(id.index()).copied().unwrap_or(false)
    }

    /// Items still consistent with every answer, in catalog order.
    pub fn candidates(&self) -> impl Iterator<Item = &Item> {
        self.model
            .catalog()
            .iter()
            .filter(|item| self.is_viable(item.id))
    }

    pub fn pending_question(&self) -> Option<QuestionRef> {
        self.state.last_question
    }

    pub fn questions_asked(&self) -> usize {
        self.state.questions_asked
    }

    pub fn is_exhausted(&self, group: usize) -> bool {
        self.state.is_exhausted(group)
    }
}
