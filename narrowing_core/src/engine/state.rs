//! Game state - everything one game changes. The attribute model is never
//! touched by a game.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::QuestionRef;
use crate::model::AttributeModel;

/// Unique identifier for one game, regenerated on every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub Uuid);

impl GameId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable state of a single game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) game_id: GameId,

    /// Items still consistent with every answer.
    pub(crate) viable: Vec<bool>,

    /// Always equal to the number of `true` entries in `viable`.
    pub(crate) viable_count: usize,

    /// `checked[group][row]`: asked, or known to carry no information.
    pub(crate) checked: Vec<Vec<bool>>,

    pub(crate) group_exhausted: Vec<bool>,

    pub(crate) last_question: Option<QuestionRef>,

    pub(crate) questions_asked: usize,
}

impl GameState {
    /// Fresh state sized for a model.
    pub fn new(model: &AttributeModel) -> Self {
        Self {
            game_id: GameId::new(),
            viable: vec![true; model.item_count()],
            viable_count: model.item_count(),
            checked: model
                .groups()
                .iter()
                .map(|group| vec![false; group.row_count()])
                .collect(),
            group_exhausted: vec![false; model.groups().len()],
            last_question: None,
            questions_asked: 0,
        }
    }

    /// Return to the initial state in place, keeping allocations.
    pub fn reset(&mut self) {
        self.game_id = GameId::new();
        self.viable.fill(true);
        self.viable_count = self.viable.len();
        for rows in &mut self.checked {
            rows.fill(false);
        }
        self.group_exhausted.fill(false);
        self.last_question = None;
        self.questions_asked = 0;
    }

    /// Intersect the viable set with `row` (or its complement).
    pub(crate) fn narrow(&mut self, row: &[bool], keep_matching: bool) {
        for (viable, has) in self.viable.iter_mut().zip(row) {
            *viable &= *has == keep_matching;
        }
        self.viable_count = self.viable.iter().filter(|v| **v).count();
    }

    pub fn game_id(&self) -> GameId {
        self.game_id
    }

    pub fn viable(&self) -> &[bool] {
        &self.viable
    }

    pub fn viable_count(&self) -> usize {
        self.viable_count
    }

    pub fn is_checked(&self, question: QuestionRef) -> bool {
        self.checked[question.group][question.row]
    }

    pub fn is_exhausted(&self, group: usize) -> bool {
        self.group_exhausted[group]
    }

    pub fn all_exhausted(&self) -> bool {
        self.group_exhausted.iter().all(|e| *e)
    }

    pub fn last_question(&self) -> Option<QuestionRef> {
        self.last_question
    }

    pub fn questions_asked(&self) -> usize {
        self.questions_asked
    }
}
