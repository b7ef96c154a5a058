use serde::Serialize;
use uuid::Uuid;

/// One checkable recipe line: an ingredient or a step.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeItem {
    pub id: Uuid,
    pub text: String,
    pub checked: bool,
}

impl RecipeItem {
    pub fn new(text: impl Into<String>) -> Self {
        RecipeItem {
            id: Uuid::new_v4(),
            text: text.into(),
            checked: false,
        }
    }

    pub fn toggle(&mut self) {
        self.checked = !self.checked;
    }
}

/// A generated recipe: ordered ingredients followed by ordered steps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Recipe {
    pub ingredients: Vec<RecipeItem>,
    pub steps: Vec<RecipeItem>,
}

impl Recipe {
    /// Build a recipe from already-cleaned item lines.
    pub fn from_lines(ingredients: Vec<String>, steps: Vec<String>) -> Self {
        Recipe {
            ingredients: ingredients.into_iter().map(RecipeItem::new).collect(),
            steps: steps.into_iter().map(RecipeItem::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.steps.is_empty()
    }
}
