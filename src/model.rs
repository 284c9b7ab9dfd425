use serde::{Deserialize, Serialize};

/// A single recipe block of a markup file.
///
/// Every field except `phases` and `keywords` is absent until a line sets it.
/// `images` stays `None` (not an empty list) when no `img:` line appears.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Serving or yield description, e.g. "for 4 people"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// All `desc:` and free-text lines joined with a single space
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub phases: Vec<RecipePhase>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// All ingredients of the cooking phases, in declaration order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.cooking_phases()
            .flat_map(|phase| phase.ingredients.iter().flatten())
    }

    /// All steps of the cooking phases, in declaration order.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.cooking_phases()
            .flat_map(|phase| phase.steps.iter().flatten())
    }

    fn cooking_phases(&self) -> impl Iterator<Item = &Phase> {
        self.phases.iter().filter_map(|entry| match entry {
            RecipePhase::Cooking(phase) => Some(phase),
            RecipePhase::Wait(_) => None,
        })
    }
}

/// One entry of [`Recipe::phases`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecipePhase {
    Cooking(Phase),
    Wait(WaitPhase),
}

impl From<Phase> for RecipePhase {
    fn from(phase: Phase) -> Self {
        RecipePhase::Cooking(phase)
    }
}

impl From<WaitPhase> for RecipePhase {
    fn from(wait: WaitPhase) -> Self {
        RecipePhase::Wait(wait)
    }
}

/// Gather these ingredients, then perform these steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<Ingredient>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl Phase {
    pub fn new(ingredients: Option<Vec<Ingredient>>, steps: Option<Vec<Step>>) -> Self {
        Self { ingredients, steps }
    }

    pub fn with_ingredient(ingredient: Ingredient) -> Self {
        Self {
            ingredients: Some(vec![ingredient]),
            steps: None,
        }
    }

    pub fn push_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.get_or_insert_with(Vec::new).push(ingredient);
    }

    pub fn push_step(&mut self, step: Step) {
        self.steps.get_or_insert_with(Vec::new).push(step);
    }
}

/// A resting period. Carries no ingredients or steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitPhase {
    pub description: String,
}

impl WaitPhase {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Amount and unit keep the text exactly as written ("1 1/2", "about 25", "heaped tbsp.").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: Option<&str>, unit: Option<&str>) -> Self {
        Self {
            name: name.into(),
            amount: amount.map(String::from),
            unit: unit.map(String::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub text: String,
}

impl Step {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
