//! UniFFI bindings for recipemark
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! Recipes are flattened into records UniFFI can carry; absent text stays `None`.

use std::fmt;

use crate::{Ingredient, Recipe, RecipeParseError, RecipePhase};

#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible recipe structure
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiRecipe {
    pub title: Option<String>,
    pub size: Option<String>,
    pub lang: Option<String>,
    pub source: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub phases: Vec<FfiPhase>,
    pub keywords: Vec<String>,
    /// `None` when the recipe declares no images
    pub images: Option<Vec<String>>,
}

/// FFI-compatible phase: a cooking round or a wait period
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiPhase {
    Cooking {
        ingredients: Option<Vec<FfiIngredient>>,
        steps: Option<Vec<String>>,
    },
    Wait {
        description: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredient {
    pub name: String,
    pub amount: Option<String>,
    pub unit: Option<String>,
}

impl From<Ingredient> for FfiIngredient {
    fn from(ingredient: Ingredient) -> Self {
        FfiIngredient {
            name: ingredient.name,
            amount: ingredient.amount,
            unit: ingredient.unit,
        }
    }
}

impl From<RecipePhase> for FfiPhase {
    fn from(phase: RecipePhase) -> Self {
        match phase {
            RecipePhase::Cooking(phase) => FfiPhase::Cooking {
                ingredients: phase
                    .ingredients
                    .map(|list| list.into_iter().map(Into::into).collect()),
                steps: phase
                    .steps
                    .map(|list| list.into_iter().map(|step| step.text).collect()),
            },
            RecipePhase::Wait(wait) => FfiPhase::Wait {
                description: wait.description,
            },
        }
    }
}

impl From<Recipe> for FfiRecipe {
    fn from(recipe: Recipe) -> Self {
        FfiRecipe {
            title: recipe.title,
            size: recipe.size,
            lang: recipe.lang,
            source: recipe.source,
            author: recipe.author,
            description: recipe.description,
            phases: recipe.phases.into_iter().map(Into::into).collect(),
            keywords: recipe.keywords,
            images: recipe.images,
        }
    }
}

/// FFI-compatible error type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error))]
pub enum FfiParseError {
    /// A line of the markup was rejected
    ParseError {
        message: String,
        line: String,
        line_nr: u64,
    },
}

impl fmt::Display for FfiParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FfiParseError::ParseError {
                message,
                line,
                line_nr,
            } => write!(f, "Parse error in line {}: {} ({:?})", line_nr, message, line),
        }
    }
}

impl std::error::Error for FfiParseError {}

impl From<RecipeParseError> for FfiParseError {
    fn from(err: RecipeParseError) -> Self {
        FfiParseError::ParseError {
            message: err.cause().to_string(),
            line: err.line().to_string(),
            line_nr: err.line_nr() as u64,
        }
    }
}

/// Parse markup text into recipes
///
/// # Arguments
/// * `text` - The whole markup document
///
/// # Returns
/// All recipes of the document, in order
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_recipes(text: String) -> Result<Vec<FfiRecipe>, FfiParseError> {
    let recipes = crate::parse_str(&text)?;
    Ok(recipes.into_iter().map(Into::into).collect())
}

/// Parse a single ingredient line such as "1 1/2g butter"
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_ingredient_line(line: String) -> FfiIngredient {
    crate::parse_ingredient(&line).into()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
