//! Parser for a line-oriented recipe markup.
//!
//! Every trimmed line is classified by its first character:
//!
//! | sigil | meaning                                  |
//! |-------|------------------------------------------|
//! | `!`   | metadata, `key: value`                   |
//! | `#`   | start a new phase with one ingredient    |
//! | `*`   | add a step to the current phase          |
//! | `+`   | add a wait period                        |
//! | none  | free text, appended to the description   |
//!
//! ```
//! use recipemark::{parse_str, Ingredient, RecipePhase};
//!
//! let recipes = parse_str("! title: the title\n# 25g butter\n* eat butter").unwrap();
//! assert_eq!(recipes[0].title.as_deref(), Some("the title"));
//!
//! let RecipePhase::Cooking(phase) = &recipes[0].phases[0] else { panic!() };
//! assert_eq!(
//!     phase.ingredients.as_deref(),
//!     Some(&[Ingredient::new("butter", Some("25"), Some("g"))][..])
//! );
//! ```

pub mod config;
pub mod error;
pub mod ingredient;
pub mod meta;
pub mod model;
pub mod parser;
pub mod uniffi_bindings;

pub use error::{Error, MetaError, RecipeParseError};
pub use ingredient::parse_ingredient;
pub use meta::{parse_meta, split_command, MetaKey};
pub use model::{Ingredient, Phase, Recipe, RecipePhase, Step, WaitPhase};
pub use parser::{parse_file, parse_path, parse_reader, parse_str};

// Re-export FFI functions and types
pub use uniffi_bindings::{
    get_version, parse_ingredient_line, parse_recipes, FfiIngredient, FfiParseError, FfiPhase,
    FfiRecipe,
};
