use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, trace};

use crate::error::{Error, MetaError, RecipeParseError};
use crate::ingredient::parse_ingredient;
use crate::meta::{append_description, parse_meta, split_command, MetaKey};
use crate::model::{Phase, Recipe, RecipePhase, Step, WaitPhase};

/// Parse a sequence of markup lines into recipes.
///
/// A new recipe starts at a `title:` line once the current one already has a
/// title or a phase. The first unknown metadata key aborts the whole parse.
pub fn parse_file<I, S>(lines: I) -> Result<Vec<Recipe>, RecipeParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = DocumentParser::default();
    for (index, line) in lines.into_iter().enumerate() {
        parser.feed(line.as_ref(), index + 1)?;
    }
    Ok(parser.finish())
}

pub fn parse_str(text: &str) -> Result<Vec<Recipe>, RecipeParseError> {
    parse_file(text.lines())
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Recipe>, Error> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(parse_file(lines)?)
}

pub fn parse_path(path: impl AsRef<Path>) -> Result<Vec<Recipe>, Error> {
    let path = path.as_ref();
    debug!("Parsing recipes from {}", path.display());
    parse_reader(BufReader::new(File::open(path)?))
}

#[derive(Debug, Default)]
struct DocumentParser {
    finished: Vec<Recipe>,
    current: Option<RecipeBuilder>,
}

impl DocumentParser {
    fn feed(&mut self, raw: &str, line_nr: usize) -> Result<(), RecipeParseError> {
        let line = raw.trim();
        let Some(sigil) = line.chars().next() else {
            return Ok(());
        };
        trace!("line {}: {:?}", line_nr, line);

        let rest = &line[sigil.len_utf8()..];
        match sigil {
            '!' => self
                .metadata(rest)
                .map_err(|source| RecipeParseError::new(line, line_nr, source))?,
            '#' => self.open().add_ingredient(rest),
            '*' => self.open().add_step(rest),
            '+' => self.open().add_wait(rest),
            _ => append_description(&mut self.open().recipe, line),
        }
        Ok(())
    }

    fn metadata(&mut self, rest: &str) -> Result<(), MetaError> {
        let rest = rest.strip_prefix('!').unwrap_or(rest);
        let (key, value) = split_command(rest);

        if key.parse::<MetaKey>() == Ok(MetaKey::Title)
            && self.current.as_ref().is_some_and(RecipeBuilder::has_content)
        {
            self.close();
        }

        parse_meta(&key, &value, &mut self.open().recipe)?;
        Ok(())
    }

    fn open(&mut self) -> &mut RecipeBuilder {
        self.current.get_or_insert_with(RecipeBuilder::default)
    }

    fn close(&mut self) {
        if let Some(builder) = self.current.take() {
            let recipe = builder.build();
            debug!(
                "Finished recipe {:?} with {} phases",
                recipe.title,
                recipe.phases.len()
            );
            self.finished.push(recipe);
        }
    }

    fn finish(mut self) -> Vec<Recipe> {
        self.close();
        self.finished
    }
}

/// Accumulates one recipe. The phase accepting steps is held apart from
/// `recipe.phases` until an ingredient or wait line closes it.
#[derive(Debug, Default)]
struct RecipeBuilder {
    recipe: Recipe,
    open_phase: Option<Phase>,
}

impl RecipeBuilder {
    fn has_content(&self) -> bool {
        self.recipe.title.is_some() || !self.recipe.phases.is_empty() || self.open_phase.is_some()
    }

    fn add_ingredient(&mut self, line: &str) {
        self.close_phase();
        self.open_phase = Some(Phase::with_ingredient(parse_ingredient(line)));
    }

    fn add_step(&mut self, line: &str) {
        self.open_phase
            .get_or_insert_with(Phase::default)
            .push_step(Step::new(line.trim()));
    }

    fn add_wait(&mut self, line: &str) {
        self.close_phase();
        self.recipe
            .phases
            .push(RecipePhase::Wait(WaitPhase::new(line.trim())));
    }

    fn close_phase(&mut self) {
        if let Some(phase) = self.open_phase.take() {
            self.recipe.phases.push(RecipePhase::Cooking(phase));
        }
    }

    fn build(mut self) -> Recipe {
        self.close_phase();
        self.recipe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    #[test]
    fn test_blank_input() {
        assert_eq!(parse_str("").unwrap(), Vec::new());
        assert_eq!(parse_str("\n   \n\t\n").unwrap(), Vec::new());
    }

    #[test]
    fn test_step_before_any_phase_opens_one() {
        let recipes = parse_str("* just do it").unwrap();
        assert_eq!(
            recipes,
            vec![Recipe {
                phases: vec![Phase::new(None, Some(vec![Step::new("just do it")])).into()],
                ..Recipe::default()
            }]
        );
    }

    #[test]
    fn test_each_ingredient_line_starts_a_phase() {
        let recipes = parse_str("# 1 egg\n# 2 eggs\n* fry").unwrap();
        assert_eq!(
            recipes[0].phases,
            vec![
                Phase::with_ingredient(Ingredient::new("egg", Some("1"), None)).into(),
                Phase::new(
                    Some(vec![Ingredient::new("eggs", Some("2"), None)]),
                    Some(vec![Step::new("fry")])
                )
                .into(),
            ]
        );
    }

    #[test]
    fn test_trailing_wait_is_closed() {
        let recipes = parse_str("# salt\n+ rest\n* serve").unwrap();
        assert_eq!(
            recipes[0].phases,
            vec![
                Phase::with_ingredient(Ingredient::new("salt", None, None)).into(),
                WaitPhase::new("rest").into(),
                Phase::new(None, Some(vec![Step::new("serve")])).into(),
            ]
        );
    }

    #[test]
    fn test_title_on_empty_recipe_does_not_split() {
        let recipes = parse_str("some words\n!title: one").unwrap();
        assert_eq!(recipes.len(), 1);
        assert_eq!(recipes[0].title.as_deref(), Some("one"));
        assert_eq!(recipes[0].description.as_deref(), Some("some words"));
    }

    #[test]
    fn test_title_after_open_phase_splits() {
        let recipes = parse_str("* stir\n!title: next").unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0].title, None);
        assert_eq!(recipes[1], Recipe::with_title("next"));
    }

    #[test]
    fn test_double_bang() {
        let recipes = parse_str("!! lang: en").unwrap();
        assert_eq!(recipes[0].lang.as_deref(), Some("en"));
    }

    #[test]
    fn test_error_position() {
        let err = parse_str("!title: ok\n\n  !nope: x  ").unwrap_err();
        assert_eq!(err.line_nr(), 3);
        assert_eq!(err.line(), "!nope: x");
        assert_eq!(
            err.cause(),
            &MetaError::InvalidMetadataKey {
                key: "nope".to_string()
            }
        );
    }
}
