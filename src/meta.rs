use std::str::FromStr;

use crate::error::MetaError;
use crate::model::Recipe;

/// Recognised metadata keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    Title,
    Size,
    Lang,
    Source,
    Author,
    Desc,
    Keywords,
    Img,
}

impl FromStr for MetaKey {
    type Err = MetaError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.trim().to_lowercase().as_str() {
            "title" => Ok(MetaKey::Title),
            "size" => Ok(MetaKey::Size),
            "lang" => Ok(MetaKey::Lang),
            "source" => Ok(MetaKey::Source),
            "author" => Ok(MetaKey::Author),
            "desc" => Ok(MetaKey::Desc),
            "keywords" => Ok(MetaKey::Keywords),
            "img" => Ok(MetaKey::Img),
            other => Err(MetaError::InvalidMetadataKey {
                key: other.to_string(),
            }),
        }
    }
}

/// Split a `key: value` line on its first colon.
///
/// The key is trimmed and lower-cased, the value trimmed. A line without a
/// colon is all key and an empty value.
pub fn split_command(line: &str) -> (String, String) {
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    (key.trim().to_lowercase(), value.trim().to_string())
}

/// Apply one metadata assignment to `recipe`.
///
/// `desc`, `keywords` and `img` accumulate across calls, every other key
/// overwrites. Unknown keys leave the recipe untouched.
pub fn parse_meta<'r>(
    key: &str,
    value: &str,
    recipe: &'r mut Recipe,
) -> Result<&'r mut Recipe, MetaError> {
    let value = value.trim();

    match key.parse::<MetaKey>()? {
        MetaKey::Title => recipe.title = Some(value.to_string()),
        MetaKey::Size => recipe.size = Some(value.to_string()),
        MetaKey::Lang => recipe.lang = Some(value.to_string()),
        MetaKey::Source => recipe.source = Some(value.to_string()),
        MetaKey::Author => recipe.author = Some(value.to_string()),
        MetaKey::Desc => append_description(recipe, value),
        MetaKey::Keywords => recipe.keywords.extend(
            value
                .split(',')
                .map(str::trim)
                .filter(|keyword| !keyword.is_empty())
                .map(String::from),
        ),
        MetaKey::Img => recipe
            .images
            .get_or_insert_with(Vec::new)
            .push(value.to_string()),
    }

    Ok(recipe)
}

pub(crate) fn append_description(recipe: &mut Recipe, text: &str) {
    if text.is_empty() {
        return;
    }
    match recipe.description.as_mut() {
        Some(description) => {
            description.push(' ');
            description.push_str(text);
        }
        None => recipe.description = Some(text.to_string()),
    }
}
