use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::model::Ingredient;

/// Amount at the start of a line, optionally preceded by up to two qualifier
/// words ("about 25", "ca. 1/2") and optionally followed by a unit glued to
/// the last digit ("25g", "1 1/2tbsp.").
static IMPLICIT_AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<amount>(?:[^\s0-9]+\s+){0,2}[0-9]+(?:\.[0-9]+|/[0-9]+|\s[0-9]+/[0-9]+)?)(?P<unit>[\p{L}.]+)?\s*(?P<name>.*)$",
    )
    .expect("amount pattern is valid")
});

/// Parse a single ingredient line into name, amount and unit.
///
/// Two notations are understood:
///
/// * explicit: `<amount> [<unit>] <name>`, where the amount may be any text
///   ("as needed [] salt") and an empty bracket means no unit;
/// * implicit: `<amount><unit> <name>`, where the unit is only recognised
///   when written directly after the number (`25g butter` vs. `4 eggs`).
///
/// Lines without a recognisable amount become a bare name. This never fails.
pub fn parse_ingredient(line: &str) -> Ingredient {
    let line = line.trim();

    let ingredient = match split_explicit(line) {
        Some(ingredient) => ingredient,
        None => split_implicit(line),
    };
    trace!("ingredient {:?} -> {:?}", line, ingredient);
    ingredient
}

fn split_explicit(line: &str) -> Option<Ingredient> {
    let open = line.find('[')?;
    let close = open + line[open..].find(']')?;

    let amount = line[..open].trim();
    let unit = line[open + 1..close].trim();
    let name = line[close + 1..].trim();

    Some(Ingredient {
        name: name.to_string(),
        amount: non_empty(amount),
        unit: non_empty(unit),
    })
}

fn split_implicit(line: &str) -> Ingredient {
    let Some(caps) = IMPLICIT_AMOUNT.captures(line) else {
        return Ingredient::new(line, None, None);
    };

    Ingredient {
        name: caps["name"].trim().to_string(),
        amount: Some(caps["amount"].to_string()),
        unit: caps.name("unit").map(|unit| unit.as_str().to_string()),
    }
}

fn non_empty(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
