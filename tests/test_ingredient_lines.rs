use recipemark::{parse_ingredient, Ingredient};

#[test]
fn test_lines_without_digits_or_brackets_are_bare_names() {
    let lines = [
        "diced onion",
        "  salt  ",
        "a pinch of nutmeg",
        "fresh parsley, chopped",
        "½ lemon",
    ];

    for line in lines {
        let ingredient = parse_ingredient(line);
        assert_eq!(ingredient, Ingredient::new(line.trim(), None, None), "{:?}", line);
    }
}

#[test]
fn test_glued_letters_are_units() {
    let cases = [
        ("500g flour", "500", "g", "flour"),
        ("2cups milk", "2", "cups", "milk"),
        ("1.5l water", "1.5", "l", "water"),
        ("3/4tsp. salt", "3/4", "tsp.", "salt"),
        ("2 1/4cups flour", "2 1/4", "cups", "flour"),
    ];

    for (line, amount, unit, name) in cases {
        assert_eq!(
            parse_ingredient(line),
            Ingredient::new(name, Some(amount), Some(unit)),
            "{:?}",
            line
        );
    }
}

#[test]
fn test_separated_letters_are_never_units() {
    let cases = [
        ("4 eggs", "4", "eggs"),
        ("500 g flour", "500", "g flour"),
        ("1.5 l water", "1.5", "l water"),
        ("2 1/4 cups flour", "2 1/4", "cups flour"),
    ];

    for (line, amount, name) in cases {
        assert_eq!(
            parse_ingredient(line),
            Ingredient::new(name, Some(amount), None),
            "{:?}",
            line
        );
    }
}

#[test]
fn test_bracket_notation() {
    let cases = [
        ("about 25 [g] butter", Some("about 25"), Some("g"), "butter"),
        ("about 25[g]butter", Some("about 25"), Some("g"), "butter"),
        ("1 [ heaped tbsp. ] sugar", Some("1"), Some("heaped tbsp."), "sugar"),
        ("as needed [] salt", Some("as needed"), None, "salt"),
        ("[pinch] saffron", None, Some("pinch"), "saffron"),
        ("some [  ] cheese", Some("some"), None, "cheese"),
    ];

    for (line, amount, unit, name) in cases {
        assert_eq!(
            parse_ingredient(line),
            Ingredient::new(name, amount, unit),
            "{:?}",
            line
        );
    }
}

#[test]
fn test_brackets_take_precedence_over_glued_units() {
    assert_eq!(
        parse_ingredient("25g [pack] yeast"),
        Ingredient::new("yeast", Some("25g"), Some("pack"))
    );
}
