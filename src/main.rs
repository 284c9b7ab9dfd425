use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use log::{debug, error};
use recipemark::config::{OutputFormat, Settings};
use recipemark::{parse_path, parse_reader, Error, Recipe};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("recipemark: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    debug!("{:?}", settings);

    // Read stdin when no file is given
    let mut inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs.push("-".to_string());
    }

    let mut recipes = Vec::new();
    for input in &inputs {
        let parsed = read_recipes(input).map_err(|e| format!("{}: {}", input, e))?;
        debug!("{}: {} recipes", input, parsed.len());
        recipes.extend(parsed);
    }

    let output = render(&recipes, &settings)?;
    writeln!(io::stdout().lock(), "{}", output)?;
    Ok(())
}

fn read_recipes(input: &str) -> Result<Vec<Recipe>, Error> {
    if input == "-" {
        parse_reader(io::stdin().lock())
    } else {
        parse_path(input)
    }
}

fn render(recipes: &[Recipe], settings: &Settings) -> Result<String, Error> {
    Ok(match settings.output.format {
        OutputFormat::Json if settings.output.pretty => serde_json::to_string_pretty(recipes)?,
        OutputFormat::Json => serde_json::to_string(recipes)?,
        OutputFormat::Debug if settings.output.pretty => format!("{:#?}", recipes),
        OutputFormat::Debug => format!("{:?}", recipes),
    })
}
