use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use recipe_suggest::{
    load_config, suggest_recipes, DietaryPreference, ProviderFactory, Recipe, RecipeQuery,
};

#[derive(Parser)]
#[command(name = "recipe-suggest")]
#[command(about = "Suggest a quick Indian recipe from the ingredients you have", long_about = None)]
struct Cli {
    /// What you are in the mood for, e.g. "a spicy, quick dinner"
    #[arg(long, short, default_value = "")]
    prompt: String,

    /// Ingredients, comma separated: "Tomato, onion, paneer"
    #[arg(long, short, default_value = "")]
    ingredients: String,

    /// None, Vegetarian, Vegan, Gluten-Free or Low-Carb
    #[arg(long, short, default_value = "None")]
    diet: String,

    /// Maximum preparation time in minutes (5 to 120)
    #[arg(long, short = 't', default_value_t = 15)]
    max_time: u32,

    /// Provider kind, overriding the configured one (gemini or endpoint)
    #[arg(long)]
    provider: Option<String>,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print recipes as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Save the first recipe as a text document
    #[arg(long)]
    save: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Configuration problems, including a missing API key, stop us before any input is used
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(name) = &cli.provider {
        config.provider.kind = ProviderFactory::kind_from_name(name)?;
    }
    let provider = ProviderFactory::from_config(&config)?;
    debug!("Using provider {}", provider.provider_name());

    let diet: DietaryPreference = cli.diet.parse()?;
    let query = RecipeQuery::builder()
        .prompt(cli.prompt)
        .ingredients_text(&cli.ingredients)
        .dietary_preference(diet)
        .max_prep_minutes(cli.max_time)
        .build()?;

    if !cli.json {
        print_query(&query);
    }

    let suggestions = suggest_recipes(provider.as_ref(), &query).await;
    if let Some(error) = &suggestions.error {
        eprintln!("Could not get a recipe: {}", error);
        eprintln!("No recipe found. Please try again.");
        return Ok(ExitCode::FAILURE);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&suggestions.recipes)?);
    } else {
        print_recipes(&suggestions.recipes);
    }

    if let Some(path) = &cli.save {
        match suggestions.recipes.first() {
            Some(recipe) => {
                tokio::fs::write(path, recipe.to_text()).await?;
                info!("Saved recipe to {}", path.display());
                if !cli.json {
                    println!("Recipe saved to {}", path.display());
                }
            }
            None => eprintln!("Nothing to save: the provider returned no recipes"),
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_query(query: &RecipeQuery) {
    println!("### Your Input:");
    println!("Prompt: {}", query.prompt());
    println!("Ingredients: {}", query.ingredients().join(", "));
    println!("Dietary Preference: {}", query.dietary_preference());
    println!("Max Prep Time: {} minutes", query.max_prep_minutes());
    println!();
}

fn print_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipe found. Please try again.");
        return;
    }

    println!("### Suggested Recipe:");
    for recipe in recipes {
        println!();
        print!("{}", recipe.to_text());
    }
}
