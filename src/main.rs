use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mealweek::{App, RecipeEdit, Settings, observability};
use recipe::{Cuisine, MealDay, MealTime, PrepTime, Recipe, RecipeId};
use std::path::PathBuf;
use std::str::FromStr;
use strum::VariantArray;

/// mealweek - weekly meal planning and shopping lists
#[derive(Parser)]
#[command(name = "mealweek")]
#[command(about = "Catalog recipes, plan the week, derive the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the recipe catalog
    #[command(subcommand)]
    Recipe(RecipeCommands),
    /// Show the current weekly plan
    Plan,
    /// Regenerate the weekly plan
    Reshuffle,
    /// Print the categorized shopping list for the current plan
    Shopping,
    /// Append recipes from a JSON export
    Import { file: PathBuf },
    /// Dump the whole catalog to a JSON file
    Export { file: PathBuf },
}

#[derive(Subcommand)]
enum RecipeCommands {
    /// Add a recipe to the catalog
    Add {
        #[arg(long)]
        title: String,
        /// Comma-separated ingredient phrases
        #[arg(long, default_value = "")]
        ingredients: String,
        #[arg(long, default_value = "")]
        instructions: String,
        /// Stored image path reference
        #[arg(long)]
        image: Option<String>,
        /// Weekday or Weekend
        #[arg(long)]
        meal_day: Option<String>,
        /// Breakfast, Lunch or Dinner
        #[arg(long)]
        meal_time: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        /// 5 min, 15 min, 30 min or >30 min
        #[arg(long)]
        prep_time: Option<String>,
    },
    /// Edit a recipe in place; omitted flags keep the current values
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Comma-separated ingredient phrases
        #[arg(long)]
        ingredients: Option<String>,
        #[arg(long)]
        instructions: Option<String>,
        /// Stored image path reference
        #[arg(long)]
        image: Option<String>,
        /// Weekday or Weekend
        #[arg(long)]
        meal_day: Option<String>,
        /// Breakfast, Lunch or Dinner
        #[arg(long)]
        meal_time: Option<String>,
        #[arg(long)]
        cuisine: Option<String>,
        /// 5 min, 15 min, 30 min or >30 min
        #[arg(long)]
        prep_time: Option<String>,
    },
    /// List catalog entries
    List,
    /// Remove a recipe by id
    Remove { id: String },
}

fn parse_tag<T: FromStr + VariantArray + std::fmt::Display>(raw: &str, name: &str) -> Result<T> {
    T::from_str(raw).map_err(|_| {
        let allowed = T::VARIANTS
            .iter()
            .map(|v| format!("\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::anyhow!("invalid {name} {raw:?}, expected one of {allowed}")
    })
}

fn parse_tag_opt<T: FromStr + VariantArray + std::fmt::Display>(
    value: Option<String>,
    name: &str,
) -> Result<Option<T>> {
    value.as_deref().map(|raw| parse_tag(raw, name)).transpose()
}

fn parse_id(raw: &str) -> RecipeId {
    match raw.parse::<i64>() {
        Ok(n) => RecipeId::Int(n),
        Err(_) => RecipeId::from(raw),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config).context("loading configuration")?;
    observability::init_observability(&settings.log_level)?;

    let mut app = App::open(&settings)?;

    match cli.command {
        Commands::Recipe(RecipeCommands::Add {
            title,
            ingredients,
            instructions,
            image,
            meal_day,
            meal_time,
            cuisine,
            prep_time,
        }) => {
            let mut recipe = Recipe::new(title);
            recipe.ingredients = ingredients;
            recipe.instructions = instructions;
            recipe.image = image;
            recipe.tags.meal_day =
                parse_tag_opt::<MealDay>(meal_day, "meal day")?.unwrap_or_default();
            recipe.tags.meal_time =
                parse_tag_opt::<MealTime>(meal_time, "meal time")?.unwrap_or_default();
            recipe.tags.cuisine = parse_tag_opt::<Cuisine>(cuisine, "cuisine")?.unwrap_or_default();
            recipe.tags.prep_time =
                parse_tag_opt::<PrepTime>(prep_time, "prep time")?.unwrap_or_default();
            let id = recipe.id.clone();
            app.add_recipe(recipe)?;
            println!("added recipe {id}");
        }
        Commands::Recipe(RecipeCommands::Edit {
            id,
            title,
            ingredients,
            instructions,
            image,
            meal_day,
            meal_time,
            cuisine,
            prep_time,
        }) => {
            let edit = RecipeEdit {
                title,
                ingredients,
                instructions,
                image,
                meal_day: parse_tag_opt::<MealDay>(meal_day, "meal day")?,
                meal_time: parse_tag_opt::<MealTime>(meal_time, "meal time")?,
                cuisine: parse_tag_opt::<Cuisine>(cuisine, "cuisine")?,
                prep_time: parse_tag_opt::<PrepTime>(prep_time, "prep time")?,
            };
            let id = parse_id(&id);
            app.edit_recipe(&id, edit)?;
            println!("updated recipe {id}");
        }
        Commands::Recipe(RecipeCommands::List) => {
            for recipe in app.catalog().recipes() {
                println!(
                    "{}  {}  [{} {} {} {}]",
                    recipe.id,
                    recipe.title,
                    recipe.tags.meal_day,
                    recipe.tags.meal_time,
                    recipe.tags.cuisine,
                    recipe.tags.prep_time
                );
            }
        }
        Commands::Recipe(RecipeCommands::Remove { id }) => {
            let id = parse_id(&id);
            app.remove_recipe(&id)?;
            println!("removed recipe {id}");
        }
        Commands::Plan => {
            for (day, slots) in app.plan().days() {
                println!("{day}");
                for &meal in &mealplan::MEAL_SLOTS {
                    let title = slots.slot(meal).map(|r| r.title.as_str()).unwrap_or("-");
                    println!("  {meal:<9} {title}");
                }
            }
        }
        Commands::Reshuffle => {
            app.reshuffle()?;
            println!("weekly plan reshuffled");
        }
        Commands::Shopping => {
            for (category, items) in app.shopping_list().categories() {
                println!("{category}");
                for item in items {
                    println!("  {item}");
                }
            }
        }
        Commands::Import { file } => {
            let count = app.import_from(&file)?;
            println!("imported {count} recipes");
        }
        Commands::Export { file } => {
            let count = app.export_to(&file)?;
            println!("exported {count} recipes");
        }
    }

    Ok(())
}
