use mealweek::{App, RecipeEdit, Settings};
use recipe::{MealDay, MealTime, PrepTime, Recipe, RecipeId};
use temp_dir::TempDir;

fn settings_in(dir: &TempDir) -> Settings {
    Settings {
        data_dir: dir.path().join("data"),
        log_level: "warn".to_string(),
    }
}

fn tagged(title: &str, meal_time: MealTime, meal_day: MealDay) -> Recipe {
    let mut recipe = Recipe::new(title);
    recipe.tags.meal_time = meal_time;
    recipe.tags.meal_day = meal_day;
    recipe
}

/// Adding or removing a recipe changes the catalog size and regenerates the
/// plan; an in-place edit leaves the current plan untouched, stale copies
/// and all.
#[test]
fn plan_regenerates_on_size_change_only() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(&settings_in(&dir)).unwrap();

    app.add_recipe(tagged("Congee", MealTime::Lunch, MealDay::Weekday))
        .unwrap();
    // Sole weekday lunch: every weekday slot must now hold it.
    let plan = app.plan().clone();
    assert_eq!(
        plan.monday.lunch.as_ref().unwrap().title,
        "Congee"
    );

    // Content edit: same size, plan keeps the pre-edit copy.
    let mut edited = plan.monday.lunch.clone().unwrap();
    edited.title = "Rice porridge".to_string();
    app.update_recipe(edited).unwrap();
    assert_eq!(app.plan(), &plan);
    assert_eq!(app.plan().monday.lunch.as_ref().unwrap().title, "Congee");

    // Size change: the whole week regenerates against the current catalog.
    app.add_recipe(tagged("Omelette", MealTime::Breakfast, MealDay::Weekday))
        .unwrap();
    assert_eq!(
        app.plan().monday.breakfast.as_ref().unwrap().title,
        "Omelette"
    );
    assert_eq!(
        app.plan().monday.lunch.as_ref().unwrap().title,
        "Rice porridge"
    );
}

/// An in-place edit overrides only the supplied fields, keeps the id, and
/// leaves the current plan alone (no size change).
#[test]
fn edit_recipe_overrides_only_supplied_fields() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(&settings_in(&dir)).unwrap();

    let mut recipe = tagged("Fried rice", MealTime::Lunch, MealDay::Weekday);
    recipe.ingredients = "2 cups rice, 1 egg".to_string();
    let id = recipe.id.clone();
    app.add_recipe(recipe).unwrap();
    let plan = app.plan().clone();

    app.edit_recipe(
        &id,
        RecipeEdit {
            title: Some("Kimchi fried rice".to_string()),
            prep_time: Some(PrepTime::Min15),
            ..RecipeEdit::default()
        },
    )
    .unwrap();

    let edited = app.catalog().get(&id).unwrap();
    assert_eq!(edited.title, "Kimchi fried rice");
    assert_eq!(edited.tags.prep_time, PrepTime::Min15);
    // Untouched fields survive.
    assert_eq!(edited.ingredients, "2 cups rice, 1 egg");
    assert_eq!(edited.tags.meal_time, MealTime::Lunch);
    assert_eq!(app.catalog().len(), 1);
    // Same size: the plan keeps its pre-edit copy.
    assert_eq!(app.plan(), &plan);

    assert!(
        app.edit_recipe(&RecipeId::from("no-such-id"), RecipeEdit::default())
            .is_err()
    );
}

/// State survives a restart: catalog and plan reload from the store.
#[test]
fn state_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let settings = settings_in(&dir);

    let plan = {
        let mut app = App::open(&settings).unwrap();
        app.add_recipe(tagged("Stew", MealTime::Dinner, MealDay::Weekend))
            .unwrap();
        app.plan().clone()
    };

    let app = App::open(&settings).unwrap();
    assert_eq!(app.catalog().len(), 1);
    assert_eq!(app.plan(), &plan);
    assert_eq!(
        app.plan().saturday.dinner.as_ref().unwrap().title,
        "Stew"
    );
}

/// Export then import: N recipes become N + N, originals preserved exactly.
#[test]
fn export_import_appends_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(&settings_in(&dir)).unwrap();

    app.add_recipe(tagged("Tacos", MealTime::Dinner, MealDay::Weekday))
        .unwrap();
    app.add_recipe(tagged("Granola", MealTime::Breakfast, MealDay::Weekend))
        .unwrap();
    let originals = app.catalog().recipes().to_vec();

    let file = dir.path().join("recipes.json");
    assert_eq!(app.export_to(&file).unwrap(), 2);
    assert_eq!(app.import_from(&file).unwrap(), 2);

    assert_eq!(app.catalog().len(), 4);
    assert_eq!(&app.catalog().recipes()[..2], &originals[..]);
    assert_eq!(&app.catalog().recipes()[2..], &originals[..]);
}

/// A bad import document is rejected atomically; nothing is appended.
#[test]
fn failed_import_leaves_catalog_untouched() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(&settings_in(&dir)).unwrap();
    app.add_recipe(tagged("Soup", MealTime::Lunch, MealDay::Weekend))
        .unwrap();

    let file = dir.path().join("broken.json");
    std::fs::write(&file, "[{\"title\": ").unwrap();
    assert!(app.import_from(&file).is_err());
    assert_eq!(app.catalog().len(), 1);
}

/// The shopping list is derived from the live plan on every call.
#[test]
fn shopping_list_reflects_the_current_plan() {
    let dir = TempDir::new().unwrap();
    let mut app = App::open(&settings_in(&dir)).unwrap();

    let mut recipe = tagged("Stir fry", MealTime::Dinner, MealDay::Weekday);
    recipe.ingredients = "soy sauce, broccoli, 2 cups rice".to_string();
    app.add_recipe(recipe).unwrap();

    let list = app.shopping_list();
    assert_eq!(list.sauce, ["soy sauce"]);
    assert_eq!(list.veggies, ["broccoli"]);
    assert_eq!(list.grain, ["2 cups rice"]);
    assert_eq!(app.shopping_list(), list);
}
