use log::debug;
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err("Please provide a food idea as an argument".into());
    }
    let idea = args[1..].join(" ");

    let recipe = recipe_gen::generate_recipe(&idea).await?;
    debug!(
        "{} ingredients, {} steps",
        recipe.ingredients.len(),
        recipe.steps.len()
    );

    println!("Ingredients:");
    for item in &recipe.ingredients {
        println!("  ☐ {}", item.text);
    }
    println!();
    println!("Steps:");
    for (index, item) in recipe.steps.iter().enumerate() {
        println!("  {}. {}", index + 1, item.text);
    }

    Ok(())
}
