//! Interactive management mode.
//!
//! A terminal menu over the same `VisitorRegistry` the HTTP API uses; no SQL
//! lives here.

use anyhow::Result;
use database::{DbError, Visitor, VisitorRegistry};
use dialoguer::{Confirm, Input, Select};

pub async fn run(registry: VisitorRegistry) -> Result<()> {
    loop {
        let choice = Select::new()
            .with_prompt("Gatekeeper management")
            .items(&["List plates", "Add plate", "Remove plate", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => list_plates(&registry).await?,
            1 => add_plate(&registry).await?,
            2 => remove_plate(&registry).await?,
            _ => return Ok(()),
        }
    }
}

async fn list_plates(registry: &VisitorRegistry) -> Result<()> {
    let visitors = registry.list_visitors(None).await?;
    if visitors.is_empty() {
        println!("No plates registered.");
        return Ok(());
    }
    for Visitor { name, plate } in visitors {
        println!("{plate}  {name}");
    }
    Ok(())
}

async fn add_plate(registry: &VisitorRegistry) -> Result<()> {
    let name: String = Input::new().with_prompt("Name").interact_text()?;
    let plate: String = Input::new().with_prompt("Plate").interact_text()?;
    let visitor = Visitor { name, plate };

    if registry.exists_by_plate(&visitor.plate).await? {
        let current = registry
            .list_visitors(Some(&visitor.plate))
            .await?
            .into_iter()
            .next()
            .map(|v| v.name)
            .unwrap_or_default();

        let overwrite = Confirm::new()
            .with_prompt(format!(
                "Plate {} is already registered to {}; overwrite?",
                visitor.plate, current
            ))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Plate {} left unchanged.", visitor.plate);
            return Ok(());
        }

        registry.upsert(&visitor).await?;
        println!(
            "Plate {} is now registered to {}.",
            visitor.plate, visitor.name
        );
        return Ok(());
    }

    match registry.insert(&visitor).await {
        Ok(()) => println!("Plate {} added for {}.", visitor.plate, visitor.name),
        // Someone grabbed the plate between the check and the insert.
        Err(DbError::DuplicatePlate(plate)) => {
            println!("Plate {plate} was registered concurrently; nothing changed.");
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

async fn remove_plate(registry: &VisitorRegistry) -> Result<()> {
    let plate: String = Input::new().with_prompt("Plate").interact_text()?;

    let confirmed = Confirm::new()
        .with_prompt(format!("Remove plate {plate}?"))
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(());
    }

    if registry.delete_by_plate(&plate).await? == 0 {
        println!("Plate {plate} is not in the registry.");
    } else {
        println!("Plate {plate} removed.");
    }
    Ok(())
}
