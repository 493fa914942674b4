//! Write a default configuration file
//!
//! Points the tracker at the local store and the default snapshot path.

use std::fs::File;
use std::path::Path;

use colored::Colorize;
use dialoguer::Confirm;

use crate::configuration::{Settings, CONFIGURATION_FILE};
use crate::error::AppError as Error;

pub fn init() -> Result<(), Error> {
    let path = Path::new(CONFIGURATION_FILE);

    if path.exists() && !confirm_overwrite()? {
        println!("Aborting");
        return Ok(());
    }

    let file = File::create(path)?;
    serde_yaml::to_writer(file, &Settings::default())?;
    println!("Wrote {}", CONFIGURATION_FILE.bold());

    Ok(())
}

fn confirm_overwrite() -> Result<bool, Error> {
    println!(
        "{} {} {}",
        "WARNING".red(),
        CONFIGURATION_FILE.bold(),
        "already exists and will be replaced"
    );
    let confirmation = Confirm::new()
        .with_prompt("Do you want to continue?")
        .interact()?;

    Ok(confirmation)
}
