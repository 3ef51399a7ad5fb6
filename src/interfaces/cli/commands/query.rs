//! Ranking, log listing and echo commands

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::QueryHandler;

pub async fn top_by_density(
    handler: &QueryHandler,
    count: i64,
    user: Option<&str>,
) -> Result<(), CliError> {
    let countries = handler
        .top_by_density(count, user)
        .await
        .map_err(|e| CliError::Command(format!("Query failed: {}", e)))?;

    if countries.is_empty() {
        println!("{} No countries returned", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Countries by population density:".bold().green());
    println!();
    for (rank, country) in countries.iter().enumerate() {
        println!(
            "  {:>3}. {} {}",
            rank + 1,
            country.name_common.cyan(),
            format!(
                "({:.2} people/km², population {}, area {} km²)",
                country.population_density, country.population, country.area
            )
            .dimmed()
        );
    }
    println!();
    println!(
        "{} Total {} countries",
        "ℹ".bold().blue(),
        countries.len().to_string().green()
    );
    Ok(())
}

pub async fn list_logs(handler: &QueryHandler) -> Result<(), CliError> {
    let entries = handler
        .list_all_log_entries()
        .await
        .map_err(|e| CliError::Command(format!("Failed to load log entries: {}", e)))?;

    if entries.is_empty() {
        println!("{} No log entries found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Request log:".bold().green());
    println!();
    for entry in &entries {
        println!(
            "  #{} {} {} {}",
            entry.id.to_string().yellow(),
            entry
                .request_timestamp
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string()
                .dimmed(),
            entry.username.cyan(),
            format!("({} countries)", entry.num_countries_returned).green()
        );
        println!("      {}", entry.countries_details.dimmed());
    }
    println!();
    println!(
        "{} Total {} log entries",
        "ℹ".bold().blue(),
        entries.len().to_string().green()
    );
    Ok(())
}

pub fn echo_text(text: Option<&str>) {
    println!("{}", text.unwrap_or(crate::services::NO_TEXT_PROVIDED));
}
