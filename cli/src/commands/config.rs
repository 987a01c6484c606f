use crate::utils::settings::Settings;
use anyhow::Result;
use authz::config::AuthorizerConfig;
use colored::*;

/// Show the effective authorizer configuration with the token redacted
pub fn show(settings: &Settings, format: String) -> Result<()> {
    let redacted = settings.config.redacted();

    match format.as_str() {
        "json" => {
            let json_output = serde_json::to_string_pretty(&redacted)?;
            println!("{}", json_output);
        }
        "yaml" => {
            let yaml_output = serde_yaml::to_string(&redacted)?;
            println!("{}", yaml_output);
        }
        _ => {
            print_config_text(&settings.source_label(), &redacted);
        }
    }

    Ok(())
}

/// Print the configuration in a formatted text output
fn print_config_text(source: &str, config: &AuthorizerConfig) {
    println!("{}", "=== Authorizer Configuration ===".bold());
    println!();
    println!("{}: {}", "Source".bold(), source.green());
    println!();
    println!("  {}: {}", "reference_token".cyan(), config.reference_token);
    println!("  {}: {}", "principal_id".cyan(), config.principal_id.yellow());

    if config.roles.is_empty() {
        println!("  {}: {}", "roles".cyan(), "(none)".dimmed());
    } else {
        println!("  {}:", "roles".cyan());
        for role in &config.roles {
            println!("    - {}", role.magenta());
        }
    }

    println!();
    println!("{}", format!("Total roles: {}", config.roles.len()).green());
}
