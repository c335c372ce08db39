//! src/main.rs
//! Prints the action identifier contract, or resolves a single token.

use std::io::{self, Write};

use anyhow::{Context, Result, bail};
use tracing::{error, info};

use cashflow_actions::{
    ActionRegistry,
    config::{Config, ExportFormat},
    logging::init_logging_with_config,
    model::action_registry::RegistryEntry,
};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Table(ExportFormat),
    Resolve(String, ExportFormat),
}

fn parse_args<I>(args: I, default_format: ExportFormat) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut format = default_format;
    let mut token = None;

    for arg in args {
        if arg == "--json" {
            format = ExportFormat::Json;
        } else if arg == "--plain" {
            format = ExportFormat::Plain;
        } else if arg.starts_with("--") {
            bail!("Unknown flag: {arg}");
        } else if token.is_some() {
            bail!("Expected at most one action type, got {arg:?} as well");
        } else {
            token = Some(arg);
        }
    }

    Ok(match token {
        Some(token) => Command::Resolve(token, format),
        None => Command::Table(format),
    })
}

fn render(rows: &[RegistryEntry], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Plain => Ok(rows
            .iter()
            .map(|row| format!("{row}\n"))
            .collect::<String>()),
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(rows)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::load()
        .await
        .context("Failed to load configuration")?;

    let _guard = init_logging_with_config(config.logging.clone())
        .await
        .context("Failed to initialize logging")?;
    info!("Starting cashflow-actions");

    let registry = ActionRegistry::global();
    if config.registry.verify_on_startup {
        registry
            .verify()
            .context("Action registry failed its self-check")?;
    }

    let command = parse_args(std::env::args().skip(1), config.registry.export_format)?;

    let output = match command {
        Command::Table(format) => render(&registry.to_table(), format)?,
        Command::Resolve(token, format) => {
            let kind = registry.resolve(&token).inspect_err(|e| error!("{e}"))?;
            render(&[RegistryEntry::from(kind)], format)?
        }
    };

    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .context("Failed to write to stdout")?;

    info!("cashflow-actions exited cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashflow_actions::ActionType;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_defaults_to_table() {
        let command = parse_args(args(&[]), ExportFormat::Plain).unwrap();
        assert_eq!(command, Command::Table(ExportFormat::Plain));

        let command = parse_args(args(&["--json"]), ExportFormat::Plain).unwrap();
        assert_eq!(command, Command::Table(ExportFormat::Json));
    }

    #[test]
    fn test_parse_resolve() {
        let command = parse_args(args(&["LOAD_USER"]), ExportFormat::Plain).unwrap();
        assert_eq!(
            command,
            Command::Resolve("LOAD_USER".to_string(), ExportFormat::Plain)
        );
    }

    #[test]
    fn test_parse_resolve_honours_format_flag() {
        let command = parse_args(args(&["--json", "LOAD_USER"]), ExportFormat::Plain).unwrap();
        assert_eq!(
            command,
            Command::Resolve("LOAD_USER".to_string(), ExportFormat::Json)
        );

        let command = parse_args(args(&["LOAD_USER", "--plain"]), ExportFormat::Json).unwrap();
        assert_eq!(
            command,
            Command::Resolve("LOAD_USER".to_string(), ExportFormat::Plain)
        );

        let Command::Resolve(token, format) =
            parse_args(args(&["--json", "LOAD_USER"]), ExportFormat::Plain).unwrap()
        else {
            panic!("expected a resolve command");
        };
        let kind = ActionRegistry::global().resolve(&token).unwrap();
        let out = render(&[RegistryEntry::from(kind)], format).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!([{ "name": "LOAD_USER", "category": "app", "phase": "requested" }])
        );
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        assert!(parse_args(args(&["LOAD_USER", "LOAD_USER_FAIL"]), ExportFormat::Plain).is_err());
        assert!(parse_args(args(&["--yaml"]), ExportFormat::Plain).is_err());
    }

    #[test]
    fn test_render_plain() {
        let rows = [
            RegistryEntry::from(ActionType::LoadUser),
            RegistryEntry::from(ActionType::SetAppTitle),
        ];

        let out = render(&rows, ExportFormat::Plain).unwrap();
        assert_eq!(out, "LOAD_USER\tApp\trequested\nSET_APP_TITLE\tApp\tevent\n");
    }

    #[test]
    fn test_render_json() {
        let rows = ActionRegistry::global().to_table();
        let out = render(&rows, ExportFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 30);
        assert_eq!(items[0]["name"], "LOAD_USER");
        assert_eq!(items[29]["name"], "NEW_EXPENSE_SUBMIT_FAIL");
        assert_eq!(items[29]["category"], "new_expense");
    }
}
