//! `vpc canvas` subcommands.

use crate::cli::{CanvasCommands, ExportFormat};
use anyhow::{bail, Context, Result};
use vpc_core::export;
use vpc_core::{Canvas, CanvasStore};

pub async fn execute(store: &dyn CanvasStore, cmd: CanvasCommands) -> Result<()> {
    match cmd {
        CanvasCommands::Save {
            name,
            customer_jobs,
            pains,
            gains,
            products_services,
            gain_creators,
            pain_relievers,
        } => {
            // Start from the existing record so unspecified fields survive
            let existing = store.load(&name).await?;
            let created = existing.is_none();
            let mut canvas = existing.unwrap_or_else(|| Canvas::new(&name));

            apply(&mut canvas.customer_jobs, customer_jobs);
            apply(&mut canvas.pains, pains);
            apply(&mut canvas.gains, gains);
            apply(&mut canvas.products_services, products_services);
            apply(&mut canvas.gain_creators, gain_creators);
            apply(&mut canvas.pain_relievers, pain_relievers);

            store.save(&canvas).await?;
            if created {
                println!("Created canvas '{}'", name);
            } else {
                println!("Updated canvas '{}'", name);
            }
        }

        CanvasCommands::Show { name } => {
            let canvas = load_required(store, &name).await?;
            println!("Canvas: {}", canvas.name);
            println!("Updated: {}", canvas.updated_at.to_rfc3339());
            println!();
            for (key, value) in canvas.fields() {
                let value = value.trim();
                println!("{}: {}", label(key), if value.is_empty() { "-" } else { value });
            }
        }

        CanvasCommands::List => {
            let summaries = store.list().await?;
            if summaries.is_empty() {
                println!("No canvases yet. Create one with `vpc canvas save <name>`.");
                return Ok(());
            }
            for summary in summaries {
                println!(
                    "{}  (updated {})",
                    summary.name,
                    summary.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }

        CanvasCommands::Delete { name } => {
            store.delete(&name).await?;
            println!("Deleted canvas '{}'", name);
        }

        CanvasCommands::Export {
            name,
            format,
            output,
        } => {
            let canvas = load_required(store, &name).await?;
            let rendered = match format {
                ExportFormat::Markdown => export::to_markdown(&canvas),
                ExportFormat::Json => export::to_json(&canvas),
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Exported canvas '{}' to {}", name, path.display());
                }
                None => println!("{}", rendered),
            }
        }
    }

    Ok(())
}

async fn load_required(store: &dyn CanvasStore, name: &str) -> Result<Canvas> {
    match store.load(name).await? {
        Some(canvas) => Ok(canvas),
        None => bail!("canvas '{}' not found", name),
    }
}

fn apply(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn label(key: &str) -> String {
    // Matches the heading used by the markdown export
    if key == "products_services" {
        return "Products & Services".to_string();
    }
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
