//! Output formatting module

use truckchat_domain::model::ReferenceTable;
use truckchat_types::{IdentityMode, OutputFormat, Result};

pub fn output_references(
    output_format: OutputFormat,
    mode: IdentityMode,
    table: &ReferenceTable,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(table)?;
        println!("{}", content);
        return Ok(());
    }

    println!("{}", format_reference_table(mode, table));
    Ok(())
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

fn format_reference_table(mode: IdentityMode, table: &ReferenceTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nKnown trucks ({})\n", table.len()));

    match mode {
        IdentityMode::Single => {
            out.push_str(&format!("{:<4} {:<30}\n", "#", "Name"));
            out.push_str(&"-".repeat(36));
            out.push('\n');
            for (i, entry) in table.entries().iter().enumerate() {
                out.push_str(&format!("{:<4} {:<30}\n", i + 1, truncate(entry.name(), 30)));
            }
        }
        IdentityMode::ManufacturerModel => {
            out.push_str(&format!(
                "{:<4} {:<18} {:<18} {:<10} {:<10} {:<12}\n",
                "#", "Manufacturer", "Model", "Class", "Cabin", "Country"
            ));
            out.push_str(&"-".repeat(76));
            out.push('\n');
            for (i, entry) in table.entries().iter().enumerate() {
                out.push_str(&format!(
                    "{:<4} {:<18} {:<18} {:<10} {:<10} {:<12}\n",
                    i + 1,
                    truncate(entry.name(), 18),
                    truncate(entry.model().unwrap_or("-"), 18),
                    truncate(&entry.class, 10),
                    truncate(&entry.cabin, 10),
                    truncate(&entry.country, 12),
                ));
            }
        }
    }

    out
}
