//! Output formatting for organization members

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use serde_json::Value;

use super::common::escape_csv;
use crate::cli::OutputFormat;
use crate::github::Member;

/// Output organization members in the requested format
pub fn output_members(
    members: &[(String, Member)],
    format: OutputFormat,
    no_header: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Json => render_json(members)?,
        OutputFormat::Csv => render_csv(members, no_header),
        OutputFormat::Table => render_table(members, no_header),
    };
    println!("{}", rendered);
    Ok(())
}

/// Raw member records with the organization they were listed from
fn render_json(members: &[(String, Member)]) -> Result<String, serde_json::Error> {
    let output = members
        .iter()
        .map(|(org, m)| {
            let mut record = serde_json::to_value(m)?;
            if let Value::Object(ref mut map) = record {
                map.insert("organization".to_string(), Value::String(org.clone()));
            }
            Ok(record)
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()?;
    serde_json::to_string_pretty(&output)
}

fn render_csv(members: &[(String, Member)], no_header: bool) -> String {
    let mut lines = Vec::with_capacity(members.len() + 1);
    if !no_header {
        lines.push("organization,login,id,type,site_admin,html_url".to_string());
    }
    for (org, m) in members {
        lines.push(format!(
            "{},{},{},{},{},{}",
            escape_csv(org),
            escape_csv(m.login()),
            id_text(m),
            escape_csv(m.account_type()),
            m.is_site_admin(),
            escape_csv(m.html_url())
        ));
    }
    lines.join("\n")
}

fn render_table(members: &[(String, Member)], no_header: bool) -> String {
    if members.is_empty() {
        return "No organization members found".to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    if !no_header {
        table.set_header(vec![
            Cell::new("ORGANIZATION"),
            Cell::new("LOGIN"),
            Cell::new("ID"),
            Cell::new("TYPE"),
            Cell::new("SITE ADMIN"),
            Cell::new("URL"),
        ]);
    }

    for (org, m) in members {
        table.add_row(vec![
            Cell::new(org),
            Cell::new(m.login()),
            Cell::new(id_text(m)),
            Cell::new(m.account_type()),
            Cell::new(if m.is_site_admin() { "yes" } else { "no" }),
            Cell::new(m.html_url()),
        ]);
    }

    table.to_string()
}

/// Numeric id, blank when the record has none
fn id_text(member: &Member) -> String {
    member.id().map(|id| id.to_string()).unwrap_or_default()
}
