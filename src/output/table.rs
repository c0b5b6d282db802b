//! Table output of discovered resources

use comfy_table::{presets::NOTHING, Table};

use crate::terraform::{ImportableResource, ResourceKind};

/// Flattened resource data for output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRow {
    pub resource_type: &'static str,
    pub terraform_id: String,
    pub remote_id: String,
}

impl From<&ImportableResource> for ResourceRow {
    fn from(resource: &ImportableResource) -> Self {
        Self {
            resource_type: resource.kind().terraform_type(),
            terraform_id: resource.terraform_id.clone(),
            remote_id: resource.id.clone(),
        }
    }
}

fn build_table(rows: &[ResourceRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Resource Type", "Terraform ID", "Remote ID"]);

    for row in rows {
        table.add_row(vec![
            row.resource_type,
            row.terraform_id.as_str(),
            row.remote_id.as_str(),
        ]);
    }
    table
}

/// Per-kind totals, in emission order, skipping kinds with no resources
fn summary(resources: &[ImportableResource]) -> String {
    let mut counts: Vec<(ResourceKind, usize)> = Vec::new();
    for resource in resources {
        let kind = resource.kind();
        match counts.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, n)) => *n += 1,
            None => counts.push((kind, 1)),
        }
    }
    counts.sort_by_key(|(kind, _)| *kind);
    counts
        .iter()
        .map(|(kind, n)| format!("{} {}", n, kind))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print discovered resources as a table
pub fn output_resources(resources: &[ImportableResource]) {
    let rows: Vec<ResourceRow> = resources.iter().map(ResourceRow::from).collect();
    println!();
    println!("{}", build_table(&rows));
    println!("\nTotal: {} resource(s)", rows.len());
    if !rows.is_empty() {
        println!("{}", summary(resources));
    }
}
