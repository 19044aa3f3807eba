use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nogo_model::{ClassificationResult, NoGoList, Verdict};
use nogo_reference::CategorizeSummary;

pub fn print_classification(result: &ClassificationResult) {
    println!("Verdict: {}", verdict_label(result.verdict));
    println!("Reason: {}", result.reason);
    if result.token_matches.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("No-go ingredient"),
        header_cell("Category"),
        header_cell("Score"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (token, matches) in &result.token_matches {
        for record in matches {
            table.add_row(vec![
                Cell::new(token),
                Cell::new(&record.nogo_name).fg(Color::Red),
                Cell::new(&record.category),
                Cell::new(record.score),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_reference_list(list: &NoGoList, category: Option<&str>) {
    if let Some(source) = &list.source {
        println!("Source: {source}");
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Ingredient"),
        header_cell("Normalized"),
        header_cell("Category"),
    ]);
    apply_table_style(&mut table);
    for entry in list.sorted_entries(category) {
        table.add_row(vec![
            Cell::new(&entry.original_name),
            dim_cell(&entry.normalized_name),
            Cell::new(&entry.category),
        ]);
    }
    println!("{table}");

    let counts = list.category_counts(category);
    let mut totals = Table::new();
    totals.set_header(vec![header_cell("Category"), header_cell("Entries")]);
    apply_table_style(&mut totals);
    align_column(&mut totals, 1, CellAlignment::Right);
    for (name, count) in &counts {
        totals.add_row(vec![Cell::new(name), Cell::new(count)]);
    }
    totals.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(counts.values().sum::<usize>()).add_attribute(Attribute::Bold),
    ]);
    println!("{totals}");
    if category.is_some() {
        println!("Entries in list: {}", list.len());
    }
}

pub fn print_categorize_summary(summary: &CategorizeSummary) {
    println!("Total ingredients processed: {}", summary.total);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Count"),
        header_cell("Examples"),
        header_cell("Normalized example"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, stats) in &summary.categories {
        table.add_row(vec![
            Cell::new(category),
            Cell::new(stats.count),
            Cell::new(stats.examples.join(", ")),
            dim_cell(stats.normalized_example.as_deref().unwrap_or("-")),
        ]);
    }
    println!("{table}");

    if !summary.uncategorized.is_empty() {
        println!("Uncategorized: {}", summary.uncategorized.len());
        for name in summary.uncategorized.iter().take(10) {
            println!("  - {name}");
        }
        if summary.uncategorized.len() > 10 {
            println!("  ... and {} more", summary.uncategorized.len() - 10);
        }
    }
    println!("Output: {}", summary.output.display());
    println!("Debug output: {}", summary.debug_output.display());
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn verdict_label(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Unavailable => "Error (checker unavailable)",
        other => other.as_str(),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
