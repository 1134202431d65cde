//! Terminal rendering of assessments.
//!
//! The engine returns full precision; values are rounded here for display
//! only (slope, threshold and hazard ratio to 2 decimals, years to 1).

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gfr_core::hazard::{CHRONIC_SLOPE_MODEL, HR_MAX, HR_MIN, TOTAL_SLOPE_MODEL};
use gfr_core::threshold::{ALL_KEYS, ALL_STUDY_SIZES, threshold};
use gfr_model::{Assessment, RiskLevel, ValidationErrors};

/// Renders a successful assessment as sectioned tables.
pub fn render_assessment(assessment: &Assessment) -> String {
    let slope = &assessment.slope;
    let interpretation = &assessment.interpretation;
    let prognosis = &assessment.prognosis;
    let context = &assessment.context;

    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    apply_table_style(&mut table);

    table.add_row(vec![
        label_cell("GFR slope"),
        Cell::new(format!("{:.2} ml/min/1.73m²/yr", slope.value)).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![label_cell("Slope type"), Cell::new(&slope.label)]);
    table.add_row(vec![
        label_cell("Progression rate"),
        Cell::new(prognosis.progression_rate.label()),
    ]);
    table.add_row(vec![
        label_cell("Assessment"),
        risk_cell(&interpretation.assessment, interpretation.risk_level),
    ]);
    table.add_row(vec![
        label_cell("Probability"),
        Cell::new(format!("{}%", interpretation.benefit_probability_percent)),
    ]);
    table.add_row(vec![
        label_cell("Hazard ratio"),
        Cell::new(format!("{:.2}", interpretation.hazard_ratio)),
    ]);
    table.add_row(vec![
        label_cell("Risk level"),
        risk_cell(interpretation.risk_level.as_str(), interpretation.risk_level),
    ]);
    table.add_row(vec![
        label_cell("Threshold applied"),
        Cell::new(format!(
            "{:.2} ml/min/1.73m²/yr ({})",
            interpretation.threshold_used,
            interpretation.threshold_key.label()
        )),
    ]);
    table.add_row(vec![
        label_cell("Baseline GFR"),
        Cell::new(format!("{} ml/min/1.73m²", context.baseline_gfr)),
    ]);
    table.add_row(vec![
        label_cell("Current GFR"),
        Cell::new(format!("{} ml/min/1.73m²", context.current_gfr)),
    ]);
    table.add_row(vec![
        label_cell("Follow-up period"),
        Cell::new(format!("{} years", context.time_interval_years)),
    ]);
    if let Some(age_group) = context.age_group {
        table.add_row(vec![label_cell("Age group"), Cell::new(age_group.label())]);
    }
    table.add_row(vec![
        label_cell("Population"),
        Cell::new(context.population.label()),
    ]);
    table.add_row(vec![
        label_cell("Est. years to ESKD"),
        Cell::new(prognosis.years_to_end_stage.to_string()),
    ]);
    format!("{table}")
}

/// Renders field-level validation failures.
pub fn render_validation_errors(errors: &ValidationErrors) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Problem")]);
    apply_table_style(&mut table);
    for (field, message) in errors.iter() {
        table.add_row(vec![
            Cell::new(field.as_str()).fg(Color::Cyan),
            Cell::new(message).fg(Color::Red),
        ]);
    }
    format!("{table}")
}

/// Threshold table rows: key label followed by large, modest and infinite
/// values at 2 decimals.
pub fn threshold_rows() -> Vec<[String; 4]> {
    ALL_KEYS
        .iter()
        .map(|key| {
            let [large, modest, infinite] =
                ALL_STUDY_SIZES.map(|size| format!("{:.2}", threshold(*key, size)));
            [key.label().to_string(), large, modest, infinite]
        })
        .collect()
}

/// Renders the threshold table and hazard ratio coefficients.
pub fn render_thresholds() -> String {
    let mut thresholds = Table::new();
    let mut header = vec![header_cell("Slope / follow-up")];
    header.extend(ALL_STUDY_SIZES.iter().map(|size| header_cell(size.label())));
    thresholds.set_header(header);
    apply_table_style(&mut thresholds);
    for row in threshold_rows() {
        thresholds.add_row(row.to_vec());
    }
    for index in 1..=3 {
        align_column(&mut thresholds, index, CellAlignment::Right);
    }

    let mut models = Table::new();
    models.set_header(vec![
        header_cell("Slope type"),
        header_cell("Intercept"),
        header_cell("Coefficient"),
    ]);
    apply_table_style(&mut models);
    for (name, model) in [("Total", TOTAL_SLOPE_MODEL), ("Chronic", CHRONIC_SLOPE_MODEL)] {
        models.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:.2}", model.intercept)),
            Cell::new(format!("{:.2}", model.coefficient)),
        ]);
    }
    align_column(&mut models, 1, CellAlignment::Right);
    align_column(&mut models, 2, CellAlignment::Right);

    format!(
        "Benefit thresholds (ml/min/1.73m²/yr, 97.5% PPV):\n{thresholds}\n\n\
         Hazard ratio = exp(intercept + coefficient × |slope|), clamped to [{HR_MIN}, {HR_MAX}]:\n{models}"
    )
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
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

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn risk_cell(text: &str, level: RiskLevel) -> Cell {
    let color = match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Moderate => Color::Yellow,
        RiskLevel::High => Color::Red,
    };
    Cell::new(text).fg(color)
}
