use crate::config::subsystems::SubsystemLoads;
use crate::constants::SECONDS_PER_HOUR;
use crate::models::result::SimulationResult;
use crate::models::summary::RunSummary;
use comfy_table::{presets, Cell, CellAlignment, Color, Table};

/// Console message for the depletion collaborator, `None` if the battery held.
pub fn depletion_message(result: &SimulationResult) -> Option<String> {
    result
        .depleted_at_s()
        .map(|t_s| format!("Battery depleted after {:.2} hours", t_s / SECONDS_PER_HOUR))
}

fn right(value: String) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

pub fn build_summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["Quantity", "Value"]);

    table.add_row(vec![Cell::new("Samples"), right(summary.samples.to_string())]);
    table.add_row(vec![
        Cell::new("Simulated time (h)"),
        right(format!("{:.2}", summary.simulated_s / SECONDS_PER_HOUR)),
    ]);
    table.add_row(vec![
        Cell::new("Final charge (Wh)"),
        right(format!("{:.2}", summary.final_charge_wh)),
    ]);
    table.add_row(vec![
        Cell::new("Min / max charge (Wh)"),
        right(format!("{:.2} / {:.2}", summary.min_charge_wh, summary.max_charge_wh)),
    ]);
    table.add_row(vec![
        Cell::new("Depth of discharge"),
        right(format!("{:.1} %", summary.depth_of_discharge * 100.0)),
    ]);
    table.add_row(vec![
        Cell::new("Time in eclipse (h)"),
        right(format!("{:.2}", summary.eclipse_s / SECONDS_PER_HOUR)),
    ]);
    table.add_row(vec![
        Cell::new("Curtailed solar energy (Wh)"),
        right(format!("{:.2}", summary.curtailed_wh)),
    ]);
    let depletion = match summary.depleted_at_h {
        Some(hours) => right(format!("{hours:.2} h")).fg(Color::Red),
        None => right("never".to_string()).fg(Color::Green),
    };
    table.add_row(vec![Cell::new("Depleted at"), depletion]);
    table
}

pub fn build_loads_table(loads: &SubsystemLoads) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["Subsystem", "Load (W)"]);
    for (name, watts) in loads.breakdown() {
        table.add_row(vec![Cell::new(name), right(format!("{watts:.1}"))]);
    }
    table.add_row(vec![Cell::new("Total"), right(format!("{:.1}", loads.total_w()))]);
    table
}
