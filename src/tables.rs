use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::sensor::{DeviceClass, SensorState};

pub fn build_sensor_table(states: &[SensorState]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec!["Sensor", "Value", "Unit", "Class", "Updated", "ID"]);
    for state in states {
        let value = state.value.map_or_else(|| "-".to_owned(), |value| format!("{value:.1}"));
        table.add_row(vec![
            Cell::new(&state.name),
            Cell::new(value).set_alignment(CellAlignment::Right).fg(if state.available {
                match state.device_class {
                    DeviceClass::Power => Color::Yellow,
                    DeviceClass::Energy => Color::Green,
                }
            } else {
                Color::Red
            }),
            Cell::new(&state.unit_of_measurement),
            Cell::new(state.state_class).add_attribute(Attribute::Dim),
            Cell::new(state.last_updated.map_or_else(String::new, |last_updated| {
                last_updated.format("%H:%M:%S").to_string()
            }))
            .add_attribute(Attribute::Dim),
            Cell::new(&state.unique_id).add_attribute(Attribute::Dim),
        ]);
    }
    table
}
