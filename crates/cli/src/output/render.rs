use avgcalc_common::CalculatorState;

use super::{print_fetch_error, print_json, theme, window_table, OutputMode};

pub fn render_state(state: &CalculatorState, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => print_json(state),
        OutputMode::Human => {
            theme::print_section("Results");
            if state.window_prev_state.is_empty() && state.window_curr_state.is_empty() {
                theme::print_hint("window is empty");
            } else {
                println!("{}", window_table(&state.window_prev_state, &state.window_curr_state));
            }
            for (label, value) in describe(state) {
                theme::print_kv(label, &value);
            }
            if let Some(err) = &state.error {
                print_fetch_error(err);
            }
            Ok(())
        }
    }
}

/// Label/value rows printed under the window table.
pub(crate) fn describe(state: &CalculatorState) -> Vec<(&'static str, String)> {
    vec![
        ("Numbers", format_numbers(&state.numbers)),
        ("Average", format!("{:.2}", state.avg)),
    ]
}

pub fn format_numbers(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
