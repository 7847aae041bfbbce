//! Text rendering for plan structures: aligned tables plus summary lines.

use loadplan_core::{DropPlan, LadderPlan, RampPlan};

/// Format a weight without trailing zeros: `85`, `62.5`, `-37.25`.
pub fn fmt_kg(x: f64) -> String {
    let s = format!("{x:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Render a ladder plan. The EXTERNAL column appears only for
/// bodyweight-relative ladders.
pub fn render_ladder(plan: &LadderPlan, bodyweight_relative: bool) -> String {
    if plan.sets.is_empty() {
        return "No plan: daily max and increment must be non-zero finite numbers.\n".to_string();
    }

    let mut out = String::new();
    if let Some(start) = &plan.start {
        out.push_str(&format!(
            "Start: {} kg x {}\n\n",
            fmt_kg(start.weight),
            start.reps
        ));
    }

    if bodyweight_relative {
        out.push_str(&format!(
            "{:>4} {:>9} {:>6} {:>10}\n",
            "SET", "WEIGHT", "REPS", "EXTERNAL"
        ));
        for (i, row) in plan.sets.iter().enumerate() {
            let external = row.external.map(fmt_kg).unwrap_or_default();
            out.push_str(&format!(
                "{:>4} {:>9} {:>6} {:>10}\n",
                i + 1,
                fmt_kg(row.weight),
                row.reps.to_string(),
                external
            ));
        }
    } else {
        out.push_str(&format!("{:>4} {:>9} {:>6}\n", "SET", "WEIGHT", "REPS"));
        for (i, row) in plan.sets.iter().enumerate() {
            out.push_str(&format!(
                "{:>4} {:>9} {:>6}\n",
                i + 1,
                fmt_kg(row.weight),
                row.reps.to_string()
            ));
        }
    }

    out.push_str(&format!("\nTonnage: {} kg\n", fmt_kg(plan.tonnage)));
    out
}

/// Render a percent-ramp plan.
pub fn render_ramp(plan: &RampPlan) -> String {
    if plan.sets.is_empty() {
        return "No plan: daily max must be a non-zero finite number.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>9} {:>6} {:>6}\n",
        "SET", "WEIGHT", "REPS", "PCT"
    ));
    for (i, row) in plan.sets.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} {:>9} {:>6} {:>6}\n",
            i + 1,
            fmt_kg(row.weight),
            row.reps.to_string(),
            row.note.as_deref().unwrap_or("")
        ));
    }
    out.push_str(&format!(
        "\nReps at or above 80%: {}\nTonnage: {} kg\n",
        plan.heavy_reps,
        fmt_kg(plan.tonnage)
    ));
    out
}

/// Render a fixed-drop plan.
pub fn render_drop(plan: &DropPlan) -> String {
    let Some(top_single) = plan.top_single else {
        return "No plan: daily max and drop must be non-zero finite numbers.\n".to_string();
    };

    let mut out = String::new();
    out.push_str(&format!("Top single: {} kg x 1\n\n", fmt_kg(top_single)));
    out.push_str(&format!(
        "{:>4} {:>9} {:>6} {:>9}\n",
        "SET", "WEIGHT", "REPS", "DROP"
    ));
    for (i, row) in plan.sets.iter().enumerate() {
        out.push_str(&format!(
            "{:>4} {:>9} {:>6} {:>9}\n",
            i + 1,
            fmt_kg(row.weight),
            row.reps.to_string(),
            row.note.as_deref().unwrap_or("")
        ));
    }
    out.push_str(&format!("\nTonnage: {} kg\n", fmt_kg(plan.tonnage)));
    out
}
