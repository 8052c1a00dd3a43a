//! Layout emitters.
//!
//! The planner core exposes no file or wire format; these helpers render its
//! outputs into consumable descriptions: matplotlib script text (one
//! free-axes `plt.axes` call or one `plt.subplot(grid[...])` call per panel,
//! each tagged with its color as a comment) and pretty-printed JSON.

use serde::Serialize;

use sketchplan_plan::{GridLayout, SketchPlan};

/// Figure `[width, height]` in display units for a target height `h_in`.
///
/// The width follows the sketch aspect ratio, so the emitted figure keeps
/// the sketch's proportions.
pub fn figure_size(plan: &SketchPlan, h_in: f64) -> [f64; 2] {
    [plan.aspect_ratio * h_in, h_in]
}

/// Render the fractional plan as a matplotlib script with one absolute
/// `plt.axes([left, bottom, width, height])` rectangle per panel.
///
/// Rows grow downward in the sketch but upward in figure coordinates, hence
/// `bottom = 1 - row_max`.
pub fn axes_script(plan: &SketchPlan, h_in: f64) -> String {
    let [w_in, h_in] = figure_size(plan, h_in);
    let mut code = vec![format!("plt.figure(figsize = ({w_in}, {h_in}))")];
    for r in &plan.regions {
        let left = r.col[0];
        let bottom = 1.0 - r.row[1];
        let width = r.col[1] - r.col[0];
        let height = r.row[1] - r.row[0];
        code.push(format!("plt.axes([{left}, {bottom}, {width}, {height}])"));
        code.push(format!("# {}", r.color));
        code.push(String::new());
    }
    code.join("\n")
}

/// Render a grid layout as a matplotlib `GridSpec` script with one
/// `plt.subplot(grid[r0:r1, c0:c1])` per panel.
pub fn grid_script(plan: &SketchPlan, layout: &GridLayout, h_in: f64) -> String {
    let [w_in, h_in] = figure_size(plan, h_in);
    let mut code = vec![
        format!("plt.figure(figsize = ({w_in}, {h_in}))"),
        format!("grid = plt.GridSpec({}, {})", layout.rows, layout.cols),
    ];
    for cell in &layout.cells {
        code.push(format!(
            "plt.subplot(grid[{}:{}, {}:{}])",
            cell.row[0], cell.row[1], cell.col[0], cell.col[1]
        ));
        code.push(format!("# {}", cell.color));
        code.push(String::new());
    }
    code.join("\n")
}

/// Pretty-printed JSON of any emitted artifact (plan or grid layout).
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchplan_core::ColorKey;
    use sketchplan_plan::{quantize, PlanRegion};

    fn sample_plan() -> SketchPlan {
        SketchPlan {
            regions: vec![
                PlanRegion {
                    color: ColorKey::from_rgb([0, 0, 255]),
                    row: [0.0, 0.5],
                    col: [0.0, 1.0],
                },
                PlanRegion {
                    color: ColorKey::from_rgb([255, 0, 0]),
                    row: [0.6, 1.0],
                    col: [0.25, 0.75],
                },
            ],
            aspect_ratio: 2.0,
        }
    }

    #[test]
    fn figure_width_follows_the_aspect_ratio() {
        assert_eq!(figure_size(&sample_plan(), 10.0), [20.0, 10.0]);
    }

    #[test]
    fn axes_script_emits_one_rectangle_per_region() {
        let script = axes_script(&sample_plan(), 10.0);
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "plt.figure(figsize = (20, 10))");
        assert_eq!(lines[1], "plt.axes([0, 0.5, 1, 0.5])");
        assert_eq!(lines[2], "# #0000ff");
        assert_eq!(lines[4], "plt.axes([0.25, 0, 0.5, 0.4])");
        assert_eq!(lines[5], "# #ff0000");
        assert_eq!(script.lines().filter(|l| l.starts_with("plt.axes")).count(), 2);
    }

    #[test]
    fn grid_script_emits_gridspec_and_subplots() {
        let plan = sample_plan();
        let layout = quantize(&plan, 10);
        let script = grid_script(&plan, &layout, 10.0);
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "plt.figure(figsize = (20, 10))");
        assert_eq!(lines[1], "grid = plt.GridSpec(20, 10)");
        assert_eq!(lines[2], "plt.subplot(grid[0:10, 0:10])");
        assert_eq!(lines[3], "# #0000ff");
        assert_eq!(lines[5], "plt.subplot(grid[12:20, 3:8])");
    }

    #[test]
    fn plans_and_layouts_serialize_to_json() {
        let plan = sample_plan();
        let json = to_json(&plan).unwrap();
        assert!(json.contains("\"aspect_ratio\": 2.0"));

        let layout = quantize(&plan, 10);
        let json = to_json(&layout).unwrap();
        assert!(json.contains("\"rows\": 20"));
    }
}
