//! Instance diagram rendering via the plotters bitmap backend.

use std::path::Path;

use plotters::prelude::*;
use rustc_hash::FxHashSet;

use pw_core::{NodeClass, NodeId, Point};
use pw_instance::Instance;

use crate::{RenderError, RenderResult};

const CANVAS_PX: (u32, u32) = (1000, 1000);
const NODE_RADIUS: i32 = 5;

/// Node fill color per class.  Same palette the original field diagrams used,
/// so runs remain visually comparable across harness versions.
fn class_color(class: NodeClass) -> RGBColor {
    match class {
        NodeClass::Entry => GREEN,
        NodeClass::Exit => RED,
        NodeClass::Parking => BLUE,
        NodeClass::Objective => RGBColor(255, 165, 0), // orange
    }
}

/// Render `instance` to a PNG at `out`, emphasizing the arcs in `path`.
///
/// Path arcs are red and thick; all others gray and thin.  Every arc carries
/// a `<cost> ms` label at its midpoint and a dot near its head marking the
/// direction.
pub fn render_diagram(
    instance: &Instance,
    path: &[(NodeId, NodeId)],
    out: &Path,
) -> RenderResult<()> {
    let (x_range, y_range) = bounds(instance);

    let root = BitMapBackend::new(out, CANVAS_PX).into_drawing_area();
    root.fill(&WHITE).map_err(RenderError::draw)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Instance graph (solution path in red)", ("sans-serif", 22))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range.clone(), y_range)
        .map_err(RenderError::draw)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .draw()
        .map_err(RenderError::draw)?;

    let on_path: FxHashSet<(&str, &str)> = path
        .iter()
        .map(|(f, t)| (f.as_str(), t.as_str()))
        .collect();

    // Arcs first so nodes overprint their endpoints.
    for arc in instance.arcs() {
        let from = position(instance, &arc.from)?;
        let to = position(instance, &arc.to)?;
        let emphasized = on_path.contains(&(arc.from.as_str(), arc.to.as_str()));
        let style = if emphasized {
            RED.stroke_width(3)
        } else {
            RGBColor(140, 140, 140).stroke_width(1)
        };

        chart
            .draw_series(LineSeries::new(
                [(from.x, from.y), (to.x, to.y)],
                style,
            ))
            .map_err(RenderError::draw)?;

        // Direction marker: a dot at 85 % of the way toward the head.
        let head = Point::new(
            from.x + 0.85 * (to.x - from.x),
            from.y + 0.85 * (to.y - from.y),
        );
        let head_color = if emphasized { RED } else { RGBColor(140, 140, 140) };
        chart
            .draw_series(std::iter::once(Circle::new(
                (head.x, head.y),
                2,
                head_color.filled(),
            )))
            .map_err(RenderError::draw)?;

        let mid = from.midpoint(to);
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{} ms", arc.cost_ms),
                (mid.x, mid.y),
                ("sans-serif", 11),
            )))
            .map_err(RenderError::draw)?;
    }

    // Node id labels sit slightly up-right of the marker.
    let label_offset = (x_range.end - x_range.start) * 0.01;
    for node in instance.nodes() {
        chart
            .draw_series(std::iter::once(Circle::new(
                (node.pos.x, node.pos.y),
                NODE_RADIUS,
                class_color(node.class).filled(),
            )))
            .map_err(RenderError::draw)?;
        chart
            .draw_series(std::iter::once(Text::new(
                node.id.to_string(),
                (node.pos.x + label_offset, node.pos.y + label_offset),
                ("sans-serif", 14),
            )))
            .map_err(RenderError::draw)?;
    }

    root.present().map_err(RenderError::draw)
}

fn position(instance: &Instance, id: &NodeId) -> RenderResult<Point> {
    instance
        .node(id)
        .map(|n| n.pos)
        .ok_or_else(|| RenderError::UnknownNode(id.as_str().to_owned()))
}

/// Axis ranges covering all nodes with a 10 % pad (and a minimum span so a
/// degenerate single-point instance still renders).
fn bounds(instance: &Instance) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut min = Point::new(f64::INFINITY, f64::INFINITY);
    let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for node in instance.nodes() {
        min.x = min.x.min(node.pos.x);
        min.y = min.y.min(node.pos.y);
        max.x = max.x.max(node.pos.x);
        max.y = max.y.max(node.pos.y);
    }
    if instance.nodes().is_empty() {
        return (0.0..1.0, 0.0..1.0);
    }
    let pad_x = ((max.x - min.x) * 0.1).max(1.0);
    let pad_y = ((max.y - min.y) * 0.1).max(1.0);
    (
        min.x - pad_x..max.x + pad_x,
        min.y - pad_y..max.y + pad_y,
    )
}
