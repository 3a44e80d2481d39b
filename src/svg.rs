//! Headless export of a laid-out graph as a standalone SVG document.

use std::fmt::Write;

use crate::layout::{ColorClass, Graph, NODE_RADIUS, Viewport};

pub const BACKGROUND: &str = "#272b4d";
pub const NODE_FILL: &str = "#21D4FD";

fn stroke(color: ColorClass) -> &'static str {
    match color {
        ColorClass::Negative => "red",
        ColorClass::Positive => "green",
    }
}

/// Edges first, then nodes, matching on-screen paint order. Each edge gets a
/// second transparent line at least `MIN_HIT_WIDTH` wide as its click target.
pub fn render_svg(graph: &Graph, viewport: Viewport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
        w = viewport.width,
        h = viewport.height
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{w}" height="{h}" rx="14" fill="{BACKGROUND}"/>"#,
        w = viewport.width,
        h = viewport.height
    );
    for edge in &graph.edges {
        let Some([a, b]) = edge.segment() else {
            continue;
        };
        let color = stroke(edge.color);
        let _ = writeln!(
            out,
            r#"  <line data-connection="{id}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{sw}" stroke-opacity="{op}"/>"#,
            id = edge.id,
            x1 = a.x,
            y1 = a.y,
            x2 = b.x,
            y2 = b.y,
            sw = edge.thickness,
            op = edge.opacity()
        );
        let _ = writeln!(
            out,
            r#"  <line data-connection="{id}" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{sw}" stroke-opacity="0"/>"#,
            id = edge.id,
            x1 = a.x,
            y1 = a.y,
            x2 = b.x,
            y2 = b.y,
            sw = edge.hit_width()
        );
    }
    for node in &graph.nodes {
        let _ = writeln!(
            out,
            r#"  <circle data-neuron="{id}" cx="{x}" cy="{y}" r="{NODE_RADIUS}" fill="{NODE_FILL}" opacity="{op}"/>"#,
            id = node.id,
            x = node.pos.x,
            y = node.pos.y,
            op = node.opacity()
        );
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::compute_graph;
    use crate::model::{Agent, Connection, Neuron, NeuronKind};
    use crate::selection::Selection;

    #[test]
    fn draws_two_lines_per_edge_and_one_circle_per_node() {
        let agent = Agent::new(
            1,
            vec![
                Neuron {
                    id: 1,
                    kind: NeuronKind::Input,
                    name: "in".into(),
                },
                Neuron {
                    id: 2,
                    kind: NeuronKind::Output,
                    name: "out".into(),
                },
            ],
            vec![Connection {
                id: 9,
                from: 1,
                to: 2,
                weight: -30.0,
            }],
        );
        let viewport = Viewport::new(200.0, 100.0);
        let svg = render_svg(&compute_graph(&agent, viewport, Selection::None), viewport);

        assert_eq!(svg.matches("<line").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains(r#"stroke="red" stroke-width="3" stroke-opacity="0.6""#));
        assert!(svg.contains(r#"stroke-width="10" stroke-opacity="0""#));
        assert!(svg.find("<line").expect("line") < svg.find("<circle").expect("circle"));
    }

    #[test]
    fn skips_edges_with_missing_endpoints() {
        let agent = Agent::new(
            1,
            vec![Neuron {
                id: 1,
                kind: NeuronKind::Input,
                name: "in".into(),
            }],
            vec![Connection {
                id: 9,
                from: 1,
                to: 404,
                weight: 10.0,
            }],
        );
        let viewport = Viewport::new(200.0, 100.0);
        let svg = render_svg(&compute_graph(&agent, viewport, Selection::None), viewport);
        assert_eq!(svg.matches("<line").count(), 0);
        assert_eq!(svg.matches("<circle").count(), 1);
    }
}
