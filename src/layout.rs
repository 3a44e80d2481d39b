//! Fixed three-column layout of an agent and its selection highlighting.
//!
//! [`compute_graph`] is recomputed from scratch on every frame; nothing here
//! keeps state between calls.

use std::collections::HashMap;

use egui::{Pos2, Vec2, pos2};

use crate::model::{Agent, ConnectionId, NeuronId, NeuronKind};
use crate::selection::{ActivationKey, Selection};

pub const NODE_RADIUS: f32 = 15.0;
/// Minimum width of the invisible stroke that catches clicks on an edge.
pub const MIN_HIT_WIDTH: f32 = 10.0;

const MARGIN_TOP_BOTTOM: f32 = 0.1;
const MARGIN_LEFT_RIGHT: f32 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Full,
    Dimmed,
}

impl Emphasis {
    fn from_flag(highlighted: bool) -> Self {
        if highlighted { Self::Full } else { Self::Dimmed }
    }

    pub fn node_opacity(self) -> f32 {
        match self {
            Self::Full => 1.0,
            Self::Dimmed => 0.5,
        }
    }

    pub fn edge_opacity(self) -> f32 {
        match self {
            Self::Full => 0.6,
            Self::Dimmed => 0.3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorClass {
    Negative,
    Positive,
}

impl ColorClass {
    pub fn of_weight(weight: f64) -> Self {
        if weight < 0.0 { Self::Negative } else { Self::Positive }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: NeuronId,
    pub pos: Pos2,
    pub emphasis: Emphasis,
}

impl PositionedNode {
    pub fn activation(&self) -> ActivationKey {
        ActivationKey::Node(self.id)
    }

    pub fn opacity(&self) -> f32 {
        self.emphasis.node_opacity()
    }
}

/// An edge ready to draw. An endpoint is `None` when the connection names a
/// neuron the agent does not have; such edges are neither drawn nor hit.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEdge {
    pub id: ConnectionId,
    pub from: Option<Pos2>,
    pub to: Option<Pos2>,
    pub color: ColorClass,
    pub thickness: f32,
    pub emphasis: Emphasis,
}

impl PositionedEdge {
    pub fn activation(&self) -> ActivationKey {
        ActivationKey::Connection(self.id)
    }

    pub fn opacity(&self) -> f32 {
        self.emphasis.edge_opacity()
    }

    pub fn hit_width(&self) -> f32 {
        self.thickness.max(MIN_HIT_WIDTH)
    }

    pub fn segment(&self) -> Option<[Pos2; 2]> {
        Some([self.from?, self.to?])
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<PositionedEdge>,
}

impl Graph {
    pub fn node(&self, id: NeuronId) -> Option<&PositionedNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: ConnectionId) -> Option<&PositionedEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Resolves a click in viewport coordinates. Nodes are painted over
    /// edges and later elements over earlier ones, so the search runs in
    /// reverse paint order.
    pub fn hit_test(&self, point: Pos2) -> ActivationKey {
        if let Some(node) = self
            .nodes
            .iter()
            .rev()
            .find(|n| n.pos.distance(point) <= NODE_RADIUS)
        {
            return node.activation();
        }
        let edge = self.edges.iter().rev().find(|e| {
            e.segment()
                .is_some_and(|[a, b]| distance_to_segment(point, a, b) <= e.hit_width() / 2.0)
        });
        match edge {
            Some(edge) => edge.activation(),
            None => ActivationKey::Background,
        }
    }
}

/// Lays out `agent` inside `viewport` and derives emphasis from `selection`.
///
/// Inputs go in the left column, intermediates in the middle and outputs on
/// the right, each column spread evenly over the usable height in the
/// agent's order. Stale ids in `selection` simply match nothing.
pub fn compute_graph(agent: &Agent, viewport: Viewport, selection: Selection) -> Graph {
    let margin_top_bottom = viewport.height * MARGIN_TOP_BOTTOM;
    let margin_left_right = viewport.width * MARGIN_LEFT_RIGHT;

    let remaining_width = viewport.width - margin_left_right * 2.0;
    let remaining_height = viewport.height - margin_top_bottom * 2.0;
    let horizontal_spacing = remaining_width / 2.0;

    let highlighted = highlighted_nodes(agent, selection);

    let mut nodes = Vec::with_capacity(agent.neurons.len());
    for (column, kind) in NeuronKind::ALL.into_iter().enumerate() {
        let members: Vec<_> = agent.neurons.iter().filter(|n| n.kind == kind).collect();
        if members.is_empty() {
            continue;
        }
        let x = margin_left_right + horizontal_spacing * column as f32;
        let vertical_spacing = remaining_height / members.len() as f32;
        for (i, neuron) in members.into_iter().enumerate() {
            nodes.push(PositionedNode {
                id: neuron.id,
                pos: pos2(x, vertical_spacing * (i as f32 + 0.5) + margin_top_bottom),
                emphasis: Emphasis::from_flag(highlighted.contains(&neuron.id)),
            });
        }
    }

    let mut positions: HashMap<NeuronId, Pos2> = HashMap::with_capacity(nodes.len());
    for node in &nodes {
        positions.entry(node.id).or_insert(node.pos);
    }

    let edges = agent
        .connections
        .iter()
        .map(|connection| {
            let highlighted = match selection {
                Selection::None => true,
                Selection::Connection(id) => id == connection.id,
                Selection::Node(id) => id == connection.from || id == connection.to,
            };
            PositionedEdge {
                id: connection.id,
                from: positions.get(&connection.from).copied(),
                to: positions.get(&connection.to).copied(),
                color: ColorClass::of_weight(connection.weight),
                thickness: (connection.weight.abs() / 10.0) as f32,
                emphasis: Emphasis::from_flag(highlighted),
            }
        })
        .collect();

    Graph { nodes, edges }
}

fn highlighted_nodes(agent: &Agent, selection: Selection) -> Vec<NeuronId> {
    match selection {
        Selection::None => Vec::new(),
        Selection::Node(id) => vec![id],
        Selection::Connection(id) => agent
            .connection(id)
            .map(|c| vec![c.from, c.to])
            .unwrap_or_default(),
    }
}

fn distance_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let ap = p - a;
    let ab_len = ab.length_sq();
    if ab_len == 0.0 {
        return ap.length();
    }
    let t = (ap.dot(ab) / ab_len).clamp(0.0, 1.0);
    let proj = a + ab * t;
    (p - proj).length()
}
