use eframe::egui;
use egui::{Color32, Sense, Stroke, Vec2};

use crate::layout::{ColorClass, NODE_RADIUS, Viewport, compute_graph};
use crate::model::{Agent, NeuronKind};
use crate::selection::Selection;

const BACKGROUND: Color32 = Color32::from_rgb(0x27, 0x2b, 0x4d);
const NODE_FILL: Color32 = Color32::from_rgb(0x21, 0xd4, 0xfd);

fn edge_color(color: ColorClass) -> Color32 {
    match color {
        ColorClass::Negative => Color32::RED,
        ColorClass::Positive => Color32::GREEN,
    }
}

pub struct AgentGraphApp {
    agents: Vec<Agent>,
    current: Option<usize>,
    selection: Selection,
    viewport: Viewport,
}

impl AgentGraphApp {
    pub fn new(agents: Vec<Agent>, viewport: Viewport) -> Self {
        let current = if agents.is_empty() { None } else { Some(0) };
        Self {
            agents,
            current,
            selection: Selection::None,
            viewport,
        }
    }

    pub fn agent(&self) -> Option<&Agent> {
        self.current.and_then(|i| self.agents.get(i))
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Switching agents always drops the selection.
    pub fn show_agent(&mut self, index: usize) {
        if index < self.agents.len() {
            self.current = Some(index);
            self.selection.clear();
            tracing::debug!(agent = self.agents[index].id, "Switched agent");
        }
    }

    /// Maps a click at `local` (relative to the canvas corner) onto the
    /// selection.
    pub fn click(&mut self, local: egui::Pos2) {
        let Some(agent) = self.agent() else {
            return;
        };
        let key = compute_graph(agent, self.viewport, self.selection).hit_test(local);
        tracing::debug!(?key, "Canvas click");
        self.selection.activate(key);
    }

    fn draw_agent_list(&mut self, ui: &mut egui::Ui) {
        ui.heading("Agents");
        let mut chosen = None;
        for (i, agent) in self.agents.iter().enumerate() {
            if ui
                .selectable_label(self.current == Some(i), format!("Agent {}", agent.id))
                .clicked()
            {
                chosen = Some(i);
            }
        }
        if let Some(i) = chosen {
            self.show_agent(i);
        }
    }

    fn draw_info(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Agent information");
                    for line in agent_summary(self.agent()) {
                        ui.label(line);
                    }
                });
            });
            ui.group(|ui| {
                ui.vertical(|ui| {
                    ui.heading("Connection information");
                    let lines = match self.agent() {
                        Some(agent) => selection_details(agent, self.selection),
                        None => vec!["Nothing selected".to_string()],
                    };
                    for line in lines {
                        ui.label(line);
                    }
                });
            });
        });
    }

    fn draw_graph(&mut self, ui: &mut egui::Ui) {
        let Some(agent) = self.agent() else {
            return;
        };
        let graph = compute_graph(agent, self.viewport, self.selection);
        let (response, painter) = ui.allocate_painter(self.viewport.size(), Sense::click());
        let origin = response.rect.min.to_vec2();

        painter.rect_filled(response.rect, 14.0, BACKGROUND);
        for edge in &graph.edges {
            if let Some([a, b]) = edge.segment() {
                let color = edge_color(edge.color).gamma_multiply(edge.opacity());
                painter.line_segment([a + origin, b + origin], Stroke::new(edge.thickness, color));
            }
        }
        for node in &graph.nodes {
            painter.circle_filled(
                node.pos + origin,
                NODE_RADIUS,
                NODE_FILL.gamma_multiply(node.opacity()),
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.click(pos - origin);
            }
        }
    }
}

/// Lines for the "Agent information" card.
pub fn agent_summary(agent: Option<&Agent>) -> Vec<String> {
    match agent {
        Some(agent) => NeuronKind::ALL
            .iter()
            .map(|&kind| format!("{} neurons: {}", kind.label(), agent.count(kind)))
            .collect(),
        None => vec!["No agent selected".to_string()],
    }
}

/// Lines for the "Connection information" card.
pub fn selection_details(agent: &Agent, selection: Selection) -> Vec<String> {
    let name = |id| {
        agent
            .neuron(id)
            .map(|n| n.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    };
    match selection {
        Selection::Connection(id) => match agent.connection(id) {
            Some(c) => vec![
                format!("Start neuron: {}", name(c.from)),
                format!("End neuron: {}", name(c.to)),
                format!("Weight: {:.2}", c.weight),
            ],
            None => vec!["Nothing selected".to_string()],
        },
        Selection::Node(id) => match agent.neuron(id) {
            Some(neuron) => {
                let incoming = agent.connections.iter().filter(|c| c.to == id).count();
                let outgoing = agent.connections.iter().filter(|c| c.from == id).count();
                vec![
                    format!("Neuron: {}", neuron.name),
                    format!("Type: {}", neuron.kind.label()),
                    format!("Incoming: {incoming}, outgoing: {outgoing}"),
                ]
            }
            None => vec!["Nothing selected".to_string()],
        },
        Selection::None => vec!["Nothing selected".to_string()],
    }
}

impl eframe::App for AgentGraphApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("agents")
            .min_width(160.0)
            .show(ctx, |ui| self.draw_agent_list(ui));
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Agent design");
            self.draw_info(ui);
            ui.add_space(8.0);
            egui::ScrollArea::both().show(ui, |ui| self.draw_graph(ui));
        });
    }
}

/// Initial window size that fits the side panel, cards and canvas.
pub fn window_size(viewport: Viewport) -> Vec2 {
    Vec2::new(viewport.width + 220.0, viewport.height + 220.0)
}
