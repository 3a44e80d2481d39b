use std::fs;

use clap::Parser;
use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use agent_graph::app::{AgentGraphApp, window_size};
use agent_graph::config::{Cli, Settings};
use agent_graph::fixtures::{RandomAgentGenerator, demo_agents};
use agent_graph::svg::render_svg;
use agent_graph::{Agent, Error, Result, Selection, compute_graph};

fn load_agents(settings: &Settings) -> Result<Vec<Agent>> {
    if let Some(path) = &settings.agent {
        return Ok(vec![Agent::load(path)?]);
    }
    let mut generator = match settings.seed {
        Some(seed) => RandomAgentGenerator::from_seed(seed),
        None => RandomAgentGenerator::from_entropy(),
    };
    Ok(demo_agents(&mut generator))
}

fn run(cli: &Cli, settings: &Settings) -> Result<()> {
    let viewport = settings.viewport()?;
    let agents = load_agents(settings)?;
    info!(
        agents = agents.len(),
        width = viewport.width,
        height = viewport.height,
        "Starting agent graph viewer"
    );

    if let Some(path) = &cli.export_svg {
        if let Some(agent) = agents.first() {
            let svg = render_svg(&compute_graph(agent, viewport, Selection::None), viewport);
            fs::write(path, svg).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), agent = agent.id, "Exported SVG");
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(window_size(viewport)),
        ..Default::default()
    };
    eframe::run_native(
        "Agent Graph",
        options,
        Box::new(move |_cc| Ok(Box::new(AgentGraphApp::new(agents, viewport)))),
    )
    .map_err(|e| Error::Gui(e.to_string()))
}

fn main() {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli);
    let level = match &settings {
        Ok(settings) => settings.log_level.as_str(),
        Err(_) => cli.log_level.as_deref().unwrap_or("info"),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if let Err(e) = settings.and_then(|settings| run(&cli, &settings)) {
        error!(error = %e, "agent-graph failed");
        std::process::exit(1);
    }
}
