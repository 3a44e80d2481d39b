//! Demo agents. The layout engine never depends on how an agent was made.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Agent, Connection, Neuron, NeuronKind};

const MIN_WEIGHT: f64 = -100.0;
const MAX_WEIGHT: f64 = 100.0;

/// Neuron count per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerShape {
    pub inputs: usize,
    pub intermediates: usize,
    pub outputs: usize,
}

impl LayerShape {
    pub const fn new(inputs: usize, intermediates: usize, outputs: usize) -> Self {
        Self {
            inputs,
            intermediates,
            outputs,
        }
    }
}

pub trait AgentGenerator {
    fn generate(&mut self, id: i64, shape: LayerShape) -> Agent;
}

/// Fully connected input→intermediate→output agents with uniform random
/// weights in [-100, 100).
#[derive(Debug, Clone)]
pub struct RandomAgentGenerator {
    rng: StdRng,
}

impl RandomAgentGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

fn neurons(kind: NeuronKind, base_id: i64, count: usize) -> Vec<Neuron> {
    let prefix = match kind {
        NeuronKind::Input => "Input",
        NeuronKind::Intermediate => "Intermediate",
        NeuronKind::Output => "Output",
    };
    (0..count)
        .map(|i| Neuron {
            id: base_id + i as i64,
            kind,
            name: format!("{prefix} neuron #{i}"),
        })
        .collect()
}

impl AgentGenerator for RandomAgentGenerator {
    fn generate(&mut self, id: i64, shape: LayerShape) -> Agent {
        let inputs = neurons(NeuronKind::Input, 1000, shape.inputs);
        let intermediates = neurons(NeuronKind::Intermediate, 2000, shape.intermediates);
        let outputs = neurons(NeuronKind::Output, 3000, shape.outputs);

        let mut connections = Vec::with_capacity(
            shape.inputs * shape.intermediates + shape.intermediates * shape.outputs,
        );
        for (sources, targets) in [(&inputs, &intermediates), (&intermediates, &outputs)] {
            for from in sources {
                for to in targets {
                    connections.push(Connection {
                        id: connections.len() as i64 + 1,
                        from: from.id,
                        to: to.id,
                        weight: self.rng.gen_range(MIN_WEIGHT..MAX_WEIGHT),
                    });
                }
            }
        }

        let mut all = inputs;
        all.extend(intermediates);
        all.extend(outputs);
        tracing::debug!(
            agent = id,
            neurons = all.len(),
            connections = connections.len(),
            "Generated random agent"
        );
        Agent::new(id, all, connections)
    }
}

pub const AGENT_1_SHAPE: LayerShape = LayerShape::new(3, 5, 4);
pub const AGENT_2_SHAPE: LayerShape = LayerShape::new(2, 6, 4);

/// The two agents offered in the side panel by default.
pub fn demo_agents(generator: &mut impl AgentGenerator) -> Vec<Agent> {
    vec![
        generator.generate(1, AGENT_1_SHAPE),
        generator.generate(2, AGENT_2_SHAPE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_agent_is_valid_and_fully_connected() {
        let mut generator = RandomAgentGenerator::from_seed(7);
        let agent = generator.generate(1, AGENT_1_SHAPE);
        assert_eq!(agent.validate(), Ok(()));
        assert_eq!(agent.neurons.len(), 12);
        assert_eq!(agent.connections.len(), 3 * 5 + 5 * 4);
        assert!(
            agent
                .connections
                .iter()
                .all(|c| (MIN_WEIGHT..MAX_WEIGHT).contains(&c.weight))
        );
    }

    #[test]
    fn ids_follow_block_scheme() {
        let mut generator = RandomAgentGenerator::from_seed(1);
        let agent = generator.generate(2, AGENT_2_SHAPE);
        let ids: Vec<_> = agent.neurons.iter().map(|n| n.id).collect();
        assert_eq!(
            ids,
            vec![1000, 1001, 2000, 2001, 2002, 2003, 2004, 2005, 3000, 3001, 3002, 3003]
        );
        assert_eq!(agent.neurons[1].name, "Input neuron #1");
        let first = &agent.connections[0];
        assert_eq!((first.from, first.to, first.id), (1000, 2000, 1));
        let last = agent.connections.last().expect("connections");
        assert_eq!((last.from, last.to, last.id), (2005, 3003, 2 * 6 + 6 * 4));
    }

    #[test]
    fn same_seed_same_agents() {
        let a = demo_agents(&mut RandomAgentGenerator::from_seed(42));
        let b = demo_agents(&mut RandomAgentGenerator::from_seed(42));
        assert_eq!(a, b);
        assert_eq!(a[0].id, 1);
        assert_eq!(a[1].id, 2);
    }

    #[test]
    fn empty_intermediate_layer_has_no_connections() {
        let mut generator = RandomAgentGenerator::from_seed(3);
        let agent = generator.generate(9, LayerShape::new(2, 0, 2));
        assert_eq!(agent.neurons.len(), 4);
        assert!(agent.connections.is_empty());
    }
}
