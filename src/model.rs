use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AgentError, Error, Result};

pub type NeuronId = i64;
pub type ConnectionId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeuronKind {
    Input,
    Intermediate,
    Output,
}

impl NeuronKind {
    /// Column order, left to right.
    pub const ALL: [NeuronKind; 3] = [Self::Input, Self::Intermediate, Self::Output];

    pub fn label(self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Intermediate => "Internal",
            Self::Output => "Output",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub id: NeuronId,
    pub kind: NeuronKind,
    pub name: String,
}

/// Directed weighted edge. The sign of `weight` picks the colour, its
/// magnitude the stroke width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub from: NeuronId,
    pub to: NeuronId,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub neurons: Vec<Neuron>,
    pub connections: Vec<Connection>,
}

impl Agent {
    /// Builds an agent without checking invariants; see [`Agent::validate`].
    pub fn new(id: i64, neurons: Vec<Neuron>, connections: Vec<Connection>) -> Self {
        Self {
            id,
            neurons,
            connections,
        }
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.iter().find(|n| n.id == id)
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn count(&self, kind: NeuronKind) -> usize {
        self.neurons.iter().filter(|n| n.kind == kind).count()
    }

    /// Checks id uniqueness and that every connection endpoint exists.
    /// Cycles are allowed.
    pub fn validate(&self) -> std::result::Result<(), AgentError> {
        let mut neuron_ids = HashSet::with_capacity(self.neurons.len());
        for neuron in &self.neurons {
            if !neuron_ids.insert(neuron.id) {
                return Err(AgentError::DuplicateNeuron(neuron.id));
            }
        }
        let mut connection_ids = HashSet::with_capacity(self.connections.len());
        for connection in &self.connections {
            if !connection_ids.insert(connection.id) {
                return Err(AgentError::DuplicateConnection(connection.id));
            }
            for endpoint in [connection.from, connection.to] {
                if !neuron_ids.contains(&endpoint) {
                    return Err(AgentError::DanglingEndpoint {
                        connection: connection.id,
                        neuron: endpoint,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let agent: Agent = serde_json::from_str(json)?;
        agent.validate()?;
        Ok(agent)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let agent = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            agent = agent.id,
            neurons = agent.neurons.len(),
            connections = agent.connections.len(),
            "Loaded agent"
        );
        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neuron(id: NeuronId, kind: NeuronKind) -> Neuron {
        Neuron {
            id,
            kind,
            name: format!("n{id}"),
        }
    }

    fn link(id: ConnectionId, from: NeuronId, to: NeuronId) -> Connection {
        Connection {
            id,
            from,
            to,
            weight: 1.0,
        }
    }

    #[test]
    fn counts_neurons_per_kind() {
        let agent = Agent::new(
            1,
            vec![
                neuron(1, NeuronKind::Input),
                neuron(2, NeuronKind::Input),
                neuron(3, NeuronKind::Output),
            ],
            vec![],
        );
        assert_eq!(agent.count(NeuronKind::Input), 2);
        assert_eq!(agent.count(NeuronKind::Intermediate), 0);
        assert_eq!(agent.count(NeuronKind::Output), 1);
    }

    #[test]
    fn validate_accepts_cycles() {
        let agent = Agent::new(
            1,
            vec![neuron(1, NeuronKind::Input), neuron(2, NeuronKind::Output)],
            vec![link(10, 1, 2), link(11, 2, 1)],
        );
        assert_eq!(agent.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_dangling_endpoint() {
        let agent = Agent::new(1, vec![neuron(1, NeuronKind::Input)], vec![link(7, 1, 99)]);
        assert_eq!(
            agent.validate(),
            Err(AgentError::DanglingEndpoint {
                connection: 7,
                neuron: 99
            })
        );
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let agent = Agent::new(
            1,
            vec![neuron(1, NeuronKind::Input), neuron(1, NeuronKind::Output)],
            vec![],
        );
        assert_eq!(agent.validate(), Err(AgentError::DuplicateNeuron(1)));

        let agent = Agent::new(
            1,
            vec![neuron(1, NeuronKind::Input), neuron(2, NeuronKind::Output)],
            vec![link(5, 1, 2), link(5, 2, 1)],
        );
        assert_eq!(agent.validate(), Err(AgentError::DuplicateConnection(5)));
    }

    #[test]
    fn parses_lowercase_kinds() {
        let json = r#"{
            "id": 4,
            "neurons": [
                {"id": 1000, "kind": "input", "name": "a"},
                {"id": 3000, "kind": "output", "name": "b"}
            ],
            "connections": [{"id": 1, "from": 1000, "to": 3000, "weight": -12.5}]
        }"#;
        let agent = Agent::from_json_str(json).expect("valid agent");
        assert_eq!(agent.neuron(1000).map(|n| n.kind), Some(NeuronKind::Input));
        assert_eq!(agent.connection(1).map(|c| c.weight), Some(-12.5));
    }

    #[test]
    fn from_json_str_surfaces_invariant_errors() {
        let json = r#"{"id": 1, "neurons": [], "connections": [{"id": 1, "from": 1, "to": 2, "weight": 0}]}"#;
        assert!(matches!(
            Agent::from_json_str(json),
            Err(Error::Agent(AgentError::DanglingEndpoint { .. }))
        ));
    }
}
