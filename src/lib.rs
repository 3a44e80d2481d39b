//! Layered agent graph viewer.
//!
//! An [`Agent`] is laid out in three columns (input, intermediate, output) by
//! [`compute_graph`]; the caller owns the [`Selection`] and feeds clicks back
//! through [`Graph::hit_test`] and [`Selection::activate`].

pub mod app;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod layout;
pub mod model;
pub mod selection;
pub mod svg;

pub use error::{AgentError, Error, Result};
pub use layout::{
    ColorClass, Emphasis, Graph, PositionedEdge, PositionedNode, Viewport, compute_graph,
};
pub use model::{Agent, Connection, Neuron, NeuronKind};
pub use selection::{ActivationKey, Selection};
