use crate::model::{ConnectionId, NeuronId};

/// What the user has highlighted. Owned by the application and only read
/// by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Connection(ConnectionId),
    Node(NeuronId),
}

/// Opaque key handed back for every clickable element, so the layout stays
/// free of callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Node(NeuronId),
    Connection(ConnectionId),
    Background,
}

impl Selection {
    pub fn select_node(&mut self, id: NeuronId) {
        *self = Self::Node(id);
    }

    pub fn select_connection(&mut self, id: ConnectionId) {
        *self = Self::Connection(id);
    }

    pub fn clear(&mut self) {
        *self = Self::None;
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn selected_node(&self) -> Option<NeuronId> {
        match *self {
            Self::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn selected_connection(&self) -> Option<ConnectionId> {
        match *self {
            Self::Connection(id) => Some(id),
            _ => None,
        }
    }

    /// Applies a click. Background clears both node and connection.
    pub fn activate(&mut self, key: ActivationKey) {
        match key {
            ActivationKey::Node(id) => self.select_node(id),
            ActivationKey::Connection(id) => self.select_connection(id),
            ActivationKey::Background => self.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_replaces_previous_choice() {
        let mut selection = Selection::default();
        selection.select_node(1000);
        assert_eq!(selection.selected_node(), Some(1000));
        selection.select_connection(5);
        assert_eq!(selection.selected_node(), None);
        assert_eq!(selection.selected_connection(), Some(5));
    }

    #[test]
    fn background_activation_clears() {
        let mut selection = Selection::Connection(3);
        selection.activate(ActivationKey::Background);
        assert!(selection.is_none());

        selection.activate(ActivationKey::Node(2000));
        assert_eq!(selection, Selection::Node(2000));
        selection.activate(ActivationKey::Connection(9));
        assert_eq!(selection, Selection::Connection(9));
    }
}
