//! Selection resource for tracking the selected origin square

use crate::game::types::Position;

/// Origin square chosen by the human plus the destinations the authority
/// reported as legal for it
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub origin: Option<Position>,
    pub legal_targets: Vec<Position>,
}

impl Selection {
    pub fn select(&mut self, origin: Position, legal_targets: Vec<Position>) {
        self.origin = Some(origin);
        self.legal_targets = legal_targets;
    }

    pub fn clear(&mut self) {
        self.origin = None;
        self.legal_targets.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.origin.is_some()
    }

    pub fn contains_target(&self, pos: Position) -> bool {
        self.legal_targets.contains(&pos)
    }
}
