use std::collections::HashMap;

/// Per-key accumulators that remember the order in which keys were first seen.
///
/// Sorting the result with a stable sort therefore breaks ties by first encounter.
pub(crate) struct OrderedGroups<V> {
    positions: HashMap<String, usize>,
    groups: Vec<(String, V)>
}

impl<V: Default> OrderedGroups<V> {
    pub(crate) fn new() -> Self {
        Self {
            positions: HashMap::new(),
            groups: Vec::new()
        }
    }

    pub(crate) fn entry(&mut self, key: &str) -> &mut V {
        let position = match self.positions.get(key) {
            Some(&position) => position,
            None => {
                let position = self.groups.len();
                self.positions.insert(key.to_string(), position);
                self.groups.push((key.to_string(), V::default()));
                position
            }
        };

        &mut self.groups[position].1
    }

    pub(crate) fn into_groups(self) -> Vec<(String, V)> {
        self.groups
    }
}
