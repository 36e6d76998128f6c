use super::room::Room;

/// A single map coordinate: its room and the x-coordinates it connects to
/// in the row above.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    room: Room,
    edges: Vec<usize>,
}

impl Node {
    pub fn room(&self) -> Room {
        self.room
    }
    pub fn edges(&self) -> &[usize] {
        &self.edges
    }
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    pub fn has_edge(&self, x: usize) -> bool {
        self.edges.contains(&x)
    }
    pub fn assign(&mut self, room: Room) {
        self.room = room;
    }
    pub fn connect(&mut self, x: usize) {
        if !self.has_edge(x) {
            self.edges.push(x);
            self.edges.sort();
        }
    }
    /// left, straight, right presence relative to `x`, the node's own column.
    /// any target left of `x` counts as left regardless of distance, likewise right.
    pub fn directions(&self, x: usize) -> [bool; 3] {
        self.edges.iter().fold([false; 3], |mut bits, &edge| {
            match edge.cmp(&x) {
                std::cmp::Ordering::Less => bits[0] = true,
                std::cmp::Ordering::Equal => bits[1] = true,
                std::cmp::Ordering::Greater => bits[2] = true,
            }
            bits
        })
    }
}

impl From<Room> for Node {
    fn from(room: Room) -> Self {
        Self {
            room,
            edges: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_ignore_distance() {
        let mut node = Node::from(Room::Monster);
        node.connect(0);
        node.connect(3);
        assert_eq!(node.directions(3), [true, true, false]);
        assert_eq!(node.directions(0), [false, true, true]);
    }

    #[test]
    fn connect_is_idempotent() {
        let mut node = Node::default();
        node.connect(2);
        node.connect(2);
        assert_eq!(node.edge_count(), 1);
    }
}
