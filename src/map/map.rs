use super::node::Node;
use super::room::Room;
use crate::Arbitrary;
use crate::MAP_HEIGHT;
use crate::MAP_WIDTH;
use crate::TREASURE_ROW;

/// One act's map: a MAP_WIDTH x MAP_HEIGHT grid of nodes, row-major,
/// with edges only ever pointing from row y to row y + 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map(Vec<Node>);

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl Map {
    /// empty grid, no rooms and no edges
    pub fn new() -> Self {
        Self(vec![Node::default(); MAP_WIDTH * MAP_HEIGHT])
    }

    /// grid with the structurally fixed rows filled in:
    /// monsters first, treasure midway, rest before the boss
    pub fn skeleton() -> Self {
        let mut map = Self::new();
        for x in 0..MAP_WIDTH {
            map.node_mut(x, 0).assign(Room::Monster);
            map.node_mut(x, TREASURE_ROW).assign(Room::Treasure);
            map.node_mut(x, MAP_HEIGHT - 1).assign(Room::Rest);
        }
        map
    }

    /// in-grid access. coordinates come from bounded loops, so out of
    /// range is a bug here, not a query.
    ///
    /// # Panics
    /// if `(x, y)` is off the grid. use [`Map::room_at`] or [`Map::has_edge`]
    /// for queries that may fall outside it.
    pub(crate) fn node(&self, x: usize, y: usize) -> &Node {
        assert!(x < MAP_WIDTH && y < MAP_HEIGHT, "node ({}, {}) off map", x, y);
        &self.0[y * MAP_WIDTH + x]
    }
    fn node_mut(&mut self, x: usize, y: usize) -> &mut Node {
        assert!(x < MAP_WIDTH && y < MAP_HEIGHT, "node ({}, {}) off map", x, y);
        &mut self.0[y * MAP_WIDTH + x]
    }

    pub fn assign(&mut self, x: usize, y: usize, room: Room) -> anyhow::Result<()> {
        Self::check(x, y)?;
        self.node_mut(x, y).assign(room);
        Ok(())
    }

    /// add an edge from (x, y) to (x2, y + 1)
    pub fn connect(&mut self, x: usize, y: usize, x2: usize) -> anyhow::Result<()> {
        Self::check(x, y)?;
        Self::check(x2, y + 1)?;
        self.node_mut(x, y).connect(x2);
        Ok(())
    }

    fn check(x: usize, y: usize) -> anyhow::Result<()> {
        match x < MAP_WIDTH && y < MAP_HEIGHT {
            true => Ok(()),
            false => Err(anyhow::anyhow!("coordinate ({}, {}) off map", x, y)),
        }
    }

    /// room at (x, y), or `Room::Invalid` for any coordinate off the grid
    pub fn room_at(&self, x: i32, y: i32) -> Room {
        match Self::inside(x, y) {
            Some((x, y)) => self.node(x, y).room(),
            None => Room::Invalid,
        }
    }

    /// whether (x, y) connects to column `x2` of the next row.
    ///
    /// `x == -1` is the virtual start node below row 0: it "connects" to
    /// every row-0 node that has somewhere to go, whatever `y` says.
    /// any other off-grid query is false.
    pub fn has_edge(&self, x: i32, y: i32, x2: i32) -> bool {
        if x == -1 {
            return usize::try_from(x2)
                .ok()
                .filter(|x2| *x2 < MAP_WIDTH)
                .map_or(false, |x2| self.node(x2, 0).edge_count() > 0);
        }
        match Self::inside(x, y) {
            Some((x, y)) => usize::try_from(x2).map_or(false, |x2| self.node(x, y).has_edge(x2)),
            None => false,
        }
    }

    fn inside(x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok().filter(|x| *x < MAP_WIDTH)?;
        let y = usize::try_from(y).ok().filter(|y| *y < MAP_HEIGHT)?;
        Some((x, y))
    }
}

impl std::fmt::Display for Map {
    /// top row first, the way the game draws it
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for y in (0..MAP_HEIGHT).rev() {
            write!(f, "{:>2} ", y)?;
            for x in 0..MAP_WIDTH {
                write!(f, " {}", self.node(x, y).room())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Arbitrary for Map {
    /// random walk paths from the bottom row, five of them, each stepping
    /// left, up, or right; rooms random outside the fixed rows
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut map = Self::skeleton();
        for y in 1..MAP_HEIGHT - 1 {
            if y != TREASURE_ROW {
                for x in 0..MAP_WIDTH {
                    map.node_mut(x, y).assign(Room::random());
                }
            }
        }
        for _ in 0..5 {
            let mut x = rng.random_range(0..MAP_WIDTH);
            for y in 0..MAP_HEIGHT - 1 {
                let lo = x.saturating_sub(1);
                let hi = (x + 1).min(MAP_WIDTH - 1);
                let next = rng.random_range(lo..=hi);
                map.node_mut(x, y).connect(next);
                x = next;
            }
        }
        map
    }
}
