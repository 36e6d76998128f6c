//! Flat bit encoding of a map's connectivity and room grid.
//!
//! Three segments, in order:
//!
//! - **start**: one bit per row-0 node, set if it has any outgoing edge
//! - **edges**: three bits (left, straight, right) per node for rows 0
//!   through 13. the rest row (14) has no outgoing edges and is not emitted
//! - **rooms**: six-way room one-hot per node for rows 1 through 12, minus
//!   the treasure row. rows 0, 8, and 14 are fixed by the act generator.
//!   row 13 is left out on purpose; its rooms never reach the encoding
use super::map::Map;
use crate::Bit;
use crate::MAP_HEIGHT;
use crate::MAP_WIDTH;
use crate::ROOM_KINDS;
use crate::TREASURE_ROW;

/// rows whose edges are encoded
pub const EDGE_ROWS: std::ops::Range<usize> = 0..MAP_HEIGHT - 1;
/// rows whose rooms are encoded, before skipping the treasure row
pub const ROOM_ROWS: std::ops::Range<usize> = 1..MAP_HEIGHT - 2;

pub const START_BITS: usize = MAP_WIDTH;
pub const EDGE_BITS: usize = 3 * MAP_WIDTH * (MAP_HEIGHT - 1);
pub const ROOM_BITS: usize = ROOM_KINDS * MAP_WIDTH * (MAP_HEIGHT - 4);
pub const TOPOLOGY_SIZE: usize = START_BITS + EDGE_BITS + ROOM_BITS;

const _: () = assert!(START_BITS == 7);
const _: () = assert!(EDGE_BITS == 294);
const _: () = assert!(ROOM_BITS == 462);
const _: () = assert!(TOPOLOGY_SIZE == 763);

impl Map {
    pub fn topology(&self) -> Vec<Bit> {
        let mut bits = Vec::with_capacity(TOPOLOGY_SIZE);
        bits.extend(self.starts());
        bits.extend(self.directions());
        bits.extend(self.rooms());
        debug_assert_eq!(bits.len(), TOPOLOGY_SIZE);
        bits
    }

    fn starts(&self) -> impl Iterator<Item = Bit> + '_ {
        (0..MAP_WIDTH)
            .map(|x| self.node(x, 0).edge_count() > 0)
            .map(Bit::from)
    }

    fn directions(&self) -> impl Iterator<Item = Bit> + '_ {
        EDGE_ROWS
            .flat_map(|y| (0..MAP_WIDTH).map(move |x| (x, y)))
            .flat_map(|(x, y)| self.node(x, y).directions(x))
            .map(Bit::from)
    }

    fn rooms(&self) -> impl Iterator<Item = Bit> + '_ {
        ROOM_ROWS
            .filter(|y| *y != TREASURE_ROW)
            .flat_map(|y| (0..MAP_WIDTH).map(move |x| (x, y)))
            .map(|(x, y)| self.node(x, y).room() as usize)
            .flat_map(|room| (0..ROOM_KINDS).map(move |i| room == i))
            .map(Bit::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::map::Room;

    #[test]
    fn length_is_fixed() {
        assert_eq!(Map::new().topology().len(), TOPOLOGY_SIZE);
        assert_eq!(Map::skeleton().topology().len(), TOPOLOGY_SIZE);
        assert_eq!(Map::random().topology().len(), TOPOLOGY_SIZE);
    }

    #[test]
    fn bits_are_binary() {
        assert!(Map::random().topology().iter().all(|b| *b <= 1));
    }

    #[test]
    fn start_segment_is_row_zero_reachability() {
        let mut map = Map::new();
        map.connect(1, 0, 2).unwrap();
        map.connect(6, 0, 5).unwrap();
        let bits = map.topology();
        assert_eq!(&bits[..START_BITS], &[0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn edge_segment_places_direction_bits() {
        let mut map = Map::new();
        map.connect(3, 2, 2).unwrap();
        map.connect(3, 2, 4).unwrap();
        let bits = map.topology();
        let at = START_BITS + (2 * MAP_WIDTH + 3) * 3;
        assert_eq!(&bits[at..at + 3], &[1, 0, 1]);
        assert_eq!(bits[START_BITS..START_BITS + EDGE_BITS].iter().filter(|b| **b == 1).count(), 2);
    }

    #[test]
    fn edge_segment_ends_at_row_thirteen() {
        let mut map = Map::new();
        map.connect(3, 13, 4).unwrap();
        let bits = map.topology();
        let at = START_BITS + (13 * MAP_WIDTH + 3) * 3;
        assert_eq!(&bits[at..at + 3], &[0, 0, 1]);
        assert_eq!(at + 3 + 3 * (MAP_WIDTH - 4), START_BITS + EDGE_BITS);
    }

    #[test]
    fn row_thirteen_rooms_are_not_encoded() {
        let mut map = Map::skeleton();
        let before = map.topology();
        for x in 0..MAP_WIDTH {
            map.assign(x, 13, Room::Elite).unwrap();
        }
        assert_eq!(map.topology(), before);
    }

    #[test]
    fn room_segment_skips_fixed_rows() {
        // only row 0, 8, 14 populated: nothing should reach the room segment
        let bits = Map::skeleton().topology();
        assert!(bits[START_BITS + EDGE_BITS..].iter().all(|b| *b == 0));
    }

    #[test]
    fn room_segment_one_hot() {
        let mut map = Map::new();
        map.assign(0, 1, Room::Elite).unwrap();
        map.assign(0, 9, Room::Shop).unwrap();
        let bits = map.topology();
        let rooms = &bits[START_BITS + EDGE_BITS..];
        // row 1 is the first encoded row
        assert_eq!(&rooms[..ROOM_KINDS], &[0, 0, 0, 1, 0, 0]);
        // row 9 follows rows 1..=7, the treasure row being skipped
        let at = 7 * MAP_WIDTH * ROOM_KINDS;
        assert_eq!(&rooms[at..at + ROOM_KINDS], &[1, 0, 0, 0, 0, 0]);
        assert_eq!(rooms.iter().filter(|b| **b == 1).count(), 2);
    }
}
