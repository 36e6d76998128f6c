use crate::Value;
use serde::Serialize;

/// Largest value each slot of a field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Ceiling {
    /// every slot shares one ceiling
    Flat(Value),
    /// per-slot ceilings, repeating every `len()` slots
    Tiled(&'static [Value]),
}

/// A named, contiguous run of slots within an observation.
///
/// Fields are chained at compile time with [`Field::then`], so each one
/// knows its own offset and nothing downstream does offset arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    name: &'static str,
    offset: usize,
    width: usize,
    ceiling: Ceiling,
}

impl Field {
    /// the field at offset zero
    pub const fn first(name: &'static str, width: usize, ceiling: Ceiling) -> Self {
        Self {
            name,
            offset: 0,
            width,
            ceiling,
        }
    }
    /// the field immediately after this one
    pub const fn then(&self, name: &'static str, width: usize, ceiling: Ceiling) -> Self {
        Self {
            name,
            offset: self.end(),
            width,
            ceiling,
        }
    }
    pub const fn name(&self) -> &'static str {
        self.name
    }
    pub const fn offset(&self) -> usize {
        self.offset
    }
    pub const fn width(&self) -> usize {
        self.width
    }
    pub const fn end(&self) -> usize {
        self.offset + self.width
    }
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.offset..self.end()
    }

    /// ceiling of the i-th slot of this field
    pub const fn ceiling(&self, i: usize) -> Value {
        match self.ceiling {
            Ceiling::Flat(max) => max,
            Ceiling::Tiled(maxes) => maxes[i % maxes.len()],
        }
    }

    /// absolute index of the i-th slot of this field. anything past the
    /// field's width would land in a neighbour, so it is refused.
    pub fn index(&self, i: usize) -> anyhow::Result<usize> {
        match i < self.width {
            true => Ok(self.offset + i),
            false => Err(anyhow::anyhow!(
                "slot {} outside {} field of width {}",
                i,
                self.name,
                self.width
            )),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<12} [{:>3}..{:>3})", self.name, self.offset, self.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Field = Field::first("a", 3, Ceiling::Flat(9));
    const B: Field = A.then("b", 4, Ceiling::Tiled(&[1, 2]));

    #[test]
    fn chaining_accumulates_offsets() {
        assert_eq!(A.range(), 0..3);
        assert_eq!(B.range(), 3..7);
    }

    #[test]
    fn tiled_ceilings_repeat() {
        assert_eq!((0..4).map(|i| B.ceiling(i)).collect::<Vec<_>>(), vec![1, 2, 1, 2]);
        assert_eq!(A.ceiling(2), 9);
    }

    #[test]
    fn index_refuses_overflow_into_neighbour() {
        assert_eq!(B.index(3).unwrap(), 6);
        assert!(A.index(3).is_err());
    }
}
