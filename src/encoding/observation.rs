use super::field::Field;
use super::layout::OBSERVATION_SIZE;
use crate::Value;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// A fixed-length encoded game state, or the per-slot ceilings of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Observation([Value; OBSERVATION_SIZE]);

impl Observation {
    pub fn zeros() -> Self {
        Self([0; OBSERVATION_SIZE])
    }
    pub fn values(&self) -> &[Value] {
        &self.0
    }
    pub const fn len(&self) -> usize {
        OBSERVATION_SIZE
    }
    pub const fn is_empty(&self) -> bool {
        false
    }
    /// the slots belonging to one field
    pub fn field(&self, field: &Field) -> &[Value] {
        &self.0[field.range()]
    }

    /// divide each slot by its ceiling. slots whose ceiling is zero read 0.
    pub fn normalized(&self, maximum: &Self) -> Vec<f32> {
        self.0
            .iter()
            .zip(maximum.0.iter())
            .map(|(v, m)| match m {
                0 => 0.0,
                m => *v as f32 / *m as f32,
            })
            .collect()
    }

    pub(crate) fn set(&mut self, field: &Field, i: usize, value: Value) -> anyhow::Result<()> {
        let index = field.index(i)?;
        self.0[index] = value;
        Ok(())
    }

    /// saturating increment
    pub(crate) fn bump(&mut self, field: &Field, i: usize, cap: Value) -> anyhow::Result<()> {
        let index = field.index(i)?;
        self.0[index] = (self.0[index] + 1).min(cap);
        Ok(())
    }
}

impl std::ops::Index<usize> for Observation {
    type Output = Value;
    fn index(&self, i: usize) -> &Value {
        &self.0[i]
    }
}

impl From<Observation> for Vec<Value> {
    fn from(obs: Observation) -> Self {
        obs.0.to_vec()
    }
}

impl TryFrom<Vec<Value>> for Observation {
    type Error = anyhow::Error;
    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        let n = values.len();
        values
            .try_into()
            .map(Self)
            .map_err(|_| anyhow::anyhow!("observation needs {} values, got {}", OBSERVATION_SIZE, n))
    }
}

impl Serialize for Observation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for Observation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Value>::deserialize(deserializer)
            .and_then(|v| Self::try_from(v).map_err(serde::de::Error::custom))
    }
}
