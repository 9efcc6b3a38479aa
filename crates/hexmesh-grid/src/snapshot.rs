//! Serde support: cells as `{ q, r, s, data }` records, grids as lists.
//!
//! `s` is written for readers that expect all three axes. On the way in it is
//! optional; when present it must agree with q and r.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::cell::Hex;
use crate::error::GridError;
use crate::grid::Grid;

#[derive(serde::Deserialize)]
struct HexRecord<T> {
    q: i32,
    r: i32,
    s: Option<i64>,
    data: Option<T>,
}

impl<T> TryFrom<HexRecord<T>> for Hex<T> {
    type Error = GridError;

    fn try_from(record: HexRecord<T>) -> Result<Self, Self::Error> {
        let HexRecord { q, r, s, data } = record;
        match s {
            Some(s) if s != -i64::from(q) - i64::from(r) => Err(GridError::CoordinateMismatch { q, r, s }),
            _ => Ok(Hex { q, r, data }),
        }
    }
}

impl<T: Serialize> Serialize for Hex<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Hex", 4)?;
        state.serialize_field("q", &self.q)?;
        state.serialize_field("r", &self.r)?;
        state.serialize_field("s", &self.s())?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Hex<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = HexRecord::<T>::deserialize(deserializer)?;
        Hex::try_from(record).map_err(serde::de::Error::custom)
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Grid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<Hex<T>>::deserialize(deserializer)?;
        Ok(cells.into_iter().collect())
    }
}
