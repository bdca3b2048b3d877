//! Serde support: a pack serialises as a fixed-length tuple of its lanes

use serde::de::{Error as DeError, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::lane::Lane;
use crate::lane_count::{LaneCount, SupportedLaneCount};
use crate::pack::Pack;

impl<T, const N: usize> Serialize for Pack<T, N>
where
    T: Lane + Serialize,
    LaneCount<N>: SupportedLaneCount,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for lane in self.iter() {
            tuple.serialize_element(lane)?;
        }
        tuple.end()
    }
}

struct PackVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> Visitor<'de> for PackVisitor<T, N>
where
    T: Lane + Deserialize<'de>,
    LaneCount<N>: SupportedLaneCount,
{
    type Value = Pack<T, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a sequence of {} {} lanes", N, T::NAME)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut lanes = [T::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            *lane = seq
                .next_element()?
                .ok_or_else(|| DeError::invalid_length(i, &self))?;
        }
        if seq.next_element::<T>()?.is_some() {
            return Err(DeError::invalid_length(N + 1, &self));
        }
        Ok(Pack::from_array(lanes))
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Pack<T, N>
where
    T: Lane + Deserialize<'de>,
    LaneCount<N>: SupportedLaneCount,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, PackVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack;

    #[test]
    fn test_json_array() {
        let p: Pack<i32, 4> = pack![1, -2, 3, 4];
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[1,-2,3,4]");
        let back: Pack<i32, 4> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert!(serde_json::from_str::<Pack<f64, 2>>("[1.0]").is_err());
        assert!(serde_json::from_str::<Pack<f64, 2>>("[1.0, 2.0, 3.0]").is_err());
        assert!(serde_json::from_str::<Pack<u8, 2>>("[1, 256]").is_err());
    }
}
