//! `serde` support. A `Tree` is written as its keys in sorted order and read back by
//! inserting each key, so any sequence deserializes into a balanced tree.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::Tree;

impl<K: Serialize> Serialize for Tree<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, K> Deserialize<'de> for Tree<K>
where
    K: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<K>::deserialize(deserializer).map(|keys| keys.into_iter().collect())
    }
}
