use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::BFloat16;

// Stored as the raw pattern so that NaN payloads survive.
impl Serialize for BFloat16 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl<'de> Deserialize<'de> for BFloat16 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u16::deserialize(deserializer).map(BFloat16::from_bits)
    }
}
