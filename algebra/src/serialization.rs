use crate::bls12_381::{BLSScalar, BLSG1, BLSG2};
use crate::prelude::*;
use ark_std::fmt;
use serde::de::{SeqAccess, Visitor};

/// The trait for serialization to bytes
pub trait FromToBytes: Sized {
    /// Convert to bytes
    fn to_canonical_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes
    fn from_canonical_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Visitor accepting either raw bytes or a base64 string.
pub struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a valid base64-encoded string or a byte array")
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        b64dec(v).map_err(E::custom)
    }

    fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E>
    where
        E: serde::de::Error,
    {
        Ok(v.to_vec())
    }

    fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let mut vec: Vec<u8> = vec![];
        while let Some(x) = seq.next_element()? {
            vec.push(x);
        }
        Ok(vec)
    }
}

/// Implement serde for a type that implements `FromToBytes`.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&self.to_canonical_bytes()))
                } else {
                    serializer.serialize_bytes(&self.to_canonical_bytes())
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::BytesVisitor)?
                };
                $t::from_canonical_bytes(bytes.as_slice()).map_err(serde::de::Error::custom)
            }
        }
    };
}

macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl FromToBytes for $t {
            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_bytes()
            }
            fn from_canonical_bytes(bytes: &[u8]) -> Result<$t> {
                if bytes.len() != $t::bytes_len() {
                    return Err(AlgebraError::DeserializationError);
                }
                $t::from_bytes(bytes)
            }
        }
    };
}

macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl FromToBytes for $g {
            fn to_canonical_bytes(&self) -> Vec<u8> {
                self.to_compressed_bytes()
            }
            fn from_canonical_bytes(bytes: &[u8]) -> Result<$g> {
                $g::from_compressed_bytes(bytes)
            }
        }
    };
}

to_from_bytes_scalar!(BLSScalar);
to_from_bytes_group!(BLSG1);
to_from_bytes_group!(BLSG2);

serialize_deserialize!(BLSScalar);
serialize_deserialize!(BLSG1);
serialize_deserialize!(BLSG2);
