//! # Serde module for Sketch
//!
//! This module provides serde-based (serialization and deserialization) features for
//! `Sketch`. The sketch is serialized as the byte sequence produced by
//! `Sketch::marshal_binary`, so any serde format carries exactly the same binary format,
//! including version migration and validation on deserialization.
//!
//! Refer to the serde documentation for more details on custom serialization and deserialization:
//! - [Serialization](https://serde.rs/impl-serialize.html)
//! - [Deserialization](https://serde.rs/impl-deserialize.html)
use std::hash::BuildHasher;

use serde::de::Error;
use serde::{Deserialize, Serialize};

use crate::sketch::Sketch;

impl<S: BuildHasher> Serialize for Sketch<S> {
    fn serialize<T>(&self, serializer: T) -> Result<T::Ok, T::Error>
    where
        T: serde::Serializer,
    {
        self.marshal_binary().serialize(serializer)
    }
}

impl<'de, S: BuildHasher + Default> Deserialize<'de> for Sketch<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data: Vec<u8> = Deserialize::deserialize(deserializer)?;
        let mut sketch = Sketch::default();
        sketch.unmarshal_binary(&data).map_err(Error::custom)?;
        Ok(sketch)
    }
}
