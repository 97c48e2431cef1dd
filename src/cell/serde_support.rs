/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Serializes a cell as its bare value.

use serde::{
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};

use super::unsigned_cell::UnsignedCell;
use super::value::CellValue;

impl<T> Serialize for UnsignedCell<T>
where
    T: CellValue + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for UnsignedCell<T>
where
    T: CellValue + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}
