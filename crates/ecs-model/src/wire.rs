// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Wire-level helpers shared by every record and enum.
//!
//! - [`WireEnum`]: canonical literal and strict reverse lookup for closed enums
//! - debug rendering of records as `{name: value, ...}`
//! - duplicate-rejecting insertion for map fields
//! - epoch-seconds timestamps as used by the JSON protocol
//! - double fields that refuse to put a non-finite number on the wire

use std::cell::Cell;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;
use strum::{IntoEnumIterator, VariantNames};
use tracing::debug;

use crate::error::{ModelError, Result};

/// A closed set of constants, each backed by exactly one wire literal.
///
/// `Display` and [`WireEnum::as_str`] return the literal; [`WireEnum::from_value`]
/// is the only way to turn an untrusted string into a constant.
pub trait WireEnum:
    Copy + FromStr + Into<&'static str> + IntoEnumIterator + VariantNames + 'static
{
    /// Type name reported in [`ModelError::InvalidEnumValue`].
    const TYPE_NAME: &'static str;

    /// The canonical wire literal.
    fn as_str(self) -> &'static str {
        self.into()
    }

    /// Look up the constant for a wire literal.
    ///
    /// Matching is exact: no case folding, no trimming, no default.
    fn from_value(value: &str) -> Result<Self> {
        value.parse().map_err(|_| {
            debug!(type_name = Self::TYPE_NAME, value, "Rejected enum literal");
            ModelError::InvalidEnumValue {
                type_name: Self::TYPE_NAME,
                value: value.to_string(),
            }
        })
    }

    /// All constants in declaration order.
    fn values() -> Vec<Self> {
        Self::iter().collect()
    }
}

macro_rules! impl_wire_enum {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::wire::WireEnum for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
            }
        )+
    };
}

pub(crate) use impl_wire_enum;

macro_rules! record_display {
    ($($record:ty),+ $(,)?) => {
        $(
            impl ::std::fmt::Display for $record {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    $crate::wire::describe(self, f)
                }
            }
        )+
    };
}

pub(crate) use record_display;

thread_local! {
    static RENDERING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as rendering for display until dropped.
struct RenderScope {
    previous: bool,
}

impl RenderScope {
    fn enter() -> Self {
        Self {
            previous: RENDERING.with(|flag| flag.replace(true)),
        }
    }
}

impl Drop for RenderScope {
    fn drop(&mut self) {
        RENDERING.with(|flag| flag.set(self.previous));
    }
}

fn rendering() -> bool {
    RENDERING.with(Cell::get)
}

/// Render a record as `{name: value, name: value}`.
///
/// Absent fields are skipped by the serializer, so only set fields show up,
/// in declaration order and under their wire names. Non-finite doubles show
/// up as `NaN`, `inf` or `-inf`.
pub(crate) fn describe<T: Serialize>(record: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let value = {
        let _scope = RenderScope::enter();
        serde_json::to_value(record)
    };
    write_value(&value.map_err(|_| fmt::Error)?, f)
}

fn write_value(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Null => Ok(()),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => f.write_str(s),
        Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_value(item, f)?;
            }
            f.write_str("]")
        }
        Value::Object(fields) => {
            f.write_str("{")?;
            let mut first = true;
            for (name, field) in fields.iter().filter(|(_, v)| !v.is_null()) {
                if !first {
                    f.write_str(", ")?;
                }
                first = false;
                write!(f, "{}: ", name)?;
                write_value(field, f)?;
            }
            f.write_str("}")
        }
    }
}

/// Insert `key` into a map field, failing if it is already present.
///
/// The map is left untouched on failure.
pub(crate) fn insert_unique(
    entries: &mut BTreeMap<String, String>,
    field: &'static str,
    key: String,
    value: String,
) -> Result<()> {
    match entries.entry(key) {
        Entry::Occupied(occupied) => {
            debug!(field, key = %occupied.key(), "Rejected duplicate map key");
            Err(ModelError::DuplicateMapKey {
                field,
                key: occupied.key().clone(),
            })
        }
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}

/// Optional timestamps carried as fractional epoch seconds.
pub(crate) mod epoch_seconds {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => serializer.serialize_f64(ts.timestamp_millis() as f64 / 1000.0),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let seconds = Option::<f64>::deserialize(deserializer)?;
        seconds
            .map(|s| {
                Utc.timestamp_millis_opt((s * 1000.0).round() as i64)
                    .single()
                    .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {}", s)))
            })
            .transpose()
    }
}

/// Optional doubles.
///
/// JSON has no literal for NaN or infinity, so serializing one for the wire
/// fails instead of silently sending `null`.
pub(crate) mod double {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<f64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) if v.is_finite() => serializer.serialize_f64(*v),
            Some(v) if super::rendering() => serializer.collect_str(v),
            Some(v) => Err(serde::ser::Error::custom(format!(
                "non-finite number {} cannot be sent",
                v
            ))),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<f64>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_unique_rejects_existing_key() {
        let mut entries = BTreeMap::new();
        insert_unique(&mut entries, "labels", "k".into(), "v1".into()).unwrap();
        let err = insert_unique(&mut entries, "labels", "k".into(), "v2".into()).unwrap_err();

        assert!(matches!(err, ModelError::DuplicateMapKey { field: "labels", .. }));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["k"], "v1");
    }

    #[test]
    fn test_write_value_skips_nulls() {
        struct Show(Value);
        impl fmt::Display for Show {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_value(&self.0, f)
            }
        }

        let value = serde_json::json!({"a": 1, "b": null, "c": ["x", "y"], "d": {"e": true}});
        assert_eq!(Show(value).to_string(), "{a: 1, c: [x, y], d: {e: true}}");
    }

    #[derive(Debug, PartialEq, Serialize, serde::Deserialize)]
    struct Stamped {
        #[serde(default, with = "epoch_seconds", skip_serializing_if = "Option::is_none")]
        at: Option<chrono::DateTime<chrono::Utc>>,
    }

    #[derive(Serialize)]
    struct Measured {
        #[serde(with = "double")]
        value: Option<f64>,
    }

    impl fmt::Display for Measured {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            describe(self, f)
        }
    }

    #[test]
    fn test_epoch_seconds_before_epoch() {
        use chrono::{TimeZone, Utc};

        let stamped = Stamped {
            at: Some(Utc.timestamp_millis_opt(-1_500).unwrap()),
        };
        assert_eq!(serde_json::to_string(&stamped).unwrap(), r#"{"at":-1.5}"#);

        let decoded: Stamped = serde_json::from_str(r#"{"at":-1.5}"#).unwrap();
        assert_eq!(decoded, stamped);
        assert_eq!(
            decoded.at.unwrap().to_rfc3339(),
            "1969-12-31T23:59:58.500+00:00"
        );
    }

    #[test]
    fn test_epoch_seconds_out_of_range() {
        let err = serde_json::from_str::<Stamped>(r#"{"at":1e300}"#).unwrap_err();
        assert!(err.to_string().contains("timestamp out of range"));

        let err = serde_json::from_str::<Stamped>(r#"{"at":-1e300}"#).unwrap_err();
        assert!(err.to_string().contains("timestamp out of range"));
    }

    #[test]
    fn test_epoch_seconds_absent_and_null() {
        let decoded: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded.at, None);
        let decoded: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert_eq!(decoded.at, None);
    }

    #[test]
    fn test_double_rejects_non_finite_on_the_wire() {
        let err = serde_json::to_vec(&Measured {
            value: Some(f64::INFINITY),
        })
        .unwrap_err();
        assert!(err.to_string().contains("non-finite number inf"));

        let body = serde_json::to_string(&Measured { value: Some(2.5) }).unwrap();
        assert_eq!(body, r#"{"value":2.5}"#);
    }

    #[test]
    fn test_double_renders_non_finite_for_display() {
        assert_eq!(Measured { value: Some(f64::NAN) }.to_string(), "{value: NaN}");
        assert_eq!(
            Measured {
                value: Some(f64::NEG_INFINITY)
            }
            .to_string(),
            "{value: -inf}"
        );
        assert!(!rendering());
    }
}
