//! Apartment: the single bookable resource exposed by the API.

use serde::{Deserialize, Serialize, Serializer};

use crate::id::ApartmentId;

/// A stored apartment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Apartment {
    pub id: ApartmentId,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_price")]
    pub price_per_night: f64,
}

/// Fields supplied when creating an apartment.
///
/// Every field is optional at the type level: values are passed through as
/// received and the persistence layer rejects a record with missing columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewApartment {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<f64>,
}

/// Partial overwrite of an existing apartment.
///
/// `None` leaves the stored value untouched. `Some(None)` writes an explicit
/// null, which the persistence layer rejects like a missing column on create.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(clippy::option_option)]
pub struct ApartmentPatch {
    pub name: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub price_per_night: Option<Option<f64>>,
}

// Largest integer an f64 holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole-number prices as JSON integers (`100`, not `100.0`).
#[allow(
    clippy::cast_possible_truncation,
    clippy::float_cmp,
    clippy::trivially_copy_pass_by_ref
)]
fn serialize_price<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
