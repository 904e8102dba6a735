use rust_decimal::Decimal;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of the credit and debit endpoints
///
/// `amount` is accepted as a JSON number (kept at full precision) or a string.
/// Amounts that `Decimal` cannot hold without rounding are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountRequest {
    #[serde(
        serialize_with = "rust_decimal::serde::arbitrary_precision::serialize",
        deserialize_with = "deserialize_exact_amount"
    )]
    pub amount: Decimal,
}

fn deserialize_exact_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ExactDecimalVisitor)
}

struct ExactDecimalVisitor;

impl<'de> Visitor<'de> for ExactDecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number or numeric string representable without rounding")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decimal, E> {
        Ok(Decimal::from(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decimal, E> {
        Decimal::from_str_exact(value.trim())
            .map_err(|e| E::custom(format!("invalid amount '{}': {}", value, e)))
    }

    // serde_json hands arbitrary-precision numbers over as a one-entry map
    // holding the number's literal text
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Decimal, A::Error> {
        let (_, literal) = map
            .next_entry::<String, String>()?
            .ok_or_else(|| de::Error::custom("expected a number"))?;
        self.visit_str(&literal)
    }
}
