use serde::{Deserialize, Deserializer};

use crate::error::CatalogError;

/// One price row of an item or storage package.
///
/// `location_group_id` groups datacenters that share this fee. The API emits
/// it as a number, `null`, or an empty string; the last two both mean the
/// price applies everywhere.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_group_id")]
    pub location_group_id: Option<i64>,
    #[serde(default)]
    pub hourly_recurring_fee: Option<String>,
    #[serde(default)]
    pub capacity_restriction_maximum: Option<String>,
    #[serde(default)]
    pub usage_rate: Option<String>,
}

impl Price {
    /// Monthly-equivalent fee from the hourly rate: `round(fee * 24 * 30, 2)`.
    pub fn monthly_fee(&self) -> Result<f64, CatalogError> {
        let raw = self.hourly_recurring_fee.as_deref().unwrap_or("");
        let hourly: f64 = raw.trim().parse().map_err(|_| CatalogError::InvalidFee {
            price_id: self.id,
            fee: raw.to_string(),
        })?;
        Ok(round2(hourly * 24.0 * 30.0))
    }

    /// Usage rate as a decimal, used by the storage package price rows.
    pub fn usage_rate(&self) -> Result<f64, CatalogError> {
        let raw = self.usage_rate.as_deref().unwrap_or("");
        raw.trim().parse().map_err(|_| CatalogError::InvalidFee {
            price_id: self.id,
            fee: raw.to_string(),
        })
    }
}

/// Round to 2 decimal places, the precision of every published price.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn lenient_group_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Text(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Num(n) => Ok(Some(n)),
        Raw::Text(s) if s.trim().is_empty() => Ok(None),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid locationGroupId '{}'", s))),
        Raw::Null => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_fee_rounds_to_cents() {
        let price = Price {
            id: 100,
            location_group_id: Some(7),
            hourly_recurring_fee: Some("0.05".to_string()),
            capacity_restriction_maximum: None,
            usage_rate: None,
        };
        assert_eq!(price.monthly_fee().unwrap(), 36.0);
    }

    #[test]
    fn test_monthly_fee_rejects_garbage() {
        let price = Price {
            id: 100,
            location_group_id: None,
            hourly_recurring_fee: Some("n/a".to_string()),
            capacity_restriction_maximum: None,
            usage_rate: None,
        };
        assert!(price.monthly_fee().is_err());
    }

    #[test]
    fn test_group_id_accepts_null_and_empty_string() {
        let a: Price = serde_json::from_str(r#"{"id":1,"locationGroupId":null}"#).unwrap();
        let b: Price = serde_json::from_str(r#"{"id":2,"locationGroupId":""}"#).unwrap();
        let c: Price = serde_json::from_str(r#"{"id":3,"locationGroupId":509}"#).unwrap();
        assert_eq!(a.location_group_id, None);
        assert_eq!(b.location_group_id, None);
        assert_eq!(c.location_group_id, Some(509));
    }
}
