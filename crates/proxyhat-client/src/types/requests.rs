/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::PaymentType;

/// Period used by analytics calls when none is given.
pub const DEFAULT_ANALYTICS_PERIOD: &str = "24h";

/// Gate used by payment creation when none is given.
pub const DEFAULT_PAYMENT_GATE: &str = "crypto";

// ### Auth

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm_campaign: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twofa_code: Option<String>,
}

// ### Sub-users

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSubUserParams {
    pub proxy_password: String,
    pub is_traffic_limited: bool,
    /// Absent means unlimited; `Some("0")` is an explicit zero limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_user_group_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubUserParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_traffic_limited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_limit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct SubUserIds<'a> {
    pub ids: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<&'a str>,
}

// ### Sub-user groups

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSubUserGroupParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubUserGroupParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ### Locations

/// Query parameters shared by all location endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub name: Option<String>,
    pub connection_type: Option<String>,
}

impl LocationParams {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(name) = &self.name {
            query.push(("name", name.clone()));
        }
        if let Some(connection_type) = &self.connection_type {
            query.push(("connection_type", connection_type.clone()));
        }
        query
    }
}

/// Location parameters narrowed to a country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionParams {
    pub location: LocationParams,
    pub country_code: Option<String>,
}

impl RegionParams {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.location.query();
        if let Some(code) = &self.country_code {
            query.push(("country__code", code.clone()));
        }
        query
    }
}

/// Region parameters narrowed to a region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityParams {
    pub region: RegionParams,
    pub region_code: Option<String>,
}

impl CityParams {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.region.query();
        if let Some(code) = &self.region_code {
            query.push(("region__code", code.clone()));
        }
        query
    }
}

/// Location parameters narrowed to a country and city.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipcodeParams {
    pub location: LocationParams,
    pub country_code: Option<String>,
    pub city_code: Option<String>,
}

impl ZipcodeParams {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = self.location.query();
        if let Some(code) = &self.country_code {
            query.push(("country__code", code.clone()));
        }
        if let Some(code) = &self.city_code {
            query.push(("city__code", code.clone()));
        }
        query
    }
}

// ### Analytics

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsParams {
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl Default for AnalyticsParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_ANALYTICS_PERIOD.to_string(),
            start_date: None,
            end_date: None,
        }
    }
}

impl AnalyticsParams {
    /// Fill in the default period for missing params or an empty period.
    pub(crate) fn or_default(params: Option<Self>) -> Self {
        let mut params = params.unwrap_or_default();
        if params.period.is_empty() {
            params.period = DEFAULT_ANALYTICS_PERIOD.to_string();
        }
        params
    }
}

// ### Proxy presets

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProxyPresetParams {
    pub name: String,
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProxyPresetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

// ### Two-factor and password

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twofa_code: Option<String>,
}

// ### Email

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEmailChangeParams {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twofa_code: Option<String>,
}

// ### Coupons

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CouponParams {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_sum: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

// ### Payments

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentParams {
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub plan_id: String,
    /// Empty means [`DEFAULT_PAYMENT_GATE`].
    #[serde(default)]
    pub gate: String,
    pub cryptocurrency_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted() {
        let params = CreateSubUserParams {
            proxy_password: "secret".to_string(),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).expect("serialize");
        assert_eq!(body, json!({"proxy_password": "secret", "is_traffic_limited": false}));
    }

    #[test]
    fn test_explicit_zero_traffic_limit_is_sent() {
        let params = CreateSubUserParams {
            proxy_password: "secret".to_string(),
            is_traffic_limited: true,
            traffic_limit: Some("0".to_string()),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).expect("serialize");
        assert_eq!(body["traffic_limit"], "0");
    }

    #[test]
    fn test_city_query_includes_inherited_filters() {
        let params = CityParams {
            region: RegionParams {
                location: LocationParams {
                    limit: Some(5),
                    ..Default::default()
                },
                country_code: Some("US".to_string()),
            },
            region_code: Some("CA".to_string()),
        };
        assert_eq!(
            params.query(),
            vec![
                ("limit", "5".to_string()),
                ("country__code", "US".to_string()),
                ("region__code", "CA".to_string()),
            ]
        );
    }

    #[test]
    fn test_analytics_period_defaults() {
        assert_eq!(AnalyticsParams::or_default(None).period, "24h");

        let empty = AnalyticsParams {
            period: String::new(),
            start_date: Some("2024-01-01".to_string()),
            end_date: None,
        };
        let resolved = AnalyticsParams::or_default(Some(empty));
        assert_eq!(resolved.period, "24h");
        assert_eq!(resolved.start_date.as_deref(), Some("2024-01-01"));

        let custom = AnalyticsParams {
            period: "7d".to_string(),
            ..Default::default()
        };
        assert_eq!(AnalyticsParams::or_default(Some(custom)).period, "7d");
    }

    #[test]
    fn test_coupon_order_sum_serializes_as_number() {
        let params = CouponParams {
            code: "SAVE10".to_string(),
            order_sum: Some(Decimal::new(495, 1)),
            ..Default::default()
        };
        let body = serde_json::to_value(&params).expect("serialize");
        assert_eq!(body, json!({"code": "SAVE10", "order_sum": 49.5}));
    }

    #[test]
    fn test_payment_type_renamed() {
        let params = CreatePaymentParams {
            payment_type: PaymentType::Regular,
            plan_id: "plan-1".to_string(),
            gate: String::new(),
            cryptocurrency_code: "BTC".to_string(),
            coupon_code: None,
        };
        let body = serde_json::to_value(&params).expect("serialize");
        assert_eq!(body["type"], "regular");
        assert!(body.get("coupon_code").is_none());
    }
}
