/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decode `null` as the field's zero value, like a missing key.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ### Auth

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterResponse {
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    #[serde(deserialize_with = "null_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_default")]
    pub token_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    #[serde(deserialize_with = "null_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_default")]
    pub token_type: String,
    #[serde(deserialize_with = "null_default")]
    pub requires_2fa: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficInfo {
    pub subscription: Option<String>,
    pub subscription_starts_at: Option<String>,
    pub subscription_expires_at: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub regular_bytes: u64,
    #[serde(deserialize_with = "null_default")]
    pub regular_human: String,
    #[serde(deserialize_with = "null_default")]
    pub subscription_bytes: u64,
    #[serde(deserialize_with = "null_default")]
    pub subscription_human: String,
    #[serde(deserialize_with = "null_default")]
    pub total_bytes: u64,
    #[serde(deserialize_with = "null_default")]
    pub total_human: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    #[serde(deserialize_with = "null_default")]
    pub traffic: TrafficInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupportedProvider {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub slug: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialAccount {
    #[serde(deserialize_with = "null_default")]
    pub provider: String,
    pub email: Option<String>,
    pub connected_at: Option<String>,
}

// ### Sub-users

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubUser {
    #[serde(deserialize_with = "null_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_default")]
    pub proxy_username: String,
    #[serde(deserialize_with = "null_default")]
    pub is_default_user: bool,
    #[serde(deserialize_with = "null_default")]
    pub is_traffic_limited: bool,
    #[serde(deserialize_with = "null_default")]
    pub used_traffic: u64,
    #[serde(deserialize_with = "null_default")]
    pub traffic_limit: u64,
    #[serde(deserialize_with = "null_default")]
    pub lifecycle_status: String,
    pub name: Option<String>,
    pub notes: Option<String>,
    pub sub_user_group_id: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetUsageResponse {
    #[serde(deserialize_with = "null_default")]
    pub reset: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkDeleteResponse {
    #[serde(deserialize_with = "null_default")]
    pub requested: u64,
    #[serde(deserialize_with = "null_default")]
    pub deleted: u64,
    #[serde(deserialize_with = "null_default")]
    pub skipped: u64,
    #[serde(deserialize_with = "null_default")]
    pub not_found: u64,
    #[serde(deserialize_with = "null_default")]
    pub failed: u64,
}

// ### Sub-user groups

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubUserGroup {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_default")]
    pub sub_users_count: u64,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub sub_users: Vec<Value>,
}

// ### Locations

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub availability: String,
    #[serde(deserialize_with = "null_default")]
    pub connection_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub country_code: String,
    pub availability: Option<String>,
    pub connection_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct City {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub country_code: String,
    pub region_code: Option<String>,
    pub availability: Option<String>,
    pub connection_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Isp {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub country_code: String,
    pub availability: Option<String>,
    pub connection_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Zipcode {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub country_code: String,
    pub city_code: Option<String>,
    pub availability: Option<String>,
    pub connection_type: Option<String>,
}

// ### Analytics

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeSeriesResponse {
    #[serde(deserialize_with = "null_default")]
    pub labels: Vec<String>,
    #[serde(deserialize_with = "null_default")]
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TotalResponse {
    #[serde(deserialize_with = "null_default")]
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainBreakdownItem {
    #[serde(deserialize_with = "null_default")]
    pub domain: String,
    #[serde(deserialize_with = "null_default")]
    pub bandwidth: u64,
    #[serde(deserialize_with = "null_default")]
    pub requests: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainBreakdownResponse {
    #[serde(deserialize_with = "null_default")]
    pub items: Vec<DomainBreakdownItem>,
}

// ### Profile

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    #[serde(deserialize_with = "null_default")]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKey {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    pub name: Option<String>,
    /// Only returned on creation and regeneration.
    pub plain_text_token: Option<String>,
    pub created_at: Option<String>,
}

// ### Two-factor

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoFactorStatus {
    #[serde(deserialize_with = "null_default")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoFactorEnableResponse {
    #[serde(deserialize_with = "null_default")]
    pub qr: String,
    #[serde(deserialize_with = "null_default")]
    pub secret: String,
    #[serde(deserialize_with = "null_default")]
    pub recovery_codes: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryCodes {
    #[serde(deserialize_with = "null_default")]
    pub codes: Vec<String>,
}

// ### Email

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailChangeResponse {
    #[serde(deserialize_with = "null_default")]
    pub message: String,
}

// ### Coupons

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coupon {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_default")]
    pub coupon_type: String,
    #[serde(deserialize_with = "null_default")]
    pub data: Value,
    pub discount: Option<Decimal>,
    pub final_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponResponse {
    #[serde(deserialize_with = "null_default")]
    pub success: bool,
    pub coupon: Option<Coupon>,
}

// ### Plans

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegularPlan {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub gb: u64,
    #[serde(deserialize_with = "null_default")]
    pub price_per_gb: Decimal,
    #[serde(deserialize_with = "null_default")]
    pub price_total: Decimal,
    #[serde(deserialize_with = "null_default")]
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionPlan {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub gb: u64,
    #[serde(deserialize_with = "null_default")]
    pub price_per_gb: Decimal,
    #[serde(deserialize_with = "null_default")]
    pub price_total: Decimal,
    #[serde(deserialize_with = "null_default")]
    pub period: String,
    #[serde(deserialize_with = "null_default")]
    pub rollover_enabled: bool,
}

// ### Payments

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCreateResponse {
    #[serde(deserialize_with = "null_default")]
    pub success: bool,
    #[serde(deserialize_with = "null_default")]
    pub payment_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cryptocurrency {
    #[serde(deserialize_with = "null_default")]
    pub code: String,
    #[serde(deserialize_with = "null_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_default")]
    pub network: String,
    pub icon: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDetails {
    #[serde(deserialize_with = "null_default")]
    pub pay_address: String,
    #[serde(deserialize_with = "null_default")]
    pub crypto_amount: Decimal,
    #[serde(deserialize_with = "null_default")]
    pub amount_usd: Decimal,
    #[serde(deserialize_with = "null_default")]
    pub crypto: Cryptocurrency,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    pub tx_hash: Option<String>,
    pub expires_at: Option<String>,
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_default")]
    pub payment_type: String,
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub created_at: Option<String>,
}

// ### Proxy presets

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyPreset {
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub data: Map<String, Value>,
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_user_missing_optionals_are_none() {
        let json = r#"{
            "uuid": "su-1",
            "proxy_username": "user1",
            "is_traffic_limited": true,
            "traffic_limit": 0,
            "name": null
        }"#;
        let sub_user: SubUser = serde_json::from_str(json).expect("deserialize");
        assert_eq!(sub_user.uuid, "su-1");
        assert!(sub_user.is_traffic_limited);
        assert_eq!(sub_user.traffic_limit, 0);
        assert!(sub_user.name.is_none());
        assert!(sub_user.sub_user_group_id.is_none());
    }

    #[test]
    fn test_null_fields_decode_as_zero_values() {
        let sub_user: SubUser = serde_json::from_str(
            r#"{"uuid":"su-1","lifecycle_status":null,"created_at":null,"used_traffic":null,"is_default_user":null}"#,
        )
        .expect("deserialize sub-user");
        assert_eq!(sub_user.uuid, "su-1");
        assert!(sub_user.lifecycle_status.is_empty());
        assert!(sub_user.created_at.is_empty());
        assert_eq!(sub_user.used_traffic, 0);
        assert!(!sub_user.is_default_user);

        let group: SubUserGroup = serde_json::from_str(r#"{"id":"g1","sub_users":null}"#)
            .expect("deserialize group");
        assert!(group.sub_users.is_empty());

        let preferences: Preferences =
            serde_json::from_str(r#"{"data":null}"#).expect("deserialize preferences");
        assert!(preferences.data.is_empty());

        let plan: RegularPlan = serde_json::from_str(r#"{"id":"p1","price_per_gb":null}"#)
            .expect("deserialize plan");
        assert_eq!(plan.price_per_gb, Decimal::ZERO);

        let details: PaymentDetails =
            serde_json::from_str(r#"{"crypto_amount":null,"crypto":null}"#)
                .expect("deserialize payment details");
        assert_eq!(details.crypto_amount, Decimal::ZERO);
        assert_eq!(details.crypto, Cryptocurrency::default());

        let user: User = serde_json::from_str(r#"{"uuid":"u-1","traffic":null}"#)
            .expect("deserialize user");
        assert_eq!(user.traffic, TrafficInfo::default());
    }

    #[test]
    fn test_plan_prices_decode_from_numbers() {
        let json = r#"{"id":"p1","name":"Starter","gb":10,"price_per_gb":3.5,"price_total":35,"currency":"USD"}"#;
        let plan: RegularPlan = serde_json::from_str(json).expect("deserialize");
        assert_eq!(plan.price_per_gb, Decimal::new(35, 1));
        assert_eq!(plan.price_total, Decimal::new(35, 0));
    }

    #[test]
    fn test_payment_amount_absent_vs_present() {
        let absent: Payment = serde_json::from_str(r#"{"id":"pay-1","type":"regular"}"#)
            .expect("deserialize");
        assert!(absent.amount.is_none());
        assert_eq!(absent.payment_type, "regular");

        let zero: Payment = serde_json::from_str(r#"{"id":"pay-2","amount":0}"#)
            .expect("deserialize");
        assert_eq!(zero.amount, Some(Decimal::ZERO));
    }
}
