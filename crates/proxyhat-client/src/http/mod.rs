/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod cancel;
pub mod client;
pub mod envelope;
pub mod error;
pub mod request;

pub mod analytics;
pub mod auth;
pub mod coupons;
pub mod email;
pub mod locations;
pub mod payments;
pub mod plans;
pub mod profile;
pub mod proxy_presets;
pub mod sub_user_groups;
pub mod sub_users;
pub mod two_factor;

pub use cancel::{cancellable, with_deadline};
pub use client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ProxyhatClient};
pub use envelope::decode_envelope;
pub use error::{ApiError, ProxyhatError, RateLimitError, Result};
pub use request::ApiRequest;

pub use analytics::AnalyticsApi;
pub use auth::AuthApi;
pub use coupons::CouponsApi;
pub use email::EmailApi;
pub use locations::LocationsApi;
pub use payments::PaymentsApi;
pub use plans::PlansApi;
pub use profile::ProfileApi;
pub use proxy_presets::ProxyPresetsApi;
pub use sub_user_groups::SubUserGroupsApi;
pub use sub_users::SubUsersApi;
pub use two_factor::TwoFactorApi;
