/*
[INPUT]:  Mock location catalogue responses
[OUTPUT]: Test results for location filters and query encoding
[POS]:    Integration tests - locations
[UPDATE]: When location filters or endpoints change
*/

mod common;

use common::{data, payload, setup_test};
use proxyhat_client::{CityParams, LocationParams, RegionParams, ZipcodeParams};
use serde_json::json;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, Request};

#[tokio::test]
async fn test_countries_with_filters() {
    let (server, client) = setup_test().await;
    Mock::given(method("GET"))
        .and(path("/locations/countries"))
        .and(query_param("limit", "10"))
        .and(query_param("name", "United"))
        .respond_with(payload(json!([
            {"code": "US", "name": "United States", "availability": "high", "connection_type": "residential"},
            {"code": "GB", "name": "United Kingdom", "availability": "medium", "connection_type": "residential"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = LocationParams {
        limit: Some(10),
        name: Some("United".to_string()),
        ..Default::default()
    };
    let countries = assert_ok!(client.locations().countries(Some(&params)).await);
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].code, "US");
}

#[tokio::test]
async fn test_countries_without_params_sends_no_query() {
    let (server, client) = setup_test().await;
    Mock::given(method("GET"))
        .and(path("/locations/countries"))
        .and(|req: &Request| req.url.query().is_none())
        .respond_with(data(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let countries = assert_ok!(client.locations().countries(None).await);
    assert!(countries.is_empty());
}

#[tokio::test]
async fn test_regions_and_isps_filter_by_country() {
    let (server, client) = setup_test().await;
    Mock::given(method("GET"))
        .and(path("/locations/regions"))
        .and(query_param("country__code", "US"))
        .respond_with(payload(json!([
            {"code": "CA", "name": "California", "country_code": "US"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/locations/isps"))
        .and(query_param("country__code", "US"))
        .and(query_param("connection_type", "mobile"))
        .respond_with(payload(json!([
            {"code": "att", "name": "AT&T", "country_code": "US", "connection_type": "mobile"}
        ])))
        .mount(&server)
        .await;

    let params = RegionParams {
        country_code: Some("US".to_string()),
        ..Default::default()
    };
    let regions = assert_ok!(client.locations().regions(Some(&params)).await);
    assert_eq!(regions[0].name, "California");
    assert!(regions[0].availability.is_none());

    let params = RegionParams {
        location: LocationParams {
            connection_type: Some("mobile".to_string()),
            ..Default::default()
        },
        country_code: Some("US".to_string()),
    };
    let isps = assert_ok!(client.locations().isps(Some(&params)).await);
    assert_eq!(isps[0].name, "AT&T");
    assert_eq!(isps[0].connection_type.as_deref(), Some("mobile"));
}

#[tokio::test]
async fn test_cities_encode_spaces_in_names() {
    let (server, client) = setup_test().await;
    Mock::given(method("GET"))
        .and(path("/locations/cities"))
        .and(query_param("name", "San Francisco"))
        .and(query_param("country__code", "US"))
        .and(query_param("region__code", "CA"))
        .respond_with(payload(json!([
            {"code": "sf", "name": "San Francisco", "country_code": "US", "region_code": "CA"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = CityParams {
        region: RegionParams {
            location: LocationParams {
                name: Some("San Francisco".to_string()),
                ..Default::default()
            },
            country_code: Some("US".to_string()),
        },
        region_code: Some("CA".to_string()),
    };
    let cities = assert_ok!(client.locations().cities(Some(&params)).await);
    assert_eq!(cities[0].region_code.as_deref(), Some("CA"));
}

#[tokio::test]
async fn test_zipcodes_filter_by_city() {
    let (server, client) = setup_test().await;
    Mock::given(method("GET"))
        .and(path("/locations/zipcodes"))
        .and(query_param("offset", "20"))
        .and(query_param("country__code", "US"))
        .and(query_param("city__code", "nyc"))
        .respond_with(payload(json!([
            {"code": "10001", "name": "10001", "country_code": "US", "city_code": "nyc"}
        ])))
        .mount(&server)
        .await;

    let params = ZipcodeParams {
        location: LocationParams {
            offset: Some(20),
            ..Default::default()
        },
        country_code: Some("US".to_string()),
        city_code: Some("nyc".to_string()),
    };
    let zipcodes = assert_ok!(client.locations().zipcodes(Some(&params)).await);
    assert_eq!(zipcodes[0].code, "10001");
    assert_eq!(zipcodes[0].city_code.as_deref(), Some("nyc"));
}
