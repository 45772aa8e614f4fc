/*
[INPUT]:  Optional location filters (limit, offset, name, parent codes)
[OUTPUT]: Available countries, regions, cities, ISPs and zipcodes
[POS]:    HTTP layer - location endpoints (query-string filtered)
[UPDATE]: When adding new location kinds or filters
*/

use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{
    City, CityParams, Country, Isp, LocationParams, Region, RegionParams, Zipcode, ZipcodeParams,
};

/// Location endpoints
#[derive(Debug, Clone, Copy)]
pub struct LocationsApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn locations(&self) -> LocationsApi<'_> {
        LocationsApi { client: self }
    }
}

impl LocationsApi<'_> {
    /// GET /locations/countries?limit=&offset=&name=&connection_type=
    pub async fn countries(&self, params: Option<&LocationParams>) -> Result<Vec<Country>> {
        let query = params.map(LocationParams::query).unwrap_or_default();
        let request = ApiRequest::get("locations/countries").query_pairs(query);
        self.client.execute(request).await
    }

    /// GET /locations/regions?country__code=...
    pub async fn regions(&self, params: Option<&RegionParams>) -> Result<Vec<Region>> {
        let query = params.map(RegionParams::query).unwrap_or_default();
        let request = ApiRequest::get("locations/regions").query_pairs(query);
        self.client.execute(request).await
    }

    /// GET /locations/cities?country__code=...&region__code=...
    pub async fn cities(&self, params: Option<&CityParams>) -> Result<Vec<City>> {
        let query = params.map(CityParams::query).unwrap_or_default();
        let request = ApiRequest::get("locations/cities").query_pairs(query);
        self.client.execute(request).await
    }

    /// GET /locations/isps?country__code=...
    pub async fn isps(&self, params: Option<&RegionParams>) -> Result<Vec<Isp>> {
        let query = params.map(RegionParams::query).unwrap_or_default();
        let request = ApiRequest::get("locations/isps").query_pairs(query);
        self.client.execute(request).await
    }

    /// GET /locations/zipcodes?country__code=...&city__code=...
    pub async fn zipcodes(&self, params: Option<&ZipcodeParams>) -> Result<Vec<Zipcode>> {
        let query = params.map(ZipcodeParams::query).unwrap_or_default();
        let request = ApiRequest::get("locations/zipcodes").query_pairs(query);
        self.client.execute(request).await
    }
}
