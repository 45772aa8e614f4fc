/*
[INPUT]:  Raw body of a successful response
[OUTPUT]: Decoded value of the caller's target type
[POS]:    HTTP layer - response envelope unwrapping
[UPDATE]: When the API introduces a new envelope key
*/

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::http::Result;

/// Envelope keys in precedence order.
const ENVELOPE_KEYS: [&str; 2] = ["payload", "data"];

/// Decode a response body, unwrapping a `payload` or `data` envelope when
/// the body is an object carrying one. Otherwise the whole body is decoded.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if let Ok(mut object) = serde_json::from_slice::<Map<String, Value>>(body) {
        for key in ENVELOPE_KEYS {
            if let Some(inner) = object.remove(key) {
                return Ok(serde_json::from_value(inner)?);
            }
        }
    }

    Ok(serde_json::from_slice(body)?)
}
