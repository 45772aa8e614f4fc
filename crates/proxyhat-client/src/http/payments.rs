/*
[INPUT]:  Payment ids, plan/crypto selection, invoice format
[OUTPUT]: Payments, payment details, raw invoice downloads
[POS]:    HTTP layer - payment endpoints (invoice bypasses JSON decoding)
[UPDATE]: When adding new payment endpoints or gates
*/

use reqwest::Response;

use crate::http::request::endpoint;
use crate::http::{ApiRequest, ProxyhatClient, Result};
use crate::types::{
    CreatePaymentParams, Cryptocurrency, DEFAULT_PAYMENT_GATE, Payment, PaymentCreateResponse,
    PaymentDetails,
};

const DEFAULT_INVOICE_FORMAT: &str = "pdf";

/// Payment endpoints
#[derive(Debug, Clone, Copy)]
pub struct PaymentsApi<'a> {
    client: &'a ProxyhatClient,
}

impl ProxyhatClient {
    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi { client: self }
    }
}

impl PaymentsApi<'_> {
    /// GET /payments
    pub async fn list(&self) -> Result<Vec<Payment>> {
        self.client.execute(ApiRequest::get("payments")).await
    }

    /// Create a payment; an empty gate is sent as `crypto`
    ///
    /// POST /payments
    pub async fn create(&self, params: &CreatePaymentParams) -> Result<PaymentCreateResponse> {
        let mut params = params.clone();
        if params.gate.is_empty() {
            params.gate = DEFAULT_PAYMENT_GATE.to_string();
        }
        let request = ApiRequest::post("payments").json(&params)?;
        self.client.execute(request).await
    }

    /// GET /payments/{id}
    pub async fn get(&self, id: &str) -> Result<PaymentDetails> {
        let path = endpoint(&["payments", id])?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// Poll the processor for the payment's current status
    ///
    /// GET /payments/{id}/check
    pub async fn check(&self, id: &str) -> Result<PaymentDetails> {
        let path = endpoint(&["payments", id, "check"])?;
        self.client.execute(ApiRequest::get(path)).await
    }

    /// Download an invoice. The body is not JSON; read it from the returned
    /// response with `bytes()` or `chunk()`.
    ///
    /// GET /payments/{id}/invoice?format={format}
    pub async fn invoice(&self, id: &str, format: Option<&str>) -> Result<Response> {
        let format = format
            .filter(|format| !format.is_empty())
            .unwrap_or(DEFAULT_INVOICE_FORMAT);
        let path = endpoint(&["payments", id, "invoice"])?;
        let request = ApiRequest::get(path).query("format", format);
        self.client.execute_raw(request).await
    }

    /// GET /payments/cryptocurrencies
    pub async fn cryptocurrencies(&self) -> Result<Vec<Cryptocurrency>> {
        self.client
            .execute(ApiRequest::get("payments/cryptocurrencies"))
            .await
    }
}
