#![allow(dead_code)]

use invoicing_service::config::{InvoicingConfig, StoreBackend};
use invoicing_service::startup::{AppState, Application};
use serde_json::{json, Value};

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub state: AppState,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the service on a random port backed by the in-memory store.
    pub async fn spawn() -> Self {
        let mut config = InvoicingConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.store.backend = StoreBackend::Memory;

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let state = app.state().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            state,
            client,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn post_invoice(&self, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url("/invoices"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Create an invoice and return the response body, asserting success.
    pub async fn create_invoice(&self, body: &Value) -> Value {
        let response = self.post_invoice(body).await;
        assert_eq!(response.status().as_u16(), 200, "create should succeed");
        response.json().await.expect("Failed to parse JSON")
    }

    pub async fn put_invoice(&self, id: &str, body: &Value) -> reqwest::Response {
        self.client
            .put(self.url(&format!("/invoices/{}", id)))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_invoice(&self, id: &str) -> reqwest::Response {
        self.client
            .get(self.url(&format!("/invoices/{}", id)))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn customer() -> Value {
    json!({
        "name": "ABC Corporation Ltd",
        "address_line1": "456 Corporate Avenue",
        "address_line2": "Business District",
        "city": "Pune",
        "state": "Maharashtra",
        "zip_code": "411001",
        "country": "India",
        "gstin": "27XYZAB1234C1Z5",
        "phone": "+91-9876543210",
        "email": "accounts@abccorp.com"
    })
}

pub fn line_item(description: &str, quantity: i64, rate: f64, amount: f64) -> Value {
    json!({
        "description": description,
        "hsn_sac": "998313",
        "quantity": quantity,
        "rate": rate,
        "amount": amount
    })
}

pub fn service_charge(amount: f64, cgst_rate: f64, sgst_rate: f64) -> Value {
    json!({
        "description": "Platform Service Charges",
        "hsn_sac": "998314",
        "amount": amount,
        "cgst_rate": cgst_rate,
        "sgst_rate": sgst_rate
    })
}

pub fn invoice_body(invoice_number: &str, line_items: Vec<Value>, charge: Value) -> Value {
    json!({
        "invoice_number": invoice_number,
        "due_date": "2026-11-18T10:15:30.123456",
        "payment_terms": "30 days",
        "po_number": "PO-2026-001",
        "place_of_supply": "Maharashtra (27)",
        "customer": customer(),
        "line_items": line_items,
        "service_charges": charge,
        "terms_conditions": "Interest @24% will be charged on delayed payments.",
        "notes": "The GST is applied on the service charges."
    })
}

/// The two-line professional services invoice: 80,000 + 5,000 at 9% + 9%.
pub fn professional_invoice(invoice_number: &str) -> Value {
    invoice_body(
        invoice_number,
        vec![
            line_item("Software Development Services", 1, 50000.0, 50000.0),
            line_item("Technical Consultation", 2, 15000.0, 30000.0),
        ],
        service_charge(5000.0, 9.0, 9.0),
    )
}

pub fn money(value: &Value) -> f64 {
    value.as_f64().expect("expected a JSON number")
}
