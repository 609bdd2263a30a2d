//! Order submission
//!
//! `OrderGateway` is the seam between the draft and the order-creation
//! endpoint; `HttpOrderGateway` is the reqwest implementation.

use async_trait::async_trait;
use reqwest::Client;
use shared::order::{OrderCreated, OrderPayload};

use super::error::{CartError, CartResult};
use crate::config::CartConfig;

const ORDERS_PATH: &str = "api/orders";

#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn create_order(&self, payload: &OrderPayload) -> CartResult<OrderCreated>;
}

/// HTTP gateway to the order-creation endpoint
#[derive(Debug, Clone)]
pub struct HttpOrderGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpOrderGateway {
    pub fn new(config: &CartConfig) -> CartResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.order_api_url.clone(),
            token: config.order_api_token.clone(),
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), ORDERS_PATH)
    }
}

#[async_trait]
impl OrderGateway for HttpOrderGateway {
    async fn create_order(&self, payload: &OrderPayload) -> CartResult<OrderCreated> {
        let mut request = self.client.post(self.orders_url()).json(payload);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CartError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| CartError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::OrderLine;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Accept one connection, answer with a canned response, return the raw request
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request_complete(&request) {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    /// Headers received and the whole Content-Length body read
    fn request_complete(raw: &[u8]) -> bool {
        let Some(head_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let head = String::from_utf8_lossy(&raw[..head_end]);
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= head_end + 4 + content_length
    }

    fn gateway(base_url: String, token: Option<&str>) -> HttpOrderGateway {
        let config = CartConfig {
            order_api_url: base_url,
            order_api_token: token.map(str::to_string),
            request_timeout_ms: 5000,
            ..CartConfig::default()
        };
        HttpOrderGateway::new(&config).unwrap()
    }

    fn payload() -> OrderPayload {
        OrderPayload {
            items: vec![OrderLine {
                product_id: 1,
                quantity: 2.0,
                unit_price: 10000.0,
            }],
            customer_id: Some(77),
            discount: 0.0,
            tax_rate: 10.0,
            note: String::new(),
            total_amount: 22000.0,
        }
    }

    #[test]
    fn test_orders_url_trims_trailing_slash() {
        let mut config = CartConfig::with_work_dir("/tmp");
        config.order_api_url = "http://pos.local:3000/".to_string();

        let gateway = HttpOrderGateway::new(&config).unwrap();
        assert_eq!(gateway.orders_url(), "http://pos.local:3000/api/orders");
    }

    #[tokio::test]
    async fn test_create_order_posts_json_with_bearer_token() {
        let (base_url, server) =
            serve_once("201 Created", r#"{"id":"ord-9","orderNumber":"A-0009"}"#).await;

        let created = gateway(base_url, Some("till-secret"))
            .create_order(&payload())
            .await
            .unwrap();
        assert_eq!(created.id, "ord-9");
        assert_eq!(created.order_number.as_deref(), Some("A-0009"));

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /api/orders HTTP/1.1"));
        assert!(request.to_ascii_lowercase().contains("authorization: bearer till-secret"));
        assert!(request.contains(r#""productId":1"#));
        assert!(request.contains(r#""customerId":77"#));
        assert!(request.contains(r#""totalAmount":22000.0"#));
    }

    #[tokio::test]
    async fn test_create_order_without_token_sends_no_authorization() {
        let (base_url, server) = serve_once("200 OK", r#"{"id":"ord-1"}"#).await;

        let created = gateway(base_url, None).create_order(&payload()).await.unwrap();
        assert_eq!(created.order_number, None);

        let request = server.await.unwrap();
        assert!(!request.to_ascii_lowercase().contains("authorization:"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_rejected_with_body() {
        let (base_url, server) = serve_once("422 Unprocessable Entity", "out of stock").await;

        let err = gateway(base_url, Some("till-secret"))
            .create_order(&payload())
            .await
            .unwrap_err();
        match err {
            CartError::Rejected { status, body } => {
                assert_eq!(status, 422);
                assert_eq!(body, "out of stock");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_invalid_response() {
        let (base_url, server) = serve_once("200 OK", "not json").await;

        let err = gateway(base_url, None)
            .create_order(&payload())
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::InvalidResponse(_)));
        server.await.unwrap();
    }
}
