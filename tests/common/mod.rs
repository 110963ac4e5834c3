#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};

use bybit_mcp::app_config::AppConfig;
use bybit_mcp::error::app_error::AppError;
use bybit_mcp::trading::bybit::bybit_client::{ApiEnvelope, BybitApi};

/// 记录一次出站调用，body为解析后的JSON（GET时为空对象）
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Value,
}

/// 测试用假客户端：记录每次调用，按入队顺序返回预置响应。
/// 未预置响应时返回result为空对象的成功信封。
pub struct FakeBybitApi {
    responses: Mutex<VecDeque<ApiEnvelope>>,
    calls: Mutex<Vec<RecordedCall>>,
    call_count: AtomicUsize,
}

impl FakeBybitApi {
    pub fn new() -> Self {
        FakeBybitApi {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    pub fn with_result(result: Value) -> Self {
        let fake = Self::new();
        fake.queue_result(result);
        fake
    }

    pub fn queue_result(&self, result: Value) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Self::ok_envelope(result));
    }

    pub fn ok_envelope(result: Value) -> ApiEnvelope {
        ApiEnvelope {
            ret_code: 0,
            ret_msg: "OK".to_string(),
            result,
            ret_ext_info: json!({}),
            time: 1_700_000_000_000,
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls
            .lock()
            .unwrap()
            .last()
            .expect("no outbound call recorded")
            .clone()
    }
}

#[async_trait]
impl BybitApi for FakeBybitApi {
    async fn send_request(
        &self,
        method: Method,
        path: &str,
        body: &str,
    ) -> Result<ApiEnvelope, AppError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let body = if body.is_empty() {
            json!({})
        } else {
            serde_json::from_str(body).expect("outbound body is not valid JSON")
        };
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });
        let popped = self.responses.lock().unwrap().pop_front();
        Ok(popped.unwrap_or_else(|| Self::ok_envelope(json!({}))))
    }
}

pub fn test_config(trading_enabled: bool) -> AppConfig {
    AppConfig {
        api_key: "test_key".to_string(),
        api_secret: "test_secret".to_string(),
        testnet: true,
        trading_enabled,
        recv_window: 5000,
    }
}

/// 符合下单/改单/撤单result形状的样例
pub fn sample_order_result() -> Value {
    json!({
        "orderId": "1321003749386327552",
        "orderLinkId": "test-link-001"
    })
}
