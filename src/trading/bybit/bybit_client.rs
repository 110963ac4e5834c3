use std::time::Duration;

use async_trait::async_trait;
use hmac::{Hmac, Mac};
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use sha2::Sha256;
use tracing::{debug, error};

use crate::app_config::AppConfig;
use crate::error::app_error::AppError;

const MAINNET_HOST: &str = "https://api.bybit.com";
const TESTNET_HOST: &str = "https://api-testnet.bybit.com";

/// 出站请求超时，毫秒。交易所偶发挂起时必须有界。
const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Bybit v5 通用信封。result在此阶段保持未类型化，由各端点适配器继续校验。
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope {
    pub ret_code: i64,
    pub ret_msg: String,
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default)]
    pub ret_ext_info: serde_json::Value,
    #[serde(default)]
    pub time: i64,
}

/// 出站HTTP调用的统一入口。
///
/// 适配器层只依赖该trait，真实实现为 [`BybitClient`]，
/// 测试中注入记录调用次数的假客户端。
#[async_trait]
pub trait BybitApi: Send + Sync {
    /// GET时path需携带完整query且body为空串；POST时body为JSON文本。
    /// retCode非0在此层直接转为错误，适配器拿到的信封一定是retCode=0。
    async fn send_request(
        &self,
        method: Method,
        path: &str,
        body: &str,
    ) -> Result<ApiEnvelope, AppError>;
}

pub struct BybitClient {
    client: Client,
    api_key: String,
    api_secret: String,
    recv_window: i64,
    host: &'static str,
}

impl BybitClient {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(REQUEST_TIMEOUT_MS))
            .build()
            .map_err(|e| AppError::Network(e.to_string()))?;
        Ok(BybitClient {
            client,
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            recv_window: config.recv_window,
            host: if config.testnet {
                TESTNET_HOST
            } else {
                MAINNET_HOST
            },
        })
    }

    /// 签名串: timestamp + api_key + recv_window + (query | body)
    fn generate_signature(&self, timestamp: i64, payload: &str) -> Result<String, AppError> {
        let sign_payload = format!(
            "{}{}{}{}",
            timestamp, self.api_key, self.recv_window, payload
        );
        let mut mac = Hmac::<Sha256>::new_from_slice(self.api_secret.as_bytes())
            .map_err(|e| AppError::Network(format!("invalid api secret: {e}")))?;
        mac.update(sign_payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[async_trait]
impl BybitApi for BybitClient {
    async fn send_request(
        &self,
        method: Method,
        path: &str,
        body: &str,
    ) -> Result<ApiEnvelope, AppError> {
        let timestamp = chrono::Utc::now().timestamp_millis();
        let sign_payload = if method == Method::GET {
            path.split_once('?').map(|(_, q)| q).unwrap_or("")
        } else {
            body
        };
        let signature = self.generate_signature(timestamp, sign_payload)?;

        let url = format!("{}{}", self.host, path);
        let mut request_builder = self
            .client
            .request(method, &url)
            .header("X-BAPI-API-KEY", &self.api_key)
            .header("X-BAPI-SIGN", signature)
            .header("X-BAPI-SIGN-TYPE", "2")
            .header("X-BAPI-TIMESTAMP", timestamp.to_string())
            .header("X-BAPI-RECV-WINDOW", self.recv_window.to_string())
            .header("Content-Type", "application/json");
        if !body.is_empty() {
            request_builder = request_builder.body(body.to_string());
        }

        let response = request_builder.send().await?;
        let status_code = response.status();
        let response_body = response.text().await?;
        debug!("path:{},bybit_response: {}", path, response_body);

        if status_code != StatusCode::OK {
            return Err(AppError::Network(format!(
                "http {} from {}",
                status_code, path
            )));
        }
        let envelope: ApiEnvelope = serde_json::from_str(&response_body).map_err(|e| {
            AppError::Network(format!("undecodable response from {}: {}", path, e))
        })?;
        if envelope.ret_code != 0 {
            error!(
                "bybit请求成功，但是操作失败，path:{},code:{},msg:{}",
                path, envelope.ret_code, envelope.ret_msg
            );
            return Err(AppError::BybitApi {
                code: envelope.ret_code,
                msg: envelope.ret_msg,
            });
        }
        Ok(envelope)
    }
}
