use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::app_error::AppError;

use self::bybit_client::ApiEnvelope;

pub mod bybit_client;
pub mod de;
pub mod gate;
pub mod market;
pub mod position;
pub mod trade;

// 通用的响应结构体
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BybitApiResponse<T> {
    pub ret_code: i64,
    pub ret_msg: String,
    pub result: T,
}

/// 将信封中的result字段解码为指定模型，失败时报告端点与出错字段
pub(crate) fn decode_result<T: DeserializeOwned>(
    endpoint: &'static str,
    value: serde_json::Value,
) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::Schema {
        endpoint,
        detail: e.to_string(),
    })
}

/// 订单、仓位、资产类端点校验整个响应，保留retCode/retMsg
pub(crate) fn decode_response<T: DeserializeOwned>(
    endpoint: &'static str,
    envelope: ApiEnvelope,
) -> Result<BybitApiResponse<T>, AppError> {
    Ok(BybitApiResponse {
        ret_code: envelope.ret_code,
        ret_msg: envelope.ret_msg,
        result: decode_result(endpoint, envelope.result)?,
    })
}

/// POST请求体序列化
pub(crate) fn to_body<T: Serialize>(params: &T) -> Result<String, AppError> {
    serde_json::to_string(params)
        .map_err(|e| AppError::Validation(format!("unserializable request: {e}")))
}

/// GET请求的query拼接，None的参数整体省略
pub(crate) struct QueryBuilder {
    path: String,
    has_query: bool,
}

impl QueryBuilder {
    pub fn new(path: &str) -> Self {
        QueryBuilder {
            path: path.to_string(),
            has_query: false,
        }
    }

    pub fn push(&mut self, key: &str, value: impl std::fmt::Display) -> &mut Self {
        let sep = if self.has_query { '&' } else { '?' };
        self.path.push_str(&format!("{}{}={}", sep, key, value));
        self.has_query = true;
        self
    }

    pub fn push_opt(&mut self, key: &str, value: Option<impl std::fmt::Display>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn finish(self) -> String {
        self.path
    }
}
