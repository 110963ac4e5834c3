use thiserror::Error;

/// 应用错误
///
/// 除了 `Validation` 在发起网络请求之前产生，其余都来自出站调用链路。
/// 所有错误只允许传播到工具分发层，由分发层统一转成文本结果。
#[derive(Error, Debug)]
pub enum AppError {
    /// 调用方参数违反了接口约束，在任何网络调用之前被拦截
    #[error("validation error: {0}")]
    Validation(String),

    /// 交易所响应无法通过响应模型校验（必填字段缺失、类型不符）
    #[error("schema validation error in {endpoint} response: {detail}")]
    Schema {
        endpoint: &'static str,
        detail: String,
    },

    /// 网络层错误：连接失败、超时、非200状态码、响应体不可解析
    #[error("network error: {0}")]
    Network(String),

    /// Bybit返回了非0的retCode
    #[error("bybit api error (retCode {code}): {msg}")]
    BybitApi { code: i64, msg: String },
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}
