pub mod env;
pub mod log;

use crate::app_config::env::{env_is_true, env_or_default};

/// 进程启动时一次性读取的配置，此后只读。
///
/// 交易开关 `trading_enabled` 在这里固定，运行期间不再从环境读取，
/// 由构造适配器时显式传入。
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bybit API Key
    pub api_key: String,
    /// Bybit API Secret
    pub api_secret: String,
    /// 是否使用测试网 api-testnet.bybit.com
    pub testnet: bool,
    /// 是否允许变更型操作（下单、改单、撤单、仓位调整）
    pub trading_enabled: bool,
    /// 签名请求的接收窗口，毫秒
    pub recv_window: i64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            api_key: env_or_default("BYBIT_API_KEY", ""),
            api_secret: env_or_default("BYBIT_API_SECRET", ""),
            testnet: env_is_true("BYBIT_TESTNET", false),
            trading_enabled: env_is_true("BYBIT_TRADING_ENABLED", false),
            recv_window: env_or_default("BYBIT_RECV_WINDOW", "5000")
                .parse()
                .unwrap_or(5000),
        }
    }
}
