//! 交易开关。
//!
//! 开关在进程启动时从配置读取一次，生命周期内不变。关闭状态下所有
//! 变更型适配器不发出任何网络请求，直接返回携带哨兵retCode的
//! 固定"交易禁用"响应，响应的子结构保持空值而非缺失，
//! 下游渲染不需要区分处理。

use super::BybitApiResponse;

/// 交易禁用时的哨兵retCode，与交易所自身的错误码不重叠
pub const TRADING_DISABLED_RET_CODE: i64 = 40300;

/// 交易禁用时的固定提示文本
pub const TRADING_DISABLED_RET_MSG: &str =
    "Trading operations are disabled by server configuration.";

/// 每种变更型result形状提供自己的规范空实例：
/// 单订单形状给出空订单号，列表/批量形状给出空列表。
pub trait DisabledResult {
    fn disabled() -> Self;
}

/// 按目标模型形状构造统一的"交易禁用"响应，所有变更型适配器共用
pub fn trading_disabled_response<T: DisabledResult>() -> BybitApiResponse<T> {
    BybitApiResponse {
        ret_code: TRADING_DISABLED_RET_CODE,
        ret_msg: TRADING_DISABLED_RET_MSG.to_string(),
        result: T::disabled(),
    }
}
