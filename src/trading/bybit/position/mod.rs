use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::app_error::AppError;
use crate::trading::bybit::bybit_client::BybitApi;
use crate::trading::bybit::gate::{self, DisabledResult};
use crate::trading::bybit::{de, decode_response, to_body, BybitApiResponse, QueryBuilder};

/// 持仓信息
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PositionInfoItem {
    /// 仓位标识，交易所偶尔以字符串编码
    #[serde(deserialize_with = "de::int_from_int_or_string")]
    pub position_idx: i64,
    /// 风险限额ID
    pub risk_id: i64,
    /// 风险限额值
    pub risk_limit_value: String,
    pub symbol: String,
    /// 持仓方向 Buy/Sell，空仓时为None或空串
    pub side: String,
    /// 持仓数量
    pub size: String,
    /// 开仓均价
    pub avg_price: String,
    /// 仓位价值
    pub position_value: String,
    /// 0:全仓 1:逐仓
    pub trade_mode: i64,
    pub auto_add_margin: i64,
    pub position_status: String,
    /// 杠杆倍数
    pub leverage: String,
    /// 标记价格
    pub mark_price: String,
    /// 预估强平价
    pub liq_price: String,
    /// 破产价
    pub bust_price: String,
    /// 初始保证金
    #[serde(rename = "positionIM")]
    pub position_im: String,
    /// 维持保证金
    #[serde(rename = "positionMM")]
    pub position_mm: String,
    /// 仓位保证金，统一账户不返回
    #[serde(default)]
    pub position_balance: Option<String>,
    pub take_profit: String,
    pub stop_loss: String,
    pub trailing_stop: String,
    /// USDC合约专用的会话均价
    #[serde(default)]
    pub session_avg_price: Option<String>,
    /// 希腊字母，仅期权持仓
    #[serde(default)]
    pub delta: Option<String>,
    #[serde(default)]
    pub gamma: Option<String>,
    #[serde(default)]
    pub vega: Option<String>,
    #[serde(default)]
    pub theta: Option<String>,
    /// 未实现盈亏
    pub unrealised_pnl: String,
    /// 本次持仓已实现盈亏，仅统一账户
    #[serde(default)]
    pub cur_realised_pnl: Option<String>,
    /// 累计已实现盈亏
    pub cum_realised_pnl: String,
    /// 自动减仓信号区，1到5
    pub adl_rank_indicator: i64,
    pub created_time: String,
    pub updated_time: String,
    #[serde(default)]
    pub tpsl_mode: Option<String>,
    #[serde(default)]
    pub tp_limit_price: Option<String>,
    #[serde(default)]
    pub sl_limit_price: Option<String>,
    #[serde(default)]
    pub tp_trigger_by: Option<String>,
    #[serde(default)]
    pub sl_trigger_by: Option<String>,
    /// 序列号，交易所在整数和字符串编码之间摇摆，统一为字符串
    #[serde(default, deserialize_with = "de::opt_string_from_int_or_string")]
    pub seq: Option<String>,
    #[serde(default)]
    pub is_reduce_only: Option<bool>,
    #[serde(default)]
    pub mmr_sys_updated_time: Option<String>,
    #[serde(default)]
    pub leverage_sys_updated_time: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PositionInfoResult {
    pub category: String,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
    #[serde(default)]
    pub list: Vec<PositionInfoItem>,
}

pub type GetPositionInfoResponse = BybitApiResponse<PositionInfoResult>;

/// 杠杆、保证金模式、持仓模式、止盈止损、自动追加保证金设置成功时
/// result均为空对象，共用一个形状
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmptyResult {}

impl DisabledResult for EmptyResult {
    fn disabled() -> Self {
        EmptyResult {}
    }
}

pub type SetLeverageResponse = BybitApiResponse<EmptyResult>;
pub type SwitchMarginModeResponse = BybitApiResponse<EmptyResult>;
pub type SwitchPositionModeResponse = BybitApiResponse<EmptyResult>;
pub type SetTradingStopResponse = BybitApiResponse<EmptyResult>;
pub type SetAutoAddMarginResponse = BybitApiResponse<EmptyResult>;

/// 调整保证金后的仓位快照
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddReduceMarginResult {
    #[serde(deserialize_with = "de::int_from_int_or_string")]
    pub position_idx: i64,
    pub risk_id: i64,
    pub risk_limit_value: String,
    pub symbol: String,
    pub side: String,
    pub size: String,
    pub avg_price: String,
    pub liq_price: String,
    pub bust_price: String,
    pub position_value: String,
    pub leverage: String,
    pub auto_add_margin: i64,
    pub position_status: String,
    #[serde(rename = "positionIM")]
    pub position_im: String,
    #[serde(rename = "positionMM")]
    pub position_mm: String,
    pub unrealised_pnl: String,
    pub cum_realised_pnl: String,
    pub created_time: String,
    pub updated_time: String,
}

impl DisabledResult for AddReduceMarginResult {
    fn disabled() -> Self {
        AddReduceMarginResult {
            position_idx: 0,
            risk_id: 0,
            risk_limit_value: String::new(),
            symbol: String::new(),
            side: String::new(),
            size: String::new(),
            avg_price: String::new(),
            liq_price: String::new(),
            bust_price: String::new(),
            position_value: String::new(),
            leverage: String::new(),
            auto_add_margin: 0,
            position_status: String::new(),
            position_im: String::new(),
            position_mm: String::new(),
            unrealised_pnl: String::new(),
            cum_realised_pnl: String::new(),
            created_time: String::new(),
            updated_time: String::new(),
        }
    }
}

pub type AddReduceMarginResponse = BybitApiResponse<AddReduceMarginResult>;

/// 已平仓盈亏记录
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClosedPnlItem {
    pub symbol: String,
    pub order_id: String,
    pub side: String,
    pub qty: String,
    pub order_price: String,
    pub order_type: String,
    pub exec_type: String,
    pub closed_size: String,
    pub cum_entry_value: String,
    pub avg_entry_price: String,
    pub cum_exit_value: String,
    pub avg_exit_price: String,
    pub closed_pnl: String,
    pub fill_count: String,
    pub leverage: String,
    pub created_time: String,
    #[serde(default)]
    pub updated_time: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClosedPnlResult {
    pub category: String,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
    #[serde(default)]
    pub list: Vec<ClosedPnlItem>,
}

pub type GetClosedPnlResponse = BybitApiResponse<ClosedPnlResult>;

/// 设置杠杆请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetLeverageRequest {
    pub category: String,
    pub symbol: String,
    pub buy_leverage: String,
    pub sell_leverage: String,
}

/// 切换全仓/逐仓请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SwitchMarginModeRequest {
    pub category: String,
    pub symbol: String,
    /// 0:全仓 1:逐仓
    pub trade_mode: i32,
    pub buy_leverage: String,
    pub sell_leverage: String,
}

/// 切换持仓模式请求参数。symbol与coin二选一。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SwitchPositionModeRequest {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    /// 0:单向持仓 3:双向持仓
    #[serde(default)]
    pub mode: i32,
}

/// 设置止盈止损请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetTradingStopRequest {
    pub category: String,
    pub symbol: String,
    /// Full:全仓止盈止损 Partial:部分止盈止损
    pub tpsl_mode: String,
    pub position_idx: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_stop: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_trigger_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_trigger_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_limit_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_limit_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_order_type: Option<String>,
}

/// 设置自动追加保证金请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetAutoAddMarginRequest {
    pub category: String,
    pub symbol: String,
    /// 0:关闭 1:开启
    pub auto_add_margin: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_idx: Option<i32>,
}

/// 增减保证金请求参数。margin为带符号的字符串数值，负数为减少。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModifyPositionMarginRequest {
    pub category: String,
    pub symbol: String,
    pub margin: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_idx: Option<i32>,
}

/// 仓位类端点。查询只读不经过交易开关，设置类操作全部经过开关。
pub struct BybitPosition {
    client: Arc<dyn BybitApi>,
    trading_enabled: bool,
}

impl BybitPosition {
    pub fn new(client: Arc<dyn BybitApi>, trading_enabled: bool) -> Self {
        BybitPosition {
            client,
            trading_enabled,
        }
    }

    /// 查询实时持仓
    pub async fn get_position_info(
        &self,
        category: &str,
        settle_coin: &str,
        symbol: Option<&str>,
        base_coin: Option<&str>,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<GetPositionInfoResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/position/list");
        query
            .push("category", category)
            .push("settleCoin", settle_coin)
            .push_opt("symbol", symbol)
            .push_opt("baseCoin", base_coin)
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("position/list", res)
    }

    pub async fn set_leverage(
        &self,
        params: SetLeverageRequest,
    ) -> Result<SetLeverageResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send set leverage bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/position/set-leverage", &body)
            .await?;
        decode_response("position/set-leverage", res)
    }

    pub async fn switch_cross_isolated_margin(
        &self,
        params: SwitchMarginModeRequest,
    ) -> Result<SwitchMarginModeResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send switch margin mode bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/position/switch-isolated", &body)
            .await?;
        decode_response("position/switch-isolated", res)
    }

    pub async fn switch_position_mode(
        &self,
        params: SwitchPositionModeRequest,
    ) -> Result<SwitchPositionModeResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send switch position mode bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/position/switch-mode", &body)
            .await?;
        decode_response("position/switch-mode", res)
    }

    pub async fn set_trading_stop(
        &self,
        params: SetTradingStopRequest,
    ) -> Result<SetTradingStopResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send set trading stop bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/position/trading-stop", &body)
            .await?;
        decode_response("position/trading-stop", res)
    }

    pub async fn set_auto_add_margin(
        &self,
        params: SetAutoAddMarginRequest,
    ) -> Result<SetAutoAddMarginResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send set auto add margin bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/position/set-auto-add-margin", &body)
            .await?;
        decode_response("position/set-auto-add-margin", res)
    }

    pub async fn modify_position_margin(
        &self,
        params: ModifyPositionMarginRequest,
    ) -> Result<AddReduceMarginResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send modify position margin bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/position/add-margin", &body)
            .await?;
        decode_response("position/add-margin", res)
    }

    /// 查询已平仓盈亏
    pub async fn get_closed_pnl(
        &self,
        category: &str,
        symbol: Option<&str>,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<GetClosedPnlResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/position/closed-pnl");
        query
            .push("category", category)
            .push_opt("symbol", symbol)
            .push_opt("startTime", start_time)
            .push_opt("endTime", end_time)
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("position/closed-pnl", res)
    }
}
