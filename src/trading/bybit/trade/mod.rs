use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::app_error::AppError;
use crate::trading::bybit::bybit_client::BybitApi;
use crate::trading::bybit::gate::{self, DisabledResult};
use crate::trading::bybit::{de, decode_response, to_body, BybitApiResponse, QueryBuilder};

/// 下单请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaceOrderRequest {
    /// 产品类型 linear/inverse/option/spot
    pub category: String,
    /// 合约名称，如 BTCUSDT
    pub symbol: String,
    /// Buy, Sell
    pub side: String,
    /// Market, Limit
    pub order_type: String,
    /// 委托数量，字符串形式的十进制数
    pub qty: String,
    /// 委托价格，Limit单必填
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// 是否借贷，仅现货杠杆 0:否 1:是
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_leverage: Option<i32>,
    /// 用户自定义订单ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
    /// GTC, IOC, FOK, PostOnly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
    /// 仓位标识 0:单向持仓 1:买侧双向持仓 2:卖侧双向持仓
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_idx: Option<i32>,
    /// 是否只减仓
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    /// 条件单触发价类型 LastPrice, MarkPrice, IndexPrice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_by: Option<String>,
    /// 条件单触发价
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<String>,
    /// 触发方向 1:上涨触发 2:下跌触发
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_direction: Option<i32>,
    /// 止盈价
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<String>,
    /// 止损价
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<String>,
    /// 止盈触发价类型，未指定时按LastPrice处理
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_trigger_by: Option<String>,
    /// 止损触发价类型，未指定时按LastPrice处理
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_trigger_by: Option<String>,
    /// 市价单数量单位，仅现货 baseCoin/quoteCoin
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_unit: Option<String>,
    /// 自成交保护模式
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smp_type: Option<String>,
}

/// 改单请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AmendOrderRequest {
    pub category: String,
    pub symbol: String,
    /// orderId与orderLinkId二选一
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
    /// 隐含波动率，仅期权
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_iv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tpsl_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_trigger_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_trigger_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tp_limit_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sl_limit_price: Option<String>,
}

/// 撤单请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CancelOrderRequest {
    pub category: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
    /// Order, StopOrder, tpslOrder，仅现货
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_filter: Option<String>,
}

/// 全部撤单请求参数
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CancelAllOrdersRequest {
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settle_coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_order_type: Option<String>,
}

/// 批量下单/改单/撤单请求，request数组按交易所契约原样转发
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BatchOrderRequest {
    pub category: String,
    pub request: Vec<serde_json::Value>,
}

/// 条件单下单请求参数。触发价与触发方向为必填。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaceTriggerOrderRequest {
    pub category: String,
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub qty: String,
    pub trigger_price: String,
    /// 1:价格上涨触发 2:价格下跌触发
    pub trigger_direction: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_on_trigger: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_idx: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_link_id: Option<String>,
}

/// 单订单操作的result形状：下单/改单/撤单共用
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResult {
    pub order_id: String,
    pub order_link_id: String,
}

impl DisabledResult for OrderItemResult {
    fn disabled() -> Self {
        OrderItemResult {
            order_id: String::new(),
            order_link_id: String::new(),
        }
    }
}

pub type PlaceOrderResponse = BybitApiResponse<OrderItemResult>;
pub type AmendOrderResponse = BybitApiResponse<OrderItemResult>;
pub type CancelOrderResponse = BybitApiResponse<OrderItemResult>;

/// 订单信息
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 订单ID
    pub order_id: String,
    /// 用户自定义订单ID
    pub order_link_id: String,
    /// 大宗交易ID
    pub block_trade_id: String,
    pub symbol: String,
    pub price: String,
    pub qty: String,
    pub side: String,
    /// 是否借贷，仅现货
    pub is_leverage: String,
    /// 仓位标识，交易所偶尔以字符串编码
    #[serde(deserialize_with = "de::int_from_int_or_string")]
    pub position_idx: i64,
    /// 订单状态
    pub order_status: String,
    /// 订单创建类型，仅部分类目返回
    #[serde(default)]
    pub create_type: Option<String>,
    /// 撤单来源类型
    pub cancel_type: String,
    /// 拒单原因
    pub reject_reason: String,
    /// 成交均价
    pub avg_price: String,
    /// 剩余未成交数量
    pub leaves_qty: String,
    /// 剩余未成交价值
    pub leaves_value: String,
    /// 累计成交数量
    pub cum_exec_qty: String,
    /// 累计成交价值
    pub cum_exec_value: String,
    /// 累计成交手续费
    pub cum_exec_fee: String,
    pub time_in_force: String,
    pub order_type: String,
    /// 条件单类型
    pub stop_order_type: String,
    /// 隐含波动率，仅期权
    pub order_iv: String,
    #[serde(default)]
    pub trigger_price: Option<String>,
    #[serde(default)]
    pub take_profit: Option<String>,
    #[serde(default)]
    pub stop_loss: Option<String>,
    #[serde(default)]
    pub tp_trigger_by: Option<String>,
    #[serde(default)]
    pub sl_trigger_by: Option<String>,
    #[serde(default)]
    pub trigger_direction: Option<i64>,
    #[serde(default)]
    pub trigger_by: Option<String>,
    #[serde(default)]
    pub reduce_only: Option<bool>,
    #[serde(default)]
    pub close_on_trigger: Option<bool>,
    #[serde(default)]
    pub smp_type: Option<String>,
    #[serde(default)]
    pub market_unit: Option<String>,
    pub created_time: String,
    pub updated_time: String,
}

/// 订单列表通用result：实时订单与历史订单共用
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedOrderListResult {
    pub category: String,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
    #[serde(default)]
    pub list: Vec<OrderItem>,
}

pub type OpenClosedOrdersResponse = BybitApiResponse<PaginatedOrderListResult>;
pub type OrderHistoryResponse = BybitApiResponse<PaginatedOrderListResult>;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllResultItem {
    pub order_id: String,
    pub order_link_id: String,
    /// 仅部分类目返回
    #[serde(default)]
    pub success: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CancelAllOrdersResult {
    #[serde(default)]
    pub list: Vec<CancelAllResultItem>,
}

impl DisabledResult for CancelAllOrdersResult {
    fn disabled() -> Self {
        CancelAllOrdersResult { list: Vec::new() }
    }
}

pub type CancelAllOrdersResponse = BybitApiResponse<CancelAllOrdersResult>;

/// 批量操作的单项结果。操作失败的条目携带code/msg，成功条目为空。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BatchOperationItem {
    pub category: String,
    pub symbol: String,
    pub order_id: String,
    pub order_link_id: String,
    #[serde(default)]
    pub create_at: Option<String>,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub msg: Option<String>,
}

/// 批量下单/改单/撤单共用的result形状
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BatchOrderResult {
    #[serde(default)]
    pub list: Vec<BatchOperationItem>,
}

impl DisabledResult for BatchOrderResult {
    fn disabled() -> Self {
        BatchOrderResult { list: Vec::new() }
    }
}

pub type BatchPlaceOrderResponse = BybitApiResponse<BatchOrderResult>;
pub type BatchAmendOrderResponse = BybitApiResponse<BatchOrderResult>;
pub type BatchCancelOrderResponse = BybitApiResponse<BatchOrderResult>;

/// 成交记录。经典现货账户缺失大量字段，必填集合按全账户模式交集确定。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TradeExecutionItem {
    pub symbol: String,
    pub order_id: String,
    #[serde(default)]
    pub order_link_id: Option<String>,
    pub side: String,
    pub order_price: String,
    pub order_qty: String,
    #[serde(default)]
    pub leaves_qty: Option<String>,
    #[serde(default)]
    pub create_type: Option<String>,
    pub order_type: String,
    #[serde(default)]
    pub stop_order_type: Option<String>,
    pub exec_fee: String,
    pub exec_id: String,
    pub exec_price: String,
    pub exec_qty: String,
    #[serde(default)]
    pub exec_type: Option<String>,
    #[serde(default)]
    pub exec_value: Option<String>,
    pub exec_time: String,
    #[serde(default)]
    pub fee_currency: Option<String>,
    pub is_maker: bool,
    #[serde(default)]
    pub fee_rate: Option<String>,
    /// 以下四个字段仅期权
    #[serde(default)]
    pub trade_iv: Option<String>,
    #[serde(default)]
    pub mark_iv: Option<String>,
    #[serde(default)]
    pub mark_price: Option<String>,
    #[serde(default)]
    pub index_price: Option<String>,
    #[serde(default)]
    pub underlying_price: Option<String>,
    #[serde(default)]
    pub block_trade_id: Option<String>,
    #[serde(default)]
    pub closed_size: Option<String>,
    /// 序列号，交易所在整数和字符串编码之间摇摆，统一为字符串
    #[serde(default, deserialize_with = "de::opt_string_from_int_or_string")]
    pub seq: Option<String>,
    #[serde(default)]
    pub extra_fees: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryResult {
    pub category: String,
    #[serde(default)]
    pub list: Vec<TradeExecutionItem>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

pub type TradeHistoryResponse = BybitApiResponse<TradeHistoryResult>;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SpotBorrowQuotaResult {
    pub symbol: String,
    pub side: String,
    pub max_trade_qty: String,
    pub max_trade_amount: String,
    pub spot_max_trade_qty: String,
    pub spot_max_trade_amount: String,
    pub borrow_coin: String,
}

pub type SpotBorrowQuotaResponse = BybitApiResponse<SpotBorrowQuotaResult>;

/// 单币种余额明细。统一账户与经典账户的可用字段差异较大。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalanceItem {
    pub coin: String,
    /// 币种权益
    pub equity: String,
    /// 钱包余额
    pub wallet_balance: String,
    #[serde(default)]
    pub usd_value: Option<String>,
    /// 可借额度，仅统一账户
    #[serde(default)]
    pub borrow_amount: Option<String>,
    #[serde(default)]
    pub available_to_borrow: Option<String>,
    #[serde(default)]
    pub available_to_withdraw: Option<String>,
    #[serde(default)]
    pub accrued_interest: Option<String>,
    #[serde(default)]
    pub total_order_im: Option<String>,
    #[serde(default)]
    pub total_position_im: Option<String>,
    #[serde(default)]
    pub total_position_mm: Option<String>,
    pub unrealised_pnl: String,
    pub cum_realised_pnl: String,
    #[serde(default)]
    pub bonus: Option<String>,
    /// 以下两个字段仅经典现货账户
    #[serde(default)]
    pub free: Option<String>,
    #[serde(default)]
    pub locked: Option<String>,
    #[serde(default)]
    pub margin_collateral: Option<bool>,
    #[serde(default)]
    pub collateral_switch: Option<bool>,
    #[serde(default)]
    pub spot_hedging_qty: Option<String>,
}

/// 账户维度余额。经典账户的账户级汇总字段可能为空串但字段本身存在。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccountItem {
    pub account_type: String,
    pub total_equity: String,
    pub total_wallet_balance: String,
    pub total_margin_balance: String,
    pub total_available_balance: String,
    #[serde(rename = "totalPerpUPL")]
    pub total_perp_upl: String,
    pub total_initial_margin: String,
    pub total_maintenance_margin: String,
    #[serde(rename = "accountIMRate", default)]
    pub account_im_rate: Option<String>,
    #[serde(rename = "accountMMRate", default)]
    pub account_mm_rate: Option<String>,
    #[serde(rename = "accountLTV", default)]
    pub account_ltv: Option<String>,
    #[serde(default)]
    pub coin: Vec<CoinBalanceItem>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResult {
    #[serde(default)]
    pub list: Vec<WalletAccountItem>,
}

pub type WalletBalanceResponse = BybitApiResponse<WalletBalanceResult>;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SingleCoinBalanceItem {
    pub coin: String,
    pub wallet_balance: String,
    pub transfer_balance: String,
    #[serde(default)]
    pub bonus: Option<String>,
    #[serde(default)]
    pub transfer_safe_amount: Option<String>,
    #[serde(default)]
    pub ltv_transfer_safe_amount: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SingleCoinBalanceResult {
    pub account_type: String,
    #[serde(default)]
    pub biz_type: Option<i64>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
    pub balance: SingleCoinBalanceItem,
}

pub type SingleCoinBalanceResponse = BybitApiResponse<SingleCoinBalanceResult>;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfoResult {
    /// 统一账户升级状态
    pub unified_margin_status: i64,
    /// ISOLATED_MARGIN, REGULAR_MARGIN, PORTFOLIO_MARGIN
    pub margin_mode: String,
    #[serde(default)]
    pub dcp_status: Option<String>,
    #[serde(default)]
    pub time_window: Option<i64>,
    #[serde(default)]
    pub smp_group: Option<i64>,
    #[serde(default)]
    pub is_master_trader: Option<bool>,
    #[serde(default)]
    pub spot_hedging_status: Option<String>,
    pub updated_time: String,
}

pub type AccountInfoResponse = BybitApiResponse<AccountInfoResult>;

/// 订单与资产类端点。变更型操作全部经过交易开关；
/// 订单/成交/余额查询只需要凭证，不经过开关。
pub struct BybitTrade {
    client: Arc<dyn BybitApi>,
    trading_enabled: bool,
}

impl BybitTrade {
    pub fn new(client: Arc<dyn BybitApi>, trading_enabled: bool) -> Self {
        BybitTrade {
            client,
            trading_enabled,
        }
    }

    /// 下单。Limit单必须携带价格；触发价必须携带触发价类型；
    /// 止盈/止损未指定触发价类型时按LastPrice处理（接口文档缺省值）。
    pub async fn place_order(
        &self,
        mut params: PlaceOrderRequest,
    ) -> Result<PlaceOrderResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }

        if params.order_type == "Limit" && params.price.is_none() {
            return Err(AppError::Validation(
                "Price is required for Limit orders".to_string(),
            ));
        }
        if params.trigger_price.is_some() && params.trigger_by.is_none() {
            return Err(AppError::Validation(
                "triggerBy is required when triggerPrice is specified".to_string(),
            ));
        }
        if params.trigger_direction.is_some() && params.trigger_price.is_none() {
            return Err(AppError::Validation(
                "triggerPrice is required when triggerDirection is specified".to_string(),
            ));
        }
        if params.take_profit.is_some() && params.tp_trigger_by.is_none() {
            params.tp_trigger_by = Some("LastPrice".to_string());
        }
        if params.stop_loss.is_some() && params.sl_trigger_by.is_none() {
            params.sl_trigger_by = Some("LastPrice".to_string());
        }

        let body = to_body(&params)?;
        debug!("send place order bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/create", &body)
            .await?;
        decode_response("order/create", res)
    }

    /// 条件单下单。触发价与触发方向由参数结构保证必填。
    pub async fn place_trigger_order(
        &self,
        params: PlaceTriggerOrderRequest,
    ) -> Result<PlaceOrderResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send place trigger order bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/create", &body)
            .await?;
        decode_response("order/create", res)
    }

    pub async fn amend_order(
        &self,
        params: AmendOrderRequest,
    ) -> Result<AmendOrderResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send amend order bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/amend", &body)
            .await?;
        decode_response("order/amend", res)
    }

    pub async fn cancel_order(
        &self,
        params: CancelOrderRequest,
    ) -> Result<CancelOrderResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send cancel order bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/cancel", &body)
            .await?;
        decode_response("order/cancel", res)
    }

    pub async fn cancel_all_orders(
        &self,
        params: CancelAllOrdersRequest,
    ) -> Result<CancelAllOrdersResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        debug!("send cancel all orders bybit_request params:{}", body);
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/cancel-all", &body)
            .await?;
        decode_response("order/cancel-all", res)
    }

    pub async fn batch_place_order(
        &self,
        params: BatchOrderRequest,
    ) -> Result<BatchPlaceOrderResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/create-batch", &body)
            .await?;
        decode_response("order/create-batch", res)
    }

    pub async fn batch_amend_order(
        &self,
        params: BatchOrderRequest,
    ) -> Result<BatchAmendOrderResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/amend-batch", &body)
            .await?;
        decode_response("order/amend-batch", res)
    }

    pub async fn batch_cancel_order(
        &self,
        params: BatchOrderRequest,
    ) -> Result<BatchCancelOrderResponse, AppError> {
        if !self.trading_enabled {
            return Ok(gate::trading_disabled_response());
        }
        let body = to_body(&params)?;
        let res = self
            .client
            .send_request(Method::POST, "/v5/order/cancel-batch", &body)
            .await?;
        decode_response("order/cancel-batch", res)
    }

    /// 查询实时委托（活跃单与最近结束的委托）
    #[allow(clippy::too_many_arguments)]
    pub async fn get_open_closed_orders(
        &self,
        category: &str,
        symbol: Option<&str>,
        base_coin: Option<&str>,
        settle_coin: Option<&str>,
        order_id: Option<&str>,
        order_link_id: Option<&str>,
        open_only: Option<i32>,
        order_filter: Option<&str>,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<OpenClosedOrdersResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/order/realtime");
        query
            .push("category", category)
            .push_opt("symbol", symbol)
            .push_opt("baseCoin", base_coin)
            .push_opt("settleCoin", settle_coin)
            .push_opt("orderId", order_id)
            .push_opt("orderLinkId", order_link_id)
            .push_opt("openOnly", open_only)
            .push_opt("orderFilter", order_filter)
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("order/realtime", res)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn get_order_history(
        &self,
        category: &str,
        symbol: Option<&str>,
        base_coin: Option<&str>,
        settle_coin: Option<&str>,
        order_id: Option<&str>,
        order_link_id: Option<&str>,
        order_filter: Option<&str>,
        order_status: Option<&str>,
        start_time: Option<i64>,
        end_time: Option<i64>,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<OrderHistoryResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/order/history");
        query
            .push("category", category)
            .push_opt("symbol", symbol)
            .push_opt("baseCoin", base_coin)
            .push_opt("settleCoin", settle_coin)
            .push_opt("orderId", order_id)
            .push_opt("orderLinkId", order_link_id)
            .push_opt("orderFilter", order_filter)
            .push_opt("orderStatus", order_status)
            .push_opt("startTime", start_time)
            .push_opt("endTime", end_time)
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("order/history", res)
    }

    /// 查询成交明细
    #[allow(clippy::too_many_arguments)]
    pub async fn get_trade_history(
        &self,
        category: &str,
        symbol: Option<&str>,
        order_id: Option<&str>,
        order_link_id: Option<&str>,
        base_coin: Option<&str>,
        start_time: Option<i64>,
        end_time: Option<i64>,
        exec_type: Option<&str>,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<TradeHistoryResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/execution/list");
        query
            .push("category", category)
            .push_opt("symbol", symbol)
            .push_opt("orderId", order_id)
            .push_opt("orderLinkId", order_link_id)
            .push_opt("baseCoin", base_coin)
            .push_opt("startTime", start_time)
            .push_opt("endTime", end_time)
            .push_opt("execType", exec_type)
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("execution/list", res)
    }

    /// 查询现货保证金交易可借额度。只读端点，不经过交易开关。
    pub async fn get_spot_borrow_quota(
        &self,
        category: &str,
        symbol: &str,
        side: &str,
    ) -> Result<SpotBorrowQuotaResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/order/spot-borrow-check");
        query
            .push("category", category)
            .push("symbol", symbol)
            .push("side", side);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("order/spot-borrow-check", res)
    }

    /// 查询钱包余额。余额信息敏感但只读，只要求凭证，不经过交易开关。
    pub async fn get_wallet_balance(
        &self,
        account_type: &str,
        coin: Option<&str>,
    ) -> Result<WalletBalanceResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/account/wallet-balance");
        query
            .push("accountType", account_type)
            .push_opt("coin", coin);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("account/wallet-balance", res)
    }

    pub async fn get_single_coin_balance(
        &self,
        account_type: &str,
        coin: &str,
        member_id: Option<&str>,
        to_account_type: Option<&str>,
        to_member_id: Option<&str>,
        with_bonus: Option<i32>,
    ) -> Result<SingleCoinBalanceResponse, AppError> {
        let mut query = QueryBuilder::new("/v5/asset/transfer/query-account-coin-balance");
        query
            .push("accountType", account_type)
            .push("coin", coin)
            .push_opt("memberId", member_id)
            .push_opt("toAccountType", to_account_type)
            .push_opt("toMemberId", to_member_id)
            .push_opt("withBonus", with_bonus);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_response("asset/query-account-coin-balance", res)
    }

    pub async fn get_account_info(&self) -> Result<AccountInfoResponse, AppError> {
        let res = self
            .client
            .send_request(Method::GET, "/v5/account/info", "")
            .await?;
        decode_response("account/info", res)
    }
}
