//! 工具分发。外部调用协议与内部适配器之间的唯一边界：
//! 按名称精确匹配，入参反序列化为各工具的参数结构，多余参数直接报错；
//! 适配器抛出的任何错误在这里截获、记日志并转成文本，绝不外溢。

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::error;

use crate::app_config::AppConfig;
use crate::error::app_error::AppError;
use crate::tools::render;
use crate::trading::bybit::bybit_client::BybitApi;
use crate::trading::bybit::market::BybitMarket;
use crate::trading::bybit::position::{
    BybitPosition, ModifyPositionMarginRequest, SetAutoAddMarginRequest, SetLeverageRequest,
    SetTradingStopRequest, SwitchMarginModeRequest, SwitchPositionModeRequest,
};
use crate::trading::bybit::trade::{
    AmendOrderRequest, BatchOrderRequest, BybitTrade, CancelAllOrdersRequest, CancelOrderRequest,
    PlaceOrderRequest, PlaceTriggerOrderRequest,
};

fn default_category() -> String {
    "linear".to_string()
}

fn default_spot_category() -> String {
    "spot".to_string()
}

fn default_orderbook_limit() -> u32 {
    50
}

fn default_trades_limit() -> u32 {
    50
}

fn default_kline_limit() -> u32 {
    200
}

fn default_interval_time() -> String {
    "5min".to_string()
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct EmptyArgs {}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetTickersArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: Option<String>,
    base_coin: Option<String>,
    limit: Option<u32>,
    cursor: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetOrderBookArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: String,
    #[serde(default = "default_orderbook_limit")]
    limit: u32,
    base_coin: Option<String>,
    cursor: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetRecentTradesArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: String,
    base_coin: Option<String>,
    option_type: Option<String>,
    #[serde(default = "default_trades_limit")]
    limit: u32,
    cursor: Option<String>,
}

/// 四种K线工具共用的入参
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct KlineArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: String,
    interval: String,
    #[serde(default = "default_kline_limit")]
    limit: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetInstrumentsInfoArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetFundingRateHistoryArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: String,
    #[serde(default = "default_kline_limit")]
    limit: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetOpenInterestArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: String,
    #[serde(default = "default_interval_time")]
    interval: String,
    #[serde(default = "default_kline_limit")]
    limit: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetInsuranceArgs {
    #[serde(default = "default_category")]
    category: String,
    base_coin: Option<String>,
    quote_coin: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetRiskLimitArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct GetLongShortRatioArgs {
    #[serde(default = "default_category")]
    category: String,
    symbol: String,
    #[serde(default = "default_interval_time")]
    interval: String,
    #[serde(default = "default_kline_limit")]
    limit: u32,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OpenOrdersArgs {
    category: String,
    symbol: Option<String>,
    base_coin: Option<String>,
    settle_coin: Option<String>,
    order_id: Option<String>,
    order_link_id: Option<String>,
    open_only: Option<i32>,
    order_filter: Option<String>,
    limit: Option<u32>,
    cursor: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OrderHistoryArgs {
    category: String,
    symbol: Option<String>,
    base_coin: Option<String>,
    settle_coin: Option<String>,
    order_id: Option<String>,
    order_link_id: Option<String>,
    order_filter: Option<String>,
    order_status: Option<String>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    limit: Option<u32>,
    cursor: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct TradeHistoryArgs {
    category: String,
    symbol: Option<String>,
    order_id: Option<String>,
    order_link_id: Option<String>,
    base_coin: Option<String>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    exec_type: Option<String>,
    limit: Option<u32>,
    cursor: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SpotBorrowQuotaArgs {
    #[serde(default = "default_spot_category")]
    category: String,
    symbol: String,
    side: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct WalletBalanceArgs {
    account_type: String,
    coin: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SingleCoinBalanceArgs {
    account_type: String,
    coin: String,
    member_id: Option<String>,
    to_account_type: Option<String>,
    to_member_id: Option<String>,
    with_bonus: Option<i32>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PositionInfoArgs {
    category: String,
    settle_coin: String,
    symbol: Option<String>,
    base_coin: Option<String>,
    limit: Option<u32>,
    cursor: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ClosedPnlArgs {
    category: String,
    symbol: Option<String>,
    start_time: Option<i64>,
    end_time: Option<i64>,
    limit: Option<u32>,
    cursor: Option<String>,
}

fn parse_args<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    let value = if value.is_null() { json!({}) } else { value };
    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("invalid arguments: {e}")))
}

/// 工具分发器。持有三组端点适配器，每次调用完整处理完再返回。
pub struct ToolDispatcher {
    market: BybitMarket,
    trade: BybitTrade,
    position: BybitPosition,
}

impl ToolDispatcher {
    pub fn new(client: Arc<dyn BybitApi>, config: &AppConfig) -> Self {
        ToolDispatcher {
            market: BybitMarket::new(client.clone()),
            trade: BybitTrade::new(client.clone(), config.trading_enabled),
            position: BybitPosition::new(client, config.trading_enabled),
        }
    }

    /// 每次调用必定返回文本：成功渲染、未知工具提示或错误描述
    pub async fn dispatch(&self, name: &str, arguments: Value) -> String {
        match self.call(name, arguments.clone()).await {
            Ok(Some(text)) => text,
            Ok(None) => format!("Unknown tool: {}", name),
            Err(e) => {
                error!(
                    "Error calling tool {} with arguments {}: {}",
                    name, arguments, e
                );
                format!("Error calling {}: {}", name, e)
            }
        }
    }

    async fn call(&self, name: &str, arguments: Value) -> Result<Option<String>, AppError> {
        let text = match name {
            // 行情类
            "get_server_time" => {
                let _args: EmptyArgs = parse_args(arguments)?;
                let result = self.market.get_server_time().await?;
                format!(
                    "Bybit Server Time: {}\nFull Response: {}",
                    result.time_second,
                    serde_json::to_string_pretty(&result).unwrap_or_default()
                )
            }
            "get_tickers" => {
                let args: GetTickersArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_tickers(
                        &args.category,
                        args.symbol.as_deref(),
                        args.base_coin.as_deref(),
                        args.limit,
                        args.cursor.as_deref(),
                    )
                    .await?;
                render(&format!("Ticker data for {}:", result.category), &result)
            }
            "get_order_book" => {
                let args: GetOrderBookArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_order_book(
                        &args.symbol,
                        &args.category,
                        args.limit,
                        args.base_coin.as_deref(),
                        args.cursor.as_deref(),
                    )
                    .await?;
                render(&format!("Order book for {}:", result.s), &result)
            }
            "get_recent_trades" => {
                let args: GetRecentTradesArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_recent_trades(
                        &args.symbol,
                        &args.category,
                        args.base_coin.as_deref(),
                        args.option_type.as_deref(),
                        args.limit,
                        args.cursor.as_deref(),
                    )
                    .await?;
                render(
                    &format!("Recent trades for {}:", result.category),
                    &result,
                )
            }
            "get_kline" => {
                let args: KlineArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_kline(&args.symbol, &args.interval, &args.category, args.limit)
                    .await?;
                render(
                    &format!("Kline data for {} ({}):", result.symbol, result.category),
                    &result,
                )
            }
            "get_mark_price_kline" => {
                let args: KlineArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_mark_price_kline(&args.symbol, &args.interval, &args.category, args.limit)
                    .await?;
                render(
                    &format!(
                        "Mark price kline data for {} ({}):",
                        result.symbol, result.category
                    ),
                    &result,
                )
            }
            "get_index_price_kline" => {
                let args: KlineArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_index_price_kline(&args.symbol, &args.interval, &args.category, args.limit)
                    .await?;
                render(
                    &format!(
                        "Index price kline data for {} ({}):",
                        result.symbol, result.category
                    ),
                    &result,
                )
            }
            "get_premium_index_price_kline" => {
                let args: KlineArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_premium_index_price_kline(
                        &args.symbol,
                        &args.interval,
                        &args.category,
                        args.limit,
                    )
                    .await?;
                render(
                    &format!(
                        "Premium index price kline data for {} ({}):",
                        result.symbol, result.category
                    ),
                    &result,
                )
            }
            "get_instruments_info" => {
                let args: GetInstrumentsInfoArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_instruments_info(&args.category, args.symbol.as_deref())
                    .await?;
                render(
                    &format!("Instruments info for {}:", result.category),
                    &result,
                )
            }
            "get_funding_rate_history" => {
                let args: GetFundingRateHistoryArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_funding_rate_history(&args.symbol, &args.category, args.limit)
                    .await?;
                render(
                    &format!("Funding rate history for {}:", result.category),
                    &result,
                )
            }
            "get_open_interest" => {
                let args: GetOpenInterestArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_open_interest(&args.symbol, &args.category, &args.interval, args.limit)
                    .await?;
                render(
                    &format!(
                        "Open interest data for {} ({}):",
                        result.symbol, result.category
                    ),
                    &result,
                )
            }
            "get_insurance" => {
                let args: GetInsuranceArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_insurance(
                        &args.category,
                        args.base_coin.as_deref(),
                        args.quote_coin.as_deref(),
                        args.start_time.as_deref(),
                        args.end_time.as_deref(),
                    )
                    .await?;
                render(
                    &format!("Insurance fund data (updated: {}):", result.updated_time),
                    &result,
                )
            }
            "get_risk_limit" => {
                let args: GetRiskLimitArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_risk_limit(&args.symbol, &args.category)
                    .await?;
                render(
                    &format!("Risk limit data for {}:", result.category),
                    &result,
                )
            }
            "get_long_short_ratio" => {
                let args: GetLongShortRatioArgs = parse_args(arguments)?;
                let result = self
                    .market
                    .get_long_short_ratio(&args.symbol, &args.category, &args.interval, args.limit)
                    .await?;
                render("Long/short ratio data:", &result)
            }

            // 订单类。变更型操作的交易开关校验在适配器内部完成。
            "place_order" => {
                let params: PlaceOrderRequest = parse_args(arguments)?;
                let result = self.trade.place_order(params).await?;
                render("Place Order Response:", &result)
            }
            "amend_order" => {
                let params: AmendOrderRequest = parse_args(arguments)?;
                let result = self.trade.amend_order(params).await?;
                render("Amend Order Response:", &result)
            }
            "cancel_order" => {
                let params: CancelOrderRequest = parse_args(arguments)?;
                let result = self.trade.cancel_order(params).await?;
                render("Cancel Order Response:", &result)
            }
            "cancel_all_orders" => {
                let params: CancelAllOrdersRequest = parse_args(arguments)?;
                let result = self.trade.cancel_all_orders(params).await?;
                render("Cancel All Orders Response:", &result)
            }
            "batch_place_order" => {
                let params: BatchOrderRequest = parse_args(arguments)?;
                let result = self.trade.batch_place_order(params).await?;
                render("Batch Place Order Response:", &result)
            }
            "batch_amend_order" => {
                let params: BatchOrderRequest = parse_args(arguments)?;
                let result = self.trade.batch_amend_order(params).await?;
                render("Batch Amend Order Response:", &result)
            }
            "batch_cancel_order" => {
                let params: BatchOrderRequest = parse_args(arguments)?;
                let result = self.trade.batch_cancel_order(params).await?;
                render("Batch Cancel Order Response:", &result)
            }
            "place_trigger_order" => {
                let params: PlaceTriggerOrderRequest = parse_args(arguments)?;
                let result = self.trade.place_trigger_order(params).await?;
                render("Place Trigger Order Response:", &result)
            }
            "get_open_closed_orders" => {
                let args: OpenOrdersArgs = parse_args(arguments)?;
                let result = self
                    .trade
                    .get_open_closed_orders(
                        &args.category,
                        args.symbol.as_deref(),
                        args.base_coin.as_deref(),
                        args.settle_coin.as_deref(),
                        args.order_id.as_deref(),
                        args.order_link_id.as_deref(),
                        args.open_only,
                        args.order_filter.as_deref(),
                        args.limit,
                        args.cursor.as_deref(),
                    )
                    .await?;
                render("Open/Closed Orders:", &result)
            }
            "get_order_history" => {
                let args: OrderHistoryArgs = parse_args(arguments)?;
                let result = self
                    .trade
                    .get_order_history(
                        &args.category,
                        args.symbol.as_deref(),
                        args.base_coin.as_deref(),
                        args.settle_coin.as_deref(),
                        args.order_id.as_deref(),
                        args.order_link_id.as_deref(),
                        args.order_filter.as_deref(),
                        args.order_status.as_deref(),
                        args.start_time,
                        args.end_time,
                        args.limit,
                        args.cursor.as_deref(),
                    )
                    .await?;
                render("Order History:", &result)
            }
            "get_trade_history" => {
                let args: TradeHistoryArgs = parse_args(arguments)?;
                let result = self
                    .trade
                    .get_trade_history(
                        &args.category,
                        args.symbol.as_deref(),
                        args.order_id.as_deref(),
                        args.order_link_id.as_deref(),
                        args.base_coin.as_deref(),
                        args.start_time,
                        args.end_time,
                        args.exec_type.as_deref(),
                        args.limit,
                        args.cursor.as_deref(),
                    )
                    .await?;
                render("Trade History:", &result)
            }
            "get_spot_borrow_quota" => {
                let args: SpotBorrowQuotaArgs = parse_args(arguments)?;
                let result = self
                    .trade
                    .get_spot_borrow_quota(&args.category, &args.symbol, &args.side)
                    .await?;
                render("Spot Borrow Quota:", &result)
            }
            "get_wallet_balance" => {
                let args: WalletBalanceArgs = parse_args(arguments)?;
                let result = self
                    .trade
                    .get_wallet_balance(&args.account_type, args.coin.as_deref())
                    .await?;
                render("Wallet Balance:", &result)
            }
            "get_single_coin_balance" => {
                let args: SingleCoinBalanceArgs = parse_args(arguments)?;
                let result = self
                    .trade
                    .get_single_coin_balance(
                        &args.account_type,
                        &args.coin,
                        args.member_id.as_deref(),
                        args.to_account_type.as_deref(),
                        args.to_member_id.as_deref(),
                        args.with_bonus,
                    )
                    .await?;
                render("Single Coin Balance:", &result)
            }
            "get_account_info" => {
                let _args: EmptyArgs = parse_args(arguments)?;
                let result = self.trade.get_account_info().await?;
                render("Account Information:", &result)
            }

            // 仓位类
            "get_position_info" => {
                let args: PositionInfoArgs = parse_args(arguments)?;
                let result = self
                    .position
                    .get_position_info(
                        &args.category,
                        &args.settle_coin,
                        args.symbol.as_deref(),
                        args.base_coin.as_deref(),
                        args.limit,
                        args.cursor.as_deref(),
                    )
                    .await?;
                render("Position Information:", &result)
            }
            "get_closed_pnl" => {
                let args: ClosedPnlArgs = parse_args(arguments)?;
                let result = self
                    .position
                    .get_closed_pnl(
                        &args.category,
                        args.symbol.as_deref(),
                        args.start_time,
                        args.end_time,
                        args.limit,
                        args.cursor.as_deref(),
                    )
                    .await?;
                render("Closed P&L:", &result)
            }
            "set_leverage" => {
                let params: SetLeverageRequest = parse_args(arguments)?;
                let result = self.position.set_leverage(params).await?;
                render("Set Leverage Response:", &result)
            }
            "switch_cross_isolated_margin" => {
                let params: SwitchMarginModeRequest = parse_args(arguments)?;
                let result = self.position.switch_cross_isolated_margin(params).await?;
                render("Switch Margin Mode Response:", &result)
            }
            "switch_position_mode" => {
                let params: SwitchPositionModeRequest = parse_args(arguments)?;
                let result = self.position.switch_position_mode(params).await?;
                render("Switch Position Mode Response:", &result)
            }
            "set_trading_stop" => {
                let params: SetTradingStopRequest = parse_args(arguments)?;
                let result = self.position.set_trading_stop(params).await?;
                render("Set Trading Stop Response:", &result)
            }
            "set_auto_add_margin" => {
                let params: SetAutoAddMarginRequest = parse_args(arguments)?;
                let result = self.position.set_auto_add_margin(params).await?;
                render("Set Auto Add Margin Response:", &result)
            }
            "modify_position_margin" => {
                let params: ModifyPositionMarginRequest = parse_args(arguments)?;
                let result = self.position.modify_position_margin(params).await?;
                render("Modify Position Margin Response:", &result)
            }

            _ => return Ok(None),
        };
        Ok(Some(text))
    }
}
