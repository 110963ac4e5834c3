use std::sync::Arc;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::error::app_error::AppError;
use crate::trading::bybit::bybit_client::BybitApi;
use crate::trading::bybit::{decode_result, QueryBuilder};

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ServerTimeResult {
    pub time_second: String,
    #[serde(default)]
    pub time_nano: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TickerItem {
    pub symbol: String,
    pub last_price: String,
    pub prev_price24h: String,
    pub price24h_pcnt: String,
    pub high_price24h: String,
    pub low_price24h: String,
    pub turnover24h: String,
    pub volume24h: String,
    pub bid1_price: String,
    pub bid1_size: String,
    pub ask1_price: String,
    pub ask1_size: String,
    /// 指数价，仅合约
    #[serde(default)]
    pub index_price: Option<String>,
    /// 标记价，仅合约
    #[serde(default)]
    pub mark_price: Option<String>,
    /// 资金费率，仅永续
    #[serde(default)]
    pub funding_rate: Option<String>,
    #[serde(default)]
    pub next_funding_time: Option<String>,
    #[serde(default)]
    pub open_interest: Option<String>,
    #[serde(default)]
    pub open_interest_value: Option<String>,
    /// 美元指数价，仅现货
    #[serde(default)]
    pub usd_index_price: Option<String>,
    /// 标的价格，仅期权
    #[serde(default)]
    pub underlying_price: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TickerResult {
    pub category: String,
    #[serde(default)]
    pub list: Vec<TickerItem>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

/// 深度数据。b/a为[价格, 数量]字符串对，价格精度必须原样保留。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookResult {
    pub s: String,
    pub b: Vec<Vec<String>>,
    pub a: Vec<Vec<String>>,
    pub ts: i64,
    pub u: i64,
    pub seq: i64,
    #[serde(default)]
    pub cts: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecentTradeItem {
    pub exec_id: String,
    pub symbol: String,
    pub price: String,
    pub size: String,
    pub side: String,
    pub time: String,
    pub is_block_trade: bool,
    #[serde(rename = "isRPITrade", default)]
    pub is_rpi_trade: Option<bool>,
    /// 以下四个字段仅期权
    #[serde(rename = "mP", default)]
    pub m_p: Option<String>,
    #[serde(rename = "iP", default)]
    pub i_p: Option<String>,
    #[serde(rename = "mIv", default)]
    pub m_iv: Option<String>,
    #[serde(default)]
    pub iv: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RecentTradesResult {
    pub category: String,
    #[serde(default)]
    pub list: Vec<RecentTradeItem>,
}

/// K线。list的每个元素为 [startTime, open, high, low, close, volume, turnover]
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct KlineResult {
    pub category: String,
    pub symbol: String,
    #[serde(default)]
    pub list: Vec<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LeverageFilter {
    pub min_leverage: String,
    pub max_leverage: String,
    pub leverage_step: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PriceFilter {
    /// 现货类目无最低/最高价限制
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    pub tick_size: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LotSizeFilter {
    pub max_order_qty: String,
    pub min_order_qty: String,
    /// 合约步长；现货用basePrecision
    #[serde(default)]
    pub qty_step: Option<String>,
    #[serde(default)]
    pub post_only_max_order_qty: Option<String>,
    #[serde(default)]
    pub max_mkt_order_qty: Option<String>,
    #[serde(default)]
    pub min_notional_value: Option<String>,
    #[serde(default)]
    pub base_precision: Option<String>,
    #[serde(default)]
    pub quote_precision: Option<String>,
    #[serde(default)]
    pub min_order_amt: Option<String>,
    #[serde(default)]
    pub max_order_amt: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RiskParameters {
    #[serde(default)]
    pub price_limit_ratio_x: Option<String>,
    #[serde(default)]
    pub price_limit_ratio_y: Option<String>,
}

/// 交易产品规格。字段可得性随类目差异很大：现货没有合约字段，
/// 期权才有optionType，必填集合是四个类目的交集。
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentInfoItem {
    pub symbol: String,
    pub status: String,
    pub base_coin: String,
    pub quote_coin: String,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub launch_time: Option<String>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub delivery_fee_rate: Option<String>,
    #[serde(default)]
    pub price_scale: Option<String>,
    #[serde(default)]
    pub leverage_filter: Option<LeverageFilter>,
    pub price_filter: PriceFilter,
    pub lot_size_filter: LotSizeFilter,
    #[serde(default)]
    pub unified_margin_trade: Option<bool>,
    #[serde(default)]
    pub funding_interval: Option<i64>,
    #[serde(default)]
    pub settle_coin: Option<String>,
    #[serde(default)]
    pub copy_trading: Option<String>,
    #[serde(default)]
    pub upper_funding_rate: Option<String>,
    #[serde(default)]
    pub lower_funding_rate: Option<String>,
    #[serde(default)]
    pub is_pre_listing: Option<bool>,
    #[serde(default)]
    pub pre_listing_info: Option<serde_json::Value>,
    #[serde(default)]
    pub risk_parameters: Option<RiskParameters>,
    #[serde(default)]
    pub option_type: Option<String>,
    #[serde(default)]
    pub vol_scale: Option<String>,
    /// 以下三个字段仅现货
    #[serde(default)]
    pub margin_trading: Option<String>,
    #[serde(default)]
    pub innovation: Option<String>,
    #[serde(default)]
    pub st_tag: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentsInfoResult {
    pub category: String,
    #[serde(default)]
    pub list: Vec<InstrumentInfoItem>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FundingRateHistoryItem {
    pub symbol: String,
    pub funding_rate: String,
    pub funding_rate_timestamp: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FundingRateHistoryResult {
    pub category: String,
    #[serde(default)]
    pub list: Vec<FundingRateHistoryItem>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpenInterestItem {
    pub open_interest: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OpenInterestResult {
    pub symbol: String,
    pub category: String,
    #[serde(default)]
    pub list: Vec<OpenInterestItem>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceItem {
    pub coin: String,
    pub symbols: String,
    pub balance: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceResult {
    pub updated_time: String,
    #[serde(default)]
    pub list: Vec<InsuranceItem>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RiskLimitItem {
    pub id: i64,
    pub symbol: String,
    pub risk_limit_value: String,
    #[serde(default)]
    pub maintenance_margin: Option<String>,
    #[serde(default)]
    pub initial_margin: Option<String>,
    #[serde(default)]
    pub is_lowest_risk: Option<i64>,
    #[serde(default)]
    pub max_leverage: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RiskLimitResult {
    pub category: String,
    #[serde(default)]
    pub list: Vec<RiskLimitItem>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LongShortRatioItem {
    pub symbol: String,
    pub buy_ratio: String,
    pub sell_ratio: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LongShortRatioResult {
    #[serde(default)]
    pub list: Vec<LongShortRatioItem>,
    #[serde(default)]
    pub next_page_cursor: Option<String>,
}

/// 行情类端点，只读，不经过交易开关
pub struct BybitMarket {
    client: Arc<dyn BybitApi>,
}

impl BybitMarket {
    pub fn new(client: Arc<dyn BybitApi>) -> Self {
        BybitMarket { client }
    }

    pub async fn get_server_time(&self) -> Result<ServerTimeResult, AppError> {
        let res = self
            .client
            .send_request(Method::GET, "/v5/market/time", "")
            .await?;
        decode_result("market/time", res.result)
    }

    /**
    获取行情信息
    category String 是 产品类型 linear/inverse/option/spot
    symbol String 否 合约名称，不传返回全部
    baseCoin String 否 交易币种，仅期权
    **/
    pub async fn get_tickers(
        &self,
        category: &str,
        symbol: Option<&str>,
        base_coin: Option<&str>,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<TickerResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/tickers");
        query
            .push("category", category)
            .push_opt("symbol", symbol)
            .push_opt("baseCoin", base_coin)
            .push_opt("limit", limit)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/tickers", res.result)
    }

    pub async fn get_order_book(
        &self,
        symbol: &str,
        category: &str,
        limit: u32,
        base_coin: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<OrderBookResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/orderbook");
        query
            .push("category", category)
            .push("symbol", symbol)
            .push("limit", limit)
            .push_opt("baseCoin", base_coin)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/orderbook", res.result)
    }

    pub async fn get_recent_trades(
        &self,
        symbol: &str,
        category: &str,
        base_coin: Option<&str>,
        option_type: Option<&str>,
        limit: u32,
        cursor: Option<&str>,
    ) -> Result<RecentTradesResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/recent-trade");
        query
            .push("category", category)
            .push("symbol", symbol)
            .push("limit", limit)
            .push_opt("baseCoin", base_coin)
            .push_opt("optionType", option_type)
            .push_opt("cursor", cursor);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/recent-trade", res.result)
    }

    pub async fn get_kline(
        &self,
        symbol: &str,
        interval: &str,
        category: &str,
        limit: u32,
    ) -> Result<KlineResult, AppError> {
        self.kline_request("/v5/market/kline", symbol, interval, category, limit)
            .await
    }

    pub async fn get_mark_price_kline(
        &self,
        symbol: &str,
        interval: &str,
        category: &str,
        limit: u32,
    ) -> Result<KlineResult, AppError> {
        self.kline_request(
            "/v5/market/mark-price-kline",
            symbol,
            interval,
            category,
            limit,
        )
        .await
    }

    pub async fn get_index_price_kline(
        &self,
        symbol: &str,
        interval: &str,
        category: &str,
        limit: u32,
    ) -> Result<KlineResult, AppError> {
        self.kline_request(
            "/v5/market/index-price-kline",
            symbol,
            interval,
            category,
            limit,
        )
        .await
    }

    pub async fn get_premium_index_price_kline(
        &self,
        symbol: &str,
        interval: &str,
        category: &str,
        limit: u32,
    ) -> Result<KlineResult, AppError> {
        self.kline_request(
            "/v5/market/premium-index-price-kline",
            symbol,
            interval,
            category,
            limit,
        )
        .await
    }

    /// 四种K线端点共用同一返回形状
    async fn kline_request(
        &self,
        path: &str,
        symbol: &str,
        interval: &str,
        category: &str,
        limit: u32,
    ) -> Result<KlineResult, AppError> {
        let mut query = QueryBuilder::new(path);
        query
            .push("category", category)
            .push("symbol", symbol)
            .push("interval", interval)
            .push("limit", limit);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/kline", res.result)
    }

    pub async fn get_instruments_info(
        &self,
        category: &str,
        symbol: Option<&str>,
    ) -> Result<InstrumentsInfoResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/instruments-info");
        query.push("category", category).push_opt("symbol", symbol);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/instruments-info", res.result)
    }

    pub async fn get_funding_rate_history(
        &self,
        symbol: &str,
        category: &str,
        limit: u32,
    ) -> Result<FundingRateHistoryResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/funding/history");
        query
            .push("category", category)
            .push("symbol", symbol)
            .push("limit", limit);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/funding-history", res.result)
    }

    pub async fn get_open_interest(
        &self,
        symbol: &str,
        category: &str,
        interval_time: &str,
        limit: u32,
    ) -> Result<OpenInterestResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/open-interest");
        query
            .push("category", category)
            .push("symbol", symbol)
            .push("intervalTime", interval_time)
            .push("limit", limit);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/open-interest", res.result)
    }

    pub async fn get_insurance(
        &self,
        category: &str,
        base_coin: Option<&str>,
        quote_coin: Option<&str>,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> Result<InsuranceResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/insurance");
        query
            .push("category", category)
            .push_opt("baseCoin", base_coin)
            .push_opt("quoteCoin", quote_coin)
            .push_opt("startTime", start_time)
            .push_opt("endTime", end_time);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/insurance", res.result)
    }

    pub async fn get_risk_limit(
        &self,
        symbol: &str,
        category: &str,
    ) -> Result<RiskLimitResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/risk-limit");
        query.push("category", category).push("symbol", symbol);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/risk-limit", res.result)
    }

    pub async fn get_long_short_ratio(
        &self,
        symbol: &str,
        category: &str,
        period: &str,
        limit: u32,
    ) -> Result<LongShortRatioResult, AppError> {
        let mut query = QueryBuilder::new("/v5/market/account-ratio");
        query
            .push("category", category)
            .push("symbol", symbol)
            .push("period", period)
            .push("limit", limit);
        let res = self
            .client
            .send_request(Method::GET, &query.finish(), "")
            .await?;
        decode_result("market/account-ratio", res.result)
    }
}
