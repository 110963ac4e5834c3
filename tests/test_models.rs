//! 响应模型校验：按类目/账户模式枚举可缺省字段的组合，
//! 校验数值字符串原样保留、命名的整型/字符串归一化规则、
//! 列表与游标字段的缺省行为。

use serde_json::json;

use bybit_mcp::trading::bybit::market::{InstrumentsInfoResult, OrderBookResult, TickerItem};
use bybit_mcp::trading::bybit::position::PositionInfoItem;
use bybit_mcp::trading::bybit::trade::{
    AccountInfoResult, OrderItem, PaginatedOrderListResult, SingleCoinBalanceResult,
    TradeExecutionItem, WalletBalanceResult,
};

fn sample_order_json() -> serde_json::Value {
    json!({
        "orderId": "o-123",
        "orderLinkId": "l-123",
        "blockTradeId": "",
        "symbol": "BTCUSDT",
        "price": "60000.50",
        "qty": "0.001",
        "side": "Buy",
        "isLeverage": "",
        "positionIdx": 0,
        "orderStatus": "New",
        "cancelType": "UNKNOWN",
        "rejectReason": "EC_NoError",
        "avgPrice": "0",
        "leavesQty": "0.001",
        "leavesValue": "60.0005",
        "cumExecQty": "0",
        "cumExecValue": "0",
        "cumExecFee": "0",
        "timeInForce": "GTC",
        "orderType": "Limit",
        "stopOrderType": "",
        "orderIv": "",
        "createdTime": "1699900000000",
        "updatedTime": "1699900000001"
    })
}

#[test]
fn test_spot_ticker_accepts_absent_contract_fields() {
    // 现货ticker没有资金费率、持仓量、标记价等合约字段
    let ticker: TickerItem = serde_json::from_value(json!({
        "symbol": "BTCUSDT",
        "lastPrice": "60123.50",
        "prevPrice24h": "59000.00",
        "price24hPcnt": "0.0190",
        "highPrice24h": "60500.00",
        "lowPrice24h": "58800.00",
        "turnover24h": "31012345.10",
        "volume24h": "514.22",
        "bid1Price": "60123.00",
        "bid1Size": "1.2",
        "ask1Price": "60124.00",
        "ask1Size": "0.8",
        "usdIndexPrice": "60125.11"
    }))
    .unwrap();

    assert_eq!(ticker.last_price, "60123.50");
    assert!(ticker.funding_rate.is_none());
    assert!(ticker.mark_price.is_none());
    assert_eq!(ticker.usd_index_price.as_deref(), Some("60125.11"));

    // 序列化后数值字符串保持原文，不会被浮点化
    let round_trip = serde_json::to_value(&ticker).unwrap();
    assert_eq!(round_trip["lastPrice"], "60123.50");
    assert_eq!(round_trip["price24hPcnt"], "0.0190");
}

#[test]
fn test_order_book_rejects_missing_symbol() {
    let result = serde_json::from_value::<OrderBookResult>(json!({
        "b": [["60123.0", "1.2"]],
        "a": [["60124.0", "0.8"]],
        "ts": 1700000000123i64,
        "u": 18521,
        "seq": 7961638724i64
    }));
    // 必填字段缺失必须立刻失败
    assert!(result.is_err());
}

#[test]
fn test_spot_instrument_accepts_absent_contract_fields() {
    let result: InstrumentsInfoResult = serde_json::from_value(json!({
        "category": "spot",
        "list": [{
            "symbol": "BTCUSDT",
            "status": "Trading",
            "baseCoin": "BTC",
            "quoteCoin": "USDT",
            "innovation": "0",
            "marginTrading": "both",
            "stTag": "0",
            "priceFilter": {"tickSize": "0.01"},
            "lotSizeFilter": {
                "basePrecision": "0.000001",
                "quotePrecision": "0.00000001",
                "minOrderQty": "0.000048",
                "maxOrderQty": "71.73956243",
                "minOrderAmt": "1",
                "maxOrderAmt": "4000000"
            }
        }]
    }))
    .unwrap();

    let item = &result.list[0];
    assert!(item.contract_type.is_none());
    assert!(item.settle_coin.is_none());
    assert!(item.leverage_filter.is_none());
    assert!(item.price_filter.min_price.is_none());
    assert_eq!(item.price_filter.tick_size, "0.01");
    assert_eq!(
        item.lot_size_filter.base_precision.as_deref(),
        Some("0.000001")
    );
    assert!(result.next_page_cursor.is_none());
}

#[test]
fn test_linear_instrument_full_shape() {
    let result: InstrumentsInfoResult = serde_json::from_value(json!({
        "category": "linear",
        "nextPageCursor": "first%3DBTCUSDT",
        "list": [{
            "symbol": "BTCUSDT",
            "contractType": "LinearPerpetual",
            "status": "Trading",
            "baseCoin": "BTC",
            "quoteCoin": "USDT",
            "launchTime": "1585526400000",
            "deliveryTime": "0",
            "deliveryFeeRate": "",
            "priceScale": "2",
            "leverageFilter": {"minLeverage": "1", "maxLeverage": "100.00", "leverageStep": "0.01"},
            "priceFilter": {"minPrice": "0.10", "maxPrice": "199999.80", "tickSize": "0.10"},
            "lotSizeFilter": {
                "maxOrderQty": "100.000",
                "minOrderQty": "0.001",
                "qtyStep": "0.001",
                "postOnlyMaxOrderQty": "1000.000",
                "maxMktOrderQty": "100.000",
                "minNotionalValue": "5"
            },
            "unifiedMarginTrade": true,
            "fundingInterval": 480,
            "settleCoin": "USDT",
            "copyTrading": "both",
            "upperFundingRate": "0.00375",
            "lowerFundingRate": "-0.00375"
        }]
    }))
    .unwrap();

    let item = &result.list[0];
    assert_eq!(item.contract_type.as_deref(), Some("LinearPerpetual"));
    assert_eq!(
        item.leverage_filter.as_ref().unwrap().max_leverage,
        "100.00"
    );
    assert_eq!(item.funding_interval, Some(480));
    assert_eq!(result.next_page_cursor.as_deref(), Some("first%3DBTCUSDT"));
}

#[test]
fn test_execution_classic_spot_minimal_shape() {
    // 经典现货账户的成交记录缺失大量字段
    let item: TradeExecutionItem = serde_json::from_value(json!({
        "symbol": "BTCUSDT",
        "orderId": "o-1",
        "side": "Buy",
        "orderPrice": "60000.00",
        "orderQty": "0.001",
        "orderType": "Limit",
        "execFee": "0.033",
        "execId": "e-1",
        "execPrice": "60000.00",
        "execQty": "0.001",
        "execTime": "1700000000000",
        "isMaker": true
    }))
    .unwrap();

    assert!(item.exec_type.is_none());
    assert!(item.fee_rate.is_none());
    assert!(item.seq.is_none());
    assert_eq!(item.exec_price, "60000.00");
}

#[test]
fn test_execution_seq_normalizes_int_and_string() {
    let mut payload = json!({
        "symbol": "BTCUSDT",
        "orderId": "o-1",
        "side": "Buy",
        "orderPrice": "60000.00",
        "orderQty": "0.001",
        "orderType": "Limit",
        "execFee": "0.033",
        "execId": "e-1",
        "execPrice": "60000.00",
        "execQty": "0.001",
        "execTime": "1700000000000",
        "isMaker": false,
        "seq": 8901234567i64
    });
    let from_int: TradeExecutionItem = serde_json::from_value(payload.clone()).unwrap();
    assert_eq!(from_int.seq.as_deref(), Some("8901234567"));

    payload["seq"] = json!("8901234567");
    let from_string: TradeExecutionItem = serde_json::from_value(payload).unwrap();
    assert_eq!(from_string.seq.as_deref(), Some("8901234567"));
}

#[test]
fn test_order_position_idx_accepts_string_encoding() {
    let mut payload = sample_order_json();
    payload["positionIdx"] = json!("2");
    let order: OrderItem = serde_json::from_value(payload).unwrap();
    assert_eq!(order.position_idx, 2);
}

#[test]
fn test_order_list_defaults_when_fields_absent() {
    // 空筛选结果：list缺失按空表处理，游标缺失表示没有更多分页
    let result: PaginatedOrderListResult = serde_json::from_value(json!({
        "category": "linear"
    }))
    .unwrap();
    assert!(result.list.is_empty());
    assert!(result.next_page_cursor.is_none());

    let full: PaginatedOrderListResult = serde_json::from_value(json!({
        "category": "linear",
        "nextPageCursor": "page-2",
        "list": [sample_order_json()]
    }))
    .unwrap();
    assert_eq!(full.list.len(), 1);
    assert_eq!(full.list[0].price, "60000.50");
    assert_eq!(full.next_page_cursor.as_deref(), Some("page-2"));
}

#[test]
fn test_position_greeks_only_for_options() {
    let linear: PositionInfoItem = serde_json::from_value(json!({
        "positionIdx": "1",
        "riskId": 1,
        "riskLimitValue": "2000000",
        "symbol": "BTCUSDT",
        "side": "Buy",
        "size": "0.5",
        "avgPrice": "58000.5",
        "positionValue": "29000.25",
        "tradeMode": 0,
        "autoAddMargin": 0,
        "positionStatus": "Normal",
        "leverage": "10",
        "markPrice": "60121.9",
        "liqPrice": "52500.1",
        "bustPrice": "52000.0",
        "positionIM": "2900.0",
        "positionMM": "145.0",
        "positionBalance": "2950.0",
        "takeProfit": "0.00",
        "stopLoss": "0.00",
        "trailingStop": "0.00",
        "unrealisedPnl": "1060.7",
        "cumRealisedPnl": "120.9",
        "adlRankIndicator": 2,
        "createdTime": "1699900000000",
        "updatedTime": "1700000000000",
        "seq": "42"
    }))
    .unwrap();

    // 字符串编码的positionIdx归一化为整数
    assert_eq!(linear.position_idx, 1);
    assert!(linear.delta.is_none());
    assert!(linear.session_avg_price.is_none());
    assert_eq!(linear.seq.as_deref(), Some("42"));
}

#[test]
fn test_wallet_balance_classic_spot_variant() {
    let result: WalletBalanceResult = serde_json::from_value(json!({
        "list": [{
            "accountType": "SPOT",
            "totalEquity": "",
            "totalWalletBalance": "",
            "totalMarginBalance": "",
            "totalAvailableBalance": "",
            "totalPerpUPL": "",
            "totalInitialMargin": "",
            "totalMaintenanceMargin": "",
            "coin": [{
                "coin": "USDT",
                "equity": "1000",
                "walletBalance": "1000",
                "free": "900",
                "locked": "100",
                "unrealisedPnl": "0",
                "cumRealisedPnl": "0"
            }]
        }]
    }))
    .unwrap();

    let coin = &result.list[0].coin[0];
    assert_eq!(coin.free.as_deref(), Some("900"));
    assert_eq!(coin.locked.as_deref(), Some("100"));
    assert!(coin.borrow_amount.is_none());
    assert!(result.list[0].account_im_rate.is_none());
}

#[test]
fn test_single_coin_balance_shape() {
    let result: SingleCoinBalanceResult = serde_json::from_value(json!({
        "accountType": "UNIFIED",
        "bizType": 1,
        "accountId": "123456",
        "memberId": "593958",
        "balance": {
            "coin": "USDT",
            "walletBalance": "1000.004",
            "transferBalance": "900.5",
            "bonus": "0"
        }
    }))
    .unwrap();

    assert_eq!(result.balance.transfer_balance, "900.5");
    assert!(result.balance.transfer_safe_amount.is_none());
}

#[test]
fn test_account_info_classic_account_omissions() {
    let info: AccountInfoResult = serde_json::from_value(json!({
        "unifiedMarginStatus": 1,
        "marginMode": "REGULAR_MARGIN",
        "updatedTime": "1700000000000"
    }))
    .unwrap();

    assert_eq!(info.unified_margin_status, 1);
    assert!(info.dcp_status.is_none());
    assert!(info.is_master_trader.is_none());
}
