mod common;

use std::sync::Arc;

use serde_json::json;

use bybit_mcp::error::app_error::AppError;
use bybit_mcp::trading::bybit::gate::{TRADING_DISABLED_RET_CODE, TRADING_DISABLED_RET_MSG};
use bybit_mcp::trading::bybit::trade::{
    BatchOrderRequest, BybitTrade, CancelAllOrdersRequest, PlaceOrderRequest,
};

use common::{sample_order_result, FakeBybitApi};

fn market_buy_request() -> PlaceOrderRequest {
    PlaceOrderRequest {
        category: "linear".to_string(),
        symbol: "BTCUSDT".to_string(),
        side: "Buy".to_string(),
        order_type: "Market".to_string(),
        qty: "0.001".to_string(),
        price: None,
        is_leverage: None,
        order_link_id: None,
        time_in_force: None,
        position_idx: None,
        reduce_only: None,
        trigger_by: None,
        trigger_price: None,
        trigger_direction: None,
        take_profit: None,
        stop_loss: None,
        tp_trigger_by: None,
        sl_trigger_by: None,
        market_unit: None,
        smp_type: None,
    }
}

#[tokio::test]
async fn test_place_order_disabled_makes_no_network_call() {
    let fake = Arc::new(FakeBybitApi::new());
    let trade = BybitTrade::new(fake.clone(), false);

    let response = trade.place_order(market_buy_request()).await.unwrap();

    assert_eq!(fake.call_count(), 0);
    assert_eq!(response.ret_code, TRADING_DISABLED_RET_CODE);
    assert_eq!(response.ret_msg, TRADING_DISABLED_RET_MSG);
    assert_eq!(response.result.order_id, "");
    assert_eq!(response.result.order_link_id, "");
}

#[tokio::test]
async fn test_disabled_response_is_byte_identical_across_calls() {
    let fake = Arc::new(FakeBybitApi::new());
    let trade = BybitTrade::new(fake.clone(), false);

    let first = trade.place_order(market_buy_request()).await.unwrap();
    let second = trade.place_order(market_buy_request()).await.unwrap();

    assert_eq!(fake.call_count(), 0);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_limit_order_without_price_is_rejected_before_network() {
    let fake = Arc::new(FakeBybitApi::new());
    let trade = BybitTrade::new(fake.clone(), true);

    let mut request = market_buy_request();
    request.order_type = "Limit".to_string();
    let err = trade.place_order(request).await.unwrap_err();

    assert_eq!(fake.call_count(), 0);
    match err {
        AppError::Validation(msg) => assert!(msg.contains("Price is required for Limit orders")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_trigger_price_without_trigger_by_is_rejected() {
    let fake = Arc::new(FakeBybitApi::new());
    let trade = BybitTrade::new(fake.clone(), true);

    let mut request = market_buy_request();
    request.trigger_price = Some("60000".to_string());
    let err = trade.place_order(request).await.unwrap_err();

    assert_eq!(fake.call_count(), 0);
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_trigger_direction_without_trigger_price_is_rejected() {
    let fake = Arc::new(FakeBybitApi::new());
    let trade = BybitTrade::new(fake.clone(), true);

    let mut request = market_buy_request();
    request.trigger_direction = Some(1);
    let err = trade.place_order(request).await.unwrap_err();

    assert_eq!(fake.call_count(), 0);
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_take_profit_defaults_trigger_source_to_last_price() {
    let fake = Arc::new(FakeBybitApi::with_result(sample_order_result()));
    let trade = BybitTrade::new(fake.clone(), true);

    let mut request = market_buy_request();
    request.take_profit = Some("70000".to_string());
    let response = trade.place_order(request).await.unwrap();

    assert_eq!(fake.call_count(), 1);
    let call = fake.last_call();
    assert_eq!(call.path, "/v5/order/create");
    assert_eq!(call.body["tpTriggerBy"], "LastPrice");
    // 未提供的可选参数必须整体缺失，不允许以null出现
    assert!(call.body.get("price").is_none());
    assert!(call.body.get("stopLoss").is_none());
    assert_eq!(response.ret_code, 0);
    assert_eq!(response.result.order_id, "1321003749386327552");
}

#[tokio::test]
async fn test_place_order_open_gate_populates_result() {
    let fake = Arc::new(FakeBybitApi::with_result(sample_order_result()));
    let trade = BybitTrade::new(fake.clone(), true);

    let mut request = market_buy_request();
    request.order_link_id = Some("test-link-001".to_string());
    let response = trade.place_order(request).await.unwrap();

    assert_eq!(fake.call_count(), 1);
    assert_eq!(response.ret_code, 0);
    assert_eq!(response.result.order_id, "1321003749386327552");
    assert_eq!(response.result.order_link_id, "test-link-001");
    assert_eq!(fake.last_call().body["orderLinkId"], "test-link-001");
}

#[tokio::test]
async fn test_cancel_all_orders_disabled_returns_empty_list() {
    let fake = Arc::new(FakeBybitApi::new());
    let trade = BybitTrade::new(fake.clone(), false);

    let response = trade
        .cancel_all_orders(CancelAllOrdersRequest {
            category: "linear".to_string(),
            symbol: Some("BTCUSDT".to_string()),
            base_coin: None,
            settle_coin: None,
            order_filter: None,
            stop_order_type: None,
        })
        .await
        .unwrap();

    assert_eq!(fake.call_count(), 0);
    assert_eq!(response.ret_code, TRADING_DISABLED_RET_CODE);
    assert!(response.result.list.is_empty());
}

#[tokio::test]
async fn test_batch_cancel_keeps_per_item_errors() {
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "list": [
            {"category": "linear", "symbol": "BTCUSDT", "orderId": "o-1", "orderLinkId": "l-1"},
            {"category": "linear", "symbol": "BTCUSDT", "orderId": "o-2", "orderLinkId": "l-2"},
            {"category": "linear", "symbol": "BTCUSDT", "orderId": "", "orderLinkId": "",
             "code": 110001, "msg": "order not exists or too late to cancel"},
        ]
    })));
    let trade = BybitTrade::new(fake.clone(), true);

    let response = trade
        .batch_cancel_order(BatchOrderRequest {
            category: "linear".to_string(),
            request: vec![
                json!({"symbol": "BTCUSDT", "orderId": "o-1"}),
                json!({"symbol": "BTCUSDT", "orderId": "o-2"}),
                json!({"symbol": "BTCUSDT", "orderId": "o-3"}),
            ],
        })
        .await
        .unwrap();

    assert_eq!(fake.call_count(), 1);
    assert_eq!(fake.last_call().path, "/v5/order/cancel-batch");
    assert_eq!(fake.last_call().body["request"].as_array().unwrap().len(), 3);

    let list = &response.result.list;
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].order_id, "o-1");
    assert_eq!(list[0].order_link_id, "l-1");
    assert!(list[0].code.is_none());
    assert_eq!(list[1].order_id, "o-2");
    assert_eq!(list[2].code, Some(110001));
    assert_eq!(
        list[2].msg.as_deref(),
        Some("order not exists or too late to cancel")
    );
}

#[tokio::test]
async fn test_batch_place_order_disabled_is_gated() {
    let fake = Arc::new(FakeBybitApi::new());
    let trade = BybitTrade::new(fake.clone(), false);

    let response = trade
        .batch_place_order(BatchOrderRequest {
            category: "linear".to_string(),
            request: vec![json!({"symbol": "BTCUSDT", "side": "Buy"})],
        })
        .await
        .unwrap();

    assert_eq!(fake.call_count(), 0);
    assert_eq!(response.ret_code, TRADING_DISABLED_RET_CODE);
    assert!(response.result.list.is_empty());
}

#[tokio::test]
async fn test_wallet_balance_is_not_gated() {
    // 余额查询只读，交易开关关闭时仍然放行
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "list": [{
            "accountType": "UNIFIED",
            "totalEquity": "1024.5",
            "totalWalletBalance": "1000.0",
            "totalMarginBalance": "1000.0",
            "totalAvailableBalance": "900.0",
            "totalPerpUPL": "24.5",
            "totalInitialMargin": "100.0",
            "totalMaintenanceMargin": "50.0",
            "accountIMRate": "0.1",
            "accountMMRate": "0.05",
            "coin": [{
                "coin": "USDT",
                "equity": "1024.5",
                "walletBalance": "1000.0",
                "usdValue": "1024.5",
                "unrealisedPnl": "24.5",
                "cumRealisedPnl": "-12.1"
            }]
        }]
    })));
    let trade = BybitTrade::new(fake.clone(), false);

    let response = trade.get_wallet_balance("UNIFIED", None).await.unwrap();

    assert_eq!(fake.call_count(), 1);
    assert!(fake.last_call().path.contains("accountType=UNIFIED"));
    assert_eq!(response.ret_code, 0);
    let account = &response.result.list[0];
    assert_eq!(account.total_equity, "1024.5");
    assert_eq!(account.coin[0].wallet_balance, "1000.0");
    assert_eq!(account.coin[0].cum_realised_pnl, "-12.1");
}

#[tokio::test]
async fn test_get_open_closed_orders_prunes_absent_filters() {
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "category": "linear",
        "nextPageCursor": "",
        "list": []
    })));
    let trade = BybitTrade::new(fake.clone(), true);

    let response = trade
        .get_open_closed_orders(
            "linear",
            Some("BTCUSDT"),
            None,
            None,
            None,
            None,
            None,
            None,
            Some(20),
            None,
        )
        .await
        .unwrap();

    let path = fake.last_call().path;
    assert!(path.starts_with("/v5/order/realtime?"));
    assert!(path.contains("category=linear"));
    assert!(path.contains("symbol=BTCUSDT"));
    assert!(path.contains("limit=20"));
    assert!(!path.contains("baseCoin"));
    assert!(!path.contains("cursor"));
    assert!(response.result.list.is_empty());
}
