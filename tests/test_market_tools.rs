mod common;

use std::sync::Arc;

use serde_json::json;

use bybit_mcp::trading::bybit::market::BybitMarket;

use common::FakeBybitApi;

#[tokio::test]
async fn test_get_tickers_prunes_absent_parameters() {
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "category": "linear",
        "list": [{
            "symbol": "BTCUSDT",
            "lastPrice": "60123.5",
            "prevPrice24h": "59000.0",
            "price24hPcnt": "0.0190",
            "highPrice24h": "60500.0",
            "lowPrice24h": "58800.0",
            "turnover24h": "31012345.1",
            "volume24h": "514.22",
            "bid1Price": "60123.0",
            "bid1Size": "1.2",
            "ask1Price": "60124.0",
            "ask1Size": "0.8",
            "indexPrice": "60120.1",
            "markPrice": "60121.9",
            "fundingRate": "0.0001",
            "nextFundingTime": "1700028000000"
        }]
    })));
    let market = BybitMarket::new(fake.clone());

    let result = market
        .get_tickers("linear", Some("BTCUSDT"), None, None, None)
        .await
        .unwrap();

    assert_eq!(fake.call_count(), 1);
    let path = fake.last_call().path;
    assert!(path.starts_with("/v5/market/tickers?"));
    assert!(path.contains("category=linear"));
    assert!(path.contains("symbol=BTCUSDT"));
    assert!(!path.contains("baseCoin"));
    assert!(!path.contains("limit"));
    assert!(!path.contains("cursor"));

    let ticker = &result.list[0];
    assert_eq!(ticker.last_price, "60123.5");
    assert_eq!(ticker.funding_rate.as_deref(), Some("0.0001"));
}

#[tokio::test]
async fn test_get_order_book_single_call_with_defaults() {
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "s": "BTCUSDT",
        "b": [["60123.0", "1.2"], ["60122.5", "0.4"]],
        "a": [["60124.0", "0.8"]],
        "ts": 1700000000123i64,
        "u": 18521,
        "seq": 7961638724i64,
        "cts": 1700000000100i64
    })));
    let market = BybitMarket::new(fake.clone());

    let result = market
        .get_order_book("BTCUSDT", "linear", 50, None, None)
        .await
        .unwrap();

    assert_eq!(fake.call_count(), 1);
    let path = fake.last_call().path;
    assert!(path.contains("/v5/market/orderbook"));
    assert!(path.contains("symbol=BTCUSDT"));
    assert!(path.contains("limit=50"));

    assert_eq!(result.s, "BTCUSDT");
    assert_eq!(result.b.len(), 2);
    assert_eq!(result.b[0][0], "60123.0");
    assert_eq!(result.a[0][1], "0.8");
    assert_eq!(result.seq, 7961638724);
}

#[tokio::test]
async fn test_get_kline_paths_per_variant() {
    let kline_result = json!({
        "category": "linear",
        "symbol": "BTCUSDT",
        "list": [
            ["1700000000000", "59000", "60500", "58800", "60123.5", "514.22", "31012345.1"]
        ]
    });

    let fake = Arc::new(FakeBybitApi::new());
    fake.queue_result(kline_result.clone());
    fake.queue_result(kline_result.clone());
    fake.queue_result(kline_result.clone());
    fake.queue_result(kline_result);
    let market = BybitMarket::new(fake.clone());

    market
        .get_kline("BTCUSDT", "5", "linear", 200)
        .await
        .unwrap();
    market
        .get_mark_price_kline("BTCUSDT", "5", "linear", 200)
        .await
        .unwrap();
    market
        .get_index_price_kline("BTCUSDT", "5", "linear", 200)
        .await
        .unwrap();
    let result = market
        .get_premium_index_price_kline("BTCUSDT", "5", "linear", 200)
        .await
        .unwrap();

    let calls = fake.calls();
    assert!(calls[0].path.starts_with("/v5/market/kline?"));
    assert!(calls[1].path.starts_with("/v5/market/mark-price-kline?"));
    assert!(calls[2].path.starts_with("/v5/market/index-price-kline?"));
    assert!(calls[3]
        .path
        .starts_with("/v5/market/premium-index-price-kline?"));
    for call in &calls {
        assert!(call.path.contains("interval=5"));
    }
    // K线数值保持字符串原样
    assert_eq!(result.list[0][4], "60123.5");
}

#[tokio::test]
async fn test_get_server_time() {
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "timeSecond": "1700000000",
        "timeNano": "1700000000123456789"
    })));
    let market = BybitMarket::new(fake.clone());

    let result = market.get_server_time().await.unwrap();

    assert_eq!(fake.last_call().path, "/v5/market/time");
    assert_eq!(result.time_second, "1700000000");
}

#[tokio::test]
async fn test_get_open_interest_maps_interval_time() {
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "symbol": "BTCUSDT",
        "category": "linear",
        "list": [{"openInterest": "52867.5", "timestamp": "1700000000000"}],
        "nextPageCursor": "cursor-1"
    })));
    let market = BybitMarket::new(fake.clone());

    let result = market
        .get_open_interest("BTCUSDT", "linear", "5min", 200)
        .await
        .unwrap();

    assert!(fake.last_call().path.contains("intervalTime=5min"));
    assert_eq!(result.list[0].open_interest, "52867.5");
    assert_eq!(result.next_page_cursor.as_deref(), Some("cursor-1"));
}

#[tokio::test]
async fn test_get_long_short_ratio() {
    let fake = Arc::new(FakeBybitApi::with_result(json!({
        "list": [{
            "symbol": "BTCUSDT",
            "buyRatio": "0.52",
            "sellRatio": "0.48",
            "timestamp": "1700000000000"
        }]
    })));
    let market = BybitMarket::new(fake.clone());

    let result = market
        .get_long_short_ratio("BTCUSDT", "linear", "5min", 200)
        .await
        .unwrap();

    assert!(fake.last_call().path.starts_with("/v5/market/account-ratio?"));
    assert!(fake.last_call().path.contains("period=5min"));
    assert_eq!(result.list[0].buy_ratio, "0.52");
    // 缺失的游标字段意味着没有更多分页
    assert!(result.next_page_cursor.is_none());
}
