//! 工具目录。行情与只读查询类工具始终公布；
//! 变更型工具只在交易开关打开时公布，适配器内部仍保留第二道开关校验。

use serde_json::{json, Value};

use super::ToolDescriptor;

/// category参数的通用schema片段
fn category_schema(default: &str) -> Value {
    json!({
        "type": "string",
        "description": "Product type: 'linear' for USDT perpetuals, 'inverse' for coin-margined futures, 'option' for options, 'spot' for spot trading",
        "enum": ["linear", "inverse", "option", "spot"],
        "default": default,
    })
}

fn symbol_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description,
    })
}

fn tool(name: &'static str, description: &'static str, input_schema: Value) -> ToolDescriptor {
    ToolDescriptor {
        name,
        description,
        input_schema,
    }
}

/// 公布的工具列表。trading_enabled关闭时变更型工具整组隐藏。
pub fn list_tools(trading_enabled: bool) -> Vec<ToolDescriptor> {
    let mut tools = vec![
        tool(
            "get_server_time",
            "Get the current Bybit server time",
            json!({"type": "object", "properties": {}, "required": []}),
        ),
        tool(
            "get_tickers",
            "Get real-time ticker information including current prices, 24h volume, and price changes for trading symbols",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Trading pair symbol, e.g. 'BTCUSDT'. Leave empty to get all symbols."),
                    "baseCoin": {"type": "string", "description": "Base coin, options only. Examples: 'BTC', 'ETH'"},
                    "limit": {"type": "integer", "description": "Limit for data size per page"},
                    "cursor": {"type": "string", "description": "Pagination cursor from a previous response"},
                },
                "required": [],
            }),
        ),
        tool(
            "get_order_book",
            "Get order book depth for a trading symbol",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol name (e.g., BTCUSDT)"),
                    "limit": {
                        "type": "integer",
                        "description": "Limit for data size per page (1-500)",
                        "minimum": 1,
                        "maximum": 500,
                        "default": 50,
                    },
                    "baseCoin": {"type": "string", "description": "Base coin, options only"},
                    "cursor": {"type": "string", "description": "Pagination cursor"},
                },
                "required": ["symbol"],
            }),
        ),
        tool(
            "get_recent_trades",
            "Get recent public trades for a symbol",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol name (e.g., BTCUSDT)"),
                    "baseCoin": {"type": "string", "description": "Base coin, options only"},
                    "optionType": {"type": "string", "description": "Option type, Call or Put", "enum": ["Call", "Put"]},
                    "limit": {"type": "integer", "description": "Limit for data size per page", "default": 50},
                    "cursor": {"type": "string", "description": "Pagination cursor"},
                },
                "required": ["symbol"],
            }),
        ),
        tool(
            "get_kline",
            "Get kline (candlestick) data for a symbol",
            kline_schema(),
        ),
        tool(
            "get_mark_price_kline",
            "Get mark price kline data for a symbol",
            kline_schema(),
        ),
        tool(
            "get_index_price_kline",
            "Get index price kline data for a symbol",
            kline_schema(),
        ),
        tool(
            "get_premium_index_price_kline",
            "Get premium index price kline data for a symbol",
            kline_schema(),
        ),
        tool(
            "get_instruments_info",
            "Get instrument specifications (tick size, lot size, leverage range) for trading pairs",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol name. Leave empty to list all instruments of the category."),
                },
                "required": [],
            }),
        ),
        tool(
            "get_funding_rate_history",
            "Get historical funding rates for a symbol",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol name (e.g., BTCUSDT)"),
                    "limit": {"type": "integer", "description": "Limit for data size per page", "default": 200},
                },
                "required": ["symbol"],
            }),
        ),
        tool(
            "get_open_interest",
            "Get open interest data for a symbol",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol name (e.g., BTCUSDT)"),
                    "interval": {
                        "type": "string",
                        "description": "Interval time",
                        "enum": ["5min", "15min", "30min", "1h", "4h", "1d"],
                        "default": "5min",
                    },
                    "limit": {"type": "integer", "description": "Limit for data size per page", "default": 200},
                },
                "required": ["symbol"],
            }),
        ),
        tool(
            "get_insurance",
            "Get insurance fund balance history",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "baseCoin": {"type": "string", "description": "Base coin filter"},
                    "quoteCoin": {"type": "string", "description": "Quote coin filter"},
                    "startTime": {"type": "string", "description": "Start timestamp (ms)"},
                    "endTime": {"type": "string", "description": "End timestamp (ms)"},
                },
                "required": [],
            }),
        ),
        tool(
            "get_risk_limit",
            "Get risk limit tiers for a symbol",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol name (e.g., BTCUSDT)"),
                },
                "required": ["symbol"],
            }),
        ),
        tool(
            "get_long_short_ratio",
            "Get long/short account ratio statistics for a symbol",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol name (e.g., BTCUSDT)"),
                    "interval": {
                        "type": "string",
                        "description": "Data period",
                        "enum": ["5min", "15min", "30min", "1h", "4h", "1d"],
                        "default": "5min",
                    },
                    "limit": {"type": "integer", "description": "Limit for data size per page", "default": 200},
                },
                "required": ["symbol"],
            }),
        ),
    ];

    if trading_enabled {
        tools.extend([
            tool(
                "place_order",
                "Place a new order. Limit orders require a price; conditional parameters are cross-validated before dispatch.",
                json!({
                    "type": "object",
                    "properties": {
                        "category": category_schema("linear"),
                        "symbol": symbol_schema("Trading pair symbol (e.g., 'BTCUSDT')"),
                        "side": {"type": "string", "description": "Order side", "enum": ["Buy", "Sell"]},
                        "orderType": {"type": "string", "description": "Order type", "enum": ["Market", "Limit"]},
                        "qty": {"type": "string", "description": "Order quantity as a decimal string"},
                        "price": {"type": "string", "description": "Order price, required for Limit orders"},
                        "isLeverage": {"type": "integer", "description": "Use leverage for spot margin (0 or 1)", "enum": [0, 1]},
                        "orderLinkId": {"type": "string", "description": "Custom order ID for tracking"},
                        "timeInForce": {"type": "string", "description": "Execution strategy", "enum": ["GTC", "IOC", "FOK", "PostOnly"]},
                        "positionIdx": {"type": "integer", "description": "Position mode index (0=One-way, 1=Hedge Buy, 2=Hedge Sell)", "enum": [0, 1, 2]},
                        "reduceOnly": {"type": "boolean", "description": "Reduce-only order to close position"},
                        "triggerBy": {"type": "string", "description": "Trigger price type for conditional orders", "enum": ["LastPrice", "MarkPrice", "IndexPrice"]},
                        "triggerPrice": {"type": "string", "description": "Trigger price for conditional orders"},
                        "triggerDirection": {"type": "integer", "description": "Trigger direction (1=rise above, 2=fall below)", "enum": [1, 2]},
                        "takeProfit": {"type": "string", "description": "Take profit price"},
                        "stopLoss": {"type": "string", "description": "Stop loss price"},
                        "tpTriggerBy": {"type": "string", "description": "Take profit trigger price type, defaults to LastPrice", "enum": ["LastPrice", "MarkPrice", "IndexPrice"]},
                        "slTriggerBy": {"type": "string", "description": "Stop loss trigger price type, defaults to LastPrice", "enum": ["LastPrice", "MarkPrice", "IndexPrice"]},
                        "marketUnit": {"type": "string", "description": "Market order unit for spot", "enum": ["baseCoin", "quoteCoin"]},
                        "smpType": {"type": "string", "description": "Self-match prevention type"},
                    },
                    "required": ["category", "symbol", "side", "orderType", "qty"],
                }),
            ),
            tool(
                "amend_order",
                "Amend an existing open order, identified by orderId or orderLinkId",
                json!({
                    "type": "object",
                    "properties": {
                        "category": category_schema("linear"),
                        "symbol": symbol_schema("Trading pair symbol"),
                        "orderId": {"type": "string", "description": "Order ID to amend"},
                        "orderLinkId": {"type": "string", "description": "Custom order ID to amend"},
                        "orderIv": {"type": "string", "description": "Implied volatility, options only"},
                        "triggerPrice": {"type": "string", "description": "New trigger price"},
                        "qty": {"type": "string", "description": "New order quantity"},
                        "price": {"type": "string", "description": "New order price"},
                        "tpslMode": {"type": "string", "description": "TP/SL mode", "enum": ["Full", "Partial"]},
                        "takeProfit": {"type": "string", "description": "New take profit price"},
                        "stopLoss": {"type": "string", "description": "New stop loss price"},
                        "tpTriggerBy": {"type": "string", "description": "Take profit trigger price type"},
                        "slTriggerBy": {"type": "string", "description": "Stop loss trigger price type"},
                        "triggerBy": {"type": "string", "description": "Trigger price type"},
                        "tpLimitPrice": {"type": "string", "description": "TP limit order price"},
                        "slLimitPrice": {"type": "string", "description": "SL limit order price"},
                    },
                    "required": ["category", "symbol"],
                }),
            ),
            tool(
                "cancel_order",
                "Cancel an open order, identified by orderId or orderLinkId",
                json!({
                    "type": "object",
                    "properties": {
                        "category": category_schema("linear"),
                        "symbol": symbol_schema("Trading pair symbol"),
                        "orderId": {"type": "string", "description": "Order ID to cancel"},
                        "orderLinkId": {"type": "string", "description": "Custom order ID to cancel"},
                        "orderFilter": {"type": "string", "description": "Spot order filter", "enum": ["Order", "StopOrder", "tpslOrder"]},
                    },
                    "required": ["category", "symbol"],
                }),
            ),
            tool(
                "cancel_all_orders",
                "Cancel all open orders matching the filter",
                json!({
                    "type": "object",
                    "properties": {
                        "category": category_schema("linear"),
                        "symbol": symbol_schema("Trading pair symbol"),
                        "baseCoin": {"type": "string", "description": "Cancel all orders with this base coin"},
                        "settleCoin": {"type": "string", "description": "Cancel all orders with this settle coin"},
                        "orderFilter": {"type": "string", "description": "Spot order filter"},
                        "stopOrderType": {"type": "string", "description": "Stop order type filter"},
                    },
                    "required": ["category"],
                }),
            ),
            tool(
                "batch_place_order",
                "Place a batch of orders in one request. Each request item follows the place_order parameter contract.",
                batch_schema("List of order creation payloads"),
            ),
            tool(
                "batch_amend_order",
                "Amend a batch of orders in one request",
                batch_schema("List of order amendment payloads"),
            ),
            tool(
                "batch_cancel_order",
                "Cancel a batch of orders in one request",
                batch_schema("List of order cancellation payloads"),
            ),
            tool(
                "place_trigger_order",
                "Place a trigger/conditional order that activates once the market price crosses the trigger price",
                json!({
                    "type": "object",
                    "properties": {
                        "category": category_schema("linear"),
                        "symbol": symbol_schema("Trading pair symbol"),
                        "side": {"type": "string", "description": "Order side", "enum": ["Buy", "Sell"]},
                        "orderType": {"type": "string", "description": "Order type after trigger", "enum": ["Market", "Limit"]},
                        "qty": {"type": "string", "description": "Order quantity as a decimal string"},
                        "triggerPrice": {"type": "string", "description": "Price that triggers the order"},
                        "triggerDirection": {"type": "integer", "description": "1 for rising, 2 for falling", "enum": [1, 2]},
                        "triggerBy": {"type": "string", "description": "Price type for trigger", "enum": ["LastPrice", "MarkPrice", "IndexPrice"]},
                        "price": {"type": "string", "description": "Order price after trigger, for Limit orders"},
                        "orderFilter": {"type": "string", "description": "Order filter for spot"},
                        "timeInForce": {"type": "string", "description": "Time in force", "enum": ["GTC", "IOC", "FOK", "PostOnly"]},
                        "reduceOnly": {"type": "boolean", "description": "Whether the order can only reduce the position"},
                        "closeOnTrigger": {"type": "boolean", "description": "Whether to close the position on trigger"},
                        "positionIdx": {"type": "integer", "description": "Position index for hedge mode", "enum": [0, 1, 2]},
                        "orderLinkId": {"type": "string", "description": "Custom order ID"},
                    },
                    "required": ["category", "symbol", "side", "orderType", "qty", "triggerPrice", "triggerDirection"],
                }),
            ),
        ]);
    }

    tools.extend([
        tool(
            "get_open_closed_orders",
            "Get open orders and recently closed orders",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol filter"),
                    "baseCoin": {"type": "string", "description": "Base coin filter"},
                    "settleCoin": {"type": "string", "description": "Settle coin filter"},
                    "orderId": {"type": "string", "description": "Filter by order ID"},
                    "orderLinkId": {"type": "string", "description": "Filter by custom order ID"},
                    "openOnly": {"type": "integer", "description": "0=active orders only"},
                    "orderFilter": {"type": "string", "description": "Order filter"},
                    "limit": {"type": "integer", "description": "Limit for data size per page"},
                    "cursor": {"type": "string", "description": "Pagination cursor"},
                },
                "required": ["category"],
            }),
        ),
        tool(
            "get_order_history",
            "Get historical orders",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Symbol filter"),
                    "baseCoin": {"type": "string", "description": "Base coin filter"},
                    "settleCoin": {"type": "string", "description": "Settle coin filter"},
                    "orderId": {"type": "string", "description": "Filter by order ID"},
                    "orderLinkId": {"type": "string", "description": "Filter by custom order ID"},
                    "orderFilter": {"type": "string", "description": "Order filter"},
                    "orderStatus": {"type": "string", "description": "Order status filter"},
                    "startTime": {"type": "integer", "description": "Start timestamp (ms)"},
                    "endTime": {"type": "integer", "description": "End timestamp (ms)"},
                    "limit": {"type": "integer", "description": "Limit for data size per page"},
                    "cursor": {"type": "string", "description": "Pagination cursor"},
                },
                "required": ["category"],
            }),
        ),
        tool(
            "get_trade_history",
            "Get trade execution history",
            json!({
                "type": "object",
                "properties": {
                    "category": category_schema("linear"),
                    "symbol": symbol_schema("Trading pair symbol"),
                    "orderId": {"type": "string", "description": "Filter by order ID"},
                    "orderLinkId": {"type": "string", "description": "Filter by custom order ID"},
                    "baseCoin": {"type": "string", "description": "Filter by base coin"},
                    "startTime": {"type": "integer", "description": "Start timestamp (ms)"},
                    "endTime": {"type": "integer", "description": "End timestamp (ms)"},
                    "execType": {"type": "string", "description": "Execution type filter"},
                    "limit": {"type": "integer", "description": "Limit for data size per page"},
                    "cursor": {"type": "string", "description": "Pagination cursor"},
                },
                "required": ["category"],
            }),
        ),
        tool(
            "get_spot_borrow_quota",
            "Query the available balance for spot margin trading",
            json!({
                "type": "object",
                "properties": {
                    "category": {"type": "string", "description": "Must be 'spot'", "enum": ["spot"], "default": "spot"},
                    "symbol": symbol_schema("Trading pair symbol"),
                    "side": {"type": "string", "description": "Order side", "enum": ["Buy", "Sell"]},
                },
                "required": ["symbol", "side"],
            }),
        ),
        tool(
            "get_wallet_balance",
            "Get wallet balance per account type, including per-coin balances",
            json!({
                "type": "object",
                "properties": {
                    "accountType": {
                        "type": "string",
                        "description": "Account type",
                        "enum": ["UNIFIED", "CONTRACT", "SPOT", "INVESTMENT", "OPTION", "FUND", "COPYTRADING"],
                    },
                    "coin": {"type": "string", "description": "Coin filter, e.g. 'USDT'. Leave empty for all coins."},
                },
                "required": ["accountType"],
            }),
        ),
        tool(
            "get_single_coin_balance",
            "Get the balance of a single coin in an account, including transferable amount",
            json!({
                "type": "object",
                "properties": {
                    "accountType": {
                        "type": "string",
                        "description": "Account type",
                        "enum": ["UNIFIED", "CONTRACT", "SPOT", "INVESTMENT", "OPTION", "FUND", "COPYTRADING"],
                    },
                    "coin": {"type": "string", "description": "Coin name, e.g. 'USDT'"},
                    "memberId": {"type": "string", "description": "Sub-account UID"},
                    "toAccountType": {"type": "string", "description": "Transfer target account type"},
                    "toMemberId": {"type": "string", "description": "Transfer target UID"},
                    "withBonus": {"type": "integer", "description": "Include bonus (0 or 1)", "enum": [0, 1]},
                },
                "required": ["accountType", "coin"],
            }),
        ),
        tool(
            "get_account_info",
            "Get account configuration: margin mode, unified account upgrade status",
            json!({"type": "object", "properties": {}, "required": []}),
        ),
        tool(
            "get_position_info",
            "Query real-time position data",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Product type",
                        "enum": ["linear", "inverse", "option"],
                        "default": "linear",
                    },
                    "settleCoin": {"type": "string", "description": "Settle coin, e.g. 'USDT'"},
                    "symbol": symbol_schema("Symbol filter"),
                    "baseCoin": {"type": "string", "description": "Base coin filter, options only"},
                    "limit": {"type": "integer", "description": "Limit for data size per page"},
                    "cursor": {"type": "string", "description": "Pagination cursor"},
                },
                "required": ["category", "settleCoin"],
            }),
        ),
        tool(
            "get_closed_pnl",
            "Get closed profit and loss records",
            json!({
                "type": "object",
                "properties": {
                    "category": {
                        "type": "string",
                        "description": "Product type",
                        "enum": ["linear", "inverse"],
                        "default": "linear",
                    },
                    "symbol": symbol_schema("Symbol filter"),
                    "startTime": {"type": "integer", "description": "Start timestamp (ms)"},
                    "endTime": {"type": "integer", "description": "End timestamp (ms)"},
                    "limit": {"type": "integer", "description": "Limit for data size per page"},
                    "cursor": {"type": "string", "description": "Pagination cursor"},
                },
                "required": ["category"],
            }),
        ),
    ]);

    if trading_enabled {
        tools.extend([
            tool(
                "set_leverage",
                "Set buy and sell leverage for a symbol",
                json!({
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Product type", "enum": ["linear", "inverse"]},
                        "symbol": symbol_schema("Trading pair symbol"),
                        "buyLeverage": {"type": "string", "description": "Buy side leverage, e.g. '10'"},
                        "sellLeverage": {"type": "string", "description": "Sell side leverage, e.g. '10'"},
                    },
                    "required": ["category", "symbol", "buyLeverage", "sellLeverage"],
                }),
            ),
            tool(
                "switch_cross_isolated_margin",
                "Switch a symbol between cross margin and isolated margin",
                json!({
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Product type", "enum": ["linear", "inverse"]},
                        "symbol": symbol_schema("Trading pair symbol"),
                        "tradeMode": {"type": "integer", "description": "0=cross margin, 1=isolated margin", "enum": [0, 1]},
                        "buyLeverage": {"type": "string", "description": "Buy side leverage"},
                        "sellLeverage": {"type": "string", "description": "Sell side leverage"},
                    },
                    "required": ["category", "symbol", "tradeMode", "buyLeverage", "sellLeverage"],
                }),
            ),
            tool(
                "switch_position_mode",
                "Switch between one-way and hedge position mode, by symbol or by coin",
                json!({
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Product type", "enum": ["linear", "inverse"]},
                        "symbol": symbol_schema("Symbol to switch"),
                        "coin": {"type": "string", "description": "Coin to switch, alternative to symbol"},
                        "mode": {"type": "integer", "description": "0=one-way mode, 3=hedge mode", "enum": [0, 3], "default": 0},
                    },
                    "required": ["category"],
                }),
            ),
            tool(
                "set_trading_stop",
                "Set take profit, stop loss or trailing stop for an open position",
                json!({
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Product type", "enum": ["linear", "inverse"]},
                        "symbol": symbol_schema("Trading pair symbol"),
                        "tpslMode": {"type": "string", "description": "TP/SL mode", "enum": ["Full", "Partial"]},
                        "positionIdx": {"type": "integer", "description": "Position index (0=one-way, 1=hedge-buy, 2=hedge-sell)", "enum": [0, 1, 2]},
                        "takeProfit": {"type": "string", "description": "Take profit price, '0' to cancel"},
                        "stopLoss": {"type": "string", "description": "Stop loss price, '0' to cancel"},
                        "trailingStop": {"type": "string", "description": "Trailing stop distance"},
                        "tpTriggerBy": {"type": "string", "description": "TP trigger price type"},
                        "slTriggerBy": {"type": "string", "description": "SL trigger price type"},
                        "activePrice": {"type": "string", "description": "Trailing stop activation price"},
                        "tpSize": {"type": "string", "description": "TP size, Partial mode only"},
                        "slSize": {"type": "string", "description": "SL size, Partial mode only"},
                        "tpLimitPrice": {"type": "string", "description": "TP limit order price"},
                        "slLimitPrice": {"type": "string", "description": "SL limit order price"},
                        "tpOrderType": {"type": "string", "description": "TP order type when triggered", "enum": ["Market", "Limit"]},
                        "slOrderType": {"type": "string", "description": "SL order type when triggered", "enum": ["Market", "Limit"]},
                    },
                    "required": ["category", "symbol", "tpslMode", "positionIdx"],
                }),
            ),
            tool(
                "set_auto_add_margin",
                "Turn automatic margin replenishment on or off for an isolated position",
                json!({
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Product type", "enum": ["linear", "inverse"]},
                        "symbol": symbol_schema("Trading pair symbol"),
                        "autoAddMargin": {"type": "integer", "description": "0=off, 1=on", "enum": [0, 1]},
                        "positionIdx": {"type": "integer", "description": "Position index", "enum": [0, 1, 2]},
                    },
                    "required": ["category", "symbol", "autoAddMargin"],
                }),
            ),
            tool(
                "modify_position_margin",
                "Add or reduce margin of an isolated position",
                json!({
                    "type": "object",
                    "properties": {
                        "category": {"type": "string", "description": "Product type", "enum": ["linear", "inverse"]},
                        "symbol": symbol_schema("Trading pair symbol"),
                        "margin": {"type": "string", "description": "Margin delta as a decimal string, negative to reduce"},
                        "positionIdx": {"type": "integer", "description": "Position index", "enum": [0, 1, 2]},
                    },
                    "required": ["category", "symbol", "margin"],
                }),
            ),
        ]);
    }

    tools
}

fn kline_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "category": category_schema("linear"),
            "symbol": symbol_schema("Symbol name (e.g., BTCUSDT)"),
            "interval": {
                "type": "string",
                "description": "Kline interval",
                "enum": ["1", "3", "5", "15", "30", "60", "120", "240", "360", "720", "D", "W", "M"],
            },
            "limit": {"type": "integer", "description": "Limit for data size per page", "default": 200},
        },
        "required": ["symbol", "interval"],
    })
}

/// 批量订单工具共用的schema
fn batch_schema(request_description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "category": {
                "type": "string",
                "description": "Product type",
                "enum": ["linear", "inverse", "option", "spot"],
            },
            "request": {
                "type": "array",
                "description": request_description,
                "items": {"type": "object"},
                "minItems": 1,
                "maxItems": 10,
            },
        },
        "required": ["category", "request"],
    })
}

/// 服务能力说明资源
pub const MARKET_INFO_RESOURCE_URI: &str = "bybit://market/info";

pub const MARKET_INFO_RESOURCE: &str = "\
# Bybit Tool Server

This server exposes Bybit's v5 REST API endpoints as callable tools.

## Available Endpoints:

### Core Market Data
- get_server_time: Get Bybit server time
- get_tickers: Get ticker information for symbols
- get_order_book: Get order book depth
- get_recent_trades: Get recent trade history

### Kline/Candlestick Data
- get_kline: Get standard candlestick data
- get_mark_price_kline: Get mark price klines
- get_index_price_kline: Get index price klines
- get_premium_index_price_kline: Get premium index price klines

### Trading Information
- get_instruments_info: Get trading instrument details
- get_funding_rate_history: Get historical funding rates
- get_open_interest: Get open interest data
- get_risk_limit: Get risk limit information

### Statistics
- get_insurance: Get insurance fund data
- get_long_short_ratio: Get long/short ratio statistics

## Supported Categories:
- linear: USDT perpetual, USDC perpetual, USDC futures
- inverse: Inverse perpetual, Inverse futures
- option: Options
- spot: Spot trading

## Usage:
Each tool accepts parameters specific to the endpoint. Required parameters
are marked in the tool schema. Most tools support optional filtering by
symbol, category, time ranges, and pagination. Order, position and wallet
tools additionally require API credentials; order placement and position
changes are only available while trading is enabled in the server
configuration.";
