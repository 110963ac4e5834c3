use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use bybit_mcp::app_config::log::setup_logging;
use bybit_mcp::app_config::AppConfig;
use bybit_mcp::tools::catalog::{self, MARKET_INFO_RESOURCE, MARKET_INFO_RESOURCE_URI};
use bybit_mcp::tools::dispatch::ToolDispatcher;
use bybit_mcp::trading::bybit::bybit_client::{BybitApi, BybitClient};

/// 行式JSON请求，每行一个对象，按op区分
#[derive(Deserialize, Debug)]
#[serde(tag = "op")]
enum Request {
    #[serde(rename = "tools/list")]
    ToolsList,
    #[serde(rename = "tools/call")]
    ToolsCall {
        name: String,
        #[serde(default)]
        arguments: Value,
    },
    #[serde(rename = "resources/list")]
    ResourcesList,
    #[serde(rename = "resources/read")]
    ResourcesRead { uri: String },
}

async fn handle_line(dispatcher: &ToolDispatcher, config: &AppConfig, line: &str) -> Value {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(e) => return json!({"error": format!("invalid request: {e}")}),
    };
    match request {
        Request::ToolsList => {
            json!({"tools": catalog::list_tools(config.trading_enabled)})
        }
        Request::ToolsCall { name, arguments } => {
            let text = dispatcher.dispatch(&name, arguments).await;
            json!({"text": text})
        }
        Request::ResourcesList => {
            json!({"resources": [{
                "uri": MARKET_INFO_RESOURCE_URI,
                "name": "Bybit Market Information",
                "description": "General information about Bybit market endpoints and capabilities",
                "mimeType": "text/plain",
            }]})
        }
        Request::ResourcesRead { uri } => {
            if uri == MARKET_INFO_RESOURCE_URI {
                json!({"text": MARKET_INFO_RESOURCE})
            } else {
                json!({"error": format!("Unknown resource: {uri}")})
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    setup_logging()?;

    let config = AppConfig::from_env();
    info!(
        "Starting Bybit tool server... testnet:{} trading_enabled:{}",
        config.testnet, config.trading_enabled
    );

    let client: Arc<dyn BybitApi> = Arc::new(BybitClient::new(&config)?);
    let dispatcher = ToolDispatcher::new(client, &config);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    info!("Server initialized and ready for connections");
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let reply = handle_line(&dispatcher, &config, line).await;
        stdout.write_all(reply.to_string().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }
    Ok(())
}
