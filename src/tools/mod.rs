pub mod catalog;
pub mod dispatch;

use serde::Serialize;

/// 对外公布的工具描述：名称、说明、JSON Schema形式的入参契约。
/// 启动后只读，仅用于能力发现。
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// 渲染：一行说明前缀 + 校验后模型的完整结构化输出，
/// 模型里的字段一个不少地进入文本
pub(crate) fn render<T: Serialize>(prefix: &str, value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(body) => format!("{}\n{}", prefix, body),
        Err(e) => format!("{}\n<unserializable result: {}>", prefix, e),
    }
}
