//! 逐字段声明的反序列化归一化规则。
//!
//! 交易所对少数字段（成交/仓位的seq序列号、positionIdx仓位序号）在
//! 整数与字符串两种编码之间摇摆，这里集中定义命名的归一化函数，
//! 模型里通过 `deserialize_with` 显式引用，不做任何隐式宽松转换。

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// seq序列号：整数或字符串 -> 字符串
pub fn string_from_int_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => v.to_string(),
        IntOrString::Str(v) => v,
    })
}

/// seq序列号（可缺省字段）：整数或字符串 -> 字符串
pub fn opt_string_from_int_or_string<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<IntOrString>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        IntOrString::Int(i) => i.to_string(),
        IntOrString::Str(s) => s,
    }))
}

/// positionIdx仓位序号：整数或数字字符串 -> 整数
pub fn int_from_int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(v) => Ok(v),
        IntOrString::Str(v) => v.trim().parse::<i64>().map_err(|_| {
            serde::de::Error::custom(format!("invalid integer string: {v:?}"))
        }),
    }
}
