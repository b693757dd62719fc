use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::{ClassroomError, Result};

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("Invalid uuid regex")
});

pub fn is_uuid(value: &str) -> bool {
    UUID_RE.is_match(value)
}

/// 校验标识符字段，失败时只报告该字段
pub fn require_uuid(field: &str, value: &str) -> Result<()> {
    if !is_uuid(value) {
        return Err(ClassroomError::invalid_fields(&[field]));
    }
    Ok(())
}

/// 从原始请求体中按顺序取出必填的字符串字段
///
/// - 请求体不是对象，或任一字段缺失/为 null：报告全部必填字段
/// - 字段存在但不是字符串：只报告该字段
pub fn require_fields<'a, const N: usize>(
    body: &'a Value,
    required: [&str; N],
) -> Result<[&'a str; N]> {
    let object = body
        .as_object()
        .filter(|obj| {
            required
                .iter()
                .all(|key| obj.get(*key).is_some_and(|v| !v.is_null()))
        })
        .ok_or_else(|| ClassroomError::invalid_fields(&required))?;

    let mut values = [""; N];
    for (slot, key) in values.iter_mut().zip(required) {
        *slot = object
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| ClassroomError::invalid_fields(&[key]))?;
    }

    Ok(values)
}
