use serde::{Deserialize, Serialize};
use std::fmt;

/// `POST /api/start-job` 回傳的工作描述，內容由伺服器決定
pub type JobDescriptor = serde_json::Value;

/// `coverage.json` 中的一個已產生圖磚的區域
pub type CoverageArea = serde_json::Value;

/// Identifier of a completed job, as listed by `/api/completed-jobs`.
/// Anything that is not a string or an integer is kept as-is in `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobId::Number(n) => write!(f, "{}", n),
            JobId::Text(s) => f.write_str(s),
            JobId::Other(v) => write!(f, "{}", v),
        }
    }
}

/// `GET /api/fgfs-status` 的回應，保留伺服器送來的原始 JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FgfsStatus(pub serde_json::Value);

impl FgfsStatus {
    /// `connected` 以 JavaScript 的真值規則判斷
    pub fn connected(&self) -> bool {
        self.0.get("connected").is_some_and(is_truthy)
    }

    pub fn position(&self) -> Option<&serde_json::Value> {
        self.0.get("position").filter(|v| !v.is_null())
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectRequest {
    pub port: u16,
}
