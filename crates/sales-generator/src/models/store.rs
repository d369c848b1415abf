//! 门店参考数据

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 门店
///
/// 每次调用加载一次，在整批生成过程中只读共享。
/// 字段必须存在，取值原样拷贝到交易记录，不限定 JSON 类型
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub store_id: Value,
    pub store_name: Value,
    pub location: Value,
}
