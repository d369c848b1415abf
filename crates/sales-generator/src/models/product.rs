//! 商品参考数据

use sales_shared::error::{Result, SalesError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Amount;

/// 商品
///
/// mrp 为单价，生成的交易总额由 mrp * quantity 计算，必须是数值。
/// 其余字段只要求存在，取值原样拷贝到交易记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: Value,
    pub product_name: Value,
    pub category: Value,
    pub retail_price: Value,
    pub brand: Value,
    pub mrp: Amount,
}

impl Product {
    /// 校验商品数据
    ///
    /// 类型层面无法表达的约束在加载边界检查，mrp 不能为负
    pub fn validate(&self) -> Result<()> {
        if self.mrp.is_negative() {
            return Err(SalesError::malformed(
                "products",
                format!("product_id={} 的 mrp 为负数: {}", self.product_id, self.mrp),
            ));
        }
        Ok(())
    }
}
