//! 销售交易记录
//!
//! 生成器的输出实体。门店字段与商品字段分别完整拷贝自同一个 Store 和同一个 Product，
//! 记录创建后不再修改。

use chrono::NaiveDateTime;
use sales_shared::error::{Result, SalesError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{Amount, Product, Store};

/// 销售交易记录
///
/// 字段顺序即序列化后的输出顺序
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: Uuid,
    /// 本地时间，ISO-8601 格式
    pub timestamp: NaiveDateTime,
    pub store_id: Value,
    pub store_name: Value,
    pub store_location: Value,
    pub product_id: Value,
    pub product_name: Value,
    pub category: Value,
    pub retail_price: Value,
    pub quantity: u32,
    pub brand: Value,
    pub mrp: Amount,
    pub total: Amount,
    pub customer_name: String,
    pub customer_email: String,
}

/// 单条记录中随机生成的部分
#[derive(Debug, Clone)]
pub struct SaleDetails {
    pub transaction_id: Uuid,
    pub timestamp: NaiveDateTime,
    pub quantity: u32,
    pub customer_name: String,
    pub customer_email: String,
}

impl Transaction {
    /// 组装交易记录
    ///
    /// total 只由 mrp * quantity 得出，乘法溢出时整条记录生成失败
    pub fn assemble(store: &Store, product: &Product, details: SaleDetails) -> Result<Self> {
        let total = product.mrp.checked_mul(details.quantity).ok_or_else(|| {
            SalesError::GenerationFailed(format!(
                "product_id={} 的 total 溢出: mrp={} quantity={}",
                product.product_id, product.mrp, details.quantity
            ))
        })?;

        Ok(Self {
            transaction_id: details.transaction_id,
            timestamp: details.timestamp,
            store_id: store.store_id.clone(),
            store_name: store.store_name.clone(),
            store_location: store.location.clone(),
            product_id: product.product_id.clone(),
            product_name: product.product_name.clone(),
            category: product.category.clone(),
            retail_price: product.retail_price.clone(),
            quantity: details.quantity,
            brand: product.brand.clone(),
            mrp: product.mrp,
            total,
            customer_name: details.customer_name,
            customer_email: details.customer_email,
        })
    }

    /// 门店字段是否完整来自给定门店
    pub fn matches_store(&self, store: &Store) -> bool {
        self.store_id == store.store_id
            && self.store_name == store.store_name
            && self.store_location == store.location
    }

    /// 商品字段是否完整来自给定商品
    pub fn matches_product(&self, product: &Product) -> bool {
        self.product_id == product.product_id
            && self.product_name == product.product_name
            && self.category == product.category
            && self.retail_price == product.retail_price
            && self.brand == product.brand
            && self.mrp == product.mrp
    }
}
