//! 参考数据模块
//!
//! 负责把门店、商品两份 JSON 数组解析为强类型集合。
//! 文件缺失与格式错误分别报告，绝不以空集合代替。

mod file_source;

pub use file_source::FileReferenceSource;

use async_trait::async_trait;
use sales_shared::error::{Result, SalesError};
use serde::de::DeserializeOwned;

use crate::models::{Product, Store};

pub const STORES_DATASET: &str = "stores";
pub const PRODUCTS_DATASET: &str = "products";

/// 一次调用使用的参考数据
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
}

impl ReferenceData {
    /// 创建参考数据并校验商品
    pub fn new(stores: Vec<Store>, products: Vec<Product>) -> Result<Self> {
        for product in &products {
            product.validate()?;
        }
        Ok(Self { stores, products })
    }

    /// 从内存中的 JSON 文本解析
    pub fn from_json(stores_json: &str, products_json: &str) -> Result<Self> {
        let stores = parse_dataset(STORES_DATASET, stores_json)?;
        let products = parse_dataset(PRODUCTS_DATASET, products_json)?;
        Self::new(stores, products)
    }
}

/// 解析单个数据集
///
/// 缺少必填字段、类型不符、不是数组都视为格式错误
pub(crate) fn parse_dataset<T: DeserializeOwned>(dataset: &str, content: &str) -> Result<Vec<T>> {
    serde_json::from_str(content).map_err(|e| SalesError::malformed(dataset, e.to_string()))
}

/// 参考数据源
///
/// 调用处理器通过该 trait 获取参考数据，便于替换为内存数据源进行测试
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    async fn load(&self) -> Result<ReferenceData>;
}

/// 内存参考数据源
#[derive(Debug, Clone, Default)]
pub struct InMemoryReferenceSource {
    data: ReferenceData,
}

impl InMemoryReferenceSource {
    pub fn new(data: ReferenceData) -> Self {
        Self { data }
    }
}

#[async_trait]
impl ReferenceSource for InMemoryReferenceSource {
    async fn load(&self) -> Result<ReferenceData> {
        Ok(self.data.clone())
    }
}
