//! 文件参考数据源

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sales_shared::config::ReferenceDataConfig;
use sales_shared::error::{Result, SalesError};
use serde::de::DeserializeOwned;
use tracing::info;

use super::{PRODUCTS_DATASET, ReferenceData, ReferenceSource, STORES_DATASET, parse_dataset};

/// 从本地 JSON 文件读取门店与商品
#[derive(Debug, Clone)]
pub struct FileReferenceSource {
    stores_path: PathBuf,
    products_path: PathBuf,
}

impl FileReferenceSource {
    pub fn new(stores_path: impl Into<PathBuf>, products_path: impl Into<PathBuf>) -> Self {
        Self {
            stores_path: stores_path.into(),
            products_path: products_path.into(),
        }
    }

    pub fn from_config(config: &ReferenceDataConfig) -> Self {
        Self::new(&config.stores_path, &config.products_path)
    }
}

#[async_trait]
impl ReferenceSource for FileReferenceSource {
    async fn load(&self) -> Result<ReferenceData> {
        let stores = read_dataset(STORES_DATASET, &self.stores_path).await?;
        let products = read_dataset(PRODUCTS_DATASET, &self.products_path).await?;
        let data = ReferenceData::new(stores, products)?;

        info!(
            stores = data.stores.len(),
            products = data.products.len(),
            stores_path = %self.stores_path.display(),
            products_path = %self.products_path.display(),
            "参考数据加载完成"
        );

        Ok(data)
    }
}

/// 读取并解析单个数据集文件
///
/// 非 UTF-8 内容属于格式错误，其余读取失败均视为数据缺失
async fn read_dataset<T: DeserializeOwned>(dataset: &str, path: &Path) -> Result<Vec<T>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::InvalidData {
            SalesError::malformed(dataset, format!("{}: {}", path.display(), e))
        } else {
            SalesError::ReferenceDataMissing {
                dataset: dataset.to_string(),
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;

    parse_dataset(dataset, &content)
}
