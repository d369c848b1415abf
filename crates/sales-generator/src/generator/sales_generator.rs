//! 销售交易生成器
//!
//! 从门店与商品参考数据中随机抽样，批量生成相互一致的交易记录。
//! 每条记录独立生成，循环内无 I/O，任一条失败则整批失败，不返回部分结果。

use std::ops::RangeInclusive;

use chrono::Duration;
use rand::Rng;
use rand::seq::IndexedRandom;
use sales_shared::config::GenerationConfig;
use sales_shared::error::{Result, SalesError};
use tracing::debug;
use uuid::Uuid;

use super::clock::{Clock, SystemClock};
use super::identity::Locale;
use crate::models::{Product, SaleDetails, Store, Transaction};

/// 预分配上限，防止超大 count 一次性申请过多内存
const MAX_PREALLOCATED_RECORDS: usize = 100_000;

/// 生成器配置
///
/// 控制交易时间窗口、购买数量范围和顾客身份的区域设置
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 交易时间最多回溯的天数，0..=max_days_back 均匀抽取
    pub max_days_back: u32,
    /// 购买数量范围（含两端）
    pub quantity: RangeInclusive<u32>,
    pub locale: Locale,
}

impl Default for GeneratorConfig {
    /// 默认配置：最近 100 天，每笔 1-3 件，英文身份
    fn default() -> Self {
        Self {
            max_days_back: 100,
            quantity: 1..=3,
            locale: Locale::En,
        }
    }
}

impl GeneratorConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if *self.quantity.start() == 0 {
            return Err(SalesError::InvalidConfig {
                field: "generator.min_quantity".to_string(),
                message: "购买数量下限必须大于 0".to_string(),
            });
        }
        if self.quantity.is_empty() {
            return Err(SalesError::InvalidConfig {
                field: "generator.max_quantity".to_string(),
                message: format!(
                    "购买数量上限 {} 小于下限 {}",
                    self.quantity.end(),
                    self.quantity.start()
                ),
            });
        }
        Ok(())
    }
}

impl TryFrom<&GenerationConfig> for GeneratorConfig {
    type Error = SalesError;

    fn try_from(config: &GenerationConfig) -> Result<Self> {
        let generator_config = Self {
            max_days_back: config.max_days_back,
            quantity: config.min_quantity..=config.max_quantity,
            locale: config.locale.parse()?,
        };
        generator_config.validate()?;
        Ok(generator_config)
    }
}

/// 销售交易生成器
///
/// 随机源与时钟均可注入：`generate_with_rng` 接受调用方的 RNG，
/// 时钟通过泛型参数替换，测试中配合固定种子可得到完全可复现的批次。
#[derive(Debug, Clone)]
pub struct SalesGenerator<C = SystemClock> {
    config: GeneratorConfig,
    clock: C,
}

impl SalesGenerator<SystemClock> {
    /// 使用默认配置和系统时钟创建生成器
    pub fn with_defaults() -> Self {
        Self {
            config: GeneratorConfig::default(),
            clock: SystemClock,
        }
    }
}

impl<C: Clock> SalesGenerator<C> {
    /// 创建生成器
    pub fn new(config: GeneratorConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, clock })
    }

    /// 使用线程本地随机源生成交易记录
    pub fn generate(
        &self,
        stores: &[Store],
        products: &[Product],
        count: usize,
    ) -> Result<Vec<Transaction>> {
        self.generate_with_rng(&mut rand::rng(), stores, products, count)
    }

    /// 使用指定随机源生成交易记录
    ///
    /// 门店或商品为空时在生成开始前直接拒绝；count 为 0 时返回空列表。
    /// 输出顺序即生成顺序。
    pub fn generate_with_rng<R: Rng>(
        &self,
        rng: &mut R,
        stores: &[Store],
        products: &[Product],
        count: usize,
    ) -> Result<Vec<Transaction>> {
        ensure_not_empty("stores", stores)?;
        ensure_not_empty("products", products)?;

        let mut transactions = Vec::with_capacity(count.min(MAX_PREALLOCATED_RECORDS));
        for _ in 0..count {
            transactions.push(self.generate_one(rng, stores, products)?);
        }

        debug!(
            count = transactions.len(),
            stores = stores.len(),
            products = products.len(),
            locale = %self.config.locale,
            "交易记录批次已生成"
        );

        Ok(transactions)
    }

    /// 生成单条交易记录
    fn generate_one<R: Rng>(
        &self,
        rng: &mut R,
        stores: &[Store],
        products: &[Product],
    ) -> Result<Transaction> {
        let product = products
            .choose(rng)
            .ok_or_else(|| SalesError::GenerationFailed("商品抽样失败".to_string()))?;
        let store = stores
            .choose(rng)
            .ok_or_else(|| SalesError::GenerationFailed("门店抽样失败".to_string()))?;

        let quantity = rng.random_range(self.config.quantity.clone());

        let days_back = rng.random_range(0..=self.config.max_days_back);
        let timestamp = self
            .clock
            .now()
            .checked_sub_signed(Duration::days(i64::from(days_back)))
            .ok_or_else(|| {
                SalesError::GenerationFailed(format!("交易时间超出范围: 回溯 {} 天", days_back))
            })?;

        // 由同一随机源生成 v4 UUID，固定种子时 ID 也可复现
        let transaction_id = uuid::Builder::from_random_bytes(rng.random()).into_uuid();

        let customer = self.config.locale.fake_customer(rng);

        Transaction::assemble(
            store,
            product,
            SaleDetails {
                transaction_id,
                timestamp,
                quantity,
                customer_name: customer.name,
                customer_email: customer.email,
            },
        )
    }
}

/// 参考数据为空时随机抽样没有意义，作为前置条件拒绝
fn ensure_not_empty<T>(dataset: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(SalesError::EmptyReferenceData {
            dataset: dataset.to_string(),
        });
    }
    Ok(())
}

/// 校验字符串是否为合法的 v4 UUID
pub fn is_v4_uuid(value: &str) -> bool {
    Uuid::parse_str(value)
        .map(|id| id.get_version_num() == 4)
        .unwrap_or(false)
}
