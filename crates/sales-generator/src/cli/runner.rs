//! 命令执行器
//!
//! 负责执行各 CLI 子命令的具体逻辑。
//! 将命令行参数与配置合并后转化为实际的加载、生成和输出操作。

use std::fs;

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::info;

use sales_shared::config::AppConfig;

use crate::generator::{GeneratorConfig, SalesGenerator, SystemClock};
use crate::handler::{InvocationContext, SalesHandler};
use crate::models::Transaction;
use crate::reference::{FileReferenceSource, ReferenceSource};

/// generate 命令的参数
///
/// 为 None 的字段沿用配置文件中的值
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub count: Option<usize>,
    pub stores: Option<String>,
    pub products: Option<String>,
    pub locale: Option<String>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

/// 命令执行器
///
/// 持有加载好的应用配置，作为 CLI 与生成逻辑之间的桥梁。
pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    /// 创建命令执行器
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行 invoke 命令
    ///
    /// 与触发器调用走同一个处理器，响应原样输出。
    /// 响应为失败状态时命令以错误退出。
    pub async fn run_invoke(&self, event: Option<String>, output: Option<String>) -> Result<()> {
        let event = match event {
            Some(ref path) => load_event(path)?,
            None => json!({}),
        };

        let handler = SalesHandler::from_config(&self.config).context("创建调用处理器失败")?;
        let context = InvocationContext::default();

        info!(request_id = %context.request_id, "执行本地调用");
        let response = handler.handle(&event, &context).await;

        write_json(&response, output.as_deref())?;

        if !response.is_success() {
            bail!("调用失败: statusCode={}", response.status_code);
        }
        Ok(())
    }

    /// 执行 generate 命令
    ///
    /// 直接加载参考数据并生成一批记录，输出记录数组与统计摘要。
    pub async fn run_generate(&self, options: GenerateOptions) -> Result<()> {
        let config = self.merge_options(&options);

        let generator_config =
            GeneratorConfig::try_from(&config.generator).context("生成器配置无效")?;
        let generator = SalesGenerator::new(generator_config, SystemClock)?;

        let source = FileReferenceSource::from_config(&config.reference_data);
        let data = source.load().await.context("加载参考数据失败")?;

        let count = config.generator.record_count;
        info!(count, seed = ?options.seed, "批量生成交易记录");

        let transactions = match options.seed {
            Some(seed) => generator.generate_with_rng(
                &mut StdRng::seed_from_u64(seed),
                &data.stores,
                &data.products,
                count,
            )?,
            None => generator.generate(&data.stores, &data.products, count)?,
        };

        write_json(&transactions, options.output.as_deref())?;
        if let Some(ref path) = options.output {
            info!(path, "数据已输出到文件");
        }

        let summary = BatchSummary::from_transactions(&transactions);
        // 摘要写到 stderr，避免混入 stdout 的 JSON
        eprintln!("\n数据生成完成:");
        eprintln!("{}", "-".repeat(30));
        eprintln!("交易记录: {}", summary.records);
        eprintln!("涉及门店: {}", summary.stores);
        eprintln!("涉及商品: {}", summary.products);
        eprintln!("销售总额: {:.2}", summary.revenue);
        eprintln!("{}", "-".repeat(30));

        Ok(())
    }

    // ========================================================================
    // 辅助方法
    // ========================================================================

    /// 将命令行参数覆盖到配置上
    fn merge_options(&self, options: &GenerateOptions) -> AppConfig {
        let mut config = self.config.clone();
        if let Some(count) = options.count {
            config.generator.record_count = count;
        }
        if let Some(ref stores) = options.stores {
            config.reference_data.stores_path = stores.clone();
        }
        if let Some(ref products) = options.products {
            config.reference_data.products_path = products.clone();
        }
        if let Some(ref locale) = options.locale {
            config.generator.locale = locale.clone();
        }
        config
    }
}

// ============================================================================
// 辅助函数
// ============================================================================

/// 读取事件文件
fn load_event(path: &str) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("读取事件文件失败: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("解析事件 JSON 失败: {}", path))
}

/// 输出 JSON 到文件或标准输出
fn write_json<T: Serialize>(value: &T, output: Option<&str>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("序列化数据失败")?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("写入文件失败: {}", path))?;
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// 批次统计摘要
#[derive(Debug, Clone, PartialEq)]
struct BatchSummary {
    records: usize,
    stores: usize,
    products: usize,
    revenue: f64,
}

impl BatchSummary {
    fn from_transactions(transactions: &[Transaction]) -> Self {
        use std::collections::HashSet;

        // 标识字段可能不是字符串，按 JSON 文本去重
        let stores: HashSet<String> = transactions.iter().map(|t| t.store_id.to_string()).collect();
        let products: HashSet<String> =
            transactions.iter().map(|t| t.product_id.to_string()).collect();

        Self {
            records: transactions.len(),
            stores: stores.len(),
            products: products.len(),
            revenue: transactions.iter().map(|t| t.total.as_f64()).sum(),
        }
    }
}

// ============================================================================
// 单元测试
// ============================================================================
