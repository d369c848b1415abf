//! 调用处理器
//!
//! 面向无服务器触发器的入口：接收不透明的事件与上下文，加载参考数据，
//! 生成一批交易记录并返回 `{statusCode, body}`。
//! 所有失败在此处记录一次日志，然后统一转换为通用失败响应。

use sales_shared::config::{AppConfig, DEFAULT_MAX_RECORD_COUNT};
use sales_shared::error::{Result, SalesError};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::generator::{Clock, GeneratorConfig, SalesGenerator, SystemClock};
use crate::models::Transaction;
use crate::reference::{FileReferenceSource, ReferenceSource};

pub const SUCCESS_STATUS: u16 = 200;
pub const FAILURE_STATUS: u16 = 400;
/// 与既有调用方约定的失败响应体，拼写保持不变
pub const FAILURE_MESSAGE: &str = "Failure Occured";

/// 事件中覆盖记录数量的字段名
pub const RECORD_COUNT_FIELD: &str = "num_records";

/// 调用上下文
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub request_id: String,
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

/// 响应体
///
/// 成功时为记录数组，失败时为固定的失败描述
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Records(Vec<Transaction>),
    Message(String),
}

/// 调用响应
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl InvocationResponse {
    pub fn success(records: Vec<Transaction>) -> Self {
        Self {
            status_code: SUCCESS_STATUS,
            body: ResponseBody::Records(records),
        }
    }

    /// 失败响应不区分失败原因，具体错误只出现在日志中
    pub fn failure() -> Self {
        Self {
            status_code: FAILURE_STATUS,
            body: ResponseBody::Message(FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == SUCCESS_STATUS
    }

    /// 成功响应中的记录
    pub fn records(&self) -> Option<&[Transaction]> {
        match &self.body {
            ResponseBody::Records(records) => Some(records),
            ResponseBody::Message(_) => None,
        }
    }
}

/// 销售数据调用处理器
pub struct SalesHandler<S, C = SystemClock> {
    source: S,
    generator: SalesGenerator<C>,
    default_record_count: usize,
    max_record_count: usize,
}

impl SalesHandler<FileReferenceSource, SystemClock> {
    /// 按应用配置创建处理器：文件数据源 + 系统时钟
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let generator_config = GeneratorConfig::try_from(&config.generator)?;
        let generator = SalesGenerator::new(generator_config, SystemClock)?;

        Ok(Self::new(
            FileReferenceSource::from_config(&config.reference_data),
            generator,
            config.generator.record_count,
        )
        .with_max_record_count(config.generator.max_record_count))
    }
}

impl<S: ReferenceSource, C: Clock> SalesHandler<S, C> {
    pub fn new(source: S, generator: SalesGenerator<C>, default_record_count: usize) -> Self {
        Self {
            source,
            generator,
            default_record_count,
            max_record_count: DEFAULT_MAX_RECORD_COUNT,
        }
    }

    /// 设置单次调用的记录数量上限
    pub fn with_max_record_count(mut self, max_record_count: usize) -> Self {
        self.max_record_count = max_record_count;
        self
    }

    /// 处理一次调用
    #[instrument(skip_all, fields(request_id = %context.request_id))]
    pub async fn handle(&self, event: &Value, context: &InvocationContext) -> InvocationResponse {
        info!("销售数据生成调用开始");

        match self.run(event).await {
            Ok(records) => {
                info!(records = records.len(), "销售数据生成完成");
                InvocationResponse::success(records)
            }
            Err(e) => {
                error!(code = e.code(), error = %e, "销售数据生成失败");
                InvocationResponse::failure()
            }
        }
    }

    async fn run(&self, event: &Value) -> Result<Vec<Transaction>> {
        let count = resolve_record_count(event, self.default_record_count, self.max_record_count)?;
        let data = self.source.load().await?;
        self.generator.generate(&data.stores, &data.products, count)
    }
}

/// 解析本次调用的记录数量
///
/// 事件中没有 num_records（或为 null）时使用默认值；
/// 存在但不是非负整数，或超过上限时拒绝调用
pub fn resolve_record_count(event: &Value, default: usize, max: usize) -> Result<usize> {
    let count = match event.get(RECORD_COUNT_FIELD) {
        None | Some(Value::Null) => default,
        Some(value) => value
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                SalesError::InvalidEvent(format!(
                    "{} 必须是非负整数，实际为 {}",
                    RECORD_COUNT_FIELD, value
                ))
            })?,
    };

    if count > max {
        return Err(SalesError::InvalidEvent(format!(
            "{}={} 超过上限 {}",
            RECORD_COUNT_FIELD, count, max
        )));
    }
    Ok(count)
}
