//! CLI 模块
//!
//! 提供命令行接口，支持以下功能：
//!
//! - `invoke` - 模拟一次触发器调用，输出 `{statusCode, body}`
//! - `generate` - 批量生成交易记录
//!
//! # 使用示例
//!
//! ```bash
//! # 按配置文件执行一次调用
//! sales-generator invoke -e event.json
//!
//! # 生成 500 条记录并写入文件
//! sales-generator generate -c 500 --stores data/stores.json --products data/products.json -o sales.json
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::{CommandRunner, GenerateOptions};
