//! CLI 命令定义
//!
//! 使用 clap derive 宏定义命令行接口结构。
//! 子命令分别对应完整调用流程与单独的批量生成。

use clap::{Parser, Subcommand};

/// 销售数据生成命令行工具
///
/// 使用 `--help` 查看各子命令的详细说明。
#[derive(Parser, Debug)]
#[command(name = "sales-generator")]
#[command(version, about = "零售销售交易数据生成工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// 子命令枚举
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 模拟一次触发器调用
    ///
    /// 读取事件 JSON（默认 `{}`），执行完整的加载与生成流程，
    /// 将 `{statusCode, body}` 响应输出到标准输出。
    Invoke {
        /// 事件文件路径（JSON）
        #[arg(short, long)]
        event: Option<String>,

        /// 输出到文件
        #[arg(short, long)]
        output: Option<String>,
    },

    /// 批量生成交易记录
    ///
    /// 未指定的参数使用配置文件中的值。
    Generate {
        /// 生成数量
        #[arg(short, long)]
        count: Option<usize>,

        /// 门店数据文件
        #[arg(long)]
        stores: Option<String>,

        /// 商品数据文件
        #[arg(long)]
        products: Option<String>,

        /// 顾客身份区域设置（en, fr_fr, zh_cn, zh_tw, ja_jp, pt_br）
        #[arg(long)]
        locale: Option<String>,

        /// 随机种子，指定后同一时刻的输出可复现
        #[arg(long)]
        seed: Option<u64>,

        /// 输出到文件（JSON 格式）
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// 单元测试
// ============================================================================
