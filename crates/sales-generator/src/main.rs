//! Sales Generator CLI
//!
//! 销售数据生成工具的命令行入口点。

use clap::Parser;
use sales_generator::cli::{Cli, CommandRunner, Commands, GenerateOptions};
use sales_shared::config::AppConfig;
use sales_shared::observability;
use tracing::info;

const SERVICE_NAME: &str = "sales-generator";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(SERVICE_NAME)?;

    // 命令行参数优先于配置文件中的日志级别，RUST_LOG 优先于两者
    let observability_config = match cli.log_level {
        Some(ref level) => config.observability.clone().with_log_level(level),
        None => config.observability.clone(),
    };
    observability::init(&config.service_name, &observability_config)?;
    info!(environment = %config.environment, "配置加载完成");

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Invoke { event, output } => {
            runner.run_invoke(event, output).await?;
        }
        Commands::Generate {
            count,
            stores,
            products,
            locale,
            seed,
            output,
        } => {
            runner
                .run_generate(GenerateOptions {
                    count,
                    stores,
                    products,
                    locale,
                    seed,
                    output,
                })
                .await?;
        }
    }

    Ok(())
}
