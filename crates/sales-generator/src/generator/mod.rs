//! 生成器模块
//!
//! 提供销售交易记录的批量生成功能，以及可注入的时钟与身份生成。

pub mod clock;
pub mod identity;
pub mod sales_generator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use identity::{Customer, Locale};
pub use sales_generator::{GeneratorConfig, SalesGenerator, is_v4_uuid};
