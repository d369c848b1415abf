//! Sales Generator
//!
//! 从门店与商品参考数据合成零售销售交易记录，供按需触发的调用使用。
//!
//! # 主要模块
//!
//! - `models`: 门店、商品与交易记录
//! - `generator`: 交易记录生成器、时钟与顾客身份
//! - `reference`: 参考数据加载
//! - `handler`: 触发器调用处理器
//!
//! # 使用示例
//!
//! ```rust
//! use sales_generator::generator::SalesGenerator;
//! use sales_generator::reference::ReferenceData;
//!
//! let data = ReferenceData::from_json(
//!     r#"[{"store_id": "S1", "store_name": "Alpha", "location": "City A"}]"#,
//!     r#"[{"product_id": "P1", "product_name": "Widget", "category": "Tools",
//!          "retail_price": 100, "brand": "Acme", "mrp": 120}]"#,
//! )
//! .unwrap();
//!
//! let generator = SalesGenerator::with_defaults();
//! let transactions = generator.generate(&data.stores, &data.products, 10).unwrap();
//! assert_eq!(transactions.len(), 10);
//! ```

pub mod cli;
pub mod generator;
pub mod handler;
pub mod models;
pub mod reference;
