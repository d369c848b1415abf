//! 数据模型
//!
//! 包含门店、商品两类参考数据以及生成的销售交易记录。

pub mod amount;
pub mod product;
pub mod store;
pub mod transaction;

pub use amount::Amount;
pub use product::Product;
pub use store::Store;
pub use transaction::{SaleDetails, Transaction};
