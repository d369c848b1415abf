//! 金额类型
//!
//! 参考数据中的价格可能是整数也可能是小数，Amount 保留原始数字类型，
//! 保证整数价格乘以数量后仍输出整数，且 total 与 mrp * quantity 严格一致。
//! 超出 i64 的正整数按 u64 保存，避免退化为浮点数丢失精度。

use serde::{Deserialize, Serialize};
use std::fmt;

/// JSON 数值金额
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Integer(i64),
    Unsigned(u64),
    Decimal(f64),
}

impl Amount {
    /// 是否为负数
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Integer(v) => *v < 0,
            Self::Unsigned(_) => false,
            Self::Decimal(v) => *v < 0.0,
        }
    }

    /// 乘以购买数量
    ///
    /// 整数溢出或结果非有限值时返回 None
    pub fn checked_mul(&self, quantity: u32) -> Option<Self> {
        match self {
            Self::Integer(v) => v.checked_mul(i64::from(quantity)).map(Self::Integer),
            Self::Unsigned(v) => v.checked_mul(u64::from(quantity)).map(Self::Unsigned),
            Self::Decimal(v) => {
                let total = v * f64::from(quantity);
                total.is_finite().then_some(Self::Decimal(total))
            }
        }
    }

    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(v) => *v as f64,
            Self::Unsigned(v) => *v as f64,
            Self::Decimal(v) => *v,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Unsigned(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
        }
    }
}
