//! 时钟抽象
//!
//! 生成器通过 Clock 读取当前时间，测试中可替换为固定时钟得到可复现的时间戳。

use chrono::{Local, NaiveDateTime};

/// 时钟 trait
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    /// 当前本地时间
    fn now(&self) -> NaiveDateTime;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 固定时钟
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
