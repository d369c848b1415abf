//! 顾客身份生成
//!
//! 顾客姓名与邮箱不来自固定名单，每条记录独立调用 fake 生成，
//! 两者之间不保证对应关系。

use fake::Fake;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::name::raw::Name;
use fake::locales::{EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use rand::Rng;
use sales_shared::error::SalesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 顾客身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub email: String,
}

/// 身份字段使用的区域设置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    En,
    FrFr,
    ZhCn,
    ZhTw,
    JaJp,
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 6] = [
        Self::En,
        Self::FrFr,
        Self::ZhCn,
        Self::ZhTw,
        Self::JaJp,
        Self::PtBr,
    ];

    /// 区域代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::FrFr => "fr_fr",
            Self::ZhCn => "zh_cn",
            Self::ZhTw => "zh_tw",
            Self::JaJp => "ja_jp",
            Self::PtBr => "pt_br",
        }
    }

    /// 生成随机顾客
    ///
    /// 姓名与邮箱分别抽取
    pub fn fake_customer<R: Rng>(&self, rng: &mut R) -> Customer {
        Customer {
            name: self.fake_name(rng),
            email: self.fake_email(rng),
        }
    }

    fn fake_name<R: Rng>(&self, rng: &mut R) -> String {
        match self {
            Self::En => Name(EN).fake_with_rng(rng),
            Self::FrFr => Name(FR_FR).fake_with_rng(rng),
            Self::ZhCn => Name(ZH_CN).fake_with_rng(rng),
            Self::ZhTw => Name(ZH_TW).fake_with_rng(rng),
            Self::JaJp => Name(JA_JP).fake_with_rng(rng),
            Self::PtBr => Name(PT_BR).fake_with_rng(rng),
        }
    }

    fn fake_email<R: Rng>(&self, rng: &mut R) -> String {
        match self {
            Self::En => SafeEmail(EN).fake_with_rng(rng),
            Self::FrFr => SafeEmail(FR_FR).fake_with_rng(rng),
            Self::ZhCn => SafeEmail(ZH_CN).fake_with_rng(rng),
            Self::ZhTw => SafeEmail(ZH_TW).fake_with_rng(rng),
            Self::JaJp => SafeEmail(JA_JP).fake_with_rng(rng),
            Self::PtBr => SafeEmail(PT_BR).fake_with_rng(rng),
        }
    }
}

impl FromStr for Locale {
    type Err = SalesError;

    /// 不区分大小写，接受 `-` 或 `_` 作为分隔符（如 `pt-BR`）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == normalized)
            .ok_or_else(|| SalesError::InvalidConfig {
                field: "generator.locale".to_string(),
                message: format!(
                    "不支持的区域设置: {}，可选值: {}",
                    s,
                    Self::ALL.map(|l| l.code()).join(", ")
                ),
            })
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
