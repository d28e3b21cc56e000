//! # CNPROV - Chinese Province Name Normalizer
//!
//! 中国省份名称归一化库，把英文/拼音省名映射为规范中文简称。
//!
//! ## 功能特性
//!
//! - 英文/拼音省名 -> 规范中文简称（"Guangdong" -> "广东"）
//! - 剥离行政后缀（省/市/自治区/特别行政区等）
//! - 大小写不敏感匹配与子串回退匹配，别名收敛（"Nei Mongol" -> "内蒙古"）
//! - 未识别的名称原样透传，从不报错
//! - 中文简称反查英文名、省级近似中心点查询
//!
//! ## 快速开始
//!
//! ```rust
//! // 归一化各种写法
//! assert_eq!(cnprov::normalize("Guangdong"), "广东");
//! assert_eq!(cnprov::normalize("BEIJING"), "北京");
//! assert_eq!(cnprov::normalize("广东省"), "广东");
//! assert_eq!(cnprov::normalize("Guangdong Province"), "广东");
//!
//! // 未识别的输入原样返回
//! assert_eq!(cnprov::normalize("Atlantis"), "Atlantis");
//!
//! // 反查英文名
//! assert_eq!(cnprov::to_english("内蒙古自治区"), Some("Inner Mongolia"));
//! ```

mod data;
mod error;
mod normalizer;
mod province;

pub use data::{
    canonical_names, contains_cjk, strip_admin_suffix, ADMIN_SUFFIXES, CENTROID_TABLE,
    ENGLISH_NAME_TABLE, PROVINCE_NAME_TABLE,
};
pub use error::NormalizeError;
pub use normalizer::NameNormalizer;
pub use province::{Centroid, ProvinceEntry};

/// 便捷函数：使用全局归一化器归一化省份名称
///
/// ```rust
/// assert_eq!(cnprov::normalize("Inner Mongolia"), "内蒙古");
/// assert_eq!(cnprov::normalize("北京市"), "北京");
/// ```
pub fn normalize(name: impl AsRef<str>) -> String {
    NameNormalizer::global().normalize(name.as_ref())
}

/// 便捷函数：严格查询省份简称，未识别时返回错误
///
/// ```rust
/// assert_eq!(cnprov::lookup("Guangdong"), Ok("广东"));
/// assert!(cnprov::lookup("Atlantis").is_err());
/// ```
pub fn lookup(name: impl AsRef<str>) -> Result<&'static str, NormalizeError> {
    NameNormalizer::global().lookup(name.as_ref())
}

/// 便捷函数：查询省份的英文名
pub fn to_english(name: impl AsRef<str>) -> Option<&'static str> {
    NameNormalizer::global().to_english(name.as_ref())
}

/// 便捷函数：查询省份的近似地理中心点
pub fn centroid(name: impl AsRef<str>) -> Option<Centroid> {
    NameNormalizer::global().centroid(name.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_english() {
        assert_eq!(normalize("Guangdong"), "广东");
        assert_eq!(normalize("Heilongjiang"), "黑龙江");
    }

    #[test]
    fn test_normalize_case_insensitive() {
        assert_eq!(normalize("BEIJING"), "北京");
        assert_eq!(normalize("Beijing"), "北京");
    }

    #[test]
    fn test_normalize_chinese_suffix() {
        assert_eq!(normalize("广东省"), "广东");
        assert_eq!(normalize("内蒙古自治区"), "内蒙古");
        assert_eq!(normalize("香港特别行政区"), "香港");
    }

    #[test]
    fn test_normalize_substring_fallback() {
        assert_eq!(normalize("Guangdong Province"), "广东");
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("Atlantis"), "Atlantis");
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("nei mongol"), Ok("内蒙古"));
        assert_eq!(
            lookup("Atlantis"),
            Err(NormalizeError::UnknownName("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_to_english() {
        assert_eq!(to_english("广东"), Some("Guangdong"));
        assert_eq!(to_english("西藏"), Some("Tibet"));
    }

    #[test]
    fn test_centroid() {
        let c = centroid("Guangdong").unwrap();
        assert_eq!(c.lng, 113.2806);
        assert_eq!(c.lat, 23.1252);
    }

    #[test]
    fn test_table_exports() {
        assert_eq!(PROVINCE_NAME_TABLE.len(), 34);
        assert_eq!(canonical_names().len(), 33);
        assert_eq!(ADMIN_SUFFIXES.len(), 7);
    }
}
