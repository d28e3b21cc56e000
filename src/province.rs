//! 省份数据结构

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 省份映射表条目
///
/// 一条「罗马化键 -> 规范中文简称」映射。同一个中文简称可以对应多个键
/// （如 "Inner Mongolia" 和 "Nei Mongol" 都映射到 "内蒙古"）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProvinceEntry {
    /// 罗马化键（英文或拼音，大小写按原表）
    pub key: &'static str,
    /// 规范中文简称（不含行政后缀）
    pub name: &'static str,
}

impl ProvinceEntry {
    /// 创建新的映射条目
    pub const fn new(key: &'static str, name: &'static str) -> Self {
        Self { key, name }
    }
}

/// 省级近似地理中心点（经度、纬度）
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Centroid {
    /// 经度
    pub lng: f64,
    /// 纬度
    pub lat: f64,
}

impl Centroid {
    /// 创建新的中心点
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_province_entry() {
        let entry = ProvinceEntry::new("Guangdong", "广东");
        assert_eq!(entry.key, "Guangdong");
        assert_eq!(entry.name, "广东");
    }

    #[test]
    fn test_centroid() {
        let c = Centroid::new(116.4074, 39.9042);
        assert_eq!(c.lng, 116.4074);
        assert_eq!(c.lat, 39.9042);
    }
}
