//! 省份静态数据表与文本辅助函数

use crate::province::{Centroid, ProvinceEntry};
use std::collections::HashSet;

/// 罗马化省名 -> 规范中文简称映射表
///
/// 表的定义顺序是契约的一部分：大小写不敏感匹配和子串回退匹配都按此顺序
/// 迭代，取第一个命中的条目。不要重排。
pub const PROVINCE_NAME_TABLE: &[ProvinceEntry] = &[
    ProvinceEntry::new("Beijing", "北京"),
    ProvinceEntry::new("Shanghai", "上海"),
    ProvinceEntry::new("Guangdong", "广东"),
    ProvinceEntry::new("Guangxi", "广西"),
    ProvinceEntry::new("Jiangsu", "江苏"),
    ProvinceEntry::new("Zhejiang", "浙江"),
    ProvinceEntry::new("Sichuan", "四川"),
    ProvinceEntry::new("Henan", "河南"),
    ProvinceEntry::new("Hunan", "湖南"),
    ProvinceEntry::new("Hubei", "湖北"),
    ProvinceEntry::new("Shandong", "山东"),
    ProvinceEntry::new("Yunnan", "云南"),
    ProvinceEntry::new("Jiangxi", "江西"),
    ProvinceEntry::new("Hebei", "河北"),
    ProvinceEntry::new("Liaoning", "辽宁"),
    ProvinceEntry::new("Heilongjiang", "黑龙江"),
    ProvinceEntry::new("Anhui", "安徽"),
    ProvinceEntry::new("Fujian", "福建"),
    ProvinceEntry::new("Chongqing", "重庆"),
    ProvinceEntry::new("Shaanxi", "陕西"),
    ProvinceEntry::new("Inner Mongolia", "内蒙古"),
    ProvinceEntry::new("Nei Mongol", "内蒙古"),
    ProvinceEntry::new("Tianjin", "天津"),
    ProvinceEntry::new("Gansu", "甘肃"),
    ProvinceEntry::new("Guizhou", "贵州"),
    ProvinceEntry::new("Xinjiang", "新疆"),
    ProvinceEntry::new("Ningxia", "宁夏"),
    ProvinceEntry::new("Qinghai", "青海"),
    ProvinceEntry::new("Hainan", "海南"),
    ProvinceEntry::new("Jilin", "吉林"),
    ProvinceEntry::new("Shanxi", "山西"),
    ProvinceEntry::new("Taiwan", "台湾"),
    ProvinceEntry::new("Hong Kong", "香港"),
    ProvinceEntry::new("Macau", "澳门"),
];

/// 行政后缀集合，按长度从长到短排列
///
/// 长后缀在前保证整体剥离（"宁夏回族自治区" -> "宁夏"，而不是先剥掉
/// "自治区" 得到 "宁夏回族"）。只剥离一次，不递归。
pub const ADMIN_SUFFIXES: [&str; 7] = [
    "维吾尔自治区",
    "回族自治区",
    "壮族自治区",
    "特别行政区",
    "自治区",
    "省",
    "市",
];

/// 规范中文简称 -> 英文名反向映射表
///
/// 含 "西藏" -> "Tibet"（正向表中没有对应的罗马化键）。
pub const ENGLISH_NAME_TABLE: &[(&str, &str)] = &[
    ("北京", "Beijing"),
    ("上海", "Shanghai"),
    ("天津", "Tianjin"),
    ("重庆", "Chongqing"),
    ("四川", "Sichuan"),
    ("河南", "Henan"),
    ("广东", "Guangdong"),
    ("江苏", "Jiangsu"),
    ("浙江", "Zhejiang"),
    ("山东", "Shandong"),
    ("湖南", "Hunan"),
    ("湖北", "Hubei"),
    ("云南", "Yunnan"),
    ("贵州", "Guizhou"),
    ("陕西", "Shaanxi"),
    ("广西", "Guangxi"),
    ("内蒙古", "Inner Mongolia"),
    ("黑龙江", "Heilongjiang"),
    ("吉林", "Jilin"),
    ("辽宁", "Liaoning"),
    ("河北", "Hebei"),
    ("山西", "Shanxi"),
    ("安徽", "Anhui"),
    ("福建", "Fujian"),
    ("江西", "Jiangxi"),
    ("海南", "Hainan"),
    ("新疆", "Xinjiang"),
    ("西藏", "Tibet"),
    ("宁夏", "Ningxia"),
    ("香港", "Hong Kong"),
    ("澳门", "Macau"),
    ("台湾", "Taiwan"),
];

/// 省级近似经纬度中心点表
///
/// 英文键和中文键各一条，便于两种形式直接查询。
pub const CENTROID_TABLE: &[(&str, Centroid)] = &[
    // 直辖市
    ("Beijing", Centroid::new(116.4074, 39.9042)),
    ("北京", Centroid::new(116.4074, 39.9042)),
    ("Tianjin", Centroid::new(117.200983, 39.084158)),
    ("天津", Centroid::new(117.200983, 39.084158)),
    ("Shanghai", Centroid::new(121.473701, 31.230416)),
    ("上海", Centroid::new(121.473701, 31.230416)),
    ("Chongqing", Centroid::new(106.551644, 29.563761)),
    ("重庆", Centroid::new(106.551644, 29.563761)),
    // 省份
    ("Hebei", Centroid::new(114.4995, 38.0358)),
    ("河北", Centroid::new(114.4995, 38.0358)),
    ("Shanxi", Centroid::new(112.549248, 37.857014)),
    ("山西", Centroid::new(112.549248, 37.857014)),
    ("Liaoning", Centroid::new(123.429096, 41.796767)),
    ("辽宁", Centroid::new(123.429096, 41.796767)),
    ("Jilin", Centroid::new(125.3245, 43.886841)),
    ("吉林", Centroid::new(125.3245, 43.886841)),
    ("Heilongjiang", Centroid::new(127.9688, 45.368)),
    ("黑龙江", Centroid::new(127.9688, 45.368)),
    ("Jiangsu", Centroid::new(118.767413, 32.041544)),
    ("江苏", Centroid::new(118.767413, 32.041544)),
    ("Zhejiang", Centroid::new(120.153576, 30.287459)),
    ("浙江", Centroid::new(120.153576, 30.287459)),
    ("Anhui", Centroid::new(117.282699, 31.866942)),
    ("安徽", Centroid::new(117.282699, 31.866942)),
    ("Fujian", Centroid::new(119.296494, 26.074508)),
    ("福建", Centroid::new(119.296494, 26.074508)),
    ("Jiangxi", Centroid::new(115.858197, 28.682892)),
    ("江西", Centroid::new(115.858197, 28.682892)),
    ("Shandong", Centroid::new(118.000, 36.500)),
    ("山东", Centroid::new(118.000, 36.500)),
    ("Henan", Centroid::new(113.6654, 34.757975)),
    ("河南", Centroid::new(113.6654, 34.757975)),
    ("Hubei", Centroid::new(112.23813, 30.335165)),
    ("湖北", Centroid::new(112.23813, 30.335165)),
    ("Hunan", Centroid::new(112.982279, 28.19409)),
    ("湖南", Centroid::new(112.982279, 28.19409)),
    ("Guangdong", Centroid::new(113.2806, 23.1252)),
    ("广东", Centroid::new(113.2806, 23.1252)),
    ("Hainan", Centroid::new(110.33119, 20.031971)),
    ("海南", Centroid::new(110.33119, 20.031971)),
    ("Sichuan", Centroid::new(104.065735, 30.659462)),
    ("四川", Centroid::new(104.065735, 30.659462)),
    ("Guizhou", Centroid::new(106.713478, 26.578343)),
    ("贵州", Centroid::new(106.713478, 26.578343)),
    ("Yunnan", Centroid::new(102.712251, 25.040609)),
    ("云南", Centroid::new(102.712251, 25.040609)),
    ("Shaanxi", Centroid::new(108.948024, 34.263161)),
    ("陕西", Centroid::new(108.948024, 34.263161)),
    ("Gansu", Centroid::new(103.823557, 36.058039)),
    ("甘肃", Centroid::new(103.823557, 36.058039)),
    ("Qinghai", Centroid::new(101.778916, 36.623178)),
    ("青海", Centroid::new(101.778916, 36.623178)),
    ("Ningxia", Centroid::new(106.278179, 38.46637)),
    ("宁夏", Centroid::new(106.278179, 38.46637)),
    ("Xinjiang", Centroid::new(87.617733, 43.792818)),
    ("新疆", Centroid::new(87.617733, 43.792818)),
    ("Tibet", Centroid::new(91.132212, 29.660361)),
    ("西藏", Centroid::new(91.132212, 29.660361)),
    ("Inner Mongolia", Centroid::new(111.670801, 40.818311)),
    ("内蒙古", Centroid::new(111.670801, 40.818311)),
    ("Guangxi", Centroid::new(108.320004, 22.82402)),
    ("广西", Centroid::new(108.320004, 22.82402)),
    ("Hong Kong", Centroid::new(114.109497, 22.396428)),
    ("香港", Centroid::new(114.109497, 22.396428)),
    ("Macau", Centroid::new(113.551526, 22.198745)),
    ("澳门", Centroid::new(113.551526, 22.198745)),
    ("Taiwan", Centroid::new(121.509062, 25.044332)),
    ("台湾", Centroid::new(121.509062, 25.044332)),
];

/// 剥离末尾的一个行政后缀（省/市/自治区/特别行政区等）
///
/// 只剥离一次，不递归："内蒙古自治区" -> "内蒙古"，"北京市" -> "北京"。
pub fn strip_admin_suffix(name: &str) -> &str {
    for suffix in ADMIN_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            return stripped;
        }
    }
    name
}

/// 判断字符串中是否含有 CJK 统一表意文字（U+4E00..=U+9FA5）
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

/// 规范中文简称集合（去重，按首次出现顺序）
pub fn canonical_names() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    PROVINCE_NAME_TABLE
        .iter()
        .filter(|e| seen.insert(e.name))
        .map(|e| e.name)
        .collect()
}
