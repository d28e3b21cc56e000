//! 省份名称归一化核心实现

use crate::data::{
    canonical_names, contains_cjk, strip_admin_suffix, CENTROID_TABLE, ENGLISH_NAME_TABLE,
    PROVINCE_NAME_TABLE,
};
use crate::error::NormalizeError;
use crate::province::{Centroid, ProvinceEntry};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 全局归一化器实例
static GLOBAL_NORMALIZER: Lazy<NameNormalizer> = Lazy::new(NameNormalizer::new);

/// 省份名称归一化器
///
/// 把英文/拼音省名、带行政后缀的中文省名归一化为规范中文简称。
/// 匹配分三级：精确匹配、大小写不敏感匹配、子串回退匹配，后两级
/// 严格按映射表定义顺序迭代，取第一个命中的条目。
pub struct NameNormalizer {
    /// 精确匹配索引（区分大小写）
    exact: HashMap<&'static str, &'static str>,
    /// 小写键列表，保持表定义顺序
    lower_keys: Vec<(String, &'static str)>,
    /// 规范中文简称集合
    canonical: Vec<&'static str>,
    /// 中文简称 -> 英文名
    english: HashMap<&'static str, &'static str>,
    /// 省名 -> 近似中心点（中英文键都有）
    centroids: HashMap<&'static str, Centroid>,
}

impl NameNormalizer {
    /// 创建新的归一化器实例
    pub fn new() -> Self {
        let exact = PROVINCE_NAME_TABLE
            .iter()
            .map(|e| (e.key, e.name))
            .collect();

        let lower_keys = PROVINCE_NAME_TABLE
            .iter()
            .map(|e| (e.key.to_lowercase(), e.name))
            .collect();

        let english = ENGLISH_NAME_TABLE.iter().copied().collect();
        let centroids = CENTROID_TABLE.iter().copied().collect();

        Self {
            exact,
            lower_keys,
            canonical: canonical_names(),
            english,
            centroids,
        }
    }

    /// 获取全局归一化器实例
    pub fn global() -> &'static NameNormalizer {
        &GLOBAL_NORMALIZER
    }

    /// 归一化省份名称
    ///
    /// 处理顺序：去首尾空白 -> 剥离一个行政后缀 -> 含中文字符则原样返回
    /// -> 三级表匹配 -> 未命中则原样返回。对任何输入都有定义，从不失败；
    /// 未识别的名称按原样透传，调用方应将其视为"未归一化"而非错误。
    ///
    /// # 示例
    /// ```rust
    /// use cnprov::NameNormalizer;
    ///
    /// let normalizer = NameNormalizer::new();
    /// assert_eq!(normalizer.normalize("Guangdong"), "广东");
    /// assert_eq!(normalizer.normalize("广东省"), "广东");
    /// assert_eq!(normalizer.normalize("Atlantis"), "Atlantis");
    /// ```
    pub fn normalize(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }

        let n = strip_admin_suffix(name.trim());

        // 已含中文字符：视为已是中文名，不再查表
        if contains_cjk(n) {
            return n.to_string();
        }

        match self.resolve_romanized(n) {
            Some(canonical) => canonical.to_string(),
            None => n.to_string(),
        }
    }

    /// 严格查询省份简称
    ///
    /// 与 [`normalize`](Self::normalize) 不同，未识别的输入返回
    /// [`NormalizeError::UnknownName`]。中文输入必须在剥离后缀之后
    /// 命中已知简称才算有效。
    pub fn lookup(&self, name: &str) -> Result<&'static str, NormalizeError> {
        let n = strip_admin_suffix(name.trim());

        // 空串会命中子串匹配的任意键，严格接口直接判未知
        if n.is_empty() {
            return Err(NormalizeError::UnknownName(name.to_string()));
        }

        if contains_cjk(n) {
            return self
                .canonical
                .iter()
                .find(|c| **c == n)
                .copied()
                .ok_or_else(|| NormalizeError::UnknownName(name.to_string()));
        }

        self.resolve_romanized(n)
            .ok_or_else(|| NormalizeError::UnknownName(name.to_string()))
    }

    /// 三级表匹配：精确 -> 大小写不敏感 -> 子串回退
    ///
    /// 后两级按表定义顺序取第一个命中的条目。子串匹配是双向的
    /// （键含输入或输入含键），歧义只靠定义顺序裁决，不做最长匹配。
    fn resolve_romanized(&self, n: &str) -> Option<&'static str> {
        if let Some(name) = self.exact.get(n) {
            return Some(*name);
        }

        let lower = n.to_lowercase();

        for (key, name) in &self.lower_keys {
            if *key == lower {
                return Some(*name);
            }
        }

        for (key, name) in &self.lower_keys {
            if key.contains(&lower) || lower.contains(key.as_str()) {
                return Some(*name);
            }
        }

        None
    }

    /// 批量归一化
    pub fn normalize_batch(&self, names: &[&str]) -> Vec<String> {
        names.iter().map(|n| self.normalize(n)).collect()
    }

    /// 检查名称是否能解析为已知省份
    pub fn is_known(&self, name: &str) -> bool {
        self.lookup(name).is_ok()
    }

    /// 查询省份的英文名
    ///
    /// 先归一化为中文简称再反向查表。
    ///
    /// ```rust
    /// use cnprov::NameNormalizer;
    ///
    /// let normalizer = NameNormalizer::new();
    /// assert_eq!(normalizer.to_english("广东省"), Some("Guangdong"));
    /// assert_eq!(normalizer.to_english("nei mongol"), Some("Inner Mongolia"));
    /// ```
    pub fn to_english(&self, name: &str) -> Option<&'static str> {
        let canonical = self.normalize(name);
        self.english.get(canonical.as_str()).copied()
    }

    /// 查询省份的近似地理中心点
    ///
    /// 先按归一化结果查，再回退到原始输入，最后回退到原始输入的
    /// 首字母大写形式（中心点表的英文键是首字母大写的）。
    pub fn centroid(&self, name: &str) -> Option<Centroid> {
        let canonical = self.normalize(name);
        let trimmed = name.trim();
        self.centroids
            .get(canonical.as_str())
            .or_else(|| self.centroids.get(trimmed))
            .or_else(|| self.centroids.get(title_case(trimmed).as_str()))
            .copied()
    }

    /// 映射表全部条目（只读）
    pub fn entries(&self) -> &'static [ProvinceEntry] {
        PROVINCE_NAME_TABLE
    }

    /// 规范中文简称列表（去重，按表定义顺序）
    pub fn canonical_names(&self) -> &[&'static str] {
        &self.canonical
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// 每个词首字母大写、其余小写（"inner mongolia" -> "Inner Mongolia"）
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
