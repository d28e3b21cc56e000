use cnprov::NameNormalizer;

fn main() {
    let normalizer = NameNormalizer::new();

    println!("=== CNPROV 省份名称归一化演示 ===\n");

    let test_cases = vec![
        // 英文名
        "Guangdong",
        "Beijing",
        "Heilongjiang",
        // 大小写变体
        "BEIJING",
        "guangdong",
        // 别名
        "Inner Mongolia",
        "Nei Mongol",
        // 带行政后缀的中文名
        "广东省",
        "北京市",
        "内蒙古自治区",
        "香港特别行政区",
        "宁夏回族自治区",
        // 子串回退
        "Guangdong Province",
        "Sichuan Province, China",
        // 已是中文简称
        "广东",
        // 无法识别
        "Atlantis",
        "",
    ];

    for name in test_cases {
        println!("normalize(\"{}\") => \"{}\"", name, normalizer.normalize(name));
    }

    println!("\n=== 英文名反查与中心点查询 ===\n");

    for name in ["广东省", "内蒙古自治区", "西藏", "beijing"] {
        let english = normalizer.to_english(name);
        let centroid = normalizer.centroid(name);
        println!(
            "\"{}\": english = {:?}, centroid = {:?}",
            name, english, centroid
        );
    }
}
