//! Province-level administrative division codes (GB/T 2260).
//!
//! Pairs are `(code, name)`. The array order is the enumeration order exposed
//! by `list_codes` and `regions`.

use std::sync::LazyLock;

use indexmap::IndexMap;

pub const REGION_ENTRIES: [(&str, &str); 34] = [
    ("110000", "北京市"),
    ("120000", "天津市"),
    ("130000", "河北省"),
    ("140000", "山西省"),
    ("150000", "内蒙古自治区"),
    ("210000", "辽宁省"),
    ("220000", "吉林省"),
    ("230000", "黑龙江省"),
    ("310000", "上海市"),
    ("320000", "江苏省"),
    ("330000", "浙江省"),
    ("340000", "安徽省"),
    ("350000", "福建省"),
    ("360000", "江西省"),
    ("370000", "山东省"),
    ("410000", "河南省"),
    ("420000", "湖北省"),
    ("430000", "湖南省"),
    ("440000", "广东省"),
    ("450000", "广西壮族自治区"),
    ("460000", "海南省"),
    ("500000", "重庆市"),
    ("510000", "四川省"),
    ("520000", "贵州省"),
    ("530000", "云南省"),
    ("540000", "西藏自治区"),
    ("610000", "陕西省"),
    ("620000", "甘肃省"),
    ("630000", "青海省"),
    ("640000", "宁夏回族自治区"),
    ("650000", "新疆维吾尔自治区"),
    ("710000", "台湾省"),
    ("810000", "香港特别行政区"),
    ("820000", "澳门特别行政区"),
];

/// Codes that `include_special_regions = false` filters out.
pub const SPECIAL_REGION_CODES: [&str; 3] = ["710000", "810000", "820000"];

static REGION_TABLE: LazyLock<IndexMap<&'static str, &'static str>> =
    LazyLock::new(|| REGION_ENTRIES.into_iter().collect());

/// One table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
    pub special: bool,
}

#[must_use]
pub fn is_special_code(code: &str) -> bool {
    SPECIAL_REGION_CODES.iter().any(|special| *special == code)
}

pub(crate) fn name_for(code: &str) -> Option<&'static str> {
    REGION_TABLE.get(code).copied()
}

/// Iterates the table in definition order.
pub fn regions() -> impl Iterator<Item = Region> {
    REGION_TABLE.iter().map(|(&code, &name)| Region {
        code,
        name,
        special: is_special_code(code),
    })
}
