pub mod code;
pub mod resolver;
pub mod table;

pub use code::{AdcodeInput, REGION_CODE_LEN, RegionCode, is_six_digit_code};
pub use resolver::{
    ResolveOptions, is_special_region, is_valid_code, is_valid_province_adcode, list_codes,
    lookup, resolve_code, resolve_name,
};
pub use table::{REGION_ENTRIES, Region, SPECIAL_REGION_CODES, regions};
