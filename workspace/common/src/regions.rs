//! Districts offered by the region selector.

/// Every district the prediction service knows about, lowercase, in display order.
pub const REGIONS: [&str; 75] = [
    "agra",
    "aligarh",
    "allahabad",
    "ambedkar nagar",
    "amethi",
    "amroha",
    "auraiya",
    "azamgarh",
    "baghpat",
    "bahraich",
    "ballia",
    "balrampur",
    "banda",
    "barabanki",
    "bareilly",
    "basti",
    "bijnor",
    "budaun",
    "bulandshahr",
    "chandauli",
    "chitrakoot",
    "deoria",
    "etah",
    "etawah",
    "faizabad",
    "farrukhabad",
    "fatehpur",
    "firozabad",
    "gautam buddha nagar",
    "ghaziabad",
    "ghazipur",
    "gonda",
    "gorakhpur",
    "hamirpur",
    "hapur",
    "hardoi",
    "hathras",
    "jalaun",
    "jaunpur",
    "jhansi",
    "kannauj",
    "kanpur dehat",
    "kanpur nagar",
    "kasganj",
    "kaushambi",
    "kheri",
    "kushi nagar",
    "lalitpur",
    "lucknow",
    "maharajganj",
    "mahoba",
    "mainpuri",
    "mathura",
    "mau",
    "meerut",
    "mirzapur",
    "moradabad",
    "muzaffarnagar",
    "pilibhit",
    "pratapgarh",
    "rae bareli",
    "rampur",
    "saharanpur",
    "sambhal",
    "sant kabeer nagar",
    "sant ravidas nagar",
    "shahjahanpur",
    "shamli",
    "shravasti",
    "siddharth nagar",
    "sitapur",
    "sonbhadra",
    "sultanpur",
    "unnao",
    "varanasi",
];

/// Growing seasons the prediction service groups crops by.
pub const SEASONS: [&str; 2] = ["Kharif", "Rabi"];

/// One entry of a selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionOption {
    /// Submitted value, always lowercase
    pub value: String,
    /// Displayed label
    pub label: String,
}

impl RegionOption {
    pub fn new(region: &str) -> Self {
        Self {
            value: region.to_lowercase(),
            label: capitalize_first(region),
        }
    }
}

/// Options for the region selector, one per entry of [`REGIONS`], in order.
pub fn region_options() -> Vec<RegionOption> {
    REGIONS.iter().map(|region| RegionOption::new(region)).collect()
}

/// Uppercases the first character and leaves the rest untouched.
///
/// `"ambedkar nagar"` becomes `"Ambedkar nagar"`, not `"Ambedkar Nagar"`.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
