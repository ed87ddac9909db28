//! Static name lists and bit patterns of the Vietnamese calendar.
//!
//! The contents of this module are part of the wire contract: the
//! ordering of the stem, branch and solar-term lists and the six
//! lucky-hour patterns must not be altered.

/// Thiên Can — the 10 Heavenly Stems.
pub const STEMS: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

/// Địa Chi — the 12 Earthly Branches.
pub const BRANCHES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

/// Tiết Khí — the 24 solar terms, one per 15° ecliptic arc, starting at
/// Xuân phân (vernal equinox, 0°). Even indices are the Major Solar Terms
/// (Trung Khí).
pub const SOLAR_TERMS: [&str; 24] = [
    "Xuân phân",   // 0°
    "Thanh minh",  // 15°
    "Cốc vũ",      // 30°
    "Lập hạ",      // 45°
    "Tiểu mãn",    // 60°
    "Mang chủng",  // 75°
    "Hạ chí",      // 90°
    "Tiểu thử",    // 105°
    "Đại thử",     // 120°
    "Lập thu",     // 135°
    "Xử thử",      // 150°
    "Bạch lộ",     // 165°
    "Thu phân",    // 180°
    "Hàn lộ",      // 195°
    "Sương giáng", // 210°
    "Lập đông",    // 225°
    "Tiểu tuyết",  // 240°
    "Đại tuyết",   // 255°
    "Đông chí",    // 270°
    "Tiểu hàn",    // 285°
    "Đại hàn",     // 300°
    "Lập xuân",    // 315°
    "Vũ thủy",     // 330°
    "Kinh trập",   // 345°
];

/// Giờ Hoàng Đạo patterns, indexed by the day branch modulo 6.
///
/// Bit `11 - i` marks the i-th double-hour (MSB first, segment 0 = Tý,
/// 23:00–01:00) as auspicious. Each pattern has exactly six bits set.
pub const LUCKY_HOUR_PATTERNS: [u16; 6] = [
    0b1101_0010_1100, // days Tý, Ngọ
    0b0011_0100_1011, // days Sửu, Mùi
    0b1100_1101_0010, // days Dần, Thân
    0b1011_0011_0100, // days Mão, Dậu
    0b0010_1100_1101, // days Thìn, Tuất
    0b0100_1011_0011, // days Tỵ, Hợi
];
