pub const KEY_1: [u8; 32] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32,
];

pub const KEY_2: [u8; 32] = [0xAB; 32];

/// 2023-11-14T22:13:20Z
pub const NOW: i64 = 1_700_000_000;

pub const RESET_URL: &str = "https://example.com/reset?id=5";

/// `RESET_URL` signed with `KEY_1`, no expiration.
pub const RESET_URL_SIGNED_KEY_1: &str =
    "https://example.com/reset?id=5&_hash=XArUFWt1l5-G4dEiHswadQ9lmqFFVaOJDsjet1GzaNw";

/// `RESET_URL` signed with `KEY_1` at `NOW`, valid for an hour.
pub const RESET_URL_SIGNED_KEY_1_ONE_HOUR: &str = "https://example.com/reset?id=5&_expiration=1700003600&_hash=7MgKoAEPISl-y8ciwusCcc1euBqiThDDPR4OMx8_Kqw";

pub const VERIFY_EMAIL_URLS: [&str; 4] = [
    "https://example.com/verify?user=1",
    "https://example.com/verify?user=2",
    "https://example.com/verify?user=3&next=%2Fdashboard",
    "https://example.com/verify?user=4#welcome",
];
