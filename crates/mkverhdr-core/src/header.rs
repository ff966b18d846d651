//! Header template.
//!
//! The output is consumed by the firmware build as-is, so the layout below is
//! byte-for-byte fixed. Only the substituted fields vary.

use chrono::NaiveDate;

use crate::GENERATOR_NAME;
use crate::version::{VersionInfo, VersionNumbers};

/// Render the version header.
///
/// `numbers` is passed separately from `info` so that the caller decides how
/// to fail when the tag has too few components.
pub fn render(info: &VersionInfo, numbers: &VersionNumbers, build_date: NaiveDate) -> String {
    let VersionNumbers {
        major,
        minor,
        micro,
    } = numbers;

    format!(
        "\
// This file was generated by {GENERATOR_NAME}
#define MICROPY_GIT_TAG \"{tag}\"
#define MICROPY_GIT_HASH \"{hash}\"
#define MICROPY_BUILD_DATE \"{date}\"
#define MICROPY_VERSION_MAJOR ({major})
#define MICROPY_VERSION_MINOR ({minor})
#define MICROPY_VERSION_MICRO ({micro})
#define MICROPY_VERSION_PRERELEASE 0
#define MICROPY_VERSION_STRING \"{numbers}\"
#define MICROPY_VERSION (MICROPY_VERSION_MAJOR << 16 | MICROPY_VERSION_MINOR << 8 | MICROPY_VERSION_MICRO)
#define MICROPY_FULL_VERSION_INFO \"Adafruit CircuitPython \" MICROPY_GIT_TAG \" on \" MICROPY_BUILD_DATE \"; \" MICROPY_BANNER_MACHINE
",
        tag = info.tag,
        hash = info.hash,
        date = build_date.format("%Y-%m-%d"),
    )
}
