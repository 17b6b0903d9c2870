// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The 24 solar terms.
//!
//! Each term is the instant the Sun's apparent longitude reaches a multiple
//! of 15°, counted from the March equinox (春分, 0°).  [`SOLAR_TERMS`] is
//! ordered by longitude; the scanner takes any slice of [`TermAngle`], so a
//! reduced table can be passed in where only some terms are wanted.

use serde::Serialize;

/// Angular spacing between consecutive terms, in degrees.
pub const TERM_SPACING_DEG: f64 = 15.0;

/// One longitude threshold and its labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TermAngle {
    /// Apparent solar longitude of the term, degrees in `[0, 360)`.
    pub degrees: f64,
    /// Traditional Chinese name, used as the calendar summary.
    pub name: &'static str,
    /// Hanyu Pinyin romanization.
    pub pinyin: &'static str,
    /// Common English rendering.
    pub english: &'static str,
}

impl TermAngle {
    const fn new(
        degrees: f64,
        name: &'static str,
        pinyin: &'static str,
        english: &'static str,
    ) -> Self {
        Self {
            degrees,
            name,
            pinyin,
            english,
        }
    }
}

/// The full table, ascending by longitude from the March equinox.
#[rustfmt::skip]
pub const SOLAR_TERMS: [TermAngle; 24] = [
    TermAngle::new(  0.0, "春分", "Chunfen",     "Spring Equinox"),
    TermAngle::new( 15.0, "清明", "Qingming",    "Pure Brightness"),
    TermAngle::new( 30.0, "穀雨", "Guyu",        "Grain Rain"),
    TermAngle::new( 45.0, "立夏", "Lixia",       "Start of Summer"),
    TermAngle::new( 60.0, "小滿", "Xiaoman",     "Grain Full"),
    TermAngle::new( 75.0, "芒種", "Mangzhong",   "Grain in Ear"),
    TermAngle::new( 90.0, "夏至", "Xiazhi",      "Summer Solstice"),
    TermAngle::new(105.0, "小暑", "Xiaoshu",     "Minor Heat"),
    TermAngle::new(120.0, "大暑", "Dashu",       "Major Heat"),
    TermAngle::new(135.0, "立秋", "Liqiu",       "Start of Autumn"),
    TermAngle::new(150.0, "處暑", "Chushu",      "End of Heat"),
    TermAngle::new(165.0, "白露", "Bailu",       "White Dew"),
    TermAngle::new(180.0, "秋分", "Qiufen",      "Autumn Equinox"),
    TermAngle::new(195.0, "寒露", "Hanlu",       "Cold Dew"),
    TermAngle::new(210.0, "霜降", "Shuangjiang", "Frost's Descent"),
    TermAngle::new(225.0, "立冬", "Lidong",      "Start of Winter"),
    TermAngle::new(240.0, "小雪", "Xiaoxue",     "Minor Snow"),
    TermAngle::new(255.0, "大雪", "Daxue",       "Major Snow"),
    TermAngle::new(270.0, "冬至", "Dongzhi",     "Winter Solstice"),
    TermAngle::new(285.0, "小寒", "Xiaohan",     "Minor Cold"),
    TermAngle::new(300.0, "大寒", "Dahan",       "Major Cold"),
    TermAngle::new(315.0, "立春", "Lichun",      "Start of Spring"),
    TermAngle::new(330.0, "雨水", "Yushui",      "Rain Water"),
    TermAngle::new(345.0, "驚蟄", "Jingzhe",     "Awakening of Insects"),
];
