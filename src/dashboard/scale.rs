//! Colour scales for the chart sections

/// Sequential YlOrRd, light to dark
const YL_OR_RD: [(u8, u8, u8); 9] = [
    (255, 255, 204),
    (255, 237, 160),
    (254, 217, 118),
    (254, 178, 76),
    (253, 141, 60),
    (252, 78, 42),
    (227, 26, 28),
    (189, 0, 38),
    (128, 0, 38),
];

/// Qualitative palette for categorical slices; wraps when exhausted
const QUALITATIVE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Colour at `t` in [0, 1] on the YlOrRd scale (clamped, NaN maps to 0)
pub fn yl_or_rd(t: f64) -> String {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let last = YL_OR_RD.len() - 1;
    let pos = t * last as f64;
    let i = (pos.floor() as usize).min(last - 1);
    let frac = pos - i as f64;

    let (r0, g0, b0) = YL_OR_RD[i];
    let (r1, g1, b1) = YL_OR_RD[i + 1];
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;

    format!("#{:02x}{:02x}{:02x}", mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Legend stops for the heatmap
pub fn yl_or_rd_stops() -> Vec<String> {
    YL_OR_RD
        .iter()
        .map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
        .collect()
}

/// Readable label colour on top of a YlOrRd cell
pub fn label_color(t: f64) -> &'static str {
    if t > 0.6 { "#ffffff" } else { "#1a1a1a" }
}

pub fn categorical(index: usize) -> &'static str {
    QUALITATIVE[index % QUALITATIVE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_endpoints() {
        assert_eq!(yl_or_rd(0.0), "#ffffcc");
        assert_eq!(yl_or_rd(1.0), "#800026");
        assert_eq!(yl_or_rd(-3.0), "#ffffcc");
        assert_eq!(yl_or_rd(7.0), "#800026");
        assert_eq!(yl_or_rd(f64::NAN), "#ffffcc");
    }

    #[test]
    fn test_scale_hits_stops() {
        // 0.5 sits exactly on the fifth stop
        assert_eq!(yl_or_rd(0.5), "#fd8d3c");
        assert_eq!(yl_or_rd_stops().len(), 9);
    }

    #[test]
    fn test_categorical_wraps() {
        assert_eq!(categorical(0), categorical(10));
        assert_ne!(categorical(0), categorical(1));
    }
}
