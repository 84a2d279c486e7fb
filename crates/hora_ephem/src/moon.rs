//! Truncated mean-element series for the Moon's tropical longitude.
//!
//! The 13 largest periodic terms (evection, variation, annual equation
//! and friends) on top of the mean longitude polynomial, from standard
//! published lunar theory. Good to a few arcminutes in the modern era,
//! which is all the demo ephemeris promises.

use hora_time::J2000_JD;

/// Julian centuries since J2000 for a Julian Date.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Normalize an angle to [0, 360) degrees.
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Fundamental lunar/solar arguments at `t` centuries since J2000,
/// degrees (not normalized).
struct LunarElements {
    /// Moon's mean longitude.
    l_prime: f64,
    /// Mean elongation of the Moon from the Sun.
    d: f64,
    /// Sun's mean anomaly.
    m: f64,
    /// Moon's mean anomaly.
    m_prime: f64,
    /// Moon's argument of latitude.
    f: f64,
}

fn lunar_elements(t: f64) -> LunarElements {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    LunarElements {
        l_prime: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0,
        d: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0,
        m: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
        m_prime: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0,
        f: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0,
    }
}

/// Tropical ecliptic longitude of the Moon in degrees, [0, 360).
pub fn tropical_moon_longitude_deg(jd: f64) -> f64 {
    let t = jd_to_centuries(jd);
    let e = lunar_elements(t);

    let d = e.d.to_radians();
    let m = e.m.to_radians();
    let mp = e.m_prime.to_radians();
    let f = e.f.to_radians();

    let correction = 6.288_774 * mp.sin()
        + 1.274_027 * (2.0 * d - mp).sin()
        + 0.658_314 * (2.0 * d).sin()
        + 0.213_618 * (2.0 * mp).sin()
        - 0.185_116 * m.sin()
        - 0.114_332 * (2.0 * f).sin()
        + 0.058_793 * (2.0 * d - 2.0 * mp).sin()
        + 0.057_066 * (2.0 * d - m - mp).sin()
        + 0.053_322 * (2.0 * d + mp).sin()
        + 0.045_758 * (2.0 * d - m).sin()
        - 0.040_923 * (m - mp).sin()
        - 0.034_720 * d.sin()
        - 0.030_383 * (m + mp).sin();

    normalize_360(e.l_prime + correction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centuries_at_j2000() {
        assert!(jd_to_centuries(J2000_JD).abs() < 1e-15);
    }

    #[test]
    fn normalize_wraps() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(370.0) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn known_value_1992_april_12() {
        // Published full-series value for 1992-04-12.0 TD is 133.162655;
        // the truncated series lands within a few arcminutes.
        let lon = tropical_moon_longitude_deg(2_448_724.5);
        assert!((lon - 133.1626).abs() < 0.05, "got {lon}");
    }

    #[test]
    fn known_value_j2000() {
        // Almanac tropical longitude at the J2000 epoch is about 223.3
        let lon = tropical_moon_longitude_deg(J2000_JD);
        assert!((lon - 223.31).abs() < 0.05, "got {lon}");
    }

    #[test]
    fn output_in_range() {
        // A sidereal month of daily samples stays in [0, 360)
        for i in 0..30 {
            let lon = tropical_moon_longitude_deg(J2000_JD + i as f64);
            assert!((0.0..360.0).contains(&lon), "day {i}: {lon}");
        }
    }

    #[test]
    fn advances_about_13_deg_per_day() {
        let a = tropical_moon_longitude_deg(J2000_JD);
        let b = tropical_moon_longitude_deg(J2000_JD + 1.0);
        let delta = (b - a).rem_euclid(360.0);
        assert!((11.0..16.0).contains(&delta), "daily motion {delta}");
    }
}
