// mv-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Length as UomLength, Pressure as UomPressure, VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type VolumeRate = UomVolumeRate;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn bar(v: f64) -> Pressure {
    use uom::si::pressure::bar;
    Pressure::new::<bar>(v)
}

#[inline]
pub fn lpm(v: f64) -> VolumeRate {
    use uom::si::volume_rate::liter_per_minute;
    VolumeRate::new::<liter_per_minute>(v)
}

#[inline]
pub fn m3ph(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_hour;
    VolumeRate::new::<cubic_meter_per_hour>(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _l = m(172.0);
        let _a = m2(275.2);
        let _p = bar(2.1);
        let _q = lpm(2807.04);
    }

    #[test]
    fn lpm_and_m3ph_agree() {
        use uom::si::volume_rate::cubic_meter_per_hour;
        let q = lpm(1000.0);
        let tol = Tolerances::default();
        assert!(nearly_equal(q.get::<cubic_meter_per_hour>(), 60.0, tol));
        assert!(nearly_equal(m3ph(60.0).value, q.value, tol));
    }

    #[test]
    fn bar_is_100_kpa() {
        use uom::si::pressure::pascal;
        assert!(nearly_equal(
            bar(1.0).get::<pascal>(),
            100_000.0,
            Tolerances::default()
        ));
    }
}
