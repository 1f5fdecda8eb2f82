use core::f64::consts::PI;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

#[inline(always)]
pub fn deg2rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline(always)]
pub fn rad2deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}
