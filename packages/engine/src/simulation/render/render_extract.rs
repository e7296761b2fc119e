use super::WorldCore;

/// Heat ramp stops (r, g, b): black, blue, red, yellow, white
const HEAT_RAMP: [(f32, f32, f32); 5] = [
    (0.0, 0.0, 0.0),
    (0.0, 0.0, 255.0),
    (255.0, 0.0, 0.0),
    (255.0, 255.0, 0.0),
    (255.0, 255.0, 255.0),
];

/// Map a normalized temperature (0..=1, clamped) to an opaque ABGR pixel
pub fn heat_color(t: f32) -> u32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = (HEAT_RAMP.len() - 1) as f32;
    let pos = t * segments;
    let i = (pos.floor() as usize).min(HEAT_RAMP.len() - 2);
    let frac = pos - i as f32;

    let (r0, g0, b0) = HEAT_RAMP[i];
    let (r1, g1, b1) = HEAT_RAMP[i + 1];
    let r = (r0 + (r1 - r0) * frac).round() as u32;
    let g = (g0 + (g1 - g0) * frac).round() as u32;
    let b = (b0 + (b1 - b0) * frac).round() as u32;

    0xFF00_0000 | (b << 16) | (g << 8) | r
}

pub(super) fn draw_elements(world: &WorldCore, target: &mut [u32]) -> bool {
    let colors = world.grid.colors();
    if target.len() != colors.len() {
        return false;
    }
    target.copy_from_slice(colors);
    true
}

pub(super) fn draw_heatmap(world: &WorldCore, target: &mut [u32]) -> bool {
    let temperatures = world.grid.temperatures();
    if target.len() != temperatures.len() {
        return false;
    }

    let min = world.config.heatmap_min;
    let span = world.config.heatmap_max - min;
    for (dst, &temp) in target.iter_mut().zip(temperatures) {
        *dst = heat_color((temp - min) / span);
    }
    true
}

pub(super) fn refresh_heatmap(world: &mut WorldCore) -> *const u32 {
    let mut buffer = std::mem::take(&mut world.heatmap);
    buffer.resize(world.grid.size(), 0);
    draw_heatmap(world, &mut buffer);
    world.heatmap = buffer;
    world.heatmap.as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_and_midpoint() {
        assert_eq!(heat_color(0.0), 0xFF00_0000);
        assert_eq!(heat_color(0.25), 0xFFFF_0000); // blue
        assert_eq!(heat_color(0.5), 0xFF00_00FF); // red
        assert_eq!(heat_color(0.75), 0xFF00_FFFF); // yellow
        assert_eq!(heat_color(1.0), 0xFFFF_FFFF);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(heat_color(-3.0), heat_color(0.0));
        assert_eq!(heat_color(7.5), heat_color(1.0));
        assert_eq!(heat_color(f32::NAN), heat_color(0.0));
        assert_eq!(heat_color(f32::INFINITY), heat_color(1.0));
    }
}
