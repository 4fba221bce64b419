use crate::color::Rgb;

/// Map a wheel position (0-255) to a fully saturated color.
///
/// The wheel runs red -> green -> blue -> red in three equal sectors.
pub const fn colorwheel(pos: u8) -> Rgb {
    if pos < 85 {
        Rgb {
            r: 255 - pos * 3,
            g: pos * 3,
            b: 0,
        }
    } else if pos < 170 {
        let pos = pos - 85;
        Rgb {
            r: 0,
            g: 255 - pos * 3,
            b: pos * 3,
        }
    } else {
        let pos = pos - 170;
        Rgb {
            r: pos * 3,
            g: 0,
            b: 255 - pos * 3,
        }
    }
}

/// Scale every channel by `intensity` (0.0-1.0), truncating toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn calculate_intensity(color: Rgb, intensity: f32) -> Rgb {
    let intensity = intensity.clamp(0.0, 1.0);
    let scale = |channel: u8| (f32::from(channel) * intensity) as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}
