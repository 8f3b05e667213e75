use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_time::EscapeTime;
use crate::core::fractals::mandelbrot::algorithm::MAX_ITERATIONS;

const COLOUR_RANGE: u64 = 0xFF_FFFF;

/// Spreads escape speed across the 24-bit colour range.
///
/// The escape step is scaled to `step * 0xFFFFFF / MAX_ITERATIONS` and that
/// code is split into red, green and blue bytes. Bounded points are black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EscapeSpeedPalette;

impl ColourMap<EscapeTime> for EscapeSpeedPalette {
    fn map(&self, value: EscapeTime) -> Colour {
        match value {
            EscapeTime::Bounded => Colour::BLACK,
            EscapeTime::Escaped { iterations } => {
                let code = u64::from(iterations) * COLOUR_RANGE / u64::from(MAX_ITERATIONS);

                Colour::opaque(
                    ((code >> 16) & 0xFF) as u8,
                    ((code >> 8) & 0xFF) as u8,
                    (code & 0xFF) as u8,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(iterations: u32) -> Colour {
        EscapeSpeedPalette.map(EscapeTime::Escaped { iterations })
    }

    #[test]
    fn test_bounded_is_opaque_black() {
        assert_eq!(
            EscapeSpeedPalette.map(EscapeTime::Bounded),
            Colour {
                r: 0,
                g: 0,
                b: 0,
                a: 255
            }
        );
    }

    #[test]
    fn test_escape_on_first_step_has_zero_code() {
        assert_eq!(escaped(0), Colour::BLACK);
    }

    #[test]
    fn test_code_is_split_into_channels() {
        // 1 * 0xFFFFFF / 100 = 167772 = 0x028F5C
        assert_eq!(escaped(1), Colour::opaque(0x02, 0x8F, 0x5C));
        // 3 * 0xFFFFFF / 100 = 503316 = 0x07AE14
        assert_eq!(escaped(3), Colour::opaque(0x07, 0xAE, 0x14));
        // 50 * 0xFFFFFF / 100 = 0x7FFFFF
        assert_eq!(escaped(50), Colour::opaque(0x7F, 0xFF, 0xFF));
        // 99 * 0xFFFFFF / 100 = 16609442 = 0xFD70A2
        assert_eq!(escaped(99), Colour::opaque(0xFD, 0x70, 0xA2));
    }

    #[test]
    fn test_every_escaped_colour_is_opaque_and_non_black_after_first_step() {
        for iterations in 1..MAX_ITERATIONS {
            let colour = escaped(iterations);

            assert_eq!(colour.a, 255);
            assert_ne!(colour, Colour::BLACK, "iterations {}", iterations);
        }
    }

    #[test]
    fn test_red_channel_never_decreases_with_escape_step() {
        let reds: Vec<u8> = (0..MAX_ITERATIONS).map(|i| escaped(i).r).collect();

        assert!(reds.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
