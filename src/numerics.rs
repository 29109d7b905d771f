/*
 * Copyright (c) The camera-yuv Authors, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
#![forbid(unsafe_code)]
use num_traits::AsPrimitive;

/// Saturates an intensity into [0, 255] using comparisons.
///
/// Works for integers and floats alike, `NaN` saturates to 0.
#[inline(always)]
pub fn clamp_u8<V>(v: V) -> u8
where
    V: Copy + PartialOrd + AsPrimitive<u8>,
    u8: AsPrimitive<V>,
{
    let min_value: V = 0u8.as_();
    let max_value: V = 255u8.as_();
    if v >= max_value {
        255
    } else if v > min_value {
        v.as_()
    } else {
        0
    }
}

/// Saturates an intensity into [0, 255] without branches.
///
/// Negative values are masked to zero, anything past 255 sets every bit.
#[inline(always)]
pub const fn clamp_u8_branchless(n: i32) -> u8 {
    let n = n & -((n >= 0) as i32);
    (n | ((255 - n) >> 31)) as u8
}

#[inline(always)]
/// Saturating rounding shift right into 8 bit range
pub(crate) const fn qrshr<const PRECISION: i32>(val: i32) -> u8 {
    let rounding: i32 = 1 << (PRECISION - 1);
    clamp_u8_branchless((val + rounding) >> PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn reference_clamp(n: i32) -> u8 {
        if n < 0 {
            0
        } else if n > 255 {
            255
        } else {
            n as u8
        }
    }

    #[test]
    fn test_clamp_edges() {
        let edges = [
            i32::MIN,
            i32::MIN + 1,
            -65536,
            -256,
            -255,
            -1,
            0,
            1,
            127,
            128,
            254,
            255,
            256,
            257,
            65535,
            i32::MAX - 1,
            i32::MAX,
        ];
        for &n in edges.iter() {
            assert_eq!(clamp_u8(n), reference_clamp(n), "branching form at {}", n);
            assert_eq!(
                clamp_u8_branchless(n),
                reference_clamp(n),
                "branchless form at {}",
                n
            );
        }
    }

    #[test]
    fn test_clamp_forms_agree() {
        for n in -70_000..70_000 {
            assert_eq!(clamp_u8(n), clamp_u8_branchless(n));
        }
        let mut rng = rand::rng();
        for _ in 0..200_000 {
            let n: i32 = rng.random();
            assert_eq!(clamp_u8(n), clamp_u8_branchless(n), "at {}", n);
        }
    }

    #[test]
    fn test_clamp_float() {
        assert_eq!(clamp_u8(-0.5f32), 0);
        assert_eq!(clamp_u8(0f32), 0);
        assert_eq!(clamp_u8(127.9f32), 127);
        assert_eq!(clamp_u8(255f32), 255);
        assert_eq!(clamp_u8(1e9f32), 255);
        assert_eq!(clamp_u8(f32::NAN), 0);
    }

    #[test]
    fn test_qrshr_rounds_half_up() {
        assert_eq!(qrshr::<12>(2047), 0);
        assert_eq!(qrshr::<12>(2048), 1);
        assert_eq!(qrshr::<12>(255 << 12), 255);
        assert_eq!(qrshr::<12>(300 << 12), 255);
        assert_eq!(qrshr::<12>(-5 << 12), 0);
    }
}
