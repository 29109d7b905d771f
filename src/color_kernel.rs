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
use crate::numerics::{clamp_u8, qrshr};
use crate::yuv_support::{
    CbCrInverseTransform, YuvChromaRange, CAMERA_INVERSE_TRANSFORM, CAMERA_RANGE, PRECISION,
};

/// Packs 8 bit channels into an opaque `0xFF000000 | B << 16 | G << 8 | R` word
#[inline(always)]
pub const fn pack_argb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((b as u32) << 16) | ((g as u32) << 8) | r as u32
}

/// Splits a packed word into `[R, G, B]`
#[inline(always)]
pub const fn unpack_rgb(argb: u32) -> [u8; 3] {
    [argb as u8, (argb >> 8) as u8, (argb >> 16) as u8]
}

/// Per-pixel YUV to RGB conversion
pub trait ColorKernel: Send + Sync {
    fn to_rgb(&self, y: u8, u: u8, v: u8) -> [u8; 3];

    #[inline(always)]
    fn to_argb(&self, y: u8, u: u8, v: u8) -> u32 {
        let [r, g, b] = self.to_rgb(y, u, v);
        pack_argb(r, g, b)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// Reference kernel, samples are normalized to [0, 1] and converted in `f32`
pub struct FloatKernel {
    transform: CbCrInverseTransform<f32>,
    bias_y: f32,
    bias_uv: f32,
}

impl FloatKernel {
    pub fn new(transform: CbCrInverseTransform<f32>, range: YuvChromaRange) -> Self {
        FloatKernel {
            transform,
            bias_y: range.bias_y as f32 / 255f32,
            bias_uv: range.bias_uv as f32 / 255f32,
        }
    }

    #[inline(always)]
    fn rescale(v: f32) -> u8 {
        clamp_u8((v.min(1f32).max(0f32) * 255f32).round())
    }
}

impl Default for FloatKernel {
    fn default() -> Self {
        FloatKernel::new(CAMERA_INVERSE_TRANSFORM, CAMERA_RANGE)
    }
}

impl ColorKernel for FloatKernel {
    #[inline]
    fn to_rgb(&self, y: u8, u: u8, v: u8) -> [u8; 3] {
        const NORM: f32 = 1f32 / 255f32;
        let t = &self.transform;
        let y_value = (y as f32 * NORM - self.bias_y) * t.y_coef;
        let cb_value = u as f32 * NORM - self.bias_uv;
        let cr_value = v as f32 * NORM - self.bias_uv;

        let r = y_value + t.cr_coef * cr_value;
        let g = y_value - t.g_coeff_2 * cb_value - t.g_coeff_1 * cr_value;
        let b = y_value + t.cb_coef * cb_value;
        [
            FloatKernel::rescale(r),
            FloatKernel::rescale(g),
            FloatKernel::rescale(b),
        ]
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
/// Integer kernel, weights carry 12 fractional bits
pub struct FixedPointKernel {
    transform: CbCrInverseTransform<i32>,
    bias_y: i32,
    bias_uv: i32,
}

impl FixedPointKernel {
    pub fn new(transform: CbCrInverseTransform<f32>, range: YuvChromaRange) -> Self {
        FixedPointKernel {
            transform: transform.to_integers(PRECISION as u32),
            bias_y: range.bias_y as i32,
            bias_uv: range.bias_uv as i32,
        }
    }

    pub fn transform(&self) -> &CbCrInverseTransform<i32> {
        &self.transform
    }
}

impl Default for FixedPointKernel {
    fn default() -> Self {
        FixedPointKernel::new(CAMERA_INVERSE_TRANSFORM, CAMERA_RANGE)
    }
}

impl ColorKernel for FixedPointKernel {
    #[inline(always)]
    fn to_rgb(&self, y: u8, u: u8, v: u8) -> [u8; 3] {
        let t = &self.transform;
        let y_value = (y as i32 - self.bias_y) * t.y_coef;
        let cb_value = u as i32 - self.bias_uv;
        let cr_value = v as i32 - self.bias_uv;

        let r = qrshr::<PRECISION>(y_value + t.cr_coef * cr_value);
        let b = qrshr::<PRECISION>(y_value + t.cb_coef * cb_value);
        let g = qrshr::<PRECISION>(y_value - t.g_coeff_1 * cr_value - t.g_coeff_2 * cb_value);
        [r, g, b]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_white_and_black() {
        let float = FloatKernel::default();
        let fixed = FixedPointKernel::default();
        assert_eq!(float.to_argb(255, 128, 128), 0xFFFF_FFFF);
        assert_eq!(fixed.to_argb(255, 128, 128), 0xFFFF_FFFF);
        assert_eq!(float.to_argb(16, 128, 128), 0xFF00_0000);
        assert_eq!(fixed.to_argb(16, 128, 128), 0xFF00_0000);
        assert_eq!(fixed.to_argb(0, 128, 128), 0xFF00_0000);
    }

    #[test]
    fn test_channel_placement() {
        let fixed = FixedPointKernel::default();
        // Strong Cr drives red, strong Cb drives blue.
        let [r, g, b] = unpack_rgb(fixed.to_argb(128, 128, 255));
        assert!(r > g && r > b);
        let [r, g, b] = unpack_rgb(fixed.to_argb(128, 255, 128));
        assert!(b > r && b > g);
        assert_eq!(pack_argb(1, 2, 3), 0xFF03_0201);
    }

    #[test]
    fn test_fixed_point_weights() {
        let fixed = FixedPointKernel::default();
        assert_eq!(
            fixed,
            FixedPointKernel::new(CAMERA_INVERSE_TRANSFORM, CAMERA_RANGE)
        );
        let t = fixed.transform();
        assert_eq!(
            (t.y_coef, t.cr_coef, t.cb_coef, t.g_coeff_1, t.g_coeff_2),
            (4768, 7344, 8651, 2183, 872)
        );
    }

    #[test]
    fn test_fixed_point_tracks_float_exhaustively() {
        let float = FloatKernel::default();
        let fixed = FixedPointKernel::default();
        for y in 0..=255u8 {
            for u in 0..=255u8 {
                for v in 0..=255u8 {
                    let reference = float.to_rgb(y, u, v);
                    let integral = fixed.to_rgb(y, u, v);
                    for c in 0..3 {
                        let diff = (reference[c] as i32 - integral[c] as i32).abs();
                        assert!(
                            diff <= 1,
                            "yuv ({}, {}, {}) channel {}: float {}, fixed {}",
                            y,
                            u,
                            v,
                            c,
                            reference[c],
                            integral[c]
                        );
                    }
                }
            }
        }
    }
}
