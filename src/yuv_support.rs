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
/// Fractional bits used by the fixed point and vectorized kernels.
pub(crate) const PRECISION: i32 = 12;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
/// Weights of the inverse (YCbCr to RGB) transform
///
/// R = y_coef * Y + cr_coef * Cr
/// G = y_coef * Y - g_coeff_1 * Cr - g_coeff_2 * Cb
/// B = y_coef * Y + cb_coef * Cb
pub struct CbCrInverseTransform<T> {
    pub y_coef: T,
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

impl<T> CbCrInverseTransform<T> {
    pub const fn new(
        y_coef: T,
        cr_coef: T,
        cb_coef: T,
        g_coeff_1: T,
        g_coeff_2: T,
    ) -> CbCrInverseTransform<T> {
        CbCrInverseTransform {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1,
            g_coeff_2,
        }
    }
}

impl CbCrInverseTransform<f32> {
    /// Integral transformation, weights are rounded to `precision` fractional bits
    pub fn to_integers(&self, precision: u32) -> CbCrInverseTransform<i32> {
        let precision_scale: i32 = 1i32 << (precision as i32);
        let cr_coef = (self.cr_coef * precision_scale as f32).round() as i32;
        let cb_coef = (self.cb_coef * precision_scale as f32).round() as i32;
        let y_coef = (self.y_coef * precision_scale as f32).round() as i32;
        let g_coef_1 = (self.g_coeff_1 * precision_scale as f32).round() as i32;
        let g_coef_2 = (self.g_coeff_2 * precision_scale as f32).round() as i32;
        CbCrInverseTransform::<i32> {
            y_coef,
            cr_coef,
            cb_coef,
            g_coeff_1: g_coef_1,
            g_coeff_2: g_coef_2,
        }
    }
}

/// Weights applied to camera frames.
pub const CAMERA_INVERSE_TRANSFORM: CbCrInverseTransform<f32> =
    CbCrInverseTransform::new(1.164f32, 1.793f32, 2.112f32, 0.533f32, 0.213f32);

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Eq)]
/// Offsets subtracted from 8 bit samples before the transform
pub struct YuvChromaRange {
    pub bias_y: u32,
    pub bias_uv: u32,
}

/// Video (limited) range: Y starts at 16, chroma is centered on 128.
pub const CAMERA_RANGE: YuvChromaRange = YuvChromaRange {
    bias_y: 16,
    bias_uv: 128,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_weights() {
        let weights = CAMERA_INVERSE_TRANSFORM.to_integers(PRECISION as u32);
        assert_eq!(weights.y_coef, 4768);
        assert_eq!(weights.cr_coef, 7344);
        assert_eq!(weights.cb_coef, 8651);
        assert_eq!(weights.g_coeff_1, 2183);
        assert_eq!(weights.g_coeff_2, 872);
    }
}
