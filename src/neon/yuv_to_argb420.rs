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
use crate::internals::ProcessedOffset;
use crate::neon::utils::{vclampq_u8_s32, vexpandq_u8_s32, vld1q_dup_chroma_u8, vpackq_argb_u32};
use crate::yuv_support::{CbCrInverseTransform, YuvChromaRange, PRECISION};
use std::arch::aarch64::*;

/// Converts a pair of luma rows sharing one chroma row, 16 pixels per step.
pub(crate) fn neon_yuv_to_argb_row420(
    range: &YuvChromaRange,
    transform: &CbCrInverseTransform<i32>,
    y_plane0: &[u8],
    y_plane1: &[u8],
    u_plane: &[u8],
    v_plane: &[u8],
    argb0: &mut [u32],
    argb1: &mut [u32],
    start_cx: usize,
    start_ux: usize,
    width: usize,
) -> ProcessedOffset {
    unsafe {
        neon_yuv_to_argb_row_impl420(
            range, transform, y_plane0, y_plane1, u_plane, v_plane, argb0, argb1, start_cx,
            start_ux, width,
        )
    }
}

#[inline(always)]
unsafe fn neon_yuv_to_argb_row_impl420(
    range: &YuvChromaRange,
    transform: &CbCrInverseTransform<i32>,
    y_plane0: &[u8],
    y_plane1: &[u8],
    u_plane: &[u8],
    v_plane: &[u8],
    argb0: &mut [u32],
    argb1: &mut [u32],
    start_cx: usize,
    start_ux: usize,
    width: usize,
) -> ProcessedOffset {
    let mut cx = start_cx;
    let mut uv_x = start_ux;

    let y_corr = vdupq_n_s32(range.bias_y as i32);
    let uv_corr = vdupq_n_s32(range.bias_uv as i32);
    let v_max = vdupq_n_s32(255);
    let v_alpha = vdupq_n_u32(0xFF00_0000);

    while cx + 16 <= width {
        let y_src0 = &y_plane0[cx..cx + 16];
        let y_src1 = &y_plane1[cx..cx + 16];
        let u_src = &u_plane[uv_x..uv_x + 8];
        let v_src = &v_plane[uv_x..uv_x + 8];
        let dst0 = &mut argb0[cx..cx + 16];
        let dst1 = &mut argb1[cx..cx + 16];

        let y_values0 = vexpandq_u8_s32(vld1q_u8(y_src0.as_ptr()));
        let y_values1 = vexpandq_u8_s32(vld1q_u8(y_src1.as_ptr()));
        let u_values = vexpandq_u8_s32(vld1q_dup_chroma_u8(u_src.as_ptr()));
        let v_values = vexpandq_u8_s32(vld1q_dup_chroma_u8(v_src.as_ptr()));

        for quarter in 0..4 {
            let cb_value = vsubq_s32(u_values[quarter], uv_corr);
            let cr_value = vsubq_s32(v_values[quarter], uv_corr);

            for (y_quarter, dst) in [
                (y_values0[quarter], dst0.as_mut_ptr()),
                (y_values1[quarter], dst1.as_mut_ptr()),
            ] {
                let y_value = vmulq_n_s32(vsubq_s32(y_quarter, y_corr), transform.y_coef);

                let r = vmlaq_n_s32(y_value, cr_value, transform.cr_coef);
                let b = vmlaq_n_s32(y_value, cb_value, transform.cb_coef);
                let g = vmlsq_n_s32(
                    vmlsq_n_s32(y_value, cr_value, transform.g_coeff_1),
                    cb_value,
                    transform.g_coeff_2,
                );

                let r = vclampq_u8_s32(vrshrq_n_s32::<PRECISION>(r), v_max);
                let g = vclampq_u8_s32(vrshrq_n_s32::<PRECISION>(g), v_max);
                let b = vclampq_u8_s32(vrshrq_n_s32::<PRECISION>(b), v_max);

                vst1q_u32(dst.add(quarter * 4), vpackq_argb_u32(r, g, b, v_alpha));
            }
        }

        cx += 16;
        uv_x += 8;
    }

    ProcessedOffset { cx, ux: uv_x }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_kernel::{ColorKernel, FixedPointKernel};
    use crate::yuv_support::CAMERA_RANGE;
    use rand::Rng;

    #[test]
    fn test_neon_row_matches_fixed_point() {
        let kernel = FixedPointKernel::default();
        let width = 48usize;
        let mut rng = rand::rng();
        for _ in 0..64 {
            let y0: Vec<u8> = (0..width).map(|_| rng.random()).collect();
            let y1: Vec<u8> = (0..width).map(|_| rng.random()).collect();
            let u: Vec<u8> = (0..width / 2).map(|_| rng.random()).collect();
            let v: Vec<u8> = (0..width / 2).map(|_| rng.random()).collect();
            let mut argb0 = vec![0u32; width];
            let mut argb1 = vec![0u32; width];

            let processed = neon_yuv_to_argb_row420(
                &CAMERA_RANGE,
                kernel.transform(),
                &y0,
                &y1,
                &u,
                &v,
                &mut argb0,
                &mut argb1,
                0,
                0,
                width,
            );
            assert_eq!(processed, ProcessedOffset { cx: 48, ux: 24 });

            for x in 0..width {
                assert_eq!(argb0[x], kernel.to_argb(y0[x], u[x / 2], v[x / 2]));
                assert_eq!(argb1[x], kernel.to_argb(y1[x], u[x / 2], v[x / 2]));
            }
        }
    }
}
