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
use crate::avx2::avx2_utils::{
    _mm256_clamp_u8_epi32, _mm256_load_dup_chroma_epi32, _mm256_load_epu8_epi32,
    _mm256_pack_argb_epi32,
};
use crate::internals::ProcessedOffset;
use crate::yuv_support::{CbCrInverseTransform, YuvChromaRange, PRECISION};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Converts a pair of luma rows sharing one chroma row, 32 pixels per step.
pub(crate) fn avx2_yuv_to_argb_row420(
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
        avx2_yuv_to_argb_row_impl420(
            range, transform, y_plane0, y_plane1, u_plane, v_plane, argb0, argb1, start_cx,
            start_ux, width,
        )
    }
}

#[target_feature(enable = "avx2")]
unsafe fn avx2_yuv_to_argb_row_impl420(
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

    let y_corr = _mm256_set1_epi32(range.bias_y as i32);
    let uv_corr = _mm256_set1_epi32(range.bias_uv as i32);
    let v_luma_coeff = _mm256_set1_epi32(transform.y_coef);
    let v_cr_coeff = _mm256_set1_epi32(transform.cr_coef);
    let v_cb_coeff = _mm256_set1_epi32(transform.cb_coef);
    let v_g_coeff_1 = _mm256_set1_epi32(transform.g_coeff_1);
    let v_g_coeff_2 = _mm256_set1_epi32(transform.g_coeff_2);
    let rounding_const = _mm256_set1_epi32(1 << (PRECISION - 1));
    let v_max = _mm256_set1_epi32(255);
    let v_alpha = _mm256_set1_epi32(0xFF00_0000u32 as i32);

    while cx + 32 <= width {
        let y_src0 = &y_plane0[cx..cx + 32];
        let y_src1 = &y_plane1[cx..cx + 32];
        let u_src = &u_plane[uv_x..uv_x + 16];
        let v_src = &v_plane[uv_x..uv_x + 16];
        let dst0 = &mut argb0[cx..cx + 32];
        let dst1 = &mut argb1[cx..cx + 32];

        for group in 0..4 {
            let cb_value = _mm256_sub_epi32(
                _mm256_load_dup_chroma_epi32(u_src.as_ptr().add(group * 4)),
                uv_corr,
            );
            let cr_value = _mm256_sub_epi32(
                _mm256_load_dup_chroma_epi32(v_src.as_ptr().add(group * 4)),
                uv_corr,
            );

            let r_coeff =
                _mm256_add_epi32(_mm256_mullo_epi32(cr_value, v_cr_coeff), rounding_const);
            let b_coeff =
                _mm256_add_epi32(_mm256_mullo_epi32(cb_value, v_cb_coeff), rounding_const);
            let g_coeff = _mm256_sub_epi32(
                rounding_const,
                _mm256_add_epi32(
                    _mm256_mullo_epi32(cr_value, v_g_coeff_1),
                    _mm256_mullo_epi32(cb_value, v_g_coeff_2),
                ),
            );

            for (y_src, dst) in [
                (y_src0.as_ptr(), dst0.as_mut_ptr()),
                (y_src1.as_ptr(), dst1.as_mut_ptr()),
            ] {
                let y_value = _mm256_mullo_epi32(
                    _mm256_sub_epi32(_mm256_load_epu8_epi32(y_src.add(group * 8)), y_corr),
                    v_luma_coeff,
                );

                let r = _mm256_clamp_u8_epi32(
                    _mm256_srai_epi32::<PRECISION>(_mm256_add_epi32(y_value, r_coeff)),
                    v_max,
                );
                let g = _mm256_clamp_u8_epi32(
                    _mm256_srai_epi32::<PRECISION>(_mm256_add_epi32(y_value, g_coeff)),
                    v_max,
                );
                let b = _mm256_clamp_u8_epi32(
                    _mm256_srai_epi32::<PRECISION>(_mm256_add_epi32(y_value, b_coeff)),
                    v_max,
                );

                _mm256_storeu_si256(
                    dst.add(group * 8) as *mut __m256i,
                    _mm256_pack_argb_epi32(r, g, b, v_alpha),
                );
            }
        }

        cx += 32;
        uv_x += 16;
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
    fn test_avx2_row_matches_fixed_point() {
        if !std::arch::is_x86_feature_detected!("avx2") {
            return;
        }
        let kernel = FixedPointKernel::default();
        let width = 80usize;
        let mut rng = rand::rng();
        for _ in 0..64 {
            let y0: Vec<u8> = (0..width).map(|_| rng.random()).collect();
            let y1: Vec<u8> = (0..width).map(|_| rng.random()).collect();
            let u: Vec<u8> = (0..width / 2).map(|_| rng.random()).collect();
            let v: Vec<u8> = (0..width / 2).map(|_| rng.random()).collect();
            let mut argb0 = vec![0u32; width];
            let mut argb1 = vec![0u32; width];

            let processed = avx2_yuv_to_argb_row420(
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
            // 80 pixels leave a 16 pixel tail for narrower kernels.
            assert_eq!(processed, ProcessedOffset { cx: 64, ux: 32 });

            for x in 0..processed.cx {
                assert_eq!(argb0[x], kernel.to_argb(y0[x], u[x / 2], v[x / 2]));
                assert_eq!(argb1[x], kernel.to_argb(y1[x], u[x / 2], v[x / 2]));
            }
            assert!(argb0[processed.cx..].iter().all(|&px| px == 0));
        }
    }
}
