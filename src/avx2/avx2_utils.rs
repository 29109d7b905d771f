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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
pub(crate) unsafe fn _mm256_load_epu8_epi32(ptr: *const u8) -> __m256i {
    _mm256_cvtepu8_epi32(_mm_loadl_epi64(ptr as *const __m128i))
}

/// Widens 4 chroma samples into 8 lanes, each sample repeated twice
#[inline(always)]
pub(crate) unsafe fn _mm256_load_dup_chroma_epi32(ptr: *const u8) -> __m256i {
    let values = _mm_cvtsi32_si128((ptr as *const i32).read_unaligned());
    _mm256_cvtepu8_epi32(_mm_unpacklo_epi8(values, values))
}

#[inline(always)]
pub(crate) unsafe fn _mm256_clamp_u8_epi32(v: __m256i, v_max: __m256i) -> __m256i {
    _mm256_min_epi32(_mm256_max_epi32(v, _mm256_setzero_si256()), v_max)
}

#[inline(always)]
pub(crate) unsafe fn _mm256_pack_argb_epi32(
    r: __m256i,
    g: __m256i,
    b: __m256i,
    v_alpha: __m256i,
) -> __m256i {
    _mm256_or_si256(
        _mm256_or_si256(r, _mm256_slli_epi32::<8>(g)),
        _mm256_or_si256(_mm256_slli_epi32::<16>(b), v_alpha),
    )
}
