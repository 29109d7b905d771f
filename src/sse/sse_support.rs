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

/// Widens 16 unsigned bytes into four vectors of 32 bit lanes
#[inline(always)]
pub(crate) unsafe fn _mm_expand_epu8_epi32(v: __m128i) -> (__m128i, __m128i, __m128i, __m128i) {
    (
        _mm_cvtepu8_epi32(v),
        _mm_cvtepu8_epi32(_mm_srli_si128::<4>(v)),
        _mm_cvtepu8_epi32(_mm_srli_si128::<8>(v)),
        _mm_cvtepu8_epi32(_mm_srli_si128::<12>(v)),
    )
}

/// Loads 8 chroma samples and repeats each one for the two pixels sharing it
#[inline(always)]
pub(crate) unsafe fn _mm_load_dup_chroma_epu8(ptr: *const u8) -> __m128i {
    let values = _mm_loadl_epi64(ptr as *const __m128i);
    _mm_unpacklo_epi8(values, values)
}

#[inline(always)]
pub(crate) unsafe fn _mm_clamp_u8_epi32(v: __m128i, v_max: __m128i) -> __m128i {
    _mm_min_epi32(_mm_max_epi32(v, _mm_setzero_si128()), v_max)
}

/// Builds `alpha | B << 16 | G << 8 | R` words from clamped channels
#[inline(always)]
pub(crate) unsafe fn _mm_pack_argb_epi32(
    r: __m128i,
    g: __m128i,
    b: __m128i,
    v_alpha: __m128i,
) -> __m128i {
    _mm_or_si128(
        _mm_or_si128(r, _mm_slli_epi32::<8>(g)),
        _mm_or_si128(_mm_slli_epi32::<16>(b), v_alpha),
    )
}
