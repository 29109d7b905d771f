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
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
use crate::avx2::avx2_yuv_to_argb_row420;
use crate::internals::ProcessedOffset;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use crate::neon::neon_yuv_to_argb_row420;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::sse::sse_yuv_to_argb_row420;
use crate::yuv_support::{
    CbCrInverseTransform, YuvChromaRange, CAMERA_INVERSE_TRANSFORM, CAMERA_RANGE, PRECISION,
};

/// Instruction sets usable by the vectorized tier on this machine
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SimdSupport {
    pub sse: bool,
    pub avx2: bool,
    pub neon: bool,
}

impl SimdSupport {
    /// Probes the CPU once, honoring the `sse` and `avx` crate features.
    pub fn detect() -> SimdSupport {
        #[allow(unused_mut)]
        let mut support = SimdSupport::none();
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        {
            support.sse = std::arch::is_x86_feature_detected!("sse4.1");
        }
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        {
            support.avx2 = std::arch::is_x86_feature_detected!("avx2");
        }
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        {
            support.neon = true;
        }
        support
    }

    pub const fn none() -> SimdSupport {
        SimdSupport {
            sse: false,
            avx2: false,
            neon: false,
        }
    }

    #[inline]
    pub const fn is_available(&self) -> bool {
        self.sse || self.avx2 || self.neon
    }

    /// Instruction sets present in both.
    pub const fn intersect(&self, other: &SimdSupport) -> SimdSupport {
        SimdSupport {
            sse: self.sse && other.sse,
            avx2: self.avx2 && other.avx2,
            neon: self.neon && other.neon,
        }
    }
}

/// Vectorized tier: the fixed point transform evaluated on whole blocks
/// of a luma row pair with the instruction sets found at construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VectorKernel {
    simd: SimdSupport,
    transform: CbCrInverseTransform<i32>,
    range: YuvChromaRange,
}

impl VectorKernel {
    /// Pixels per vector block, frame width must be a multiple of it.
    pub const BLOCK_SIZE: usize = 16;

    /// Requested instruction sets the host lacks are dropped.
    pub fn new(simd: SimdSupport) -> VectorKernel {
        VectorKernel {
            simd: simd.intersect(&SimdSupport::detect()),
            transform: CAMERA_INVERSE_TRANSFORM.to_integers(PRECISION as u32),
            range: CAMERA_RANGE,
        }
    }

    pub fn simd(&self) -> SimdSupport {
        self.simd
    }

    /// Reason the fast path cannot take this frame shape, if any.
    pub(crate) fn rejection(
        &self,
        width: usize,
        height: usize,
        luma_pixel_stride: u32,
    ) -> Option<&'static str> {
        if !self.simd.is_available() {
            Some("no supported vector instruction set")
        } else if width % VectorKernel::BLOCK_SIZE != 0 {
            Some("width is not a multiple of the block size")
        } else if height % 2 != 0 {
            Some("height is odd")
        } else if luma_pixel_stride != 1 {
            Some("luma samples are not contiguous")
        } else {
            None
        }
    }

    /// Converts a luma row pair, widest kernel first then narrower ones on
    /// what is left.
    ///
    /// Returns the first column that still needs the scalar path.
    #[allow(unused_variables, unused_mut)]
    pub(crate) fn convert_row_pair(
        &self,
        y_plane0: &[u8],
        y_plane1: &[u8],
        u_plane: &[u8],
        v_plane: &[u8],
        argb0: &mut [u32],
        argb1: &mut [u32],
        width: usize,
    ) -> usize {
        let range = &self.range;
        let transform = &self.transform;
        let mut offset = ProcessedOffset { cx: 0, ux: 0 };

        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
        if self.simd.avx2 {
            offset = avx2_yuv_to_argb_row420(
                range, transform, y_plane0, y_plane1, u_plane, v_plane, argb0, argb1, offset.cx,
                offset.ux, width,
            );
        }
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        if self.simd.sse {
            offset = sse_yuv_to_argb_row420(
                range, transform, y_plane0, y_plane1, u_plane, v_plane, argb0, argb1, offset.cx,
                offset.ux, width,
            );
        }
        #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
        if self.simd.neon {
            offset = neon_yuv_to_argb_row420(
                range, transform, y_plane0, y_plane1, u_plane, v_plane, argb0, argb1, offset.cx,
                offset.ux, width,
            );
        }

        offset.cx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_unavailable() {
        assert!(!SimdSupport::none().is_available());
        assert_eq!(SimdSupport::default(), SimdSupport::none());
        let all = SimdSupport {
            sse: true,
            avx2: true,
            neon: true,
        };
        assert_eq!(all.intersect(&SimdSupport::none()), SimdSupport::none());
        assert_eq!(
            VectorKernel::new(all).simd(),
            SimdSupport::detect(),
            "kernel must never claim more than the host offers"
        );
    }

    #[test]
    fn test_dispatch_without_simd_processes_nothing() {
        let y = [0u8; 16];
        let uv = [0u8; 8];
        let mut argb0 = [0u32; 16];
        let mut argb1 = [0u32; 16];
        let kernel = VectorKernel::new(SimdSupport::none());
        let cx = kernel.convert_row_pair(&y, &y, &uv, &uv, &mut argb0, &mut argb1, 16);
        assert_eq!(cx, 0);
    }

    #[test]
    fn test_fast_path_rejections() {
        let kernel = VectorKernel::new(SimdSupport::detect());
        if kernel.simd().is_available() {
            assert_eq!(kernel.rejection(32, 4, 1), None);
        }
        assert!(kernel.rejection(18, 2, 1).is_some());
        assert!(kernel.rejection(16, 3, 1).is_some());
        assert!(kernel.rejection(16, 2, 2).is_some());
        let scalar_only = VectorKernel::new(SimdSupport::none());
        assert!(scalar_only.rejection(16, 2, 1).is_some());
    }

    #[test]
    fn test_row_pair_matches_fixed_point() {
        use crate::color_kernel::{ColorKernel, FixedPointKernel};
        use rand::Rng;

        let kernel = VectorKernel::new(SimdSupport::detect());
        let fixed = FixedPointKernel::default();
        let width = 48usize;
        let mut rng = rand::rng();
        let y0: Vec<u8> = (0..width).map(|_| rng.random()).collect();
        let y1: Vec<u8> = (0..width).map(|_| rng.random()).collect();
        let u: Vec<u8> = (0..width / 2).map(|_| rng.random()).collect();
        let v: Vec<u8> = (0..width / 2).map(|_| rng.random()).collect();
        let mut argb0 = vec![0u32; width];
        let mut argb1 = vec![0u32; width];
        let cx = kernel.convert_row_pair(&y0, &y1, &u, &v, &mut argb0, &mut argb1, width);
        assert!(cx <= width);
        for x in 0..cx {
            assert_eq!(argb0[x], fixed.to_argb(y0[x], u[x / 2], v[x / 2]));
            assert_eq!(argb1[x], fixed.to_argb(y1[x], u[x / 2], v[x / 2]));
        }
    }

    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    #[test]
    fn test_neon_is_detected() {
        assert!(SimdSupport::detect().neon);
    }
}
