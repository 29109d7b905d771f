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
#![allow(clippy::too_many_arguments)]
//! Conversion of YUV 4:2:0 camera frames into packed ARGB rasters,
//! rotated and mirrored for display.
//!
//! Three interchangeable color kernels are provided: a float reference,
//! a 12 bit fixed point kernel and a vectorized kernel (SSE4.1, AVX2, NEON)
//! which is bit-exact with the fixed point one. [YuvFrameConverter] picks the
//! vectorized kernel whenever the frame shape allows it.
//!
//! ```
//! use camera_yuv::*;
//!
//! let y = [255u8; 32];
//! let uv = [128u8; 8];
//! let frame = YuvCameraFrame {
//!     y_plane: YuvPlane::packed(&y, 16),
//!     u_plane: YuvPlane::packed(&uv, 8),
//!     v_plane: YuvPlane::packed(&uv, 8),
//!     width: 16,
//!     height: 2,
//! };
//! let converter = YuvFrameConverter::new(ArgbRasterSink, ConverterOptions::default());
//! let raster = converter
//!     .convert(&frame, SensorRotation::Rotate90, CameraFacing::Back)
//!     .unwrap();
//! assert!(raster.data.iter().all(|&px| px == 0xFFFF_FFFF));
//! ```
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx2;
mod color_kernel;
mod converter;
mod geometry;
mod images;
mod internals;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
mod numerics;
mod raster;
mod simd_support;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;
mod yuv_error;
mod yuv_support;

pub use color_kernel::{pack_argb, unpack_rgb, ColorKernel, FixedPointKernel, FloatKernel};
pub use converter::{
    ConversionReport, ConversionTier, ConverterOptions, KernelPreference, YuvFrameConverter,
};
pub use geometry::{AffineMatrix, CameraFacing, IndexMapper, OrientationTransform, SensorRotation};
pub use images::{ArgbRaster, FrameSource, YuvCameraFrame, YuvPlane, YuvPlaneKind};
pub use numerics::{clamp_u8, clamp_u8_branchless};
pub use raster::{ArgbRasterSink, RasterLock, RasterSink};
pub use simd_support::{SimdSupport, VectorKernel};
pub use yuv_error::{MismatchedSize, YuvError};
pub use yuv_support::{
    CbCrInverseTransform, YuvChromaRange, CAMERA_INVERSE_TRANSFORM, CAMERA_RANGE,
};
