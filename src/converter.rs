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
use crate::color_kernel::{pack_argb, ColorKernel, FixedPointKernel, FloatKernel};
use crate::geometry::{CameraFacing, OrientationTransform, SensorRotation};
use crate::images::{FramePlanes, FrameSource, YuvPlaneKind};
use crate::raster::{RasterLock, RasterSink};
use crate::simd_support::{SimdSupport, VectorKernel};
use crate::yuv_error::{check_frame_size, check_plane, check_plane_count, check_raster_destination};
use crate::YuvError;
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::ParallelSliceMut;

/// Which color kernel a converter should run
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum KernelPreference {
    /// Vectorized when the frame shape and host permit it, fixed point otherwise.
    #[default]
    Auto,
    Float,
    FixedPoint,
    /// Same selection as `Auto`, requested explicitly.
    Vectorized,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConverterOptions {
    pub tier: KernelPreference,
}

/// Kernel that actually produced a raster
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ConversionTier {
    Float,
    FixedPoint,
    Vectorized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport<R> {
    pub raster: R,
    pub tier: ConversionTier,
}

/// Converts YUV 4:2:0 camera frames into oriented packed ARGB rasters.
///
/// Vector capabilities are probed once on construction; a converter holds no
/// per-frame state and may be reused for any number of frames.
pub struct YuvFrameConverter<S: RasterSink> {
    sink: S,
    options: ConverterOptions,
    float_kernel: FloatKernel,
    fixed_kernel: FixedPointKernel,
    vector_kernel: VectorKernel,
}

impl<S: RasterSink> YuvFrameConverter<S> {
    pub fn new(sink: S, options: ConverterOptions) -> Self {
        YuvFrameConverter::with_simd_support(sink, options, SimdSupport::detect())
    }

    /// Restricts the vectorized tier to `simd`, instruction sets missing on
    /// the host are ignored.
    pub fn with_simd_support(sink: S, options: ConverterOptions, simd: SimdSupport) -> Self {
        let vector_kernel = VectorKernel::new(simd);
        log::debug!(
            "vector support {:?}, kernel preference {:?}",
            vector_kernel.simd(),
            options.tier
        );
        YuvFrameConverter {
            sink,
            options,
            float_kernel: FloatKernel::default(),
            fixed_kernel: FixedPointKernel::default(),
            vector_kernel,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn options(&self) -> ConverterOptions {
        self.options
    }

    /// Converts `frame` into a raster oriented by `rotation` and `facing`.
    pub fn convert<F: FrameSource + ?Sized>(
        &self,
        frame: &F,
        rotation: SensorRotation,
        facing: CameraFacing,
    ) -> Result<S::Raster, YuvError> {
        self.convert_with_report(frame, rotation, facing)
            .map(|report| report.raster)
    }

    /// Same as [YuvFrameConverter::convert], also reports the tier that ran.
    pub fn convert_with_report<F: FrameSource + ?Sized>(
        &self,
        frame: &F,
        rotation: SensorRotation,
        facing: CameraFacing,
    ) -> Result<ConversionReport<S::Raster>, YuvError> {
        check_frame_size(frame.width(), frame.height())?;
        check_plane_count(frame.plane_count(), 3)?;
        let transform = self.orientation(frame, rotation, facing);

        let mut raster = self.allocate(&transform)?;
        let tier = {
            let mut lock = RasterLock::acquire(&self.sink, &mut raster)?;
            let dst = lock.pixels();
            check_raster_destination(
                dst,
                transform.dst_width as u32,
                transform.dst_height as u32,
            )?;
            let planes = FramePlanes::from_source(frame)?;
            let tier = self.select_tier(&planes);
            log::debug!("converting with {:?} tier", tier);
            let planes = &planes;
            let float_kernel = &self.float_kernel;
            let fixed_kernel = &self.fixed_kernel;
            match tier {
                ConversionTier::Float => gather_rows(&transform, dst, |row, col| {
                    convert_pixel(float_kernel, planes, row, col)
                }),
                ConversionTier::FixedPoint => gather_rows(&transform, dst, |row, col| {
                    convert_pixel(fixed_kernel, planes, row, col)
                }),
                ConversionTier::Vectorized => convert_vectorized(
                    &self.vector_kernel,
                    fixed_kernel,
                    planes,
                    &transform,
                    dst,
                ),
            }
            tier
        };

        Ok(ConversionReport { raster, tier })
    }

    /// Renders the luma plane alone as opaque gray through the same orientation.
    ///
    /// Only plane 0 is read, chroma planes may be absent.
    pub fn convert_luma<F: FrameSource + ?Sized>(
        &self,
        frame: &F,
        rotation: SensorRotation,
        facing: CameraFacing,
    ) -> Result<S::Raster, YuvError> {
        check_frame_size(frame.width(), frame.height())?;
        check_plane_count(frame.plane_count(), 1)?;
        let transform = self.orientation(frame, rotation, facing);

        let mut raster = self.allocate(&transform)?;
        {
            let mut lock = RasterLock::acquire(&self.sink, &mut raster)?;
            let dst = lock.pixels();
            check_raster_destination(
                dst,
                transform.dst_width as u32,
                transform.dst_height as u32,
            )?;
            let y_plane = frame.plane(YuvPlaneKind::Y.index())?;
            check_plane(
                &y_plane,
                YuvPlaneKind::Y,
                transform.src_width,
                transform.src_height,
            )?;
            gather_rows(&transform, dst, |row, col| {
                let y = y_plane.luma_at(row, col);
                pack_argb(y, y, y)
            });
        }

        Ok(raster)
    }

    fn orientation<F: FrameSource + ?Sized>(
        &self,
        frame: &F,
        rotation: SensorRotation,
        facing: CameraFacing,
    ) -> OrientationTransform {
        let transform = OrientationTransform::new(
            frame.width() as usize,
            frame.height() as usize,
            rotation,
            facing,
        );
        log::trace!(
            "frame {}x{} to raster {}x{}, rotation {}, facing {:?}",
            transform.src_width,
            transform.src_height,
            transform.dst_width,
            transform.dst_height,
            rotation.degrees(),
            facing
        );
        transform
    }

    fn allocate(&self, transform: &OrientationTransform) -> Result<S::Raster, YuvError> {
        let (width, height) = transform.destination_size();
        self.sink.allocate(width as u32, height as u32)
    }

    fn select_tier(&self, planes: &FramePlanes<'_>) -> ConversionTier {
        match self.options.tier {
            KernelPreference::Float => ConversionTier::Float,
            KernelPreference::FixedPoint => ConversionTier::FixedPoint,
            KernelPreference::Auto | KernelPreference::Vectorized => {
                match self.vector_kernel.rejection(
                    planes.width,
                    planes.height,
                    planes.y.pixel_stride,
                ) {
                    None => ConversionTier::Vectorized,
                    Some(reason) => {
                        log::debug!(
                            "vectorized tier skipped for {}x{} frame: {}",
                            planes.width,
                            planes.height,
                            reason
                        );
                        ConversionTier::FixedPoint
                    }
                }
            }
        }
    }
}

#[inline(always)]
fn convert_pixel<K: ColorKernel>(
    kernel: &K,
    planes: &FramePlanes<'_>,
    row: usize,
    col: usize,
) -> u32 {
    kernel.to_argb(
        planes.y.luma_at(row, col),
        planes.u.chroma_at(row, col),
        planes.v.chroma_at(row, col),
    )
}

/// Fills every destination row from the source pixel it maps back to.
fn gather_rows<P>(transform: &OrientationTransform, dst: &mut [u32], sample: P)
where
    P: Fn(usize, usize) -> u32 + Send + Sync,
{
    let inverse = transform.inverse();

    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = dst.par_chunks_exact_mut(transform.dst_width);
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = dst.chunks_exact_mut(transform.dst_width);
    }

    iter.enumerate().for_each(|(dst_row, out)| {
        for (dst_col, px) in out.iter_mut().enumerate() {
            let (row, col) = inverse.map(dst_row, dst_col);
            *px = sample(row, col);
        }
    });
}

/// Per-worker buffers for one converted luma row pair
struct RowPairBuffers {
    line0: Vec<u32>,
    line1: Vec<u32>,
    u_scratch: Vec<u8>,
    v_scratch: Vec<u8>,
}

impl RowPairBuffers {
    fn new(width: usize) -> RowPairBuffers {
        let chroma_width = width.div_ceil(2);
        RowPairBuffers {
            line0: vec![0u32; width],
            line1: vec![0u32; width],
            u_scratch: vec![0u8; chroma_width],
            v_scratch: vec![0u8; chroma_width],
        }
    }
}

/// Converts source rows `row` and `row + 1` into the line buffers.
fn convert_row_pair(
    vector_kernel: &VectorKernel,
    fixed_kernel: &FixedPointKernel,
    planes: &FramePlanes<'_>,
    row: usize,
    buffers: &mut RowPairBuffers,
) {
    let width = planes.width;
    let chroma_width = width.div_ceil(2);
    let RowPairBuffers {
        line0,
        line1,
        u_scratch,
        v_scratch,
    } = buffers;

    let y_row0 = planes.y.row_span(row, width);
    let y_row1 = planes.y.row_span(row + 1, width);
    let u_row = FramePlanes::chroma_row(&planes.u, row >> 1, chroma_width, u_scratch);
    let v_row = FramePlanes::chroma_row(&planes.v, row >> 1, chroma_width, v_scratch);

    let cx = vector_kernel.convert_row_pair(y_row0, y_row1, u_row, v_row, line0, line1, width);

    for x in cx..width {
        let u = u_row[x >> 1];
        let v = v_row[x >> 1];
        line0[x] = fixed_kernel.to_argb(y_row0[x], u, v);
        line1[x] = fixed_kernel.to_argb(y_row1[x], u, v);
    }
}

fn convert_vectorized(
    vector_kernel: &VectorKernel,
    fixed_kernel: &FixedPointKernel,
    planes: &FramePlanes<'_>,
    transform: &OrientationTransform,
    dst: &mut [u32],
) {
    let mapper = transform.index_mapper();

    // Source rows land on whole destination rows, so row pairs own disjoint chunks.
    #[cfg(feature = "rayon")]
    if mapper.col_step.unsigned_abs() == 1 {
        let dst_width = transform.dst_width;
        let inverse = transform.inverse();
        dst.par_chunks_exact_mut(dst_width * 2)
            .enumerate()
            .for_each_init(
                || RowPairBuffers::new(planes.width),
                |buffers, (pair, out)| {
                    let dst_row = pair * 2;
                    let row = inverse.map(dst_row, 0).0.min(inverse.map(dst_row + 1, 0).0);
                    convert_row_pair(vector_kernel, fixed_kernel, planes, row, buffers);
                    let local = mapper.shifted((dst_row * dst_width) as isize);
                    local.write_row(out, row, &buffers.line0);
                    local.write_row(out, row + 1, &buffers.line1);
                },
            );
        return;
    }

    let mut buffers = RowPairBuffers::new(planes.width);
    for row in (0..planes.height).step_by(2) {
        convert_row_pair(vector_kernel, fixed_kernel, planes, row, &mut buffers);
        mapper.write_row(dst, row, &buffers.line0);
        mapper.write_row(dst, row + 1, &buffers.line1);
    }
}
