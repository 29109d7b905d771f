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
use crate::yuv_error::{check_frame_size, check_plane, check_plane_count};
use crate::YuvError;

/// Planes of a YUV 4:2:0 frame in the order camera sources expose them
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum YuvPlaneKind {
    Y = 0,
    U = 1,
    V = 2,
}

impl YuvPlaneKind {
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for YuvPlaneKind {
    type Error = YuvError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(YuvPlaneKind::Y),
            1 => Ok(YuvPlaneKind::U),
            2 => Ok(YuvPlaneKind::V),
            _ => Err(YuvError::InvalidPlaneIndex(value)),
        }
    }
}

#[derive(Debug, Copy, Clone)]
/// Read-only view into one sub-sampled color component
pub struct YuvPlane<'a> {
    pub data: &'a [u8],
    /// Bytes between the starts of two consecutive rows.
    pub row_stride: u32,
    /// Bytes between two consecutive samples of a row.
    pub pixel_stride: u32,
}

impl<'a> YuvPlane<'a> {
    pub const fn new(data: &'a [u8], row_stride: u32, pixel_stride: u32) -> Self {
        YuvPlane {
            data,
            row_stride,
            pixel_stride,
        }
    }

    /// Tightly packed plane, one byte per sample.
    pub const fn packed(data: &'a [u8], row_stride: u32) -> Self {
        YuvPlane::new(data, row_stride, 1)
    }

    #[inline(always)]
    pub const fn offset(&self, row: usize, col: usize) -> usize {
        row * self.row_stride as usize + col * self.pixel_stride as usize
    }

    /// Offset of the chroma sample shared by full resolution (`row`, `col`).
    #[inline(always)]
    pub const fn chroma_offset(&self, row: usize, col: usize) -> usize {
        self.offset(row >> 1, col >> 1)
    }

    #[inline(always)]
    pub fn luma_at(&self, row: usize, col: usize) -> u8 {
        self.data[self.offset(row, col)]
    }

    #[inline(always)]
    pub fn chroma_at(&self, row: usize, col: usize) -> u8 {
        self.data[self.chroma_offset(row, col)]
    }

    /// `count` samples of plane row `row`, contiguous only when pixel stride is 1.
    #[inline]
    pub(crate) fn row_span(&self, row: usize, count: usize) -> &'a [u8] {
        let start = self.offset(row, 0);
        &self.data[start..start + count]
    }
}

/// Camera frame capability: dimensions and per-plane buffers of one YUV 4:2:0 frame.
pub trait FrameSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn plane_count(&self) -> usize;

    fn plane(&self, index: usize) -> Result<YuvPlane<'_>, YuvError>;
}

#[derive(Debug, Copy, Clone)]
/// Borrowed YUV 4:2:0 camera frame
pub struct YuvCameraFrame<'a> {
    pub y_plane: YuvPlane<'a>,
    pub u_plane: YuvPlane<'a>,
    pub v_plane: YuvPlane<'a>,
    pub width: u32,
    pub height: u32,
}

impl YuvCameraFrame<'_> {
    pub fn check_constraints(&self) -> Result<(), YuvError> {
        FramePlanes::from_source(self).map(|_| ())
    }
}

impl FrameSource for YuvCameraFrame<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn plane_count(&self) -> usize {
        3
    }

    fn plane(&self, index: usize) -> Result<YuvPlane<'_>, YuvError> {
        match YuvPlaneKind::try_from(index)? {
            YuvPlaneKind::Y => Ok(self.y_plane),
            YuvPlaneKind::U => Ok(self.u_plane),
            YuvPlaneKind::V => Ok(self.v_plane),
        }
    }
}

/// Planes fetched from a [FrameSource] and validated against its dimensions.
#[derive(Debug, Copy, Clone)]
pub(crate) struct FramePlanes<'a> {
    pub(crate) y: YuvPlane<'a>,
    pub(crate) u: YuvPlane<'a>,
    pub(crate) v: YuvPlane<'a>,
    pub(crate) width: usize,
    pub(crate) height: usize,
}

impl<'a> FramePlanes<'a> {
    pub(crate) fn from_source<F: FrameSource + ?Sized>(source: &'a F) -> Result<Self, YuvError> {
        check_frame_size(source.width(), source.height())?;
        check_plane_count(source.plane_count(), 3)?;
        let width = source.width() as usize;
        let height = source.height() as usize;
        let chroma_width = width.div_ceil(2);
        let chroma_height = height.div_ceil(2);

        let y = source.plane(YuvPlaneKind::Y.index())?;
        let u = source.plane(YuvPlaneKind::U.index())?;
        let v = source.plane(YuvPlaneKind::V.index())?;

        check_plane(&y, YuvPlaneKind::Y, width, height)?;
        check_plane(&u, YuvPlaneKind::U, chroma_width, chroma_height)?;
        check_plane(&v, YuvPlaneKind::V, chroma_width, chroma_height)?;

        Ok(FramePlanes {
            y,
            u,
            v,
            width,
            height,
        })
    }

    /// Copies `count` chroma samples of `chroma_row` into `scratch` unless they
    /// are already contiguous.
    #[inline]
    pub(crate) fn chroma_row<'s>(
        plane: &YuvPlane<'a>,
        chroma_row: usize,
        count: usize,
        scratch: &'s mut [u8],
    ) -> &'s [u8]
    where
        'a: 's,
    {
        if plane.pixel_stride == 1 {
            return plane.row_span(chroma_row, count);
        }
        let scratch = &mut scratch[..count];
        for (x, dst) in scratch.iter_mut().enumerate() {
            *dst = plane.data[plane.offset(chroma_row, x)];
        }
        scratch
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Packed 32 bit raster, pixel (r, c) lives at `r * width + c`
///
/// Each word is `0xFF000000 | B << 16 | G << 8 | R`.
pub struct ArgbRaster {
    pub data: Vec<u32>,
    pub width: u32,
    pub height: u32,
    pub(crate) locked: bool,
}

impl ArgbRaster {
    /// Allocates raster with every word set to zero.
    pub fn alloc(width: u32, height: u32) -> Self {
        ArgbRaster {
            data: vec![0u32; width as usize * height as usize],
            width,
            height,
            locked: false,
        }
    }

    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> u32 {
        self.data[row * self.width as usize + col]
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Bytes in R, G, B, A order
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|px| px.to_le_bytes()).collect()
    }
}
