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
use crate::images::{YuvPlane, YuvPlaneKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YuvError {
    ZeroBaseSize,
    PointerOverflow,
    PlaneCountMismatch(MismatchedSize),
    InvalidPlaneIndex(usize),
    PlaneSizeMismatch(YuvPlaneKind, MismatchedSize),
    InvalidPixelStride(YuvPlaneKind),
    InvalidRowStride(YuvPlaneKind, MismatchedSize),
    InvalidRotation(i32),
    RasterSizeMismatch(MismatchedSize),
    RasterAllocation(String),
    RasterLock(String),
}

impl Display for YuvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            YuvError::ZeroBaseSize => f.write_str("Zero sized images is not supported"),
            YuvError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            YuvError::PlaneCountMismatch(size) => f.write_fmt(format_args!(
                "Frame must have {} planes, but it has {}",
                size.expected, size.received
            )),
            YuvError::InvalidPlaneIndex(index) => {
                f.write_fmt(format_args!("Plane index {} is out of range", index))
            }
            YuvError::PlaneSizeMismatch(plane, size) => f.write_fmt(format_args!(
                "{:?} plane must have at least {} bytes, but it has {}",
                plane, size.expected, size.received
            )),
            YuvError::InvalidPixelStride(plane) => {
                f.write_fmt(format_args!("{:?} plane pixel stride must not be zero", plane))
            }
            YuvError::InvalidRowStride(plane, size) => f.write_fmt(format_args!(
                "{:?} plane row stride must be at least {}, but it was {}",
                plane, size.expected, size.received
            )),
            YuvError::InvalidRotation(degrees) => f.write_fmt(format_args!(
                "Rotation must be one of 0, 90, 180, 270 degrees, but it was {}",
                degrees
            )),
            YuvError::RasterSizeMismatch(size) => f.write_fmt(format_args!(
                "Raster size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            YuvError::RasterAllocation(reason) => {
                f.write_fmt(format_args!("Raster allocation failed: {}", reason))
            }
            YuvError::RasterLock(reason) => {
                f.write_fmt(format_args!("Raster lock failed: {}", reason))
            }
        }
    }
}

impl Error for YuvError {}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, YuvError> {
    v0.checked_mul(v1).ok_or(YuvError::PointerOverflow)
}

#[inline]
pub(crate) fn check_frame_size(width: u32, height: u32) -> Result<(), YuvError> {
    if width == 0 || height == 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    check_overflow_v2(width as usize, height as usize)?;
    Ok(())
}

#[inline]
pub(crate) fn check_plane_count(count: usize, expected: usize) -> Result<(), YuvError> {
    if count < expected {
        return Err(YuvError::PlaneCountMismatch(MismatchedSize {
            expected,
            received: count,
        }));
    }
    Ok(())
}

/// Checks that every sample addressed for `plane_width` x `plane_height`
/// lies inside the plane buffer.
pub(crate) fn check_plane(
    plane: &YuvPlane,
    kind: YuvPlaneKind,
    plane_width: usize,
    plane_height: usize,
) -> Result<(), YuvError> {
    if plane.pixel_stride == 0 {
        return Err(YuvError::InvalidPixelStride(kind));
    }
    let row_span = check_overflow_v2(plane_width - 1, plane.pixel_stride as usize)?
        .checked_add(1)
        .ok_or(YuvError::PointerOverflow)?;
    if plane_height > 1 && (plane.row_stride as usize) < row_span {
        return Err(YuvError::InvalidRowStride(
            kind,
            MismatchedSize {
                expected: row_span,
                received: plane.row_stride as usize,
            },
        ));
    }
    let required = check_overflow_v2(plane_height - 1, plane.row_stride as usize)?
        .checked_add(row_span)
        .ok_or(YuvError::PointerOverflow)?;
    if plane.data.len() < required {
        return Err(YuvError::PlaneSizeMismatch(
            kind,
            MismatchedSize {
                expected: required,
                received: plane.data.len(),
            },
        ));
    }
    Ok(())
}

#[inline]
pub(crate) fn check_raster_destination(
    pixels: &[u32],
    width: u32,
    height: u32,
) -> Result<(), YuvError> {
    let expected = check_overflow_v2(width as usize, height as usize)?;
    if pixels.len() != expected {
        return Err(YuvError::RasterSizeMismatch(MismatchedSize {
            expected,
            received: pixels.len(),
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_plane_accepts_unpadded_tail() {
        // Last row carries no padding, as camera buffers commonly do.
        let data = vec![0u8; 10 * 3 + 8];
        let plane = YuvPlane::new(&data, 10, 1);
        assert!(check_plane(&plane, YuvPlaneKind::Y, 8, 4).is_ok());
    }

    #[test]
    fn test_check_plane_rejects_short_buffer() {
        let data = vec![0u8; 10 * 3 + 7];
        let plane = YuvPlane::new(&data, 10, 1);
        assert_eq!(
            check_plane(&plane, YuvPlaneKind::U, 8, 4),
            Err(YuvError::PlaneSizeMismatch(
                YuvPlaneKind::U,
                MismatchedSize {
                    expected: 38,
                    received: 37
                }
            ))
        );
    }

    #[test]
    fn test_check_plane_interleaved_chroma() {
        // Semi-planar chroma: pixel stride 2, 4 samples per row need 7 bytes.
        let data = vec![0u8; 8 + 7];
        let plane = YuvPlane::new(&data, 8, 2);
        assert!(check_plane(&plane, YuvPlaneKind::V, 4, 2).is_ok());
        let narrow = YuvPlane::new(&data, 6, 2);
        assert!(matches!(
            check_plane(&narrow, YuvPlaneKind::V, 4, 2),
            Err(YuvError::InvalidRowStride(YuvPlaneKind::V, _))
        ));
    }

    #[test]
    fn test_check_plane_zero_pixel_stride() {
        let data = vec![0u8; 64];
        let plane = YuvPlane::new(&data, 8, 0);
        assert_eq!(
            check_plane(&plane, YuvPlaneKind::Y, 8, 8),
            Err(YuvError::InvalidPixelStride(YuvPlaneKind::Y))
        );
    }

    #[test]
    fn test_check_frame_size() {
        assert_eq!(check_frame_size(0, 10), Err(YuvError::ZeroBaseSize));
        assert_eq!(check_frame_size(10, 0), Err(YuvError::ZeroBaseSize));
        assert!(check_frame_size(16, 2).is_ok());
    }
}
