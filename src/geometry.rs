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
use crate::YuvError;

/// Declares device rotation relative to the camera sensor: 0, 90, 180, 270
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum SensorRotation {
    Rotate0,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl SensorRotation {
    pub const ALL: [SensorRotation; 4] = [
        SensorRotation::Rotate0,
        SensorRotation::Rotate90,
        SensorRotation::Rotate180,
        SensorRotation::Rotate270,
    ];

    pub const fn degrees(&self) -> i32 {
        match self {
            SensorRotation::Rotate0 => 0,
            SensorRotation::Rotate90 => 90,
            SensorRotation::Rotate180 => 180,
            SensorRotation::Rotate270 => 270,
        }
    }

    /// Rotations 0 and 180 render the frame transposed, width and height swap.
    #[inline]
    pub const fn swaps_axes(&self) -> bool {
        matches!(self, SensorRotation::Rotate0 | SensorRotation::Rotate180)
    }

    /// Derives rotation from sensor orientation and display rotation, both in degrees.
    ///
    /// Front cameras add the display rotation, back cameras subtract it.
    pub fn from_orientations(
        sensor_degrees: i32,
        display_degrees: i32,
        facing: CameraFacing,
    ) -> Result<SensorRotation, YuvError> {
        if sensor_degrees % 90 != 0 {
            return Err(YuvError::InvalidRotation(sensor_degrees));
        }
        if display_degrees % 90 != 0 {
            return Err(YuvError::InvalidRotation(display_degrees));
        }
        let sensor = sensor_degrees.rem_euclid(360);
        let display = display_degrees.rem_euclid(360);
        let relative = match facing {
            CameraFacing::Front => sensor + display,
            CameraFacing::Back => sensor - display,
        };
        SensorRotation::try_from(relative.rem_euclid(360))
    }
}

impl TryFrom<i32> for SensorRotation {
    type Error = YuvError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SensorRotation::Rotate0),
            90 => Ok(SensorRotation::Rotate90),
            180 => Ok(SensorRotation::Rotate180),
            270 => Ok(SensorRotation::Rotate270),
            _ => Err(YuvError::InvalidRotation(value)),
        }
    }
}

/// Declares which way the camera faces, front cameras are mirrored
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum CameraFacing {
    Front,
    Back,
}

/// Homogeneous 3x3 integer matrix acting on `(row, col, 1)`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AffineMatrix {
    pub m: [[i64; 3]; 3],
}

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        m: [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    };

    pub const fn new(m: [[i64; 3]; 3]) -> Self {
        AffineMatrix { m }
    }

    pub fn multiply(&self, rhs: &AffineMatrix) -> AffineMatrix {
        let mut m = [[0i64; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, dst) in row.iter_mut().enumerate() {
                *dst = (0..3).map(|k| self.m[i][k] * rhs.m[k][j]).sum();
            }
        }
        AffineMatrix { m }
    }

    #[inline(always)]
    pub const fn apply(&self, row: i64, col: i64) -> (i64, i64) {
        let m = &self.m;
        (
            m[0][0] * row + m[0][1] * col + m[0][2],
            m[1][0] * row + m[1][1] * col + m[1][2],
        )
    }

    /// Inverse of a permutation-and-reflection matrix: transposed linear part
    /// with the translation carried back through it.
    pub fn inverse(&self) -> AffineMatrix {
        let m = &self.m;
        let (t0, t1) = (m[0][2], m[1][2]);
        AffineMatrix {
            m: [
                [m[0][0], m[1][0], -(m[0][0] * t0 + m[1][0] * t1)],
                [m[0][1], m[1][1], -(m[0][1] * t0 + m[1][1] * t1)],
                [0, 0, 1],
            ],
        }
    }
}

/// Maps source pixel coordinates into the oriented destination raster
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OrientationTransform {
    pub matrix: AffineMatrix,
    pub src_width: usize,
    pub src_height: usize,
    pub dst_width: usize,
    pub dst_height: usize,
}

impl OrientationTransform {
    pub fn new(
        width: usize,
        height: usize,
        rotation: SensorRotation,
        facing: CameraFacing,
    ) -> OrientationTransform {
        let w = width as i64 - 1;
        let h = height as i64 - 1;
        let rotation_matrix = match rotation {
            // 90 degrees clockwise: (row, col) -> (col, h - row)
            SensorRotation::Rotate0 => AffineMatrix::new([[0, 1, 0], [-1, 0, h], [0, 0, 1]]),
            SensorRotation::Rotate90 => AffineMatrix::IDENTITY,
            // 90 degrees counter clockwise: (row, col) -> (w - col, row)
            SensorRotation::Rotate180 => AffineMatrix::new([[0, -1, w], [1, 0, 0], [0, 0, 1]]),
            SensorRotation::Rotate270 => AffineMatrix::new([[-1, 0, h], [0, -1, w], [0, 0, 1]]),
        };
        let facing_matrix = match facing {
            CameraFacing::Front => AffineMatrix::new([[1, 0, 0], [0, -1, w], [0, 0, 1]]),
            CameraFacing::Back => AffineMatrix::IDENTITY,
        };
        let (dst_width, dst_height) = if rotation.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        };
        OrientationTransform {
            matrix: rotation_matrix.multiply(&facing_matrix),
            src_width: width,
            src_height: height,
            dst_width,
            dst_height,
        }
    }

    /// `(width, height)` of the oriented raster.
    pub const fn destination_size(&self) -> (usize, usize) {
        (self.dst_width, self.dst_height)
    }

    #[inline(always)]
    pub fn map(&self, row: usize, col: usize) -> (usize, usize) {
        let (dst_row, dst_col) = self.matrix.apply(row as i64, col as i64);
        (dst_row as usize, dst_col as usize)
    }

    /// Transform taking destination coordinates back to the source frame.
    pub fn inverse(&self) -> OrientationTransform {
        OrientationTransform {
            matrix: self.matrix.inverse(),
            src_width: self.dst_width,
            src_height: self.dst_height,
            dst_width: self.src_width,
            dst_height: self.src_height,
        }
    }

    pub fn index_mapper(&self) -> IndexMapper {
        let m = &self.matrix.m;
        let dst_width = self.dst_width as i64;
        IndexMapper {
            origin: (m[0][2] * dst_width + m[1][2]) as isize,
            row_step: (m[0][0] * dst_width + m[1][0]) as isize,
            col_step: (m[0][1] * dst_width + m[1][1]) as isize,
        }
    }
}

/// Transform flattened into raster indices:
/// `index = origin + row * row_step + col * col_step`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct IndexMapper {
    pub origin: isize,
    pub row_step: isize,
    pub col_step: isize,
}

impl IndexMapper {
    #[inline(always)]
    pub fn index(&self, row: usize, col: usize) -> usize {
        (self.origin + row as isize * self.row_step + col as isize * self.col_step) as usize
    }

    /// Same mapping into a window of the raster starting `offset` words in.
    #[inline]
    pub fn shifted(&self, offset: isize) -> IndexMapper {
        IndexMapper {
            origin: self.origin - offset,
            ..*self
        }
    }

    /// Scatters one converted source row into the destination.
    #[inline]
    pub fn write_row(&self, dst: &mut [u32], row: usize, line: &[u32]) {
        if line.is_empty() {
            return;
        }
        let base = self.origin + row as isize * self.row_step;
        match self.col_step {
            1 => {
                let start = base as usize;
                dst[start..start + line.len()].copy_from_slice(line);
            }
            -1 => {
                let end = base as usize + 1;
                let start = end - line.len();
                for (dst, &src) in dst[start..end].iter_mut().rev().zip(line.iter()) {
                    *dst = src;
                }
            }
            step => {
                for (col, &src) in line.iter().enumerate() {
                    dst[(base + col as isize * step) as usize] = src;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FACINGS: [CameraFacing; 2] = [CameraFacing::Front, CameraFacing::Back];

    #[test]
    fn test_destination_dimensions() {
        for facing in FACINGS {
            let t = OrientationTransform::new(6, 4, SensorRotation::Rotate0, facing);
            assert_eq!((t.dst_width, t.dst_height), (4, 6));
            let t = OrientationTransform::new(6, 4, SensorRotation::Rotate180, facing);
            assert_eq!((t.dst_width, t.dst_height), (4, 6));
            let t = OrientationTransform::new(6, 4, SensorRotation::Rotate90, facing);
            assert_eq!((t.dst_width, t.dst_height), (6, 4));
            let t = OrientationTransform::new(6, 4, SensorRotation::Rotate270, facing);
            assert_eq!(t.destination_size(), (6, 4));
        }
    }

    #[test]
    fn test_every_orientation_is_bijective() {
        for &(width, height) in [(5usize, 3usize), (4, 6), (1, 7), (16, 2)].iter() {
            for rotation in SensorRotation::ALL {
                for facing in FACINGS {
                    let t = OrientationTransform::new(width, height, rotation, facing);
                    let mut hits = vec![0u32; width * height];
                    for row in 0..height {
                        for col in 0..width {
                            let (dst_row, dst_col) = t.map(row, col);
                            assert!(dst_row < t.dst_height, "{:?} {:?}", rotation, facing);
                            assert!(dst_col < t.dst_width, "{:?} {:?}", rotation, facing);
                            hits[dst_row * t.dst_width + dst_col] += 1;
                        }
                    }
                    assert!(
                        hits.iter().all(|&h| h == 1),
                        "{:?} {:?} on {}x{} is not a bijection",
                        rotation,
                        facing,
                        width,
                        height
                    );
                }
            }
        }
    }

    #[test]
    fn test_corner_mapping() {
        let (w, h) = (4usize, 3usize);
        let back = |rotation| OrientationTransform::new(w, h, rotation, CameraFacing::Back);
        assert_eq!(back(SensorRotation::Rotate0).map(0, 0), (0, h - 1));
        assert_eq!(back(SensorRotation::Rotate90).map(1, 2), (1, 2));
        assert_eq!(back(SensorRotation::Rotate180).map(0, 0), (w - 1, 0));
        assert_eq!(back(SensorRotation::Rotate270).map(0, 0), (h - 1, w - 1));

        let front = OrientationTransform::new(w, h, SensorRotation::Rotate90, CameraFacing::Front);
        assert_eq!(front.map(0, 0), (0, w - 1));
        assert_eq!(front.map(2, 3), (2, 0));
        // Mirror is applied before the rotation.
        let front = OrientationTransform::new(w, h, SensorRotation::Rotate0, CameraFacing::Front);
        assert_eq!(front.map(0, 0), (w - 1, h - 1));
    }

    #[test]
    fn test_inverse_round_trip() {
        for rotation in SensorRotation::ALL {
            for facing in FACINGS {
                let t = OrientationTransform::new(7, 5, rotation, facing);
                let inv = t.inverse();
                assert_eq!(t.matrix.multiply(&inv.matrix), AffineMatrix::IDENTITY);
                for row in 0..5 {
                    for col in 0..7 {
                        let (dr, dc) = t.map(row, col);
                        assert_eq!(inv.map(dr, dc), (row, col));
                    }
                }
            }
        }
    }

    #[test]
    fn test_index_mapper_matches_matrix() {
        for rotation in SensorRotation::ALL {
            for facing in FACINGS {
                let t = OrientationTransform::new(6, 4, rotation, facing);
                let mapper = t.index_mapper();
                for row in 0..4 {
                    for col in 0..6 {
                        let (dr, dc) = t.map(row, col);
                        assert_eq!(mapper.index(row, col), dr * t.dst_width + dc);
                    }
                }
            }
        }
    }

    #[test]
    fn test_write_row_scatters_by_orientation() {
        let line = [1u32, 2, 3, 4, 5, 6];
        for rotation in SensorRotation::ALL {
            for facing in FACINGS {
                let t = OrientationTransform::new(6, 4, rotation, facing);
                let mapper = t.index_mapper();
                let mut dst = vec![0u32; 24];
                mapper.write_row(&mut dst, 2, &line);
                for (col, &value) in line.iter().enumerate() {
                    assert_eq!(dst[mapper.index(2, col)], value);
                }
                assert_eq!(dst.iter().filter(|&&v| v != 0).count(), line.len());
            }
        }
    }

    #[test]
    fn test_shifted_mapper_addresses_window() {
        let t = OrientationTransform::new(4, 4, SensorRotation::Rotate270, CameraFacing::Back);
        let mapper = t.index_mapper();
        // Source rows 0 and 1 land on the last two destination rows.
        let window = mapper.shifted(8);
        let mut dst = vec![0u32; 8];
        window.write_row(&mut dst, 0, &[1, 2, 3, 4]);
        window.write_row(&mut dst, 1, &[5, 6, 7, 8]);
        assert_eq!(dst, vec![8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_rotation_from_degrees() {
        assert_eq!(SensorRotation::try_from(180), Ok(SensorRotation::Rotate180));
        assert_eq!(
            SensorRotation::try_from(45),
            Err(YuvError::InvalidRotation(45))
        );
        assert_eq!(SensorRotation::Rotate270.degrees(), 270);
    }

    #[test]
    fn test_rotation_from_orientations() {
        assert_eq!(
            SensorRotation::from_orientations(90, 0, CameraFacing::Back),
            Ok(SensorRotation::Rotate90)
        );
        assert_eq!(
            SensorRotation::from_orientations(90, 180, CameraFacing::Back),
            Ok(SensorRotation::Rotate270)
        );
        assert_eq!(
            SensorRotation::from_orientations(270, 90, CameraFacing::Front),
            Ok(SensorRotation::Rotate0)
        );
        assert_eq!(
            SensorRotation::from_orientations(90, 270, CameraFacing::Back),
            Ok(SensorRotation::Rotate180)
        );
        assert_eq!(
            SensorRotation::from_orientations(90, 45, CameraFacing::Front),
            Err(YuvError::InvalidRotation(45))
        );
        assert_eq!(
            SensorRotation::from_orientations(45, 45, CameraFacing::Front),
            Err(YuvError::InvalidRotation(45))
        );
        assert_eq!(
            SensorRotation::from_orientations(30, 60, CameraFacing::Back),
            Err(YuvError::InvalidRotation(30))
        );
        assert_eq!(
            SensorRotation::from_orientations(-90, 450, CameraFacing::Front),
            Ok(SensorRotation::Rotate0)
        );
        assert_eq!(
            SensorRotation::from_orientations(i32::MAX, 90, CameraFacing::Front),
            Err(YuvError::InvalidRotation(i32::MAX))
        );
        assert_eq!(
            SensorRotation::from_orientations(2_147_483_520, -2_147_483_520, CameraFacing::Back),
            Ok(SensorRotation::Rotate0)
        );
    }
}
