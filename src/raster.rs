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
use crate::images::ArgbRaster;
use crate::yuv_error::check_overflow_v2;
use crate::YuvError;

/// Destination capability: allocates packed ARGB rasters and brackets writes
/// with lock and unlock.
pub trait RasterSink {
    type Raster;

    fn allocate(&self, width: u32, height: u32) -> Result<Self::Raster, YuvError>;

    fn lock(&self, raster: &mut Self::Raster) -> Result<(), YuvError>;

    /// Pixel words of a locked raster, row major.
    fn pixels_mut<'r>(&self, raster: &'r mut Self::Raster) -> &'r mut [u32];

    fn unlock(&self, raster: &mut Self::Raster);
}

impl<S: RasterSink + ?Sized> RasterSink for &S {
    type Raster = S::Raster;

    fn allocate(&self, width: u32, height: u32) -> Result<Self::Raster, YuvError> {
        (**self).allocate(width, height)
    }

    fn lock(&self, raster: &mut Self::Raster) -> Result<(), YuvError> {
        (**self).lock(raster)
    }

    fn pixels_mut<'r>(&self, raster: &'r mut Self::Raster) -> &'r mut [u32] {
        (**self).pixels_mut(raster)
    }

    fn unlock(&self, raster: &mut Self::Raster) {
        (**self).unlock(raster)
    }
}

/// Scoped write access to a raster, unlocked on drop.
pub struct RasterLock<'a, S: RasterSink + ?Sized> {
    sink: &'a S,
    raster: &'a mut S::Raster,
}

impl<'a, S: RasterSink + ?Sized> RasterLock<'a, S> {
    pub fn acquire(sink: &'a S, raster: &'a mut S::Raster) -> Result<Self, YuvError> {
        sink.lock(raster)?;
        Ok(RasterLock { sink, raster })
    }

    #[inline]
    pub fn pixels(&mut self) -> &mut [u32] {
        self.sink.pixels_mut(self.raster)
    }
}

impl<S: RasterSink + ?Sized> Drop for RasterLock<'_, S> {
    fn drop(&mut self) {
        self.sink.unlock(self.raster);
    }
}

#[derive(Debug, Copy, Clone, Default)]
/// Sink producing heap owned [ArgbRaster]s
pub struct ArgbRasterSink;

impl RasterSink for ArgbRasterSink {
    type Raster = ArgbRaster;

    fn allocate(&self, width: u32, height: u32) -> Result<ArgbRaster, YuvError> {
        if width == 0 || height == 0 {
            return Err(YuvError::ZeroBaseSize);
        }
        check_overflow_v2(width as usize, height as usize)?;
        Ok(ArgbRaster::alloc(width, height))
    }

    fn lock(&self, raster: &mut ArgbRaster) -> Result<(), YuvError> {
        if raster.locked {
            return Err(YuvError::RasterLock("raster is already locked".to_string()));
        }
        raster.locked = true;
        Ok(())
    }

    fn pixels_mut<'r>(&self, raster: &'r mut ArgbRaster) -> &'r mut [u32] {
        &mut raster.data
    }

    fn unlock(&self, raster: &mut ArgbRaster) {
        raster.locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_is_released_on_drop() {
        let sink = ArgbRasterSink;
        let mut raster = sink.allocate(4, 2).unwrap();
        {
            let mut lock = RasterLock::acquire(&sink, &mut raster).unwrap();
            lock.pixels()[3] = 0xFF00FF00;
        }
        assert!(!raster.is_locked());
        assert_eq!(raster.pixel(0, 3), 0xFF00FF00);
    }

    #[test]
    fn test_double_lock_is_rejected() {
        let sink = ArgbRasterSink;
        let mut raster = sink.allocate(2, 2).unwrap();
        sink.lock(&mut raster).unwrap();
        assert!(matches!(
            RasterLock::acquire(&sink, &mut raster),
            Err(YuvError::RasterLock(_))
        ));
        sink.unlock(&mut raster);
        assert!(RasterLock::acquire(&sink, &mut raster).is_ok());
    }

    #[test]
    fn test_zero_sized_allocation() {
        assert_eq!(ArgbRasterSink.allocate(0, 4), Err(YuvError::ZeroBaseSize));
    }
}
