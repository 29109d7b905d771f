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

#![no_main]

use arbitrary::Arbitrary;
use camera_yuv::{
    ArgbRasterSink, CameraFacing, ConverterOptions, KernelPreference, SensorRotation,
    YuvCameraFrame, YuvError, YuvFrameConverter, YuvPlane,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ConvertInput {
    width: u8,
    height: u8,
    y_padding: u8,
    uv_padding: u8,
    uv_pixel_stride: u8,
    truncate: u8,
    rotation: u8,
    front: bool,
    y_value: u8,
    u_value: u8,
    v_value: u8,
}

fuzz_target!(|input: ConvertInput| {
    fuzz_convert(input);
});

fn fuzz_convert(input: ConvertInput) {
    let width = input.width as u32;
    let height = input.height as u32;
    let uv_pixel_stride = (input.uv_pixel_stride % 3) as u32;
    let y_stride = width + input.y_padding as u32;
    let uv_stride = width.div_ceil(2) * uv_pixel_stride.max(1) + input.uv_padding as u32;

    let y_plane = vec![input.y_value; y_stride as usize * height as usize];
    let mut u_plane = vec![input.u_value; uv_stride as usize * height.div_ceil(2) as usize];
    let v_plane = vec![input.v_value; uv_stride as usize * height.div_ceil(2) as usize];
    // Short buffers must be rejected, never read past.
    u_plane.truncate(u_plane.len().saturating_sub(input.truncate as usize % 4));

    let frame = YuvCameraFrame {
        y_plane: YuvPlane::packed(&y_plane, y_stride),
        u_plane: YuvPlane::new(&u_plane, uv_stride, uv_pixel_stride),
        v_plane: YuvPlane::new(&v_plane, uv_stride, uv_pixel_stride),
        width,
        height,
    };
    let rotation = SensorRotation::ALL[input.rotation as usize % 4];
    let facing = if input.front {
        CameraFacing::Front
    } else {
        CameraFacing::Back
    };

    let fixed = YuvFrameConverter::new(
        ArgbRasterSink,
        ConverterOptions {
            tier: KernelPreference::FixedPoint,
        },
    );
    let vectorized = YuvFrameConverter::new(
        ArgbRasterSink,
        ConverterOptions {
            tier: KernelPreference::Vectorized,
        },
    );

    let reference = fixed.convert(&frame, rotation, facing);
    let result = vectorized.convert(&frame, rotation, facing);
    assert_eq!(reference, result);

    match reference {
        Ok(raster) => {
            assert_eq!(raster.data.len(), width as usize * height as usize);
            assert!(raster.data.iter().all(|&px| px >> 24 == 0xFF));
        }
        Err(YuvError::ZeroBaseSize) => assert!(width == 0 || height == 0),
        Err(_) => {}
    }

    _ = fixed.convert_luma(&frame, rotation, facing);
}
