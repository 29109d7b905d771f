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
#[allow(dead_code)]
mod support;

use camera_yuv::{
    ArgbRasterSink, CameraFacing, ConverterOptions, KernelPreference, SensorRotation,
    YuvFrameConverter,
};
use image::{ImageReader, RgbaImage};
use std::time::Instant;
use support::OwnedFrame;

fn main() {
    env_logger::init();

    let source = match std::env::args().nth(1) {
        Some(path) => {
            let img = ImageReader::open(&path)
                .unwrap()
                .decode()
                .unwrap()
                .to_rgb8();
            OwnedFrame::from_rgb(img.as_raw(), img.width(), img.height())
        }
        None => OwnedFrame::synthetic(640, 480),
    };
    let frame = source.frame();

    for tier in [
        KernelPreference::Float,
        KernelPreference::FixedPoint,
        KernelPreference::Auto,
    ] {
        let converter = YuvFrameConverter::new(ArgbRasterSink, ConverterOptions { tier });
        let start_time = Instant::now();
        let report = converter
            .convert_with_report(&frame, SensorRotation::Rotate90, CameraFacing::Back)
            .unwrap();
        println!(
            "{:?} requested, {:?} ran: {:?}",
            tier,
            report.tier,
            start_time.elapsed()
        );
    }

    let converter = YuvFrameConverter::new(ArgbRasterSink, ConverterOptions::default());
    for facing in [CameraFacing::Back, CameraFacing::Front] {
        for rotation in SensorRotation::ALL {
            let raster = converter.convert(&frame, rotation, facing).unwrap();
            let side = match facing {
                CameraFacing::Back => "back",
                CameraFacing::Front => "front",
            };
            let name = format!("converted_{}_{}.png", rotation.degrees(), side);
            RgbaImage::from_raw(raster.width, raster.height, raster.to_rgba_bytes())
                .unwrap()
                .save(&name)
                .unwrap();
            log::info!("{} written, {}x{}", name, raster.width, raster.height);
        }
    }

    let luma = converter
        .convert_luma(&frame, SensorRotation::Rotate0, CameraFacing::Back)
        .unwrap();
    RgbaImage::from_raw(luma.width, luma.height, luma.to_rgba_bytes())
        .unwrap()
        .save("converted_luma.png")
        .unwrap();
}
