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
#[path = "../../src/support.rs"]
mod support;

use camera_yuv::{
    ArgbRasterSink, CameraFacing, ConverterOptions, KernelPreference, SensorRotation,
    YuvFrameConverter,
};
use criterion::{criterion_group, criterion_main, Criterion};
use support::OwnedFrame;

pub fn criterion_benchmark(c: &mut Criterion) {
    let source = OwnedFrame::random(1920, 1080);
    let frame = source.frame();

    for (name, tier) in [
        ("Float", KernelPreference::Float),
        ("FixedPoint", KernelPreference::FixedPoint),
        ("Vectorized", KernelPreference::Vectorized),
    ] {
        let converter = YuvFrameConverter::new(ArgbRasterSink, ConverterOptions { tier });
        c.bench_function(&format!("camera-yuv: {} 1920x1080 Rotate90", name), |b| {
            b.iter(|| {
                converter
                    .convert(&frame, SensorRotation::Rotate90, CameraFacing::Back)
                    .unwrap()
            })
        });
        c.bench_function(&format!("camera-yuv: {} 1920x1080 Rotate0 Front", name), |b| {
            b.iter(|| {
                converter
                    .convert(&frame, SensorRotation::Rotate0, CameraFacing::Front)
                    .unwrap()
            })
        });
    }

    let converter = YuvFrameConverter::new(ArgbRasterSink, ConverterOptions::default());
    c.bench_function("camera-yuv: Luma 1920x1080 Rotate270", |b| {
        b.iter(|| {
            converter
                .convert_luma(&frame, SensorRotation::Rotate270, CameraFacing::Back)
                .unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
