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
use camera_yuv::{YuvCameraFrame, YuvPlane};
use rand::Rng;

/// Owned YUV 4:2:0 buffers the demo and the benches convert from
pub struct OwnedFrame {
    pub y: Vec<u8>,
    pub u: Vec<u8>,
    pub v: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl OwnedFrame {
    pub fn frame(&self) -> YuvCameraFrame<'_> {
        let chroma_width = self.width.div_ceil(2);
        YuvCameraFrame {
            y_plane: YuvPlane::packed(&self.y, self.width),
            u_plane: YuvPlane::packed(&self.u, chroma_width),
            v_plane: YuvPlane::packed(&self.v, chroma_width),
            width: self.width,
            height: self.height,
        }
    }

    /// Encodes packed RGB into video range BT.601, chroma averaged over 2x2 blocks.
    pub fn from_rgb(rgb: &[u8], width: u32, height: u32) -> OwnedFrame {
        let (w, h) = (width as usize, height as usize);
        let (cw, ch) = (w.div_ceil(2), h.div_ceil(2));
        let mut y = vec![0u8; w * h];
        let mut u_acc = vec![0f32; cw * ch];
        let mut v_acc = vec![0f32; cw * ch];
        let mut weights = vec![0f32; cw * ch];

        for (i, px) in rgb.chunks_exact(3).enumerate().take(w * h) {
            let (row, col) = (i / w, i % w);
            let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
            let luma = 16. + 0.257 * r + 0.504 * g + 0.098 * b;
            y[i] = luma.round().clamp(0., 255.) as u8;
            let c = (row / 2) * cw + col / 2;
            u_acc[c] += 128. - 0.148 * r - 0.291 * g + 0.439 * b;
            v_acc[c] += 128. + 0.439 * r - 0.368 * g - 0.071 * b;
            weights[c] += 1.;
        }

        let average = |acc: Vec<f32>| -> Vec<u8> {
            acc.iter()
                .zip(weights.iter())
                .map(|(&sum, &n)| (sum / n.max(1.)).round().clamp(0., 255.) as u8)
                .collect()
        };

        OwnedFrame {
            y,
            u: average(u_acc),
            v: average(v_acc),
            width,
            height,
        }
    }

    /// Color bars over a luma ramp, easy to check for orientation by eye.
    pub fn synthetic(width: u32, height: u32) -> OwnedFrame {
        const BARS: [[u8; 3]; 6] = [
            [255, 255, 255],
            [255, 255, 0],
            [0, 255, 255],
            [0, 255, 0],
            [255, 0, 255],
            [255, 0, 0],
        ];
        let mut rgb = Vec::with_capacity(width as usize * height as usize * 3);
        for row in 0..height {
            for col in 0..width {
                let bar = BARS[(col as usize * BARS.len()) / width as usize];
                // Darker towards the bottom so upside down output is obvious.
                let shade = 255 - (row * 191 / height.max(1)) as u16;
                rgb.extend(bar.iter().map(|&c| ((c as u16 * shade) / 255) as u8));
            }
        }
        OwnedFrame::from_rgb(&rgb, width, height)
    }

    pub fn random(width: u32, height: u32) -> OwnedFrame {
        let mut rng = rand::rng();
        let chroma = (width.div_ceil(2) * height.div_ceil(2)) as usize;
        OwnedFrame {
            y: (0..width as usize * height as usize)
                .map(|_| rng.random())
                .collect(),
            u: (0..chroma).map(|_| rng.random()).collect(),
            v: (0..chroma).map(|_| rng.random()).collect(),
            width,
            height,
        }
    }
}
