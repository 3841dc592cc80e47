// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CPU-side texture data and GPU handles.

/// A CPU-side RGBA8 image, ready to be uploaded to the GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuTexture {
    /// Tightly packed RGBA8 pixel data, row-major, top row first.
    pub pixels: Vec<u8>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
}

impl CpuTexture {
    /// Bytes per RGBA8 texel.
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Returns the size in bytes the pixel buffer should have.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * Self::BYTES_PER_PIXEL
    }

    /// Gets the row size in bytes.
    pub fn row_size(&self) -> usize {
        self.width as usize * Self::BYTES_PER_PIXEL
    }

    /// Returns the RGBA value at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = y as usize * self.row_size() + x as usize * Self::BYTES_PER_PIXEL;
        self.pixels
            .get(offset..offset + Self::BYTES_PER_PIXEL)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// An opaque handle to a GPU texture resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_lookup() {
        let texture = CpuTexture {
            pixels: vec![1, 2, 3, 4, 5, 6, 7, 8],
            width: 2,
            height: 1,
        };
        assert_eq!(texture.expected_len(), 8);
        assert_eq!(texture.pixel(1, 0), Some([5, 6, 7, 8]));
        assert_eq!(texture.pixel(2, 0), None);
    }
}
