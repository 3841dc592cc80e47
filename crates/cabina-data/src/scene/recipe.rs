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

//! A ready-made cabin scene used by the sandbox and the integration tests.

use super::{Light, Mesh, Node, PbrMaterial, Texture};
use cabina_core::math::LinearRgba;
use cabina_core::scene::MapSlot;
use image::{Rgba, RgbaImage};

/// Side length of the high-resolution floor textures, above the low-tier clamp.
pub const FLOOR_TEXTURE_SIZE: u32 = 1024;

fn checker(size: u32, cell: u32, a: [u8; 4], b: [u8; 4]) -> RgbaImage {
    let cell = cell.max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            Rgba(a)
        } else {
            Rgba(b)
        }
    })
}

fn flat(size: u32, value: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba(value))
}

fn brushed_steel(label: &str) -> PbrMaterial {
    let map = |slot: &str, value: [u8; 4]| {
        Texture::from_image(format!("{label}.{slot}"), flat(256, value))
    };
    PbrMaterial::new(label)
        .with_metalness(0.9)
        .with_roughness(0.35)
        .with_map(MapSlot::Color, map("color", [196, 198, 200, 255]))
        .with_map(MapSlot::Normal, map("normal", [128, 128, 255, 255]))
        .with_map(MapSlot::Roughness, map("roughness", [90, 90, 90, 255]))
        .with_map(MapSlot::Metalness, map("metalness", [230, 230, 230, 255]))
}

fn stone_floor() -> PbrMaterial {
    PbrMaterial::new("floor.stone")
        .with_roughness(0.8)
        .with_map(
            MapSlot::Color,
            Texture::from_image(
                "floor.color",
                checker(FLOOR_TEXTURE_SIZE, 64, [70, 70, 74, 255], [92, 90, 88, 255]),
            ),
        )
        .with_map(
            MapSlot::Normal,
            Texture::from_image("floor.normal", flat(FLOOR_TEXTURE_SIZE, [128, 128, 255, 255])),
        )
        .with_map(
            MapSlot::AmbientOcclusion,
            Texture::from_image("floor.ao", flat(512, [220, 220, 220, 255])),
        )
        .with_normal_scale([0.8, 0.8])
}

fn wall(name: &str) -> Node {
    let material = brushed_steel(&format!("{name}.steel"));
    Node::with_mesh(name, Mesh::new(name, material))
}

/// Builds the demo cabin: shell, floor, ceiling downlights, handrail and a
/// hidden mirror variant.
pub fn demo_cabin() -> Node {
    let warm_white = LinearRgba::rgb(1.0, 0.92, 0.8);

    let ceiling = Node::with_mesh(
        "ceiling",
        Mesh::new("ceiling.panel", PbrMaterial::new("ceiling.paint").with_roughness(0.9)),
    )
    .child(Node::with_light("downlight.left", Light::spot(warm_white, 3.0)))
    .child(Node::with_light("downlight.right", Light::spot(warm_white, 3.0)))
    .child(Node::with_light(
        "ambient.fill",
        Light::point(LinearRgba::WHITE, 0.4).without_shadows(),
    ));

    let walls = Node::group("walls")
        .child(wall("wall.back"))
        .child(wall("wall.left"))
        .child(wall("wall.right"));

    let handrail = Node::with_mesh(
        "handrail",
        Mesh::multi(
            "handrail",
            vec![
                brushed_steel("handrail.bar"),
                PbrMaterial::new("handrail.bracket").with_metalness(1.0).with_roughness(0.2),
            ],
        ),
    );

    let mirror = Node::with_mesh(
        "mirror",
        Mesh::new(
            "mirror",
            PbrMaterial::new("mirror.glass")
                .with_metalness(1.0)
                .with_roughness(0.05)
                .with_map(
                    MapSlot::Roughness,
                    Texture::from_image("mirror.roughness", flat(1024, [10, 10, 10, 255])),
                ),
        ),
    )
    .hidden();

    Node::group("cabin")
        .child(Node::with_light("key", Light::directional(LinearRgba::WHITE, 1.0)))
        .child(Node::with_mesh("floor", Mesh::new("floor", stone_floor())))
        .child(walls)
        .child(ceiling)
        .child(handrail)
        .child(mirror)
}
