//! Systems for spawning visual entities from game state
//!
//! All park visuals are composed from 2D mesh primitives parameterized
//! by grid cell coordinates and the fixed cell size, so identical
//! inputs always produce identical art.

use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use super::components::{EntityMappings, ItemLink, ParkResource, PlayerVisual};
use crate::game::{Grid, GridPos, Player, Rgb, Ride, RideKind, COLOR_VISITOR};

/// Z layers, back to front
pub const Z_GRID: f32 = 0.0;
pub const Z_PLAYER: f32 = 1.0;
pub const Z_ITEMS: f32 = 2.0;
pub const Z_OBSTACLES: f32 = 3.0;
pub const Z_VISITORS: f32 = 4.0;
pub const Z_RIDES: f32 = 5.0;
pub const Z_GHOST: f32 = 6.0;

/// Stroke width for line art, in pixels
const STROKE: f32 = 2.0;

const GRAY: Rgb = (0.5, 0.5, 0.5);
const RED: Rgb = (1.0, 0.0, 0.0);
const BLACK: Rgb = (0.0, 0.0, 0.0);
const BLUE: Rgb = (0.0, 0.0, 1.0);
const YELLOW: Rgb = (1.0, 1.0, 0.0);

/// Resolve a game color to an engine color
pub fn rgb(color: Rgb) -> Color {
    Color::srgb(color.0, color.1, color.2)
}

/// World position of a cell's center (world origin is the surface
/// center, Y up; cell space has its origin top-left, Y down)
pub fn cell_to_world(grid: &Grid, cell: GridPos) -> Vec2 {
    let (cx, cy) = grid.cell_center(cell);
    Vec2::new(cx - grid.width / 2.0, grid.height / 2.0 - cy)
}

/// Pixel coordinate (top-left origin, Y down) of a world position
pub fn world_to_pixel(grid: &Grid, world: Vec2) -> (f32, f32) {
    (world.x + grid.width / 2.0, grid.height / 2.0 - world.y)
}

/// World position of the player sprite's center
///
/// The sprite is anchored at the cell's top-left corner, not centered
/// in the cell (the sprite is smaller than a cell).
pub fn player_world_pos(grid: &Grid, player: &Player) -> Vec2 {
    let (ox, oy) = grid.cell_origin(player.cell);
    Vec2::new(
        ox + player.size / 2.0 - grid.width / 2.0,
        grid.height / 2.0 - (oy + player.size / 2.0),
    )
}

/// System to create initial visual entities from game state
pub fn spawn_initial_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    park: Res<ParkResource>,
    mut mappings: ResMut<EntityMappings>,
) {
    let park = &park.0;

    spawn_player_visual(&mut commands, &mut meshes, &mut materials, &park.grid, &park.player);

    for (index, item) in park.items.iter().enumerate() {
        let center = cell_to_world(&park.grid, item.cell);
        commands.spawn((
            ItemLink(index),
            Mesh2d(meshes.add(Circle::new(park.grid.cell_size / 4.0))),
            MeshMaterial2d(materials.add(rgb(item.color))),
            Transform::from_translation(center.extend(Z_ITEMS)),
        ));
    }

    for obstacle in &park.obstacles {
        let center = cell_to_world(&park.grid, obstacle.cell);
        commands.spawn((
            Mesh2d(meshes.add(Rectangle::new(park.grid.cell_size, park.grid.cell_size))),
            MeshMaterial2d(materials.add(rgb(obstacle.color))),
            Transform::from_translation(center.extend(Z_OBSTACLES)),
        ));
    }

    for visitor in &park.visitors {
        let center = cell_to_world(&park.grid, visitor.cell);
        commands.spawn((
            Mesh2d(meshes.add(Rectangle::new(
                park.grid.cell_size / 2.0,
                park.grid.cell_size / 2.0,
            ))),
            MeshMaterial2d(materials.add(rgb(COLOR_VISITOR))),
            Transform::from_translation(center.extend(Z_VISITORS)),
        ));
    }

    for ride in &park.rides {
        spawn_ride_visual(
            &mut commands,
            &mut meshes,
            &mut materials,
            &park.grid,
            ride,
            &mut mappings,
        );
    }
}

/// Spawn the player avatar: a stick figure with a round head
fn spawn_player_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    grid: &Grid,
    player: &Player,
) {
    let s = player.size;
    let color = rgb(player.color);
    let position = player_world_pos(grid, player);

    commands
        .spawn((
            PlayerVisual,
            Transform::from_translation(position.extend(Z_PLAYER)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            // Head, centered in the sprite box
            parent.spawn((
                Mesh2d(meshes.add(Circle::new(s / 4.0))),
                MeshMaterial2d(materials.add(color)),
                Transform::from_xyz(0.0, 0.0, 0.0),
            ));

            // Torso and legs as stroked segments (sprite-local
            // fractions, measured from the top-left, Y down)
            let at = |u: f32, v: f32| Vec2::new((u - 0.5) * s, (0.5 - v) * s);
            let black = rgb(BLACK);
            spawn_segment(parent, meshes, materials, at(0.5, 0.75), at(0.5, 1.0), black, 0.1);
            spawn_segment(parent, meshes, materials, at(0.5, 0.85), at(0.65, 0.95), black, 0.1);
            spawn_segment(parent, meshes, materials, at(0.5, 0.85), at(0.35, 0.95), black, 0.1);
        });
}

/// Spawn a single ride visual and record it in the entity mappings
pub fn spawn_ride_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    grid: &Grid,
    ride: &Ride,
    mappings: &mut ResMut<EntityMappings>,
) {
    let center = cell_to_world(grid, ride.cell);
    let cell_size = grid.cell_size;
    let kind = ride.kind;

    let entity = commands
        .spawn((
            Transform::from_translation(center.extend(Z_RIDES)),
            Visibility::default(),
        ))
        .with_children(|parent| {
            spawn_ride_art(parent, meshes, materials, kind, cell_size);
        })
        .id();
    mappings.rides.insert(ride.id, entity);
}

/// Spawn the art for one ride kind as children of a cell-centered parent
///
/// A fixed sequence of primitives per kind.
pub fn spawn_ride_art(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    kind: RideKind,
    cell_size: f32,
) {
    let s = cell_size;
    // Cell-local fractions, measured from the top-left corner, Y down
    let at = |u: f32, v: f32| Vec2::new((u - 0.5) * s, (0.5 - v) * s);

    match kind {
        RideKind::FerrisWheel => {
            // Base
            parent.spawn((
                Mesh2d(meshes.add(Rectangle::new(s * 0.4, s * 0.2))),
                MeshMaterial2d(materials.add(rgb(GRAY))),
                Transform::from_translation(at(0.5, 0.9).extend(0.0)),
            ));

            // Wheel rim, red over black
            parent.spawn((
                Mesh2d(meshes.add(Annulus::new(s * 0.4 - STROKE, s * 0.4))),
                MeshMaterial2d(materials.add(rgb(RED))),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));
            parent.spawn((
                Mesh2d(meshes.add(Annulus::new(s * 0.38 - STROKE, s * 0.38))),
                MeshMaterial2d(materials.add(rgb(BLACK))),
                Transform::from_xyz(0.0, 0.0, 0.2),
            ));

            // Spokes and cabins
            for i in 0..8 {
                let angle = (i as f32 / 8.0) * std::f32::consts::TAU;
                let tip = Vec2::new(angle.cos(), angle.sin()) * s * 0.4;
                spawn_segment(parent, meshes, materials, Vec2::ZERO, tip, rgb(BLACK), 0.3);
                parent.spawn((
                    Mesh2d(meshes.add(Circle::new(s * 0.05))),
                    MeshMaterial2d(materials.add(rgb(BLUE))),
                    Transform::from_translation(tip.extend(0.4)),
                ));
            }
        }
        RideKind::Carousel => {
            // Base
            parent.spawn((
                Mesh2d(meshes.add(Rectangle::new(s * 0.4, s * 0.3))),
                MeshMaterial2d(materials.add(rgb(YELLOW))),
                Transform::from_translation(at(0.5, 0.85).extend(0.0)),
            ));

            // Roof
            parent.spawn((
                Mesh2d(meshes.add(Triangle2d::new(at(0.3, 0.7), at(0.5, 0.5), at(0.7, 0.7)))),
                MeshMaterial2d(materials.add(rgb(RED))),
                Transform::from_xyz(0.0, 0.0, 0.1),
            ));

            // Poles
            spawn_segment(parent, meshes, materials, at(0.4, 0.7), at(0.4, 0.8), rgb(BLACK), 0.2);
            spawn_segment(parent, meshes, materials, at(0.6, 0.7), at(0.6, 0.8), rgb(BLACK), 0.2);
        }
        RideKind::RollerCoaster => {
            // Base
            parent.spawn((
                Mesh2d(meshes.add(Rectangle::new(s * 0.6, s * 0.2))),
                MeshMaterial2d(materials.add(rgb(BLUE))),
                Transform::from_translation(at(0.5, 0.9).extend(0.0)),
            ));

            // Track: a quadratic arch sampled into short segments
            let p0 = at(0.2, 0.8);
            let control = at(0.5, 0.0);
            let p1 = at(0.8, 0.8);
            let steps = 12;
            let mut prev = p0;
            for i in 1..=steps {
                let t = i as f32 / steps as f32;
                let next = quadratic_point(p0, control, p1, t);
                spawn_segment(parent, meshes, materials, prev, next, rgb(RED), 0.2);
                prev = next;
            }

            // Supports
            spawn_segment(parent, meshes, materials, at(0.4, 0.8), at(0.4, 0.0), rgb(GRAY), 0.1);
            spawn_segment(parent, meshes, materials, at(0.6, 0.8), at(0.6, 0.0), rgb(GRAY), 0.1);
        }
    }
}

/// Spawn a stroked line segment between two local points as a thin,
/// rotated rectangle
fn spawn_segment(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<ColorMaterial>>,
    a: Vec2,
    b: Vec2,
    color: Color,
    z: f32,
) {
    let delta = b - a;
    let length = delta.length();
    if length <= f32::EPSILON {
        return;
    }
    let midpoint = (a + b) / 2.0;
    let angle = delta.y.atan2(delta.x);

    parent.spawn((
        Mesh2d(meshes.add(Rectangle::new(length, STROKE))),
        MeshMaterial2d(materials.add(color)),
        Transform::from_translation(midpoint.extend(z)).with_rotation(Quat::from_rotation_z(angle)),
    ));
}

/// Point on a quadratic curve at parameter `t`
fn quadratic_point(p0: Vec2, control: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + control * (2.0 * u * t) + p1 * (t * t)
}
