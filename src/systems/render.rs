//! Drawing.
//!
//! Renders inside raylib's drawing scope and only reads the ECS world:
//! sprites (goal and player), flat-colored platforms, the slingshot aim line,
//! the HUD, and with [`DebugMode`] present, collider outlines and counters.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::slingshot::SlingshotCharge;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::resources::debugmode::DebugMode;
use crate::resources::fixedtimestep::FixedTimestep;
use crate::resources::gamestate::GameState;
use crate::resources::hud::{Hud, Widget};
use crate::resources::input::InputState;
use crate::resources::texturestore::TextureStore;

const HUD_FONT_SIZE: i32 = 14;

pub fn render_pass(world: &mut World, d: &mut RaylibDrawHandle) {
    d.clear_background(Color::WHITE);

    // Sprites: draw the current frame, or a placeholder box when the
    // texture could not be loaded.
    let sprites: Vec<(Sprite, MapPosition)> = {
        let mut q = world.query::<(&Sprite, &MapPosition)>();
        q.iter(world).map(|(s, p)| (s.clone(), *p)).collect()
    };
    let textures = world.get_non_send_resource::<TextureStore>();
    for (sprite, position) in &sprites {
        let offset = sprite.source_offset();
        match textures.and_then(|store| store.get(&sprite.tex_key)) {
            Some(texture) => {
                let src = Rectangle::new(offset.x, offset.y, sprite.width, sprite.height);
                d.draw_texture_rec(texture, src, position.pos, Color::WHITE);
            }
            None => {
                d.draw_rectangle_lines(
                    position.pos.x as i32,
                    position.pos.y as i32,
                    sprite.width as i32,
                    sprite.height as i32,
                    Color::ORANGE,
                );
            }
        }
    }

    // Aim line from the player's center to the cursor while the slingshot
    // charges; it thickens with the hold.
    let step = world.resource::<FixedTimestep>().step();
    let pointer = world.resource::<InputState>().pointer;
    {
        let mut q = world.query::<(&MapPosition, &CircleCollider, &SlingshotCharge)>();
        for (position, collider, sling) in q.iter(world) {
            if sling.is_charging() && pointer.down {
                let thickness = 1.0 + sling.held_ticks as f32 * step;
                let center = collider.center(position.pos);
                d.draw_line_ex(center, pointer.position, thickness, Color::RED);
            }
        }
    }

    {
        let mut q = world.query::<(&MapPosition, &BoxCollider, &Tint)>();
        for (position, bounds, tint) in q.iter(world) {
            d.draw_rectangle_v(position.pos, bounds.size, tint.color);
        }
    }

    if let Some(hud) = world.get_resource::<Hud>() {
        hud.root.draw(&mut |widget| match widget {
            Widget::Label { bounds, text, .. } => {
                d.draw_text(
                    text,
                    bounds.x as i32,
                    bounds.y as i32,
                    HUD_FONT_SIZE,
                    Color::BLACK,
                );
            }
            Widget::Button { bounds, text, .. } => {
                d.draw_rectangle_rec(*bounds, Color::LIGHTGRAY);
                d.draw_rectangle_lines_ex(*bounds, 1.0, Color::DARKGRAY);
                d.draw_text(
                    text,
                    bounds.x as i32 + 6,
                    bounds.y as i32 + 3,
                    HUD_FONT_SIZE,
                    Color::BLACK,
                );
            }
            Widget::Container { .. } => {}
        });
    }

    if world.contains_resource::<DebugMode>() {
        render_debug_ui(world, d);
    }
}

pub fn render_debug_ui(world: &mut World, d: &mut RaylibDrawHandle) {
    {
        let mut q = world.query::<(&MapPosition, &BoxCollider)>();
        for (position, bounds) in q.iter(world) {
            let (min, _) = bounds.aabb(position.pos);
            d.draw_rectangle_lines(
                min.x as i32,
                min.y as i32,
                bounds.width() as i32,
                bounds.height() as i32,
                Color::RED,
            );
        }
    }

    let mut lines: Vec<String> = Vec::new();
    {
        let mut q = world.query::<(&MapPosition, &CircleCollider, &RigidBody)>();
        for (position, collider, body) in q.iter(world) {
            let center = collider.center(position.pos);
            d.draw_circle_lines(
                center.x as i32,
                center.y as i32,
                collider.radius,
                Color::GREEN,
            );
            lines.push(format!(
                "pos ({:.1}, {:.1}) vel ({:.1}, {:.1}) on_floor: {}",
                position.pos.x, position.pos.y, body.velocity.x, body.velocity.y, collider.on_floor
            ));
        }
    }

    let fixed = world.resource::<FixedTimestep>();
    let state = world.resource::<GameState>();
    let since = world
        .get_resource::<DebugMode>()
        .map_or(0, |mode| mode.since_tick);
    lines.push(format!(
        "FPS: {} | ticks: {} (+{}) | deaths: {} | score: {}",
        d.get_fps(),
        fixed.ticks(),
        fixed.ticks().saturating_sub(since),
        state.deaths(),
        state.score()
    ));

    let height = d.get_screen_height();
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 10, height - 20 - (i as i32) * 14, 10, Color::BLACK);
    }
}

/// Exclusive system that opens raylib's drawing scope for one frame and
/// runs [`render_pass`] inside it.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };
    {
        let mut d = rl.begin_drawing(&thread);
        render_pass(world, &mut d);
    }
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
}
