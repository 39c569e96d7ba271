use bevy::input::mouse::MouseScrollUnit;
use bevy::math::EulerRot;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};

use crate::engine::assets::bounds::GardenBounds;

/// Orbit camera state over the garden ground plane.
#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl ViewportCamera {
    pub fn with_bounds(bounds: &GardenBounds) -> Self {
        let center = bounds.center();
        let size = bounds.size();
        Self {
            focus_point: Vec3::new(center.x, bounds.ground_height(), center.z),
            distance: size.length() * 0.6,
            pitch: -0.7,
            yaw: 0.0,
        }
    }
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: 8.0,
            pitch: -0.7,
            yaw: 0.0,
        }
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut viewport: ResMut<ViewportCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // Read mouse motion
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Mouse motion with right click (orbit around the focus point)
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        viewport.yaw -= mouse_delta.x * yaw_sens;
        viewport.pitch = (viewport.pitch - mouse_delta.y * pitch_sens).clamp(-1.5, -0.1);
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    // Dolly towards or away from the focus point
    if scroll_accum.abs() > f32::EPSILON {
        viewport.distance = (viewport.distance * (1.0 - scroll_accum * 0.1)).clamp(0.5, 50.0);
    }

    // Keyboard pans the focus point over the ground plane
    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }

    if move_input != Vec3::ZERO {
        let yaw_rot = Quat::from_rotation_y(viewport.yaw);
        let forward = yaw_rot * Vec3::NEG_Z;
        let right = yaw_rot * Vec3::X;

        // Adjust speed, shift = faster, ctrl = slower
        let mut speed = (viewport.distance * 0.5).clamp(0.5, 10.0);
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= 3.5;
        }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
            speed *= 0.25;
        }

        let world_delta = right * move_input.x - forward * move_input.z;
        viewport.focus_point += world_delta.normalize() * speed * time.delta_secs();
    }

    // Smoothed orbit positioning
    let target_rot = Quat::from_euler(EulerRot::YXZ, viewport.yaw, viewport.pitch, 0.0);
    let target_pos = viewport.focus_point + target_rot * (Vec3::Z * viewport.distance);

    let lerp_speed = (12.0 * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}
