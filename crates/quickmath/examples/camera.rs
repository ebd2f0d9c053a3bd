//! Camera Demo
//!
//! Builds a model-view-projection chain for an orbiting camera and prints the
//! clip-space position of a few points each step.
//!
//! Run with: RUST_LOG=debug cargo run -p quickmath --example camera

use quickmath::{qm, Mat4, Quat, Vec3, Vec4};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(backend = quickmath::BACKEND, "starting camera demo");

    let proj = qm::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
    let model = qm::translate(Vec3::new(0.0, 0.5, 0.0)) * qm::scale(Vec3::splat(2.0));
    let corners = [
        Vec4::new(-0.5, -0.5, 0.5, 1.0),
        Vec4::new(0.5, -0.5, 0.5, 1.0),
        Vec4::new(0.5, 0.5, -0.5, 1.0),
    ];

    // Orbit the camera in eight steps around the Y axis
    let start = Vec3::new(0.0, 2.0, 6.0);
    for step in 0..8 {
        let orbit = Quat::from_axis_angle(Vec3::Y, step as f32 * 45.0);
        let eye = orbit.rotate_vec3(start);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::Y);
        let mvp = proj * view * model;

        tracing::info!(step, "eye = {:.3}", eye);
        for corner in corners {
            let clip = mvp * corner;
            let ndc = clip.xyz() / clip.w;
            tracing::info!("  {:.3} -> ndc {:.3}", corner, ndc);
        }
    }

    // Text round trip of the final transform
    let text = proj.to_string();
    match text.parse::<Mat4>() {
        Ok(parsed) => tracing::info!(exact = parsed == proj, "projection survives text round trip"),
        Err(err) => tracing::error!(%err, "projection failed to parse"),
    }

    let q = qm::slerp_shortest(Quat::IDENTITY, qm::quaternion_from_euler(Vec3::new(0.0, 90.0, 0.0)), 0.5);
    tracing::info!("halfway rotation = {:.4}", q);
}
