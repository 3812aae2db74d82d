/*
 * Boid Flocking Simulation - Interactive Viewer
 *
 * Opens a nannou window that draws the flock every frame, with an egui panel
 * for the simulation parameters and an optional perception overlay.
 * Usage: flock-viewer [config.json]
 */

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use flocking::app;

fn main() {
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .compact()
        .init();

    nannou::app(app::model)
        .update(app::update)
        .run();
}
