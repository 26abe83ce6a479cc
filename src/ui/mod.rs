pub mod flappy_scene;
pub mod game_common;

use crate::game::snapshot::Snapshot;
use ratatui::Frame;

/// Draw one frame. Rendering only ever reads the snapshot.
pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot, seed: Option<u64>) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, snapshot, seed);
}
