use crate::{
    animation::{pose::Pose, reveal::RevealFrame},
    foundation::core::{FrameIndex, Vec2},
    foundation::math::Fnv1a64,
    interaction::navbar::NavbarMode,
};

/// Everything the renderer needs for one frame of the page.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    pub frame: FrameIndex,
    pub time: f64,
    pub scroll_y: f64,
    pub navbar: NavbarMode,
    pub menu_open: bool,
    /// Panel offset as a fraction of its width; 1.0 is fully off-screen.
    pub menu_offset: f64,
    pub parallax: Vec<Vec2>,
    pub elements: Vec<ElementFrame>,
    pub decorations: Vec<DecorationFrame>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ElementFrame {
    pub key: String,
    #[serde(flatten)]
    pub reveal: RevealFrame,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DecorationFrame {
    pub key: String,
    pub pose: Pose,
    pub cycle: u64,
}

impl FrameSnapshot {
    pub fn element(&self, key: &str) -> Option<&ElementFrame> {
        self.elements.iter().find(|e| e.key == key)
    }

    pub fn decoration(&self, key: &str) -> Option<&DecorationFrame> {
        self.decorations.iter().find(|d| d.key == key)
    }

    /// Stable digest of the frame's observable values.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_u64(self.frame.0);
        h.write_f64(self.time);
        h.write_f64(self.scroll_y);
        h.write_u8(self.navbar as u8);
        h.write_u8(u8::from(self.menu_open));
        h.write_f64(self.menu_offset);
        for v in &self.parallax {
            h.write_f64(v.x);
            h.write_f64(v.y);
        }
        for e in &self.elements {
            h.write_str(&e.key);
            h.write_u8(e.reveal.state as u8);
            write_pose(&mut h, &e.reveal.pose);
            h.write_f64(e.reveal.progress);
            h.write_f64(e.reveal.effective_start.unwrap_or(-1.0));
        }
        for d in &self.decorations {
            h.write_str(&d.key);
            write_pose(&mut h, &d.pose);
            h.write_u64(d.cycle);
        }
        h.finish()
    }
}

fn write_pose(h: &mut Fnv1a64, pose: &Pose) {
    h.write_f64(pose.opacity);
    h.write_f64(pose.offset.x);
    h.write_f64(pose.offset.y);
    h.write_f64(pose.scale);
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/snapshot.rs"]
mod tests;
