//! Animation and idle-duration tables
//!
//! Each sprite-sheet row holds one animation. Names are an enum so every
//! transition target is guaranteed to have a table entry.

use serde::{Deserialize, Serialize};

/// Every animation on the sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Animation {
    Sitting,
    Sitting2,
    Cleaning,
    Cleaning2,
    Walking,
    Running,
    Sleeping,
    Touching,
    Jumping,
    Scared,
}

/// Static definition of one animation row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationDef {
    pub name: &'static str,
    pub sprite_row: u32,
    pub frame_count: u32,
    pub frames_per_second: f64,
    /// Plays a single cycle, then asks for the next behaviour
    pub plays_once: bool,
}

impl AnimationDef {
    const fn looping(name: &'static str, sprite_row: u32, frame_count: u32, fps: f64) -> Self {
        Self {
            name,
            sprite_row,
            frame_count,
            frames_per_second: fps,
            plays_once: false,
        }
    }

    const fn once(name: &'static str, sprite_row: u32, frame_count: u32, fps: f64) -> Self {
        Self {
            name,
            sprite_row,
            frame_count,
            frames_per_second: fps,
            plays_once: true,
        }
    }

    /// Duration of a single frame in milliseconds
    pub fn frame_duration_ms(&self) -> f64 {
        1000.0 / self.frames_per_second
    }

    /// Duration of one full cycle in milliseconds
    pub fn cycle_duration_ms(&self) -> f64 {
        self.frame_duration_ms() * self.frame_count as f64
    }
}

/// Random duration range for a looping idle animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdleRange {
    pub min_ms: f64,
    pub max_ms: f64,
}

impl IdleRange {
    const fn new(min_ms: f64, max_ms: f64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Map a unit sample in [0, 1) onto the range
    pub fn lerp(&self, t: f64) -> f64 {
        self.min_ms + t * (self.max_ms - self.min_ms)
    }
}

impl Animation {
    pub const ALL: [Animation; 10] = [
        Animation::Sitting,
        Animation::Sitting2,
        Animation::Cleaning,
        Animation::Cleaning2,
        Animation::Walking,
        Animation::Running,
        Animation::Sleeping,
        Animation::Touching,
        Animation::Jumping,
        Animation::Scared,
    ];

    /// Table entry for this animation
    pub const fn def(self) -> AnimationDef {
        match self {
            Animation::Sitting => AnimationDef::looping("sitting", 0, 4, 3.0),
            Animation::Sitting2 => AnimationDef::looping("sitting2", 1, 4, 3.0),
            Animation::Cleaning => AnimationDef::looping("cleaning", 2, 4, 6.0),
            Animation::Cleaning2 => AnimationDef::looping("cleaning2", 3, 4, 6.0),
            Animation::Walking => AnimationDef::looping("walking", 4, 8, 10.0),
            Animation::Running => AnimationDef::looping("running", 5, 8, 14.0),
            Animation::Sleeping => AnimationDef::looping("sleeping", 6, 4, 2.0),
            Animation::Touching => AnimationDef::once("touching", 7, 6, 8.0),
            Animation::Jumping => AnimationDef::once("jumping", 8, 4, 12.0),
            Animation::Scared => AnimationDef::once("scared", 9, 8, 12.0),
        }
    }

    /// How long an idle loop lasts before the next decision.
    ///
    /// `None` for gaits and one-shots, which end by arriving or completing.
    pub const fn idle_range(self) -> Option<IdleRange> {
        match self {
            Animation::Sitting => Some(IdleRange::new(3000.0, 5000.0)),
            Animation::Sitting2 => Some(IdleRange::new(1000.0, 2000.0)),
            Animation::Cleaning | Animation::Cleaning2 => Some(IdleRange::new(2000.0, 3000.0)),
            Animation::Sleeping => Some(IdleRange::new(7000.0, 15000.0)),
            _ => None,
        }
    }

    pub const fn plays_once(self) -> bool {
        self.def().plays_once
    }

    /// Walking or running
    pub const fn is_gait(self) -> bool {
        matches!(self, Animation::Walking | Animation::Running)
    }

    pub fn as_str(self) -> &'static str {
        self.def().name
    }
}

impl std::fmt::Display for Animation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Idle script followed while no pointer is present (loops)
pub const WANDER_SEQUENCE: [Animation; 10] = [
    Animation::Sitting,
    Animation::Walking,
    Animation::Sitting2,
    Animation::Walking,
    Animation::Sitting,
    Animation::Cleaning,
    Animation::Cleaning2,
    Animation::Cleaning,
    Animation::Cleaning2,
    Animation::Sleeping,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_well_formed() {
        let mut rows: Vec<u32> = Animation::ALL.iter().map(|a| a.def().sprite_row).collect();
        rows.sort_unstable();
        rows.dedup();
        assert_eq!(rows.len(), Animation::ALL.len(), "each animation has its own row");

        for anim in Animation::ALL {
            let def = anim.def();
            assert!(def.frame_count >= 1);
            assert!(def.frames_per_second > 0.0);
            if let Some(range) = anim.idle_range() {
                assert!(0.0 <= range.min_ms && range.min_ms <= range.max_ms);
            }
        }
    }

    #[test]
    fn test_idle_ranges_only_for_looping_idles() {
        for anim in Animation::ALL {
            if anim.plays_once() || anim.is_gait() {
                assert!(anim.idle_range().is_none(), "{anim} should not have an idle range");
            } else {
                assert!(anim.idle_range().is_some(), "{anim} needs an idle range");
            }
        }
    }

    #[test]
    fn test_wander_idles_have_ranges() {
        for step in WANDER_SEQUENCE {
            assert!(step.is_gait() || step.idle_range().is_some() || step.plays_once());
        }
    }

    #[test]
    fn test_serde_names_match_table() {
        for anim in Animation::ALL {
            let json = serde_json::to_string(&anim).unwrap();
            assert_eq!(json, format!("\"{}\"", anim.as_str()));
        }
    }
}
