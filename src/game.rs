//! Built-in scene tables and the animation catalogue.
//!
//! [`frogger`] is the lane crossing game, [`purr`] the narrative platformer.
//! Both run on the same [`Scene`](crate::scene::Scene); everything that
//! differs between them is data in the returned [`SceneDef`].

use glam::Vec2;

use crate::components::tag::EntityKind;
use crate::resources::animationstore::{AnimationResource, AnimationStore};
use crate::resources::scenedef::{
    Band, BoxDef, BranchDef, ClampDef, EndingDef, GravityDef, IconDef, InputPolicy, LaneDef,
    LaneRules, PlayerDef, RectDef, RuleSet, SceneDef, ScriptDef, TextEntry,
};

/// Names accepted by [`by_name`].
pub const SCENE_NAMES: [&str; 2] = ["frogger", "purr"];

pub fn by_name(name: &str) -> Option<SceneDef> {
    match name {
        "frogger" => Some(frogger()),
        "purr" => Some(purr()),
        _ => None,
    }
}

fn lane(kind: EntityKind, y: f32, speed: f32, size: Vec2, clip: &str) -> LaneDef {
    LaneDef {
        kind,
        y,
        speed,
        count: 3,
        spacing: 160.0,
        size,
        clip: clip.to_string(),
        ang_vel: 0.0,
        jitter: 40.0,
    }
}

pub fn frogger() -> SceneDef {
    let car = Vec2::new(40.0, 30.0);
    let turtles = Vec2::new(90.0, 30.0);
    let log = Vec2::new(120.0, 30.0);

    let lanes = vec![
        // road
        lane(EntityKind::MoveLeft, 540.0, -60.0, car, "car"),
        lane(EntityKind::MoveRight, 500.0, 80.0, car, "car"),
        lane(EntityKind::MoveLeft, 460.0, -100.0, car, "car"),
        lane(EntityKind::MoveRight, 420.0, 70.0, car, "car"),
        lane(EntityKind::MoveLeft, 380.0, -120.0, car, "car"),
        // river
        lane(EntityKind::Tree, 300.0, 50.0, log, "log"),
        lane(EntityKind::MoveLeft, 260.0, -60.0, turtles, "turtle"),
        lane(EntityKind::Tree, 220.0, 80.0, log, "log"),
        lane(EntityKind::MoveLeft, 180.0, -70.0, turtles, "turtle"),
        lane(EntityKind::Tree, 140.0, 60.0, log, "log"),
    ];

    let pads = [40.0, 140.0, 240.0, 340.0, 440.0]
        .into_iter()
        .map(|x| RectDef {
            pos: Vec2::new(x, 100.0),
            size: Vec2::new(40.0, 40.0),
        })
        .collect();

    SceneDef {
        name: "frogger".to_string(),
        view: Vec2::new(480.0, 600.0),
        player: PlayerDef {
            spawn: Vec2::new(240.0, 580.0),
            size: Vec2::new(15.0, 15.0),
            clamp: ClampDef {
                left: 0.0,
                right: 480.0,
                top: 0.0,
                bottom: 600.0,
                margin: Vec2::new(20.0, 20.0),
            },
            idle_clip: "up".to_string(),
        },
        input: InputPolicy::Hop { distance: 40.0 },
        gravity: None,
        rules: RuleSet::Lanes(LaneRules {
            water_row: Band {
                min: 139.0,
                max: 301.0,
            },
            road_row: Band {
                min: 379.0,
                max: 541.0,
            },
            lateral_min: 20.0,
            lateral_max: 460.0,
            pad_points: 20,
            all_pads_bonus: 100,
            occupied_pad_penalty: 10,
        }),
        lanes,
        pads,
        platforms: Vec::new(),
        icon: Some(IconDef {
            size: Vec2::new(30.0, 30.0),
            duration: 5.0,
            points: 100,
            clip: "bug".to_string(),
        }),
        script: None,
        music: Some("gameTheme".to_string()),
        wrap_margin: 50.0,
    }
}

fn texts(entries: &[(&str, f32, f32)]) -> Vec<TextEntry> {
    entries
        .iter()
        .map(|&(text, start, end)| TextEntry::new(text, start, end))
        .collect()
}

pub fn purr() -> SceneDef {
    let entries = texts(&[
        ("The rays of sun blinds me...", 5.0, 10.0),
        ("I reach for a pillow and smother my face with it.", 11.0, 15.0),
        ("Moving my arms invite pain.", 16.0, 21.0),
        ("I close my eyes...", 22.0, 27.0),
        ("A thick fog encompasses my brain.", 28.0, 33.0),
        ("Sweet.. sleep is coming back, but its hopeless.", 34.0, 38.0),
        ("Another thought invades my brain.", 39.0, 45.0),
        (
            "Sometimes just a familiar meow over my bed brings me back to reality...",
            46.0,
            56.0,
        ),
        (" ", 46.0, 60.0),
    ]);

    let branches = vec![
        BranchDef {
            at: 55.0,
            box_index: 1,
            when_active: texts(&[
                ("Yes... thats what i was thinking about....", 50.0, 60.0),
                ("", 60.0, 65.0),
            ]),
            otherwise: texts(&[
                ("but sometimes... i cant even hear him...", 50.0, 60.0),
                ("", 60.0, 65.0),
            ]),
            then: texts(&[
                ("I think I'm going to lie down all day...", 65.0, 70.0),
                ("Why can't I just go back to sleep? ", 71.0, 75.0),
                ("I Take a breath...", 76.0, 81.0),
                ("What to try now? If I've tried everything...", 82.0, 87.0),
                ("I can feel my cat moving around the room...", 88.0, 93.0),
                ("Can I make him happy?", 94.0, 98.0),
                ("I think he wants to show me something...", 99.0, 105.0),
                (
                    "Haha, maybe he wants me to read something to him?",
                    106.0,
                    116.0,
                ),
                (" ", 116.0, 120.0),
            ]),
        },
        BranchDef {
            at: 115.0,
            box_index: 0,
            when_active: texts(&[
                ("Okay... maybe you're right.", 120.0, 125.0),
                ("", 125.0, 130.0),
            ]),
            otherwise: texts(&[
                ("Maybe he's just exercising.", 120.0, 125.0),
                ("", 125.0, 130.0),
            ]),
            then: texts(&[
                ("Or maybe I should try to get up...", 120.0, 125.0),
                ("Some days are more difficult than others... ", 126.0, 136.0),
                ("I wish I had some friends...", 137.0, 141.0),
                ("haha i know i know!", 142.0, 147.0),
                ("You're trying your best", 148.0, 153.0),
                ("Well... I need to find my diary... ", 154.0, 158.0),
                ("Maybe I have some idea what to do...", 159.0, 165.0),
                (
                    "Behind the couch, under the bed or on the desk?",
                    166.0,
                    176.0,
                ),
                (" ", 176.0, 180.0),
            ]),
        },
        BranchDef {
            at: 170.0,
            box_index: 2,
            when_active: texts(&[
                ("You have found it!", 180.0, 185.0),
                (
                    "I Really need to do something with my life. And i will!",
                    186.0,
                    190.0,
                ),
                ("", 195.0, 200.0),
            ]),
            otherwise: texts(&[
                ("Better forget about it...", 180.0, 185.0),
                (
                    "I Really need to do something with my life. Maybe...",
                    186.0,
                    190.0,
                ),
                ("", 195.0, 200.0),
            ]),
            then: Vec::new(),
        },
    ];

    let boxes = vec![
        BoxDef {
            index: 0,
            spawn_at: 106.0,
            remove_at: 120.0,
            pos: Vec2::new(110.0, 370.0),
            size: Vec2::new(135.0, 100.0),
        },
        BoxDef {
            index: 1,
            spawn_at: 46.0,
            remove_at: 60.0,
            pos: Vec2::new(505.0, 350.0),
            size: Vec2::new(220.0, 50.0),
        },
        BoxDef {
            index: 2,
            spawn_at: 160.0,
            remove_at: 170.0,
            pos: Vec2::new(910.0, 380.0),
            size: Vec2::new(115.0, 100.0),
        },
    ];

    let platforms = [
        (110.0, 370.0, 135.0),
        (910.0, 380.0, 115.0),
        (505.0, 350.0, 220.0),
        (480.0, 490.0, 1000.0),
    ]
    .into_iter()
    .map(|(x, y, w)| RectDef {
        pos: Vec2::new(x, y),
        size: Vec2::new(w, 1.0),
    })
    .collect();

    SceneDef {
        name: "purr".to_string(),
        view: Vec2::new(1000.0, 600.0),
        player: PlayerDef {
            spawn: Vec2::new(500.0, 580.0),
            size: Vec2::new(20.0, 20.0),
            clamp: ClampDef {
                left: 25.0,
                right: 975.0,
                top: 0.0,
                bottom: 500.0,
                margin: Vec2::new(20.0, 20.0),
            },
            idle_clip: "idle".to_string(),
        },
        input: InputPolicy::Continuous {
            step: 3.0,
            jump_velocity: -200.0,
        },
        gravity: Some(GravityDef {
            g: 150.0,
            substep: 0.1,
            ground_height: 500.0,
        }),
        rules: RuleSet::Platformer,
        lanes: Vec::new(),
        pads: Vec::new(),
        platforms,
        icon: None,
        script: Some(ScriptDef {
            interval: 0.05,
            entries,
            branches,
            boxes,
            ending: Some(EndingDef {
                at: 190.0,
                all: "Today you made my day better.\n I promise to try my best to make tomorrow a little better.".to_string(),
                some: "Thanks for trying... maybe tomorrow will be better".to_string(),
                none: "I think the best thing... is to go back to sleep.".to_string(),
                fade_step: 4.0,
                hold: 8.0,
            }),
        }),
        music: Some("gameTheme".to_string()),
        wrap_margin: 50.0,
    }
}

/// Clip catalogue shared by both scenes.
pub fn animations() -> AnimationStore {
    let mut store = AnimationStore::default();
    let frog = Vec2::new(32.0, 32.0);
    for (row, clip) in ["up", "down", "left", "right", "idle"].into_iter().enumerate() {
        store.insert(
            clip,
            AnimationResource::new("Entities", frog, 2, 8.0, true)
                .with_origin(Vec2::new(0.0, row as f32 * frog.y)),
        );
    }
    store.insert(
        "die",
        AnimationResource::new("Entities", frog, 4, 8.0, false).with_origin(Vec2::new(0.0, 160.0)),
    );
    store.insert(
        "car",
        AnimationResource::new("Entities", Vec2::new(40.0, 30.0), 1, 1.0, true)
            .with_origin(Vec2::new(0.0, 192.0)),
    );
    store.insert(
        "turtle",
        AnimationResource::new("Entities", Vec2::new(90.0, 30.0), 3, 4.0, true)
            .with_origin(Vec2::new(0.0, 224.0)),
    );
    store.insert(
        "log",
        AnimationResource::new("Entities", Vec2::new(120.0, 30.0), 1, 1.0, true)
            .with_origin(Vec2::new(0.0, 256.0)),
    );
    store.insert(
        "pad",
        AnimationResource::new("Entities", Vec2::new(40.0, 40.0), 1, 1.0, true)
            .with_origin(Vec2::new(0.0, 288.0)),
    );
    store.insert(
        "bug",
        AnimationResource::new("Entities", Vec2::new(30.0, 30.0), 2, 4.0, true)
            .with_origin(Vec2::new(0.0, 328.0)),
    );
    store.insert(
        "frogOnPad",
        AnimationResource::new("Entities", frog, 1, 1.0, true).with_origin(Vec2::new(0.0, 360.0)),
    );
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        for name in SCENE_NAMES {
            let def = by_name(name).unwrap();
            def.validate().unwrap();
            assert_eq!(def.name, name);
        }
        assert!(by_name("tetris").is_none());
    }

    #[test]
    fn test_every_clip_in_use_is_in_catalogue() {
        let store = animations();
        let frogger = frogger();
        for lane in &frogger.lanes {
            assert!(store.get(&lane.clip).is_some(), "missing {}", lane.clip);
        }
        for clip in ["up", "down", "left", "right", "idle", "die", "pad", "bug", "frogOnPad"] {
            assert!(store.get(clip).is_some(), "missing {clip}");
        }
        assert!(!store.get("die").unwrap().looped);
    }

    #[test]
    fn test_purr_boxes_match_branches() {
        let def = purr();
        let script = def.script.unwrap();
        for branch in &script.branches {
            assert!(script.boxes.iter().any(|b| b.index == branch.box_index));
        }
    }
}
