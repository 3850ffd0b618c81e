#![allow(dead_code)]

use bingo_core::catalogue::{Boss, Minigame, Skill};
use bingo_core::model::{BossLine, MinigameLine, SkillLine, Snapshot, Stat};

pub fn boss_kills(entries: &[(Boss, i64)]) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for (boss, kills) in entries {
        snapshot.bosses.insert(
            *boss,
            BossLine {
                rank: Stat::Untracked,
                kills: Stat::from(*kills),
            },
        );
    }
    snapshot
}

pub fn skill_xp(entries: &[(Skill, i64)]) -> Snapshot {
    let mut snapshot = Snapshot::new();
    for (skill, xp) in entries {
        snapshot.skills.insert(
            *skill,
            SkillLine {
                rank: Stat::Untracked,
                level: Stat::Tracked(1),
                xp: Stat::from(*xp),
            },
        );
    }
    snapshot
}

pub fn minigame_score(minigame: Minigame, score: i64) -> Snapshot {
    let mut snapshot = Snapshot::new();
    snapshot.minigames.insert(
        minigame,
        MinigameLine {
            rank: Stat::Untracked,
            score: Stat::from(score),
        },
    );
    snapshot
}
