//! Hybrid Master 51, a 26 week hypertrophy program with three gym sessions and
//! one short home session per week.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    BlockID, BlockTechnique, DayID, DeloadSchedule, Exercise, ExerciseID, Goal, Load, Milestone,
    Muscle, ProgramCatalog, Progression, RPE, RPERange, Reps, Rotation, Technique,
    TechniqueKind, TrainingBlock, TrainingDay, VolumeTarget, VolumeWeighting, Weight,
    ordered_muscles,
};

#[must_use]
pub fn program() -> ProgramCatalog {
    ProgramCatalog {
        name: String::from("Hybrid Master 51"),
        weeks: 26,
        blocks: BLOCKS.iter().map(Into::into).collect(),
        deload: DeloadSchedule {
            weeks: BTreeSet::from([6, 12, 18, 24, 26]),
            factor: 0.6,
            tempo: String::from("4-1-2"),
            rpe: RPERange::new(RPE::FIVE, RPE::SIX),
            notes: String::from("Keep the technique, recovery comes first"),
        },
        days: DAYS.iter().map(Into::into).collect(),
        volume_weighting: VolumeWeighting::default(),
        volume_targets: VOLUME_TARGETS
            .iter()
            .map(|t| (t.muscle, VolumeTarget::from(t)))
            .collect::<BTreeMap<_, _>>(),
        milestones: MILESTONES.iter().map(Into::into).collect(),
    }
}

struct BaseVolumeTarget {
    muscle: Muscle,
    direct_sets: u32,
    indirect_sets: u32,
    frequency: u32,
    optimal: (u32, u32),
}

impl From<&BaseVolumeTarget> for VolumeTarget {
    fn from(value: &BaseVolumeTarget) -> Self {
        VolumeTarget {
            direct_sets: value.direct_sets,
            indirect_sets: value.indirect_sets,
            frequency: value.frequency,
            optimal: value.optimal.0..=value.optimal.1,
        }
    }
}

// Posterior and lateral deltoids are combined into shoulders.
const VOLUME_TARGETS: [BaseVolumeTarget; 9] = [
    BaseVolumeTarget {
        muscle: Muscle::Quads,
        direct_sets: 16,
        indirect_sets: 7,
        frequency: 3,
        optimal: (18, 24),
    },
    BaseVolumeTarget {
        muscle: Muscle::Hamstrings,
        direct_sets: 10,
        indirect_sets: 7,
        frequency: 2,
        optimal: (14, 20),
    },
    BaseVolumeTarget {
        muscle: Muscle::Glutes,
        direct_sets: 9,
        indirect_sets: 10,
        frequency: 3,
        optimal: (14, 20),
    },
    BaseVolumeTarget {
        muscle: Muscle::Back,
        direct_sets: 22,
        indirect_sets: 8,
        frequency: 3,
        optimal: (18, 24),
    },
    BaseVolumeTarget {
        muscle: Muscle::Pecs,
        direct_sets: 17,
        indirect_sets: 5,
        frequency: 3,
        optimal: (16, 22),
    },
    BaseVolumeTarget {
        muscle: Muscle::Shoulders,
        direct_sets: 17,
        indirect_sets: 5,
        frequency: 3,
        optimal: (16, 24),
    },
    BaseVolumeTarget {
        muscle: Muscle::Biceps,
        direct_sets: 9,
        indirect_sets: 10,
        frequency: 3,
        optimal: (14, 20),
    },
    BaseVolumeTarget {
        muscle: Muscle::Triceps,
        direct_sets: 15,
        indirect_sets: 5,
        frequency: 3,
        optimal: (12, 18),
    },
    BaseVolumeTarget {
        muscle: Muscle::Forearms,
        direct_sets: 3,
        indirect_sets: 13,
        frequency: 3,
        optimal: (6, 12),
    },
];

struct BaseMilestone {
    week: u32,
    name: &'static str,
    goals: &'static [(&'static str, &'static str)],
}

impl From<&BaseMilestone> for Milestone {
    fn from(value: &BaseMilestone) -> Self {
        Milestone {
            week: value.week,
            name: value.name.to_string(),
            goals: value
                .goals
                .iter()
                .map(|(name, target)| Goal {
                    name: (*name).to_string(),
                    target: (*target).to_string(),
                })
                .collect(),
        }
    }
}

const MILESTONES: [BaseMilestone; 4] = [
    BaseMilestone {
        week: 6,
        name: "End of Block 1: Foundations",
        goals: &[
            ("Technique", "Clean technique on every exercise"),
            ("Trap Bar Deadlift", "80-85 kg"),
            ("Dumbbell Press", "25-27.5 kg per dumbbell"),
            ("Lean Mass", "+0.5 to 1 kg"),
            ("Health", "No pain"),
        ],
    },
    BaseMilestone {
        week: 12,
        name: "End of Block 2: Overload",
        goals: &[
            ("Trap Bar Deadlift", "90-95 kg"),
            ("Dumbbell Press", "30-32.5 kg per dumbbell"),
            ("Leg Press", "150-170 kg"),
            ("Lean Mass", "+1.5 to 2.5 kg"),
            ("Arm Circumference", "+0.8 to 1.2 cm"),
            ("Adaptation", "Rest-pause fully mastered"),
        ],
    },
    BaseMilestone {
        week: 18,
        name: "Middle of Block 3: Supercompensation",
        goals: &[
            ("Trap Bar Deadlift", "100-105 kg"),
            ("Dumbbell Press", "35-37.5 kg per dumbbell"),
            ("Machine Row", "65-70 kg"),
            ("Lean Mass", "+2.5 to 3.5 kg"),
            ("Chest Circumference", "+2 to 2.5 cm"),
            ("Arm Circumference", "+1.5 to 2 cm"),
            ("Techniques", "Drop-sets and myo-reps mastered"),
        ],
    },
    BaseMilestone {
        week: 26,
        name: "End of Program: Transformation",
        goals: &[
            ("Trap Bar Deadlift", "115-120 kg"),
            ("Dumbbell Press", "42.5-45 kg per dumbbell"),
            ("Machine Row", "80-82.5 kg"),
            ("Leg Press", "230-240 kg"),
            ("Lean Mass", "+4.5 to 5.5 kg"),
            ("Arm Circumference", "+2.5 to 3 cm"),
            ("Chest Circumference", "+3.5 to 4 cm"),
            ("Shoulder Circumference", "+3 to 3.5 cm"),
        ],
    },
];

struct BaseBlock {
    id: BlockID,
    name: &'static str,
    first_week: u32,
    last_week: u32,
    technique: &'static str,
    tempo: &'static str,
    rpe: RPERange,
    details: &'static [&'static str],
}

impl From<&BaseBlock> for TrainingBlock {
    fn from(value: &BaseBlock) -> Self {
        TrainingBlock {
            id: value.id,
            name: value.name.to_string(),
            weeks: value.first_week..=value.last_week,
            technique: BlockTechnique {
                name: value.technique.to_string(),
                tempo: value.tempo.to_string(),
                rpe: value.rpe,
                details: value.details.iter().map(ToString::to_string).collect(),
            },
        }
    }
}

struct BaseDay {
    id: &'static str,
    name: &'static str,
    home: bool,
    exercises: &'static [BaseExercise],
}

impl From<&BaseDay> for TrainingDay {
    fn from(value: &BaseDay) -> Self {
        TrainingDay {
            id: DayID::from(value.id),
            name: value.name.to_string(),
            home: value.home,
            exercises: value.exercises.iter().map(Into::into).collect(),
        }
    }
}

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    muscles: &'static [Muscle],
    sets: u32,
    reps: Reps,
    start: Load,
    rest: u32,
    increment: f32,
    frequency_weeks: u32,
    techniques: &'static [(BlockID, &'static [TechniqueKind], &'static str)],
    rotation: &'static [(BlockID, &'static str)],
    superset_with: Option<&'static str>,
    tempo: Option<&'static str>,
    notes: &'static str,
}

impl BaseExercise {
    const fn default() -> Self {
        Self {
            id: "",
            name: "",
            muscles: &[],
            sets: 0,
            reps: Reps::Fixed(0),
            start: Load::Bodyweight,
            rest: 0,
            increment: 2.5,
            frequency_weeks: 3,
            techniques: &[],
            rotation: &[],
            superset_with: None,
            tempo: None,
            notes: "",
        }
    }
}

impl From<&BaseExercise> for Exercise {
    fn from(value: &BaseExercise) -> Self {
        Exercise {
            id: ExerciseID::from(value.id),
            name: value.name.to_string(),
            muscles: ordered_muscles(value.muscles),
            sets: value.sets,
            reps: value.reps,
            start: value.start,
            rest: value.rest,
            progression: Progression {
                increment: Weight::kg(value.increment),
                frequency_weeks: value.frequency_weeks,
            },
            techniques: value
                .techniques
                .iter()
                .map(|(block, kinds, detail)| {
                    (
                        *block,
                        Technique {
                            kinds: kinds.to_vec(),
                            detail: (*detail).to_string(),
                        },
                    )
                })
                .collect(),
            rotation: if value.rotation.is_empty() {
                None
            } else {
                Some(Rotation::ByBlock(
                    value
                        .rotation
                        .iter()
                        .map(|(block, name)| (*block, (*name).to_string()))
                        .collect::<BTreeMap<_, _>>(),
                ))
            },
            superset_with: value.superset_with.map(ExerciseID::from),
            tempo: value.tempo.map(ToString::to_string),
            notes: value.notes.to_string(),
        }
    }
}

const fn kg(value: f32) -> Load {
    Load::Weight(Weight::kg(value))
}

const BLOCKS: [BaseBlock; 4] = [
    BaseBlock {
        id: BlockID::One,
        name: "Hybrid Foundations",
        first_week: 1,
        last_week: 6,
        technique: "Controlled Tempo 3-1-2",
        tempo: "3-1-2",
        rpe: RPERange::new(RPE::SIX, RPE::SEVEN),
        details: &[
            "3s lowering, 1s pause in the stretch, 2s lifting",
            "Strategic pauses on key exercises",
        ],
    },
    BaseBlock {
        id: BlockID::Two,
        name: "Progressive Overload",
        first_week: 7,
        last_week: 12,
        technique: "Rest-Pause",
        tempo: "2-1-2",
        rpe: RPERange::new(RPE::SEVEN, RPE::EIGHT),
        details: &[
            "Rest-pause on the last set of the main lifts",
            "Sunday: Trap Bar Deadlift, Tuesday: Dumbbell Press, Friday: Landmine Row",
        ],
    },
    BaseBlock {
        id: BlockID::Three,
        name: "Metabolic Supercompensation",
        first_week: 13,
        last_week: 18,
        technique: "Drop-Sets + Myo-Reps",
        tempo: "2-1-2",
        rpe: RPERange::exact(RPE::EIGHT),
        details: &[
            "Drop-set on the last set of compound and machine exercises (-25%)",
            "Myo-reps on the last set of isolation exercises",
        ],
    },
    BaseBlock {
        id: BlockID::Four,
        name: "Maximal Intensification",
        first_week: 19,
        last_week: 26,
        technique: "Clusters + Myo-Reps + Partials",
        tempo: "2-1-2",
        rpe: RPERange::new(RPE::EIGHT, RPE::NINE),
        details: &[
            "Clusters on the last set of heavy exercises",
            "Myo-reps on the last set of all isolation exercises",
            "Partials on the last set of leg exercises",
        ],
    },
];

const DAYS: [BaseDay; 4] = [
    BaseDay {
        id: "sunday",
        name: "Back + Heavy Legs + Arms",
        home: false,
        exercises: &SUNDAY,
    },
    BaseDay {
        id: "tuesday",
        name: "Chest + Shoulders + Triceps",
        home: false,
        exercises: &TUESDAY,
    },
    BaseDay {
        id: "friday",
        name: "Back + Light Legs + Arms + Shoulders",
        home: false,
        exercises: &FRIDAY,
    },
    BaseDay {
        id: "home",
        name: "Home Hammer Curl",
        home: true,
        exercises: &HOME,
    },
];

const SUNDAY: [BaseExercise; 8] = [
    BaseExercise {
        id: "ex_sun_1",
        name: "Trap Bar Deadlift",
        muscles: &[Muscle::Back, Muscle::Legs, Muscle::Glutes],
        sets: 5,
        reps: Reps::Range { min: 6, max: 8 },
        start: kg(75.0),
        rest: 120,
        increment: 5.0,
        techniques: &[
            (
                BlockID::Two,
                &[TechniqueKind::RestPause],
                "S5: 6-8 reps, 20s, 2-3 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::Cluster],
                "S5: 3 reps, 20s, 2 reps, 20s, 2 reps (7 total)",
            ),
        ],
        notes: "Main lift, perfect technique first",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_sun_2",
        name: "Goblet Squat",
        muscles: &[Muscle::Quads, Muscle::Glutes],
        sets: 4,
        reps: Reps::Fixed(10),
        start: kg(25.0),
        rest: 75,
        frequency_weeks: 2,
        techniques: &[
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S4: 10 reps, -25%, 8-10 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::Partials],
                "S4: 10 full reps + 5 half reps",
            ),
        ],
        notes: "Dumbbell held against the chest, controlled descent",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_sun_3",
        name: "Leg Press",
        muscles: &[Muscle::Quads, Muscle::Glutes],
        sets: 4,
        reps: Reps::Fixed(10),
        start: kg(110.0),
        rest: 75,
        increment: 10.0,
        frequency_weeks: 2,
        techniques: &[
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S4: 10 reps, -25%, 10-12 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::Cluster, TechniqueKind::Partials],
                "S4: 4 reps, 20s, 3 reps, 20s, 3 reps + 8 quarter reps",
            ),
        ],
        notes: "Feet shoulder width, full range of motion",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_sun_4",
        name: "Lat Pulldown (Wide Grip)",
        muscles: &[Muscle::Back],
        sets: 4,
        reps: Reps::Fixed(10),
        start: kg(60.0),
        rest: 90,
        frequency_weeks: 2,
        techniques: &[(
            BlockID::Three,
            &[TechniqueKind::DropSet],
            "S4: 10 reps, -20%, 8-10 reps",
        )],
        superset_with: Some("ex_sun_5"),
        notes: "Hands 1.5x shoulder width, pull to the collarbones",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_sun_5",
        name: "Landmine Press",
        muscles: &[Muscle::Shoulders, Muscle::Pecs],
        sets: 4,
        reps: Reps::Fixed(10),
        start: kg(35.0),
        rest: 90,
        frequency_weeks: 2,
        superset_with: Some("ex_sun_4"),
        notes: "Bar anchored to the floor, press forward and up",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_sun_6",
        name: "Rowing Machine (Wide Grip)",
        muscles: &[Muscle::Back],
        sets: 4,
        reps: Reps::Fixed(10),
        start: kg(50.0),
        rest: 75,
        frequency_weeks: 2,
        techniques: &[(
            BlockID::Three,
            &[TechniqueKind::MyoReps],
            "S4: 12 reps, 5s, 4x4 mini-sets",
        )],
        notes: "Elbows out, pull to the lower chest",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_sun_7",
        name: "Spider Curl / Incline Curl",
        muscles: &[Muscle::Biceps],
        sets: 4,
        reps: Reps::Fixed(12),
        start: kg(12.0),
        rest: 75,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "2s pause with arms extended",
            ),
            (
                BlockID::Three,
                &[TechniqueKind::MyoReps],
                "S4: 12 reps, 5s, 4x4 mini-sets",
            ),
        ],
        rotation: &[
            (BlockID::One, "Incline Curl"),
            (BlockID::Two, "Spider Curl"),
            (BlockID::Three, "Incline Curl"),
            (BlockID::Four, "Spider Curl"),
        ],
        superset_with: Some("ex_sun_8"),
        notes: "Incline for maximal stretch, spider for maximal contraction",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_sun_8",
        name: "Cable Pushdown",
        muscles: &[Muscle::Triceps],
        sets: 3,
        reps: Reps::Fixed(12),
        start: kg(20.0),
        rest: 75,
        superset_with: Some("ex_sun_7"),
        notes: "Elbows fixed at the sides, full extension",
        ..BaseExercise::default()
    },
];

const TUESDAY: [BaseExercise; 8] = [
    BaseExercise {
        id: "ex_tue_1",
        name: "Dumbbell Press",
        muscles: &[Muscle::Pecs, Muscle::Shoulders, Muscle::Triceps],
        sets: 5,
        reps: Reps::Fixed(10),
        start: kg(22.0),
        rest: 105,
        techniques: &[
            (
                BlockID::Two,
                &[TechniqueKind::RestPause],
                "S5: 10 reps, 20s, 3-4 reps",
            ),
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S5: 10 reps, -25%, 8-10 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::Cluster],
                "S5: 4 reps, 15s, 3 reps, 15s, 3 reps (10 total)",
            ),
        ],
        notes: "Flat bench, elbows at 45 degrees, full range of motion",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_tue_2",
        name: "Cable Fly (Mid Pulleys)",
        muscles: &[Muscle::Pecs],
        sets: 4,
        reps: Reps::Fixed(12),
        start: kg(10.0),
        rest: 60,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "2s pause with arms spread",
            ),
            (
                BlockID::Three,
                &[TechniqueKind::DropSet, TechniqueKind::MyoReps],
                "S4: 12 reps, -25%, 10-12 reps + myo-reps 15 reps, 5s, 5x5",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S4: 15 reps, 5s, 5x5 mini-sets",
            ),
        ],
        notes: "Pulleys at shoulder height, maximal chest stretch",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_tue_3",
        name: "Light Leg Press",
        muscles: &[Muscle::Quads, Muscle::Glutes],
        sets: 3,
        reps: Reps::Fixed(15),
        start: kg(80.0),
        rest: 60,
        increment: 10.0,
        tempo: Some("Controlled"),
        notes: "Light volume for frequency, full range of motion",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_tue_4",
        name: "Rope Triceps Extension",
        muscles: &[Muscle::Triceps],
        sets: 5,
        reps: Reps::Fixed(12),
        start: kg(20.0),
        rest: 75,
        techniques: &[
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S5: 12 reps, -20%, 10-12 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S5: 12 reps, 5s, 4x4 mini-sets",
            ),
        ],
        superset_with: Some("ex_tue_5"),
        notes: "Rope on the high pulley, full extension",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_tue_5",
        name: "Lateral Raises",
        muscles: &[Muscle::Shoulders],
        sets: 5,
        reps: Reps::Fixed(15),
        start: kg(8.0),
        rest: 75,
        frequency_weeks: 4,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "1s pause with arms horizontal",
            ),
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S5: 15 reps, -25%, 12-15 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S5: 15 reps, 5s, 5x5 mini-sets",
            ),
        ],
        superset_with: Some("ex_tue_4"),
        notes: "Elbows slightly bent",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_tue_6",
        name: "Face Pull",
        muscles: &[Muscle::Shoulders, Muscle::Back],
        sets: 5,
        reps: Reps::Fixed(15),
        start: kg(20.0),
        rest: 60,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "1s pause in the rear contraction",
            ),
            (
                BlockID::Three,
                &[TechniqueKind::MyoReps],
                "S5: 15 reps, 5s, 5x5 mini-sets",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S5: 15 reps, 5s, 5x5 mini-sets",
            ),
        ],
        notes: "Rope on the high pulley, pull to the face with external rotation",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_tue_7",
        name: "Rowing Machine (Close Grip)",
        muscles: &[Muscle::Back],
        sets: 4,
        reps: Reps::Fixed(12),
        start: kg(50.0),
        rest: 75,
        frequency_weeks: 2,
        tempo: Some("Controlled"),
        notes: "Hands shoulder width, elbows at the sides, pull to the navel",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_tue_8",
        name: "Seated Overhead Rope Extension",
        muscles: &[Muscle::Triceps],
        sets: 4,
        reps: Reps::Fixed(12),
        start: kg(15.0),
        rest: 60,
        techniques: &[
            (
                BlockID::Three,
                &[TechniqueKind::MyoReps],
                "S4: 12 reps, 5s, 4x4 mini-sets",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S4: 12 reps, 5s, 4x4 mini-sets",
            ),
        ],
        notes: "Seated, rope behind the head, extend fully",
        ..BaseExercise::default()
    },
];

const FRIDAY: [BaseExercise; 9] = [
    BaseExercise {
        id: "ex_fri_1",
        name: "Landmine Row",
        muscles: &[Muscle::Back],
        sets: 5,
        reps: Reps::Fixed(10),
        start: kg(55.0),
        rest: 105,
        frequency_weeks: 2,
        techniques: &[
            (
                BlockID::Two,
                &[TechniqueKind::RestPause],
                "S5: 10 reps, 20s, 3-4 reps",
            ),
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S5: 10 reps, -20%, 8-10 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::Cluster],
                "S5: 4 reps, 15s, 3 reps, 15s, 3 reps (10 total)",
            ),
        ],
        notes: "Bar anchored, pull to the hip, minimal torso rotation",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_2",
        name: "Leg Curl",
        muscles: &[Muscle::Hamstrings],
        sets: 5,
        reps: Reps::Fixed(12),
        start: kg(40.0),
        rest: 75,
        increment: 5.0,
        techniques: &[
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S5: 12 reps, -25%, 10-12 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::Partials],
                "S5: 12 full reps + 6-8 partials",
            ),
        ],
        superset_with: Some("ex_fri_3"),
        notes: "Lying or seated, full hamstring contraction",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_3",
        name: "Leg Extension",
        muscles: &[Muscle::Quads],
        sets: 4,
        reps: Reps::Fixed(15),
        start: kg(35.0),
        rest: 75,
        increment: 5.0,
        techniques: &[
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S4: 15 reps, -25%, 12-15 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::Partials],
                "S4: 15 full reps + 10 partials",
            ),
        ],
        superset_with: Some("ex_fri_2"),
        notes: "Full extension, 1s squeeze at the top",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_4",
        name: "Cable Fly",
        muscles: &[Muscle::Pecs],
        sets: 4,
        reps: Reps::Fixed(15),
        start: kg(10.0),
        rest: 60,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "2s pause with arms spread",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S4: 15 reps, 5s, 5x5 mini-sets",
            ),
        ],
        superset_with: Some("ex_fri_5"),
        notes: "Mid pulleys, maximal chest stretch",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_5",
        name: "Dumbbell Fly",
        muscles: &[Muscle::Pecs],
        sets: 4,
        reps: Reps::Fixed(12),
        start: kg(10.0),
        rest: 60,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "2s pause with arms spread",
            ),
            (
                BlockID::Three,
                &[TechniqueKind::DropSet],
                "S4: 12 reps, -25%, 10-12 reps",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S4: 12 reps, 5s, 4x4 mini-sets",
            ),
        ],
        superset_with: Some("ex_fri_4"),
        notes: "Flat bench, full range of motion",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_6",
        name: "EZ Bar Curl",
        muscles: &[Muscle::Biceps],
        sets: 5,
        reps: Reps::Fixed(12),
        start: kg(25.0),
        rest: 75,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "2s pause with arms extended",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S5: 12 reps, 5s, 4x4 mini-sets",
            ),
        ],
        superset_with: Some("ex_fri_7"),
        notes: "Elbows fixed, full curl",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_7",
        name: "Overhead Extension",
        muscles: &[Muscle::Triceps],
        sets: 3,
        reps: Reps::Fixed(12),
        start: kg(15.0),
        rest: 75,
        techniques: &[(
            BlockID::Four,
            &[TechniqueKind::MyoReps],
            "S3: 12 reps, 5s, 4x4 mini-sets",
        )],
        superset_with: Some("ex_fri_6"),
        notes: "Rope behind the head, full extension",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_8",
        name: "Lateral Raises",
        muscles: &[Muscle::Shoulders],
        sets: 3,
        reps: Reps::Fixed(15),
        start: kg(8.0),
        rest: 60,
        frequency_weeks: 4,
        techniques: &[
            (
                BlockID::One,
                &[TechniqueKind::Pause],
                "1s pause with arms horizontal",
            ),
            (
                BlockID::Four,
                &[TechniqueKind::MyoReps],
                "S3: 15 reps, 5s, 5x5 mini-sets",
            ),
        ],
        notes: "Elbows slightly bent",
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "ex_fri_9",
        name: "Wrist Curl",
        muscles: &[Muscle::Forearms],
        sets: 3,
        reps: Reps::Fixed(20),
        start: kg(30.0),
        rest: 45,
        frequency_weeks: 4,
        tempo: Some("Controlled"),
        notes: "Seated, forearms on the thighs, full wrist curl",
        ..BaseExercise::default()
    },
];

const HOME: [BaseExercise; 1] = [BaseExercise {
    id: "ex_home_1",
    name: "Hammer Curl",
    muscles: &[Muscle::Biceps, Muscle::Forearms],
    sets: 3,
    reps: Reps::Fixed(12),
    start: kg(12.0),
    rest: 60,
    tempo: Some("Controlled 2-0-2"),
    notes: "Neutral grip, full contraction",
    ..BaseExercise::default()
}];
