//! JSON representation of a program catalog.
//!
//! Block ids are the block numbers 1 to 4. Muscles are listed primary first,
//! followed by the secondary and tertiary muscles. Exercises without a start
//! weight are bodyweight exercises.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    marker::PhantomData,
};

use hybrid_domain::{self as domain, Property};
use log::debug;
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};

use crate::Error;

/// Decode and validate a catalog.
pub fn read_catalog(json: &str) -> Result<domain::ProgramCatalog, Error> {
    let program = serde_json::from_str::<Program>(json)?;
    let catalog = domain::ProgramCatalog::try_from(program)?;
    let validation = domain::validate_catalog(&catalog);

    if !validation.is_valid() {
        return Err(Error::InvalidProgram(validation));
    }

    debug!(
        "read program \"{}\" with {} exercises",
        catalog.name,
        catalog.summary().exercises
    );

    Ok(catalog)
}

pub fn write_catalog(catalog: &domain::ProgramCatalog) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(&Program::from(catalog))?)
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub weeks: u32,
    pub blocks: Vec<Block>,
    pub deload: Deload,
    pub days: Vec<Day>,
    #[serde(default)]
    pub volume_weighting: VolumeWeighting,
    #[serde(default)]
    pub volume_targets: BTreeMap<String, VolumeTarget>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl From<&domain::ProgramCatalog> for Program {
    fn from(value: &domain::ProgramCatalog) -> Self {
        Self {
            name: value.name.clone(),
            weeks: value.weeks,
            blocks: value.blocks.iter().map(Block::from).collect(),
            deload: Deload::from(&value.deload),
            days: value.days.iter().map(Day::from).collect(),
            volume_weighting: VolumeWeighting::from(value.volume_weighting),
            volume_targets: value
                .volume_targets
                .iter()
                .map(|(muscle, target)| (muscle.name().to_string(), VolumeTarget::from(target)))
                .collect(),
            milestones: value.milestones.iter().map(Milestone::from).collect(),
        }
    }
}

impl TryFrom<Program> for domain::ProgramCatalog {
    type Error = Error;

    fn try_from(value: Program) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            weeks: value.weeks,
            blocks: value
                .blocks
                .into_iter()
                .map(domain::TrainingBlock::try_from)
                .collect::<Result<_, _>>()?,
            deload: domain::DeloadSchedule::try_from(value.deload)?,
            days: value
                .days
                .into_iter()
                .map(domain::TrainingDay::try_from)
                .collect::<Result<_, _>>()?,
            volume_weighting: value.volume_weighting.into(),
            volume_targets: value
                .volume_targets
                .into_iter()
                .map(|(muscle, target)| {
                    Ok((
                        domain::Muscle::try_from(muscle.as_str())?,
                        domain::VolumeTarget::from(target),
                    ))
                })
                .collect::<Result<_, Error>>()?,
            milestones: value
                .milestones
                .into_iter()
                .map(domain::Milestone::from)
                .collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Block {
    pub id: u8,
    pub name: String,
    pub first_week: u32,
    pub last_week: u32,
    pub technique: BlockTechnique,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct BlockTechnique {
    pub name: String,
    pub tempo: String,
    pub rpe: String,
    #[serde(default)]
    pub details: Vec<String>,
}

impl From<&domain::TrainingBlock> for Block {
    fn from(value: &domain::TrainingBlock) -> Self {
        Self {
            id: value.id as u8,
            name: value.name.clone(),
            first_week: *value.weeks.start(),
            last_week: *value.weeks.end(),
            technique: BlockTechnique {
                name: value.technique.name.clone(),
                tempo: value.technique.tempo.clone(),
                rpe: value.technique.rpe.to_string(),
                details: value.technique.details.clone(),
            },
        }
    }
}

impl TryFrom<Block> for domain::TrainingBlock {
    type Error = Error;

    fn try_from(value: Block) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::BlockID::try_from(value.id)?,
            name: value.name,
            weeks: value.first_week..=value.last_week,
            technique: domain::BlockTechnique {
                name: value.technique.name,
                tempo: value.technique.tempo,
                rpe: domain::RPERange::try_from(value.technique.rpe.as_str())?,
                details: value.technique.details,
            },
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Deload {
    pub weeks: Vec<u32>,
    pub factor: f32,
    pub tempo: String,
    pub rpe: String,
    #[serde(default)]
    pub notes: String,
}

impl From<&domain::DeloadSchedule> for Deload {
    fn from(value: &domain::DeloadSchedule) -> Self {
        Self {
            weeks: value.weeks.iter().copied().collect(),
            factor: value.factor,
            tempo: value.tempo.clone(),
            rpe: value.rpe.to_string(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Deload> for domain::DeloadSchedule {
    type Error = Error;

    fn try_from(value: Deload) -> Result<Self, Self::Error> {
        let mut weeks = BTreeSet::new();
        for week in value.weeks {
            if !weeks.insert(week) {
                return Err(domain::ConfigurationError::DuplicateDeloadWeek(week).into());
            }
        }

        Ok(Self {
            weeks,
            factor: value.factor,
            tempo: value.tempo,
            rpe: domain::RPERange::try_from(value.rpe.as_str())?,
            notes: value.notes,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct VolumeWeighting {
    pub secondary: f32,
    pub tertiary: f32,
}

impl Default for VolumeWeighting {
    fn default() -> Self {
        domain::VolumeWeighting::default().into()
    }
}

impl From<domain::VolumeWeighting> for VolumeWeighting {
    fn from(value: domain::VolumeWeighting) -> Self {
        Self {
            secondary: value.secondary,
            tertiary: value.tertiary,
        }
    }
}

impl From<VolumeWeighting> for domain::VolumeWeighting {
    fn from(value: VolumeWeighting) -> Self {
        Self {
            secondary: value.secondary,
            tertiary: value.tertiary,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct VolumeTarget {
    pub direct_sets: u32,
    pub indirect_sets: u32,
    pub frequency: u32,
    pub optimal_min: u32,
    pub optimal_max: u32,
}

impl From<&domain::VolumeTarget> for VolumeTarget {
    fn from(value: &domain::VolumeTarget) -> Self {
        Self {
            direct_sets: value.direct_sets,
            indirect_sets: value.indirect_sets,
            frequency: value.frequency,
            optimal_min: *value.optimal.start(),
            optimal_max: *value.optimal.end(),
        }
    }
}

impl From<VolumeTarget> for domain::VolumeTarget {
    fn from(value: VolumeTarget) -> Self {
        Self {
            direct_sets: value.direct_sets,
            indirect_sets: value.indirect_sets,
            frequency: value.frequency,
            optimal: value.optimal_min..=value.optimal_max,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Milestone {
    pub week: u32,
    pub name: String,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: String,
    pub target: String,
}

impl From<&domain::Milestone> for Milestone {
    fn from(value: &domain::Milestone) -> Self {
        Self {
            week: value.week,
            name: value.name.clone(),
            goals: value
                .goals
                .iter()
                .map(|goal| Goal {
                    name: goal.name.clone(),
                    target: goal.target.clone(),
                })
                .collect(),
        }
    }
}

impl From<Milestone> for domain::Milestone {
    fn from(value: Milestone) -> Self {
        Self {
            week: value.week,
            name: value.name,
            goals: value
                .goals
                .into_iter()
                .map(|goal| domain::Goal {
                    name: goal.name,
                    target: goal.target,
                })
                .collect(),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Day {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub home: bool,
    pub exercises: Vec<Exercise>,
}

impl From<&domain::TrainingDay> for Day {
    fn from(value: &domain::TrainingDay) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            home: value.home,
            exercises: value.exercises.iter().map(Exercise::from).collect(),
        }
    }
}

impl TryFrom<Day> for domain::TrainingDay {
    type Error = Error;

    fn try_from(value: Day) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::DayID::from(value.id),
            name: value.name,
            home: value.home,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::Exercise::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscles: Vec<String>,
    pub sets: u32,
    pub reps: Reps,
    pub start_weight: Option<f32>,
    pub rest: u32,
    pub progression: Progression,
    #[serde(default, deserialize_with = "unique_blocks")]
    pub techniques: BTreeMap<u8, Technique>,
    #[serde(default)]
    pub rotation: Option<Rotation>,
    #[serde(default)]
    pub superset_with: Option<String>,
    #[serde(default)]
    pub tempo: Option<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Reps {
    Fixed(u32),
    Range(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Progression {
    pub increment: f32,
    pub frequency: u32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct Technique {
    pub kinds: Vec<String>,
    #[serde(default)]
    pub detail: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    ByBlock(#[serde(deserialize_with = "unique_blocks")] BTreeMap<u8, String>),
    ByWeekParity { odd: String, even: String },
}

/// Map keyed by block number. A block given twice is an error instead of
/// silently replacing the earlier entry.
fn unique_blocks<'de, D, V>(deserializer: D) -> Result<BTreeMap<u8, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct BlockMapVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for BlockMapVisitor<V> {
        type Value = BTreeMap<u8, V>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map keyed by block number")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut values = BTreeMap::new();
            while let Some((block, value)) = map.next_entry::<u8, V>()? {
                if values.insert(block, value).is_some() {
                    return Err(de::Error::custom(format!(
                        "block {block} is defined more than once"
                    )));
                }
            }
            Ok(values)
        }
    }

    deserializer.deserialize_map(BlockMapVisitor(PhantomData))
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            muscles: value
                .muscles
                .iter()
                .map(|m| m.muscle.name().to_string())
                .collect(),
            sets: value.sets,
            reps: match value.reps {
                domain::Reps::Fixed(reps) => Reps::Fixed(reps),
                reps @ domain::Reps::Range { .. } => Reps::Range(reps.to_string()),
            },
            start_weight: value.start.weight().map(f32::from),
            rest: value.rest,
            progression: Progression {
                increment: value.progression.increment.into(),
                frequency: value.progression.frequency_weeks,
            },
            techniques: value
                .techniques
                .iter()
                .map(|(block, technique)| {
                    (
                        *block as u8,
                        Technique {
                            kinds: technique
                                .kinds
                                .iter()
                                .map(|k| k.name().to_string())
                                .collect(),
                            detail: technique.detail.clone(),
                        },
                    )
                })
                .collect(),
            rotation: value.rotation.as_ref().map(|rotation| match rotation {
                domain::Rotation::ByBlock(names) => Rotation::ByBlock(
                    names
                        .iter()
                        .map(|(block, name)| (*block as u8, name.clone()))
                        .collect(),
                ),
                domain::Rotation::ByWeekParity { odd, even } => Rotation::ByWeekParity {
                    odd: odd.clone(),
                    even: even.clone(),
                },
            }),
            superset_with: value.superset_with.as_ref().map(ToString::to_string),
            tempo: value.tempo.clone(),
            notes: value.notes.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = Error;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        let muscles = value
            .muscles
            .iter()
            .map(|m| domain::Muscle::try_from(m.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: domain::ExerciseID::from(value.id),
            name: value.name,
            muscles: domain::ordered_muscles(&muscles),
            sets: value.sets,
            reps: match value.reps {
                Reps::Fixed(reps) => domain::Reps::Fixed(reps),
                Reps::Range(reps) => domain::Reps::try_from(reps.as_str())?,
            },
            start: value
                .start_weight
                .map_or(domain::Load::Bodyweight, |w| {
                    domain::Load::Weight(domain::Weight::kg(w))
                }),
            rest: value.rest,
            progression: domain::Progression {
                increment: domain::Weight::kg(value.progression.increment),
                frequency_weeks: value.progression.frequency,
            },
            techniques: value
                .techniques
                .into_iter()
                .map(|(block, technique)| {
                    Ok((
                        domain::BlockID::try_from(block)?,
                        domain::Technique {
                            kinds: technique
                                .kinds
                                .iter()
                                .map(|k| domain::TechniqueKind::try_from(k.as_str()))
                                .collect::<Result<_, _>>()?,
                            detail: technique.detail,
                        },
                    ))
                })
                .collect::<Result<_, Error>>()?,
            rotation: value
                .rotation
                .map(|rotation| -> Result<domain::Rotation, Error> {
                    match rotation {
                        Rotation::ByBlock(names) => Ok(domain::Rotation::ByBlock(
                            names
                                .into_iter()
                                .map(|(block, name)| Ok((domain::BlockID::try_from(block)?, name)))
                                .collect::<Result<_, Error>>()?,
                        )),
                        Rotation::ByWeekParity { odd, even } => {
                            Ok(domain::Rotation::ByWeekParity { odd, even })
                        }
                    }
                })
                .transpose()?,
            superset_with: value.superset_with.map(domain::ExerciseID::from),
            tempo: value.tempo,
            notes: value.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use hybrid_domain::reference;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    const PROGRAM: &str = r#"{
        "name": "Minimal",
        "weeks": 4,
        "blocks": [
            {
                "id": 1,
                "name": "Base",
                "first_week": 1,
                "last_week": 4,
                "technique": { "name": "Tempo", "tempo": "3-1-2", "rpe": "6-7" }
            }
        ],
        "deload": { "weeks": [4], "factor": 0.5, "tempo": "4-1-2", "rpe": "5" },
        "milestones": [
            { "week": 4, "name": "Test", "goals": [{ "name": "Squat", "target": "70 kg" }] }
        ],
        "days": [
            {
                "id": "monday",
                "name": "Full Body",
                "exercises": [
                    {
                        "id": "squat",
                        "name": "Squat",
                        "muscles": ["quads", "glutes", "hamstrings"],
                        "sets": 3,
                        "reps": "5-8",
                        "start_weight": 60,
                        "rest": 120,
                        "progression": { "increment": 2.5, "frequency": 1 },
                        "techniques": { "1": { "kinds": ["pause"], "detail": "2s at the bottom" } }
                    },
                    {
                        "id": "pull_up",
                        "name": "Pull Up",
                        "muscles": ["back", "biceps"],
                        "sets": 3,
                        "reps": 8,
                        "start_weight": null,
                        "rest": 90,
                        "progression": { "increment": 0, "frequency": 1 },
                        "rotation": { "by_week_parity": { "odd": "Pull Up", "even": "Chin Up" } }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_read_catalog() {
        let catalog = read_catalog(PROGRAM).unwrap();
        let squat = catalog
            .exercise(&domain::ExerciseID::from("squat"))
            .unwrap();
        let pull_up = catalog
            .exercise(&domain::ExerciseID::from("pull_up"))
            .unwrap();

        assert_eq!(catalog.volume_weighting, domain::VolumeWeighting::default());
        assert_eq!(catalog.volume_targets.len(), 0);
        assert_eq!(
            catalog.next_milestone(1).map(|m| (m.week, m.goals.len())),
            Some((4, 1))
        );
        assert_eq!(
            catalog.deload.rpe,
            domain::RPERange::exact(domain::RPE::FIVE)
        );
        assert_eq!(squat.primary_muscle(), Some(domain::Muscle::Quads));
        assert_eq!(squat.reps, domain::Reps::Range { min: 5, max: 8 });
        assert_eq!(
            squat.techniques[&domain::BlockID::One].kinds,
            vec![domain::TechniqueKind::Pause]
        );
        assert!(pull_up.is_bodyweight());
        assert_eq!(
            domain::resolve_week(&catalog, 2)
                .unwrap()
                .exercises()
                .map(|e| (e.name, e.load))
                .collect::<Vec<_>>(),
            vec![
                ("Squat", domain::Load::Weight(domain::Weight::kg(62.5))),
                ("Chin Up", domain::Load::Bodyweight),
            ]
        );
    }

    #[test]
    fn test_read_catalog_invalid_json() {
        assert!(matches!(read_catalog("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_read_catalog_unknown_muscle() {
        assert!(matches!(
            read_catalog(&PROGRAM.replace("hamstrings", "calves")),
            Err(Error::Muscle(domain::MuscleError::Unknown(m))) if m == "calves"
        ));
    }

    #[test]
    fn test_read_catalog_invalid_block() {
        assert!(matches!(
            read_catalog(&PROGRAM.replace(r#""id": 1"#, r#""id": 5"#)),
            Err(Error::Block(domain::BlockIDError::Invalid(5)))
        ));
    }

    #[rstest]
    #[case(r#""8-5""#, domain::RepsError::InvalidRange)]
    #[case(r#""0""#, domain::RepsError::InvalidRange)]
    #[case(r#""five""#, domain::RepsError::ParseError)]
    fn test_read_catalog_invalid_reps(#[case] reps: &str, #[case] expected: domain::RepsError) {
        assert!(matches!(
            read_catalog(&PROGRAM.replace(r#""5-8""#, reps)),
            Err(Error::Reps(err)) if err == expected
        ));
    }

    #[test]
    fn test_read_catalog_volume_targets() {
        let catalog = read_catalog(&PROGRAM.replace(
            r#""milestones""#,
            r#""volume_targets": {
                "quads": { "direct_sets": 16, "indirect_sets": 7, "frequency": 3, "optimal_min": 18, "optimal_max": 24 }
            },
            "milestones""#,
        ))
        .unwrap();

        assert_eq!(
            catalog.volume_targets[&domain::Muscle::Quads],
            domain::VolumeTarget {
                direct_sets: 16,
                indirect_sets: 7,
                frequency: 3,
                optimal: 18..=24,
            }
        );
    }

    #[test]
    fn test_read_catalog_duplicate_deload_week() {
        assert!(matches!(
            read_catalog(&PROGRAM.replace(r#""weeks": [4]"#, r#""weeks": [4, 4]"#)),
            Err(Error::Configuration(domain::ConfigurationError::DuplicateDeloadWeek(4)))
        ));
    }

    #[rstest]
    #[case(
        r#""techniques": { "1": { "kinds": ["pause"], "detail": "2s at the bottom" } }"#,
        r#""techniques": { "1": { "kinds": ["pause"] }, "1": { "kinds": ["cluster"] } }"#
    )]
    #[case(
        r#""rotation": { "by_week_parity": { "odd": "Pull Up", "even": "Chin Up" } }"#,
        r#""rotation": { "by_block": { "1": "Pull Up", "1": "Chin Up" } }"#
    )]
    fn test_read_catalog_duplicate_block_entry(#[case] from: &str, #[case] to: &str) {
        assert!(PROGRAM.contains(from));

        let Err(Error::Json(err)) = read_catalog(&PROGRAM.replace(from, to)) else {
            panic!("duplicate block entry was accepted");
        };

        assert!(err.to_string().contains("block 1 is defined more than once"));
    }

    #[test]
    fn test_read_catalog_invalid_program() {
        let Err(Error::InvalidProgram(validation)) =
            read_catalog(&PROGRAM.replace(r#""weeks": [4]"#, r#""weeks": [5]"#))
        else {
            panic!("invalid program was accepted");
        };

        assert_eq!(
            validation.messages(),
            vec![String::from("Deload week 5 is outside of the program")]
        );
    }

    #[test]
    fn test_write_catalog() {
        let catalog = reference::program();
        let json = write_catalog(&catalog).unwrap();

        assert!(json.contains(r#""reps": "6-8""#));
        assert!(json.contains(r#""Drop-Set""#));
        assert!(json.contains(r#""optimal_min": 18"#));
        assert_eq!(read_catalog(&json).unwrap(), catalog);
    }
}
