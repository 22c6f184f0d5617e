use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    ops::{Bound, RangeInclusive},
    slice::Iter,
};

use derive_more::{AsRef, Display};

use crate::{
    ConfigurationError, Error, Exercise, ExerciseID, Muscle, Property, RPERange, Role,
};

/// Immutable definition of a training program.
///
/// A catalog is built once and then only read. Every query borrows from it and
/// returns freshly derived values, so a catalog can be shared between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramCatalog {
    pub name: String,
    pub weeks: u32,
    pub blocks: Vec<TrainingBlock>,
    pub deload: DeloadSchedule,
    pub days: Vec<TrainingDay>,
    pub volume_weighting: VolumeWeighting,
    /// Recommended number of weekly sets per muscle.
    pub volume_targets: BTreeMap<Muscle, VolumeTarget>,
    pub milestones: Vec<Milestone>,
}

impl ProgramCatalog {
    pub fn check_week(&self, week: u32) -> Result<(), Error> {
        if week < 1 || week > self.weeks {
            return Err(Error::OutOfRange {
                week,
                weeks: self.weeks,
            });
        }
        Ok(())
    }

    pub fn block_for_week(&self, week: u32) -> Result<&TrainingBlock, Error> {
        self.check_week(week)?;
        self.blocks
            .iter()
            .find(|b| b.contains(week))
            .ok_or_else(|| ConfigurationError::UncoveredWeek(week).into())
    }

    #[must_use]
    pub fn block(&self, id: BlockID) -> Option<&TrainingBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn is_deload(&self, week: u32) -> bool {
        self.deload.weeks.contains(&week)
    }

    /// First deload week strictly after `week`.
    #[must_use]
    pub fn next_deload(&self, week: u32) -> Option<u32> {
        self.deload
            .weeks
            .range((Bound::Excluded(week), Bound::Unbounded))
            .next()
            .copied()
    }

    /// Number of weeks in `[1, week)` which are not deload weeks.
    #[must_use]
    pub fn non_deload_weeks_before(&self, week: u32) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let deload_weeks = self.deload.weeks.range(1..week.max(1)).count() as u32;
        week.saturating_sub(1).saturating_sub(deload_weeks)
    }

    /// First milestone in or after `week`.
    #[must_use]
    pub fn next_milestone(&self, week: u32) -> Option<&Milestone> {
        self.milestones
            .iter()
            .filter(|m| m.week >= week)
            .min_by_key(|m| m.week)
    }

    pub fn exercises(&self) -> impl Iterator<Item = &Exercise> {
        self.days.iter().flat_map(|d| d.exercises.iter())
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.exercises().find(|e| e.id == *id)
    }

    #[must_use]
    pub fn summary(&self) -> ProgramSummary {
        ProgramSummary {
            weeks: self.weeks,
            blocks: self.blocks.len(),
            deload_weeks: self.deload.weeks.len(),
            days: self.days.len(),
            exercises: self.exercises().count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSummary {
    pub weeks: u32,
    pub blocks: usize,
    pub deload_weeks: usize,
    pub days: usize,
    pub exercises: usize,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BlockID {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl Property for BlockID {
    fn iter() -> Iter<'static, BlockID> {
        static BLOCKS: [BlockID; 4] = [BlockID::One, BlockID::Two, BlockID::Three, BlockID::Four];
        BLOCKS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BlockID::One => "Block 1",
            BlockID::Two => "Block 2",
            BlockID::Three => "Block 3",
            BlockID::Four => "Block 4",
        }
    }
}

impl TryFrom<u8> for BlockID {
    type Error = BlockIDError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BlockID::One),
            2 => Ok(BlockID::Two),
            3 => Ok(BlockID::Three),
            4 => Ok(BlockID::Four),
            _ => Err(BlockIDError::Invalid(value)),
        }
    }
}

impl fmt::Display for BlockID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BlockIDError {
    #[error("Block must be in the range 1 to 4 ({0})")]
    Invalid(u8),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingBlock {
    pub id: BlockID,
    pub name: String,
    pub weeks: RangeInclusive<u32>,
    pub technique: BlockTechnique,
}

impl TrainingBlock {
    #[must_use]
    pub fn contains(&self, week: u32) -> bool {
        self.weeks.contains(&week)
    }
}

/// Default intensification applied to every exercise of a block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockTechnique {
    pub name: String,
    pub tempo: String,
    pub rpe: RPERange,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeloadSchedule {
    pub weeks: BTreeSet<u32>,
    /// Multiplier applied to the progressed weight in deload weeks.
    pub factor: f32,
    pub tempo: String,
    pub rpe: RPERange,
    pub notes: String,
}

/// Fraction of an exercise's volume credited to non-primary muscles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeWeighting {
    pub secondary: f32,
    pub tertiary: f32,
}

impl VolumeWeighting {
    #[must_use]
    pub fn fraction(&self, role: Role) -> f32 {
        match role {
            Role::Primary => 1.0,
            Role::Secondary => self.secondary,
            Role::Tertiary => self.tertiary,
        }
    }
}

impl Default for VolumeWeighting {
    fn default() -> Self {
        Self {
            secondary: 0.6,
            tertiary: 0.3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeTarget {
    pub direct_sets: u32,
    pub indirect_sets: u32,
    /// Sessions per week.
    pub frequency: u32,
    pub optimal: RangeInclusive<u32>,
}

impl VolumeTarget {
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.direct_sets + self.indirect_sets
    }

    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.optimal.contains(&self.total_sets())
    }
}

/// Intermediate goals to be reached by the end of `week`.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub week: u32,
    pub name: String,
    pub goals: Vec<Goal>,
}

impl Milestone {
    #[must_use]
    pub fn weeks_until(&self, week: u32) -> u32 {
        self.week.saturating_sub(week)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub target: String,
}

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct DayID(String);

impl From<&str> for DayID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for DayID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingDay {
    pub id: DayID,
    pub name: String,
    /// Accessory session done at home in addition to the gym days.
    pub home: bool,
    pub exercises: Vec<Exercise>,
}
