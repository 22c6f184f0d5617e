use std::{collections::BTreeMap, slice::Iter};

use derive_more::{AsRef, Display};

use crate::{
    BlockID, ConfigurationError, Error, ExerciseMuscle, Load, Muscle, Progression, Property, Reps,
    Role,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub muscles: Vec<ExerciseMuscle>,
    pub sets: u32,
    pub reps: Reps,
    pub start: Load,
    /// Rest after the exercise in seconds.
    pub rest: u32,
    pub progression: Progression,
    pub techniques: BTreeMap<BlockID, Technique>,
    pub rotation: Option<Rotation>,
    pub superset_with: Option<ExerciseID>,
    pub tempo: Option<String>,
    pub notes: String,
}

impl Exercise {
    #[must_use]
    pub fn primary_muscle(&self) -> Option<Muscle> {
        self.muscles
            .iter()
            .find(|m| m.role == Role::Primary)
            .map(|m| m.muscle)
    }

    /// Role of each targeted muscle. A muscle listed more than once keeps its strongest role.
    #[must_use]
    pub fn muscle_roles(&self) -> BTreeMap<Muscle, Role> {
        let mut roles = BTreeMap::new();
        for m in &self.muscles {
            roles
                .entry(m.muscle)
                .and_modify(|role: &mut Role| *role = (*role).min(m.role))
                .or_insert(m.role);
        }
        roles
    }

    #[must_use]
    pub fn is_bodyweight(&self) -> bool {
        self.start == Load::Bodyweight
    }

    /// Name shown in `week`, taking a configured rotation into account.
    pub fn display_name(&self, block: BlockID, week: u32) -> Result<&str, Error> {
        match &self.rotation {
            None => Ok(self.name.as_str()),
            Some(rotation) => rotation.resolve(block, week).ok_or_else(|| {
                ConfigurationError::MissingRotation {
                    exercise: self.id.clone(),
                    block,
                }
                .into()
            }),
        }
    }
}

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Alternation of the displayed exercise name.
#[derive(Debug, Clone, PartialEq)]
pub enum Rotation {
    ByBlock(BTreeMap<BlockID, String>),
    ByWeekParity { odd: String, even: String },
}

impl Rotation {
    #[must_use]
    pub fn resolve(&self, block: BlockID, week: u32) -> Option<&str> {
        match self {
            Rotation::ByBlock(names) => names.get(&block).map(String::as_str),
            Rotation::ByWeekParity { odd, even } => {
                if week % 2 == 0 {
                    Some(even.as_str())
                } else {
                    Some(odd.as_str())
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Technique {
    pub kinds: Vec<TechniqueKind>,
    pub detail: String,
}

impl Technique {
    #[must_use]
    pub fn name(&self) -> String {
        self.kinds
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TechniqueKind {
    Pause,
    RestPause,
    DropSet,
    MyoReps,
    Cluster,
    Partials,
}

impl Property for TechniqueKind {
    fn iter() -> Iter<'static, TechniqueKind> {
        static KINDS: [TechniqueKind; 6] = [
            TechniqueKind::Pause,
            TechniqueKind::RestPause,
            TechniqueKind::DropSet,
            TechniqueKind::MyoReps,
            TechniqueKind::Cluster,
            TechniqueKind::Partials,
        ];
        KINDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TechniqueKind::Pause => "Pause",
            TechniqueKind::RestPause => "Rest-Pause",
            TechniqueKind::DropSet => "Drop-Set",
            TechniqueKind::MyoReps => "Myo-Reps",
            TechniqueKind::Cluster => "Cluster",
            TechniqueKind::Partials => "Partials",
        }
    }
}

impl TryFrom<&str> for TechniqueKind {
    type Error = TechniqueKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TechniqueKind::iter()
            .find(|k| k.name().eq_ignore_ascii_case(value.trim()))
            .copied()
            .ok_or_else(|| TechniqueKindError::Unknown(value.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TechniqueKindError {
    #[error("Unknown technique \"{0}\"")]
    Unknown(String),
}
