use hybrid_domain::{self as domain, ProgramCatalog, VolumeReport, WarmupSet, WeekView};

use crate::Settings;

/// Content of the week page, limited to what the settings ask to show.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekPage {
    pub week: u32,
    pub block: String,
    pub technique: String,
    pub deload: bool,
    pub next_deload: Option<u32>,
    pub days: Vec<DayPage>,
    pub volume: Option<VolumeReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPage {
    pub name: String,
    pub home: bool,
    pub exercises: Vec<ExercisePage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExercisePage {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub load: String,
    pub rest: u32,
    pub tempo: String,
    pub rpe: Option<String>,
    pub technique: Option<String>,
    pub warmup: Vec<WarmupSet>,
}

impl WeekPage {
    #[must_use]
    pub fn new(catalog: &ProgramCatalog, view: &WeekView, settings: &Settings) -> Self {
        Self {
            week: view.week,
            block: view.block.name.clone(),
            technique: view.block.technique.name.clone(),
            deload: view.deload,
            next_deload: catalog.next_deload(view.week),
            days: view
                .days
                .iter()
                .map(|day| DayPage {
                    name: day.day.name.clone(),
                    home: day.day.home,
                    exercises: day
                        .exercises
                        .iter()
                        .map(|exercise| ExercisePage::new(exercise, settings))
                        .collect(),
                })
                .collect(),
            volume: settings.show_volume.then(|| view.volume()),
        }
    }
}

impl ExercisePage {
    fn new(exercise: &domain::ResolvedExercise, settings: &Settings) -> Self {
        Self {
            name: exercise.name.to_string(),
            sets: exercise.exercise.sets,
            reps: exercise.exercise.reps.to_string(),
            load: exercise.load.to_string(),
            rest: exercise.exercise.rest,
            tempo: exercise.tempo.to_string(),
            rpe: settings.show_rpe.then(|| exercise.rpe.to_string()),
            technique: exercise
                .technique
                .filter(|_| settings.show_techniques)
                .map(|technique| {
                    if technique.detail.is_empty() {
                        technique.name()
                    } else {
                        format!("{}: {}", technique.name(), technique.detail)
                    }
                }),
            warmup: if settings.show_warmup && !exercise.deload {
                domain::warmup_sets(exercise.load)
            } else {
                vec![]
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use hybrid_domain::{reference, resolve_week};
    use pretty_assertions::assert_eq;

    use super::*;

    fn first_exercise(page: &WeekPage) -> &ExercisePage {
        &page.days[0].exercises[0]
    }

    #[test]
    fn test_week_page_default_settings() {
        let catalog = reference::program();
        let view = resolve_week(&catalog, 8).unwrap();
        let page = WeekPage::new(&catalog, &view, &Settings::default());

        assert_eq!(page.week, 8);
        assert_eq!(page.next_deload, Some(12));
        assert!(!page.deload);
        assert_eq!(page.days.len(), 4);
        assert_eq!(page.volume, Some(view.volume()));

        let exercise = first_exercise(&page);
        assert_eq!(exercise.name, "Trap Bar Deadlift");
        assert_eq!(exercise.rpe, Some(view.block.technique.rpe.to_string()));
        assert_eq!(exercise.warmup, vec![]);
    }

    #[test]
    fn test_week_page_hidden_details() {
        let catalog = reference::program();
        let view = resolve_week(&catalog, 8).unwrap();
        let settings = Settings {
            show_rpe: false,
            show_techniques: false,
            show_volume: false,
            ..Settings::default()
        };
        let page = WeekPage::new(&catalog, &view, &settings);

        assert_eq!(page.volume, None);
        assert!(
            page.days
                .iter()
                .flat_map(|d| d.exercises.iter())
                .all(|e| e.rpe.is_none() && e.technique.is_none())
        );
    }

    #[test]
    fn test_week_page_techniques() {
        let catalog = reference::program();
        let view = resolve_week(&catalog, 8).unwrap();
        let page = WeekPage::new(&catalog, &view, &Settings::default());

        assert_eq!(
            page.days
                .iter()
                .flat_map(|d| d.exercises.iter())
                .filter(|e| e.technique.is_some())
                .count(),
            view.exercises().filter(|e| e.technique.is_some()).count()
        );
    }

    #[test]
    fn test_week_page_warmup() {
        let catalog = reference::program();
        let settings = Settings {
            show_warmup: true,
            ..Settings::default()
        };

        let view = resolve_week(&catalog, 1).unwrap();
        let page = WeekPage::new(&catalog, &view, &settings);
        assert_eq!(
            first_exercise(&page)
                .warmup
                .iter()
                .map(|s| (f32::from(s.weight), s.reps))
                .collect::<Vec<_>>(),
            vec![(30.0, 8), (45.0, 5), (60.0, 3), (67.5, 1)]
        );

        let view = resolve_week(&catalog, 6).unwrap();
        let page = WeekPage::new(&catalog, &view, &settings);
        assert!(page.deload);
        assert_eq!(first_exercise(&page).warmup, vec![]);
        assert_eq!(first_exercise(&page).load, "48 kg");
    }
}
