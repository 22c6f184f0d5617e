use crate::{Error, Exercise, ProgramCatalog, Technique};

/// Intensification technique configured on `exercise` for the block active in `week`.
///
/// Deload weeks suppress all techniques. `None` outside of deload weeks means
/// that only the block's default tempo applies.
pub fn resolve_technique<'a>(
    catalog: &ProgramCatalog,
    exercise: &'a Exercise,
    week: u32,
) -> Result<Option<&'a Technique>, Error> {
    let block = catalog.block_for_week(week)?;

    if catalog.is_deload(week) {
        return Ok(None);
    }

    Ok(exercise.techniques.get(&block.id))
}
