//! Renaming and removing areas and classes.
//!
//! Like navigation, every operation validates before mutating.

use ring_model::{Area, Show};

use crate::error::EditError;

fn area_mut<'a>(show: &'a mut Show, area: &str) -> Result<&'a mut Area, EditError> {
    show.area_mut(area)
        .ok_or_else(|| EditError::UnknownArea(area.to_string()))
}

fn trimmed_name(name: &str) -> Result<&str, EditError> {
    let name = name.trim();
    if name.is_empty() {
        Err(EditError::EmptyName)
    } else {
        Ok(name)
    }
}

/// Rename an area in place, keeping its position, classes and pointer.
pub fn rename_area(show: &mut Show, old_name: &str, new_name: &str) -> Result<(), EditError> {
    let new_name = trimmed_name(new_name)?;
    let Some(position) = show.position_of(old_name) else {
        return Err(EditError::UnknownArea(old_name.to_string()));
    };
    if new_name != old_name && show.contains_area(new_name) {
        return Err(EditError::DuplicateName(new_name.to_string()));
    }
    if new_name != old_name {
        tracing::debug!(from = old_name, to = new_name, "renamed area");
        show.areas[position].name = new_name.to_string();
    }
    Ok(())
}

/// Remove an area with all of its classes.
///
/// The last remaining area can never be removed. Removing a name that is
/// not present succeeds without change.
pub fn remove_area(show: &mut Show, name: &str) -> Result<(), EditError> {
    if show.areas.len() <= 1 {
        return Err(EditError::LastAreaRemaining);
    }
    if let Some(position) = show.position_of(name) {
        let removed = show.areas.remove(position);
        tracing::debug!(area = name, classes = removed.len(), "removed area");
    }
    Ok(())
}

/// Rename the class at `index`. The pointer does not move.
pub fn rename_class(
    show: &mut Show,
    area: &str,
    index: usize,
    new_name: &str,
) -> Result<(), EditError> {
    let new_name = trimmed_name(new_name)?;
    let area = area_mut(show, area)?;
    let len = area.len();
    let Some(class) = area.classes.get_mut(index) else {
        return Err(EditError::IndexOutOfRange { index, len });
    };
    *class = new_name.to_string();
    Ok(())
}

/// Remove the class at `index`, returning its name.
///
/// Later classes move up one position. If the pointer ends up past the end
/// it is pulled back to the new last class, or to 0 when none are left.
pub fn remove_class(show: &mut Show, area: &str, index: usize) -> Result<String, EditError> {
    let area = area_mut(show, area)?;
    if !area.contains_position(index) {
        return Err(EditError::IndexOutOfRange {
            index,
            len: area.len(),
        });
    }
    let removed = area.classes.remove(index);
    area.clamp_current();
    tracing::debug!(
        area = %area.name,
        class = %removed,
        current = area.current,
        "removed class"
    );
    Ok(removed)
}
