//! Moving an area's "now running" pointer.
//!
//! Each operation checks its preconditions before touching the show, so a
//! failed call leaves it exactly as it was. Only the named area changes.

use ring_model::{Area, Show};

use crate::error::NavError;

fn area_mut<'a>(show: &'a mut Show, area: &str) -> Result<&'a mut Area, NavError> {
    show.area_mut(area)
        .ok_or_else(|| NavError::UnknownArea(area.to_string()))
}

/// Move to the next class. Returns the new position.
pub fn advance(show: &mut Show, area: &str) -> Result<usize, NavError> {
    let area = area_mut(show, area)?;
    if area.is_at_last() {
        return Err(NavError::AtLastClass);
    }
    area.current += 1;
    tracing::debug!(area = %area.name, current = area.current, "advanced");
    Ok(area.current)
}

/// Move back to the previous class. Returns the new position.
pub fn retreat(show: &mut Show, area: &str) -> Result<usize, NavError> {
    let area = area_mut(show, area)?;
    if area.current == 0 {
        return Err(NavError::AtFirstClass);
    }
    area.current -= 1;
    tracing::debug!(area = %area.name, current = area.current, "retreated");
    Ok(area.current)
}

/// Jump straight to the class at `index`. Returns the new position.
pub fn jump_to(show: &mut Show, area: &str, index: usize) -> Result<usize, NavError> {
    let area = area_mut(show, area)?;
    if !area.contains_position(index) {
        return Err(NavError::IndexOutOfRange {
            index,
            len: area.len(),
        });
    }
    area.current = index;
    tracing::debug!(area = %area.name, current = index, "jumped");
    Ok(index)
}
