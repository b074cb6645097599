//! Areas, classes and the show aggregate.

/// Name of the area a fresh show starts with.
pub const DEFAULT_AREA_NAME: &str = "Main Ring";

/// A ring or location hosting an ordered running order of classes.
///
/// `current` is the position of the class now running. It is kept in
/// `0..classes.len()` whenever the area has classes and is 0 otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// Area name, unique within its show.
    pub name: String,
    /// Class names in running order.
    pub classes: Vec<String>,
    /// Position of the class now running.
    pub current: usize,
}

impl Area {
    /// Creates an area with no classes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classes: Vec::new(),
            current: 0,
        }
    }

    /// Creates an area with the given running order and the pointer at the start.
    pub fn with_classes<I, S>(name: impl Into<String>, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            current: 0,
        }
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if the area has no classes.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns true if `index` is a valid class position.
    pub fn contains_position(&self, index: usize) -> bool {
        index < self.classes.len()
    }

    /// The class now running, if any.
    pub fn now_running(&self) -> Option<&str> {
        self.classes.get(self.current).map(String::as_str)
    }

    /// The class after the one now running, if any.
    pub fn up_next(&self) -> Option<&str> {
        self.classes.get(self.current + 1).map(String::as_str)
    }

    /// Returns true if the pointer is on the final class (or there are none).
    pub fn is_at_last(&self) -> bool {
        self.current + 1 >= self.classes.len()
    }

    /// Pulls `current` back into range after the class list changed.
    pub fn clamp_current(&mut self) {
        if self.classes.is_empty() {
            self.current = 0;
        } else if self.current >= self.classes.len() {
            self.current = self.classes.len() - 1;
        }
    }
}

/// The set of areas running at one event, in display order.
///
/// A show always holds at least one area and area names are unique. The
/// parser and editor maintain both properties; code that edits `areas`
/// directly is responsible for them too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    /// Areas in display order.
    pub areas: Vec<Area>,
}

impl Default for Show {
    fn default() -> Self {
        Self {
            areas: vec![Area::new(DEFAULT_AREA_NAME)],
        }
    }
}

impl Show {
    /// Builds a show from areas, or `None` if there are none.
    pub fn from_areas(areas: Vec<Area>) -> Option<Self> {
        if areas.is_empty() {
            None
        } else {
            Some(Self { areas })
        }
    }

    /// Area names in display order.
    pub fn area_names(&self) -> impl Iterator<Item = &str> {
        self.areas.iter().map(|area| area.name.as_str())
    }

    /// Looks up an area by exact name.
    pub fn area(&self, name: &str) -> Option<&Area> {
        self.areas.iter().find(|area| area.name == name)
    }

    /// Looks up an area by exact name for mutation.
    pub fn area_mut(&mut self, name: &str) -> Option<&mut Area> {
        self.areas.iter_mut().find(|area| area.name == name)
    }

    /// Position of an area in display order.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.areas.iter().position(|area| area.name == name)
    }

    /// Returns true if an area with this name exists.
    pub fn contains_area(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Total number of classes across all areas.
    pub fn class_count(&self) -> usize {
        self.areas.iter().map(Area::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_show_has_main_ring() {
        let show = Show::default();
        assert_eq!(show.area_names().collect::<Vec<_>>(), vec!["Main Ring"]);
        assert_eq!(show.class_count(), 0);
    }

    #[test]
    fn now_and_next_follow_pointer() {
        let mut area = Area::with_classes("A", ["X", "Y"]);
        assert_eq!(area.now_running(), Some("X"));
        assert_eq!(area.up_next(), Some("Y"));
        area.current = 1;
        assert_eq!(area.now_running(), Some("Y"));
        assert_eq!(area.up_next(), None);
        assert!(area.is_at_last());
    }

    #[test]
    fn empty_area_has_nothing_running() {
        let area = Area::new("Empty");
        assert_eq!(area.now_running(), None);
        assert_eq!(area.up_next(), None);
        assert!(area.is_at_last());
    }

    #[test]
    fn clamp_current_handles_shrink_and_empty() {
        let mut area = Area::with_classes("A", ["X", "Y", "Z"]);
        area.current = 2;
        area.classes.truncate(1);
        area.clamp_current();
        assert_eq!(area.current, 0);

        area.current = 5;
        area.classes.clear();
        area.clamp_current();
        assert_eq!(area.current, 0);
    }

    #[test]
    fn from_areas_rejects_empty() {
        assert!(Show::from_areas(Vec::new()).is_none());
    }
}
