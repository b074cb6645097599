//! The "now running / up next" view of a show.

use ring_model::{Area, Show};

/// A class as displayed, with its 1-based running-order position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSlot {
    pub position: usize,
    pub name: String,
}

/// One row of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    pub area: String,
    pub total: usize,
    pub now: Option<BoardSlot>,
    pub next: Option<BoardSlot>,
}

impl BoardEntry {
    pub fn from_area(area: &Area) -> Self {
        let slot = |index: usize, name: &str| BoardSlot {
            position: index + 1,
            name: name.to_string(),
        };
        Self {
            area: area.name.clone(),
            total: area.len(),
            now: area.now_running().map(|name| slot(area.current, name)),
            next: area.up_next().map(|name| slot(area.current + 1, name)),
        }
    }
}

/// Board rows for every area, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub entries: Vec<BoardEntry>,
}

impl Board {
    pub fn from_show(show: &Show) -> Self {
        Self {
            entries: show.areas.iter().map(BoardEntry::from_area).collect(),
        }
    }

    /// True when nothing has been imported yet.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.total == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_reports_now_and_next() {
        let mut a = Area::with_classes("A", ["X", "Y", "Z"]);
        a.current = 1;
        let show = Show {
            areas: vec![a, Area::with_classes("B", ["W"]), Area::new("C")],
        };
        let board = Board::from_show(&show);
        assert!(!board.is_empty());

        let a = &board.entries[0];
        assert_eq!(a.total, 3);
        assert_eq!(
            a.now,
            Some(BoardSlot {
                position: 2,
                name: "Y".into()
            })
        );
        assert_eq!(a.next.as_ref().map(|slot| slot.position), Some(3));

        let b = &board.entries[1];
        assert_eq!(b.now.as_ref().map(|slot| slot.name.as_str()), Some("W"));
        assert_eq!(b.next, None);

        let c = &board.entries[2];
        assert_eq!(c.now, None);
        assert_eq!(c.next, None);
    }

    #[test]
    fn default_show_board_is_empty() {
        assert!(Board::from_show(&Show::default()).is_empty());
    }
}
