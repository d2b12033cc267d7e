use serde::{Deserialize, Serialize};

/// A one-line to-do item on the office board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub id: String,
    pub title: String,
    pub done: bool,
}

impl TaskItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            done: false,
        }
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_both_ways() {
        let mut task = TaskItem::new("t-1", "Order new belts");
        assert!(!task.done);
        task.toggle();
        assert!(task.done);
        task.toggle();
        assert!(!task.done);
    }
}
