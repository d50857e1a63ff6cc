use crate::config::DEFAULT_GROUP_PREFIX;
use crate::timer::{GroupId, TimerGroup};
use log::{debug, info};

/// Owns every timer group on the page. Ids are never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerGroupCollection {
    groups: Vec<TimerGroup>,
    next_id: u32,
}

impl Default for TimerGroupCollection {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            next_id: 1,
        }
    }
}

impl TimerGroupCollection {
    /// A collection pre-populated with `count` auto-named groups.
    pub fn with_groups(count: usize) -> Self {
        let mut collection = Self::default();
        for _ in 0..count {
            collection.add_group(None);
        }
        collection
    }

    /// Add a group. Without a usable name it becomes "Group N".
    pub fn add_group(&mut self, name: Option<&str>) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        let name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} {}", DEFAULT_GROUP_PREFIX, id.0));
        info!("Added timer group {:?} '{}'", id, name);
        self.groups.push(TimerGroup::new(id, name));
        id
    }

    pub fn remove_group(&mut self, id: GroupId) -> Option<TimerGroup> {
        let pos = self.groups.iter().position(|group| group.id() == id)?;
        let removed = self.groups.remove(pos);
        info!("Removed timer group {:?} '{}'", id, removed.name());
        Some(removed)
    }

    pub fn get(&self, id: GroupId) -> Option<&TimerGroup> {
        self.groups.iter().find(|group| group.id() == id)
    }

    pub fn get_mut(&mut self, id: GroupId) -> Option<&mut TimerGroup> {
        self.groups.iter_mut().find(|group| group.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimerGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn has_idle(&self) -> bool {
        self.groups.iter().any(|group| !group.is_active())
    }

    /// Start every idle group; running ones are left alone.
    /// Returns how many groups were started.
    pub fn start_all_idle(&mut self, now_ms: u64) -> usize {
        let started = self
            .groups
            .iter_mut()
            .filter(|group| !group.is_active())
            .map(|group| group.start(now_ms))
            .filter(|&started| started)
            .count();
        debug!("Start all: {} of {} groups started", started, self.groups.len());
        started
    }
}
