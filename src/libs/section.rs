use super::task::Task;

/// A named, ordered group of tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    tasks: Vec<Task>,
}

impl Section {
    pub fn new(name: &str) -> Self {
        Section {
            name: name.to_string(),
            tasks: Vec::new(),
        }
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends `task`, newest last.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes the first task called `name`, returning it.
    pub fn remove_task_named(&mut self, name: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.name == name)?;
        Some(self.tasks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
